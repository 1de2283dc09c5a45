use std::fmt;
use std::ops;

/// A `/`-separated path relative to the site root, regardless of platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RelPath(relative_path::RelativePathBuf);

impl RelPath {
    pub fn new() -> Self {
        Self(relative_path::RelativePathBuf::new())
    }

    /// Wrap a string that is already known to be a relative path.
    pub fn from_unchecked(path: &str) -> Self {
        Self(relative_path::RelativePath::new(path).to_owned())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_relative_path(&self) -> &relative_path::RelativePath {
        self.0.as_relative_path()
    }
}

impl ops::Deref for RelPath {
    type Target = relative_path::RelativePath;

    fn deref(&self) -> &Self::Target {
        self.0.as_relative_path()
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
