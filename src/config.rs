use std::fmt;
use std::path;

use super::*;

const DEFAULT_PAGINATION_SIZE: i32 = 10;

/// The settings document: every value the renderer reads, loaded once and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    pub author: liquid_core::model::KString,
    pub site_name: liquid_core::model::KString,
    /// Empty means relative-URL mode.
    pub site_url: liquid_core::model::KString,
    pub content_path: crate::RelPath,
    pub timezone: liquid_core::model::KString,
    pub default_language: liquid_core::model::KString,
    pub theme: crate::RelPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_all: Option<crate::RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_feed: Option<crate::RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_feed: Option<crate::RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_feed_atom: Option<crate::RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_feed_rss: Option<crate::RelPath>,
    pub links: Vec<Link>,
    pub social_links: Vec<Link>,
    pub pagination_size: i32,
    pub relative_urls: bool,
    pub static_paths: Vec<crate::RelPath>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            root: Default::default(),
            author: Default::default(),
            site_name: Default::default(),
            site_url: Default::default(),
            content_path: crate::RelPath::from_unchecked("content"),
            timezone: "UTC".into(),
            default_language: "en".into(),
            theme: crate::RelPath::from_unchecked("themes/default"),
            feed_all: Default::default(),
            category_feed: Default::default(),
            translation_feed: Default::default(),
            author_feed_atom: Default::default(),
            author_feed_rss: Default::default(),
            links: Default::default(),
            social_links: Default::default(),
            pagination_size: DEFAULT_PAGINATION_SIZE,
            relative_urls: false,
            static_paths: vec![crate::RelPath::from_unchecked("images")],
        }
    }
}

impl Config {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read settings")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse settings")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == std::path::Path::new("") {
            root = std::path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    /// Load the nearest `_site.yml`, walking up from `cwd`, falling back to
    /// the defaults when none is found.
    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, "_site.yml");
        let config = file_path
            .map(|p| {
                log::debug!("Using settings file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No _site.yml file found in current directory, using default settings.");
                let config = Config {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
