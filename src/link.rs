/// A labeled destination, serialized as a two-element `[label, url]` sequence.
///
/// The blogroll and social widget are ordered lists of these pairs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Link(liquid_core::model::KString, liquid_core::model::KString);

impl Link {
    pub fn new(
        label: impl Into<liquid_core::model::KString>,
        url: impl Into<liquid_core::model::KString>,
    ) -> Self {
        Self(label.into(), url.into())
    }

    pub fn label(&self) -> &str {
        self.0.as_str()
    }

    pub fn url(&self) -> &str {
        self.1.as_str()
    }
}
