use serde::{Deserialize, Serialize};

/// What a configuration document declares, flattened by the caller in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Declarations {
    pub features: Vec<String>,
    pub platforms: Vec<String>,
    /// Configuration elements used by the document.
    pub config_elements: Vec<String>,
}

impl Declarations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms.extend(platforms.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_config_elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config_elements.extend(elements.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.platforms.is_empty() && self.config_elements.is_empty()
    }
}
