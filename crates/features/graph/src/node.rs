use std::collections::BTreeSet;

/// One feature of a catalog generation.
///
/// Adjacency sets hold lower-cased node keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureListNode {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) enables: BTreeSet<String>,
    pub(crate) enabled_by: BTreeSet<String>,
    pub(crate) config_elements: BTreeSet<String>,
}

impl FeatureListNode {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            description: None,
            enables: BTreeSet::new(),
            enabled_by: BTreeSet::new(),
            config_elements: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Features this node directly enables.
    #[must_use]
    pub const fn enables(&self) -> &BTreeSet<String> {
        &self.enables
    }

    /// Features that directly enable this node.
    #[must_use]
    pub const fn enabled_by(&self) -> &BTreeSet<String> {
        &self.enabled_by
    }

    /// Config elements this node directly enables.
    #[must_use]
    pub const fn config_elements(&self) -> &BTreeSet<String> {
        &self.config_elements
    }
}

/// A configuration element (e.g. `httpEndpoint`) and the features that make it available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigElementNode {
    pub(crate) name: String,
    pub(crate) enabled_by: BTreeSet<String>,
}

impl ConfigElementNode {
    pub(crate) fn new(name: &str) -> Self {
        Self { name: name.to_owned(), enabled_by: BTreeSet::new() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn enabled_by(&self) -> &BTreeSet<String> {
        &self.enabled_by
    }
}
