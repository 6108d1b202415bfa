//! # Feature List Graph
//!
//! A directed graph over feature nodes and configuration-element nodes for one catalog
//! generation.
//!
//! Edges read "feature A enables feature B" and "feature A enables config element C".
//! Both directions are stored (`enables` on the parent, `enabled_by` on the child), so
//! forward queries ("what does X turn on") and reverse queries ("what turns X on") never
//! recompute adjacency.
//!
//! Names are case-insensitive; nodes keep the spelling of their first insertion.
//!
//! ## Example
//!
//! ```rust
//! use fcompat_graph::FeatureListGraph;
//!
//! let mut graph = FeatureListGraph::new();
//! graph.record_enables("webProfile-10.0", "servlet-6.0");
//! graph.record_enables("servlet-6.0", "appSecurity-5.0");
//! graph.record_enables_config_element("servlet-6.0", "httpSession");
//!
//! let enablers = graph.all_enabled_by("httpSession");
//! assert!(enablers.contains("servlet-6.0"));
//! assert!(enablers.contains("webProfile-10.0"));
//! ```

mod node;
mod traversal;

pub use node::{ConfigElementNode, FeatureListNode};

use fxhash::FxHashMap;
use std::collections::BTreeSet;

/// Owns every node of one catalog generation.
#[derive(Debug, Default, Clone)]
pub struct FeatureListGraph {
    features: FxHashMap<String, FeatureListNode>,
    elements: FxHashMap<String, ConfigElementNode>,
}

impl FeatureListGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent upsert of a feature node.
    ///
    /// An existing node keeps its name; its description is only filled in if unset.
    pub fn add_feature(&mut self, name: &str, description: Option<&str>) -> &FeatureListNode {
        let node = self.feature_entry(name);
        if node.description.is_none() {
            node.description = description.map(str::to_owned);
        }
        node
    }

    /// Idempotent upsert of a configuration-element node.
    pub fn add_config_element(&mut self, name: &str) -> &ConfigElementNode {
        self.element_entry(name)
    }

    /// Records "`parent` enables `child`", creating missing nodes.
    pub fn record_enables(&mut self, parent: &str, child: &str) {
        let parent_key = key(parent);
        let child_key = key(child);
        self.feature_entry(child).enabled_by.insert(parent_key.clone());
        self.feature_entry(parent).enables.insert(child_key);
    }

    /// Records "`parent` enables config element `element`", creating missing nodes.
    pub fn record_enables_config_element(&mut self, parent: &str, element: &str) {
        let parent_key = key(parent);
        let element_key = key(element);
        self.element_entry(element).enabled_by.insert(parent_key);
        self.feature_entry(parent).config_elements.insert(element_key);
    }

    /// Every feature that directly or transitively enables `name`.
    ///
    /// `name` is resolved as a config element first, then as a feature. The queried node
    /// itself is never part of the result, and the walk terminates on cyclic input.
    #[must_use]
    pub fn all_enabled_by(&self, name: &str) -> BTreeSet<String> {
        let k = key(name);
        if let Some(element) = self.elements.get(&k) {
            return self.walk(None, element.enabled_by.iter(), |node| &node.enabled_by);
        }
        self.features.get(&k).map_or_else(BTreeSet::new, |node| {
            self.walk(Some(k.as_str()), node.enabled_by.iter(), |node| &node.enabled_by)
        })
    }

    /// Every feature `name` directly or transitively enables.
    #[must_use]
    pub fn all_enables(&self, name: &str) -> BTreeSet<String> {
        let k = key(name);
        self.features.get(&k).map_or_else(BTreeSet::new, |node| {
            self.walk(Some(k.as_str()), node.enables.iter(), |node| &node.enables)
        })
    }

    #[must_use]
    pub fn feature_node(&self, name: &str) -> Option<&FeatureListNode> {
        self.features.get(&key(name))
    }

    #[must_use]
    pub fn config_element_node(&self, name: &str) -> Option<&ConfigElementNode> {
        self.elements.get(&key(name))
    }

    #[must_use]
    pub fn is_config_element(&self, name: &str) -> bool {
        self.elements.contains_key(&key(name))
    }

    /// `true` until the first node is added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.elements.is_empty()
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn config_element_count(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn node_count(&self) -> usize {
        self.features.len() + self.elements.len()
    }

    pub(crate) fn feature_by_key(&self, key: &str) -> Option<&FeatureListNode> {
        self.features.get(key)
    }

    fn feature_entry(&mut self, name: &str) -> &mut FeatureListNode {
        self.features.entry(key(name)).or_insert_with(|| FeatureListNode::new(name.trim()))
    }

    fn element_entry(&mut self, name: &str) -> &mut ConfigElementNode {
        self.elements.entry(key(name)).or_insert_with(|| ConfigElementNode::new(name.trim()))
    }
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}
