use crate::{FeatureListGraph, FeatureListNode};
use fxhash::FxHashSet;
use std::collections::{BTreeSet, VecDeque};
use tracing::error;

impl FeatureListGraph {
    /// Breadth-first closure over one adjacency direction.
    ///
    /// Each node is expanded at most once. The expansion count is capped at the node count
    /// of the graph; hitting the cap means the adjacency sets are corrupt and the partial
    /// result is returned.
    pub(crate) fn walk<'a, I, F>(
        &'a self,
        origin: Option<&str>,
        start: I,
        next: F,
    ) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a String>,
        F: Fn(&'a FeatureListNode) -> &'a BTreeSet<String>,
    {
        let cap = self.node_count();
        let mut visited: FxHashSet<&'a str> = FxHashSet::default();
        let mut queue: VecDeque<&'a str> = start.into_iter().map(String::as_str).collect();
        let mut result = BTreeSet::new();

        while let Some(key) = queue.pop_front() {
            if origin == Some(key) || !visited.insert(key) {
                continue;
            }
            if visited.len() > cap {
                error!(origin = ?origin, cap, "Graph walk exceeded node count, result truncated");
                break;
            }
            let Some(node) = self.feature_by_key(key) else {
                continue;
            };
            result.insert(node.name.clone());
            queue.extend(next(node).iter().map(String::as_str));
        }

        result
    }
}
