use fcompat_domain::{Feature, names};
use fcompat_graph::FeatureListGraph;
use fxhash::FxHashMap;
use std::collections::BTreeSet;
use std::sync::OnceLock;
use tracing::debug;

/// Immutable feature snapshot of one runtime identity.
///
/// Lookups accept the short name (`servlet-6.0`) or the symbolic name
/// (`com.ibm.websphere.appserver.servlet-6.0`), case-insensitively.
#[derive(Debug, Default)]
pub struct FeatureCatalog {
    features: Vec<Feature>,
    index: FxHashMap<String, usize>,
    platforms: BTreeSet<String>,
    graph: OnceLock<FeatureListGraph>,
}

impl FeatureCatalog {
    /// Builds a catalog; the first feature wins when names collide.
    pub fn new<I>(features: I) -> Self
    where
        I: IntoIterator<Item = Feature>,
    {
        let mut catalog = Self::default();

        for feature in features {
            if catalog.index.contains_key(&names::normalize(&feature.name)) {
                debug!(feature = %feature.name, "Duplicate catalog entry ignored");
                continue;
            }

            let slot = catalog.features.len();
            catalog.index.insert(names::normalize(&feature.name), slot);
            if let Some(symbolic) = &feature.symbolic_name {
                catalog.index.entry(names::normalize(symbolic)).or_insert(slot);
            }
            if !feature.is_public() {
                catalog.platforms.extend(feature.platforms.iter().cloned());
            }
            catalog.features.push(feature);
        }

        catalog
    }

    /// A catalog without features; validation against it yields no findings.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Any feature regardless of visibility.
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.index.get(&names::normalize(name)).and_then(|slot| self.features.get(*slot))
    }

    /// Only features users may declare.
    #[must_use]
    pub fn public_feature(&self, name: &str) -> Option<&Feature> {
        self.feature(name).filter(|feature| feature.is_public())
    }

    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn public_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|feature| feature.is_public())
    }

    pub fn private_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|feature| !feature.is_public())
    }

    /// Platforms backed by at least one private feature, lower-cased.
    #[must_use]
    pub const fn platforms(&self) -> &BTreeSet<String> {
        &self.platforms
    }

    #[must_use]
    pub fn has_platform(&self, platform: &str) -> bool {
        self.platforms.contains(&names::normalize(platform))
    }

    /// The enablement graph, built on first access and reused afterwards.
    #[must_use]
    pub fn graph(&self) -> &FeatureListGraph {
        self.graph.get_or_init(|| self.build_graph())
    }

    /// `true` once [`Self::graph`] has been called.
    #[must_use]
    pub fn is_graph_built(&self) -> bool {
        self.graph.get().is_some()
    }
}

impl PartialEq for FeatureCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.features == other.features && self.platforms == other.platforms
    }
}

impl Eq for FeatureCatalog {}
