use crate::FeatureCatalog;
use fcompat_graph::FeatureListGraph;
use tracing::debug;

impl FeatureCatalog {
    /// Turns `requires`, tolerated requirements and config elements into enables edges.
    ///
    /// Requirement names are mapped to the short name of the catalog entry they point at,
    /// so graph nodes line up with what users declare.
    pub(crate) fn build_graph(&self) -> FeatureListGraph {
        let mut graph = FeatureListGraph::new();

        for feature in self.features() {
            graph.add_feature(&feature.name, feature.description.as_deref());

            let required = feature
                .requires
                .iter()
                .chain(feature.requires_with_tolerates.iter().map(|req| &req.feature));
            for name in required {
                let child = self.feature(name).map_or(name.as_str(), |f| f.name.as_str());
                graph.record_enables(&feature.name, child);
            }

            for element in &feature.config_elements {
                graph.record_enables_config_element(&feature.name, element);
            }
        }

        debug!(
            features = graph.feature_count(),
            config_elements = graph.config_element_count(),
            "Feature graph built"
        );

        graph
    }
}
