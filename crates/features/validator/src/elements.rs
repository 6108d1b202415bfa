use fcompat_catalog::FeatureCatalog;
use fcompat_domain::{Finding, FindingKind, names};
use fxhash::FxHashSet;

/// Every used config element must be enabled, directly or transitively, by a declared
/// feature. Unknown elements are left alone.
pub(crate) fn check(
    catalog: &FeatureCatalog,
    features: &[String],
    elements: &[String],
) -> Vec<Finding> {
    let graph = catalog.graph();
    if graph.is_empty() || elements.is_empty() {
        return Vec::new();
    }

    let declared: FxHashSet<String> = features.iter().map(|f| names::normalize(f)).collect();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut findings = Vec::new();

    for raw in elements {
        let element = raw.trim();
        let Some(node) = graph.config_element_node(element) else {
            continue;
        };
        if !seen.insert(names::normalize(element)) {
            continue;
        }

        let enabled = graph
            .all_enabled_by(element)
            .iter()
            .any(|enabler| declared.contains(&names::normalize(enabler)));
        if enabled {
            continue;
        }

        let direct = node
            .enabled_by()
            .iter()
            .filter_map(|key| catalog.public_feature(key))
            .map(|feature| feature.name.clone());
        findings.push(
            Finding::new(FindingKind::MissingConfiguredFeature, element).with_related(direct),
        );
    }

    findings
}
