use fcompat_catalog::FeatureCatalog;
use fcompat_domain::config::CompatibilityTables;
use fcompat_domain::{Feature, Finding, FindingKind, names};
use fxhash::{FxHashMap, FxHashSet};

/// Outcome of the feature pass, reused by the later checks.
#[derive(Debug, Default)]
pub(crate) struct FeatureScan<'a> {
    pub(crate) findings: Vec<Finding>,
    /// Valid versioned features, first occurrence of each base name, in document order.
    pub(crate) versioned: Vec<&'a Feature>,
    /// Valid versionless features, each listed once, in document order.
    pub(crate) versionless: Vec<&'a Feature>,
    /// A duplicate, version conflict or rename was reported.
    pub(crate) flagged: bool,
}

pub(crate) fn check<'a>(
    catalog: &'a FeatureCatalog,
    tables: &CompatibilityTables,
    declared: &[String],
) -> FeatureScan<'a> {
    let mut scan = FeatureScan::default();
    let mut included_exact: FxHashSet<String> = FxHashSet::default();
    let mut included_no_version: FxHashMap<String, &str> = FxHashMap::default();
    let mut versionless_seen: FxHashSet<String> = FxHashSet::default();
    // Base name of every valid declaration, versioned or not, for rename lookups.
    let mut bases: FxHashMap<String, &str> = FxHashMap::default();

    for raw in declared {
        let name = raw.trim();
        if name.is_empty() || names::is_user_feature(name) {
            continue;
        }

        let Some(feature) = catalog.public_feature(name) else {
            scan.findings.push(
                Finding::new(FindingKind::FeatureNotFound, name)
                    .with_related(replacement_candidates(catalog, name)),
            );
            continue;
        };

        let lower = names::normalize(name);

        if feature.is_versionless() {
            if !versionless_seen.insert(lower.clone()) {
                scan.findings.push(Finding::new(FindingKind::FeatureAlreadyIncluded, name));
                scan.flagged = true;
                continue;
            }
            scan.versionless.push(feature);
        } else {
            if !included_exact.insert(lower.clone()) {
                scan.findings.push(Finding::new(FindingKind::FeatureAlreadyIncluded, name));
                scan.flagged = true;
                continue;
            }

            let base = names::strip_version(&lower).to_owned();
            if let Some(first) = included_no_version.get(&base) {
                scan.findings.push(
                    Finding::new(FindingKind::FeatureVersionConflict, names::strip_version(name))
                        .with_related([*first, name]),
                );
                scan.flagged = true;
                continue;
            }
            included_no_version.insert(base, name);
            scan.versioned.push(feature);
        }

        let base = names::strip_version(&lower).to_owned();
        if let Some(alternate) = tables.alternate_feature_name(&base)
            && let Some(other) = bases.get(&alternate)
        {
            let finding = Finding::new(FindingKind::FeatureRenamed, name).with_related([*other]);
            scan.findings.push(finding);
            scan.flagged = true;
        }
        bases.entry(base).or_insert(name);
    }

    scan
}

/// Public features sharing the version-stripped base name of `name`, sorted.
#[must_use]
pub fn replacement_candidates(catalog: &FeatureCatalog, name: &str) -> Vec<String> {
    let wanted = names::normalize(names::strip_version(name.trim()));
    let mut candidates: Vec<String> = catalog
        .public_features()
        .filter(|feature| names::normalize(feature.base_name()) == wanted)
        .map(|feature| feature.name.clone())
        .collect();
    candidates.sort();
    candidates
}
