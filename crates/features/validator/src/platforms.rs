use fcompat_catalog::FeatureCatalog;
use fcompat_domain::config::CompatibilityTables;
use fcompat_domain::{Finding, FindingKind, names};
use fxhash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

/// Declared platform features, lower-cased, blanks dropped.
pub(crate) fn declared(platforms: &[String]) -> BTreeSet<String> {
    platforms.iter().map(|p| names::normalize(p)).filter(|p| !p.is_empty()).collect()
}

pub(crate) fn check(
    catalog: &FeatureCatalog,
    tables: &CompatibilityTables,
    declared: &[String],
) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut included_exact: FxHashSet<String> = FxHashSet::default();
    let mut included_no_version: FxHashMap<String, &str> = FxHashMap::default();

    for raw in declared {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }
        let lower = names::normalize(name);

        if !catalog.has_platform(&lower) {
            let base = names::strip_version(&lower);
            let candidates =
                catalog.platforms().iter().filter(|p| names::strip_version(p) == base).cloned();
            findings
                .push(Finding::new(FindingKind::PlatformNotFound, name).with_related(candidates));
            continue;
        }

        if !included_exact.insert(lower.clone()) {
            findings.push(Finding::new(FindingKind::PlatformAlreadyIncluded, name));
            continue;
        }

        let base = names::strip_version(&lower).to_owned();
        if let Some(first) = included_no_version.get(&base) {
            findings.push(
                Finding::new(FindingKind::PlatformVersionConflict, names::strip_version(name))
                    .with_related([*first, name]),
            );
            continue;
        }

        if let Some(conflicting) = tables.conflicting_platform(&base)
            && let Some(other) = included_no_version.get(&conflicting)
        {
            findings.push(
                Finding::new(FindingKind::PlatformConflict, name).with_related([*other, name]),
            );
        }
        included_no_version.insert(base, name);
    }

    findings
}

/// A feature's declared platforms that the catalog actually provides.
#[must_use]
pub fn platforms_for_feature(catalog: &FeatureCatalog, name: &str) -> BTreeSet<String> {
    catalog.feature(name).map_or_else(BTreeSet::new, |feature| {
        feature.platforms.intersection(catalog.platforms()).cloned().collect()
    })
}
