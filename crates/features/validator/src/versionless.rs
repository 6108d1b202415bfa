use crate::features::FeatureScan;
use crate::platforms::platforms_for_feature;
use crate::CompatibilityValidator;
use fcompat_catalog::FeatureCatalog;
use fcompat_domain::config::CompatibilityTables;
use fcompat_domain::{Feature, Finding, FindingKind, names};
use std::collections::BTreeSet;
use tracing::debug;

pub(crate) fn check(
    validator: &CompatibilityValidator,
    catalog: &FeatureCatalog,
    scan: &FeatureScan<'_>,
    declared_platforms: &BTreeSet<String>,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for feature in &scan.versionless {
        let allowed = validator.platforms_for_versionless_feature(catalog, &feature.name);
        debug!(feature = %feature.name, ?allowed, "Resolving versionless feature");

        if declared_platforms.is_empty() {
            if let Some(finding) = resolve_inferred(catalog, feature, &allowed, &scan.versioned) {
                findings.push(finding);
            }
        } else if allowed.is_disjoint(declared_platforms) {
            findings.push(
                Finding::new(FindingKind::NoConfiguredPlatform, &feature.name)
                    .with_related(declared_platforms.iter().cloned()),
            );
        }
    }

    findings
}

/// Resolves against the single platform common to every declared versioned feature.
fn resolve_inferred(
    catalog: &FeatureCatalog,
    feature: &Feature,
    allowed: &BTreeSet<String>,
    versioned: &[&Feature],
) -> Option<Finding> {
    let Some(common) = common_platforms(catalog, versioned) else {
        return Some(Finding::new(FindingKind::NoPlatformOrFeatureToResolve, &feature.name));
    };

    let mut inferred = common.iter();
    match (inferred.next(), inferred.next()) {
        (None, _) => Some(
            Finding::new(FindingKind::NoCommonPlatform, &feature.name)
                .with_related(versioned.iter().map(|v| v.name.clone())),
        ),
        (Some(_), Some(_)) => Some(
            Finding::new(FindingKind::AmbiguousCommonPlatform, &feature.name)
                .with_related(common.iter().cloned()),
        ),
        (Some(platform), None) if !allowed.contains(platform) => Some(
            Finding::new(FindingKind::NoSupportedPlatform, &feature.name)
                .with_related([platform.clone()]),
        ),
        (Some(_), None) => None,
    }
}

/// Intersection of the platforms of `versioned`; `None` when nothing is declared.
fn common_platforms(catalog: &FeatureCatalog, versioned: &[&Feature]) -> Option<BTreeSet<String>> {
    versioned
        .iter()
        .map(|candidate| platforms_for_feature(catalog, &candidate.name))
        .reduce(|acc, platforms| acc.intersection(&platforms).cloned().collect())
}

pub(crate) fn allowed_platforms(
    catalog: &FeatureCatalog,
    tables: &CompatibilityTables,
    name: &str,
) -> BTreeSet<String> {
    let Some(feature) = catalog.feature(name) else {
        return BTreeSet::new();
    };
    let namespace = tables.versionless_namespace.as_str();
    let mut platforms = BTreeSet::new();

    for required in &feature.requires {
        let target = names::normalize(names::strip_versionless_namespace(required, namespace));
        platforms.extend(platforms_for_feature(catalog, &target));
    }

    for requirement in &feature.requires_with_tolerates {
        let target =
            names::normalize(names::strip_versionless_namespace(&requirement.feature, namespace));
        platforms.extend(platforms_for_feature(catalog, &target));

        let base = names::strip_version(&target);
        let alternate = tables.alternate_feature_name(base);
        let versions = names::version_of(&target)
            .into_iter()
            .chain(requirement.tolerates.iter().map(String::as_str));

        for version in versions {
            let version = version.trim();
            platforms.extend(platforms_for_feature(catalog, &format!("{base}-{version}")));
            if let Some(alternate) = &alternate {
                platforms.extend(platforms_for_feature(catalog, &format!("{alternate}-{version}")));
            }
        }
    }

    platforms
}
