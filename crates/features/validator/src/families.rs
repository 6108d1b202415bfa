use crate::platforms::platforms_for_feature;
use fcompat_catalog::FeatureCatalog;
use fcompat_domain::{Feature, Finding, FindingKind, PlatformFamily};
use std::collections::{BTreeMap, BTreeSet};

/// Versioned features of one platform family must have a platform of that family in
/// common. Each member of an incompatible group gets one finding naming the others.
pub(crate) fn check(catalog: &FeatureCatalog, versioned: &[&Feature]) -> Vec<Finding> {
    let mut groups: BTreeMap<PlatformFamily, Vec<(&str, BTreeSet<String>)>> = BTreeMap::new();

    for feature in versioned {
        let available = platforms_for_feature(catalog, &feature.name);
        for family in PlatformFamily::ALL {
            let in_family: BTreeSet<String> =
                available.iter().filter(|p| family.contains(p)).cloned().collect();
            if !in_family.is_empty() {
                groups.entry(family).or_default().push((feature.name.as_str(), in_family));
            }
        }
    }

    let mut findings = Vec::new();
    for members in groups.values().filter(|members| members.len() > 1) {
        let mut common = members[0].1.clone();
        for (_, platforms) in &members[1..] {
            common.retain(|p| platforms.contains(p));
        }
        if !common.is_empty() {
            continue;
        }

        for (name, _) in members {
            let others = members.iter().map(|(other, _)| *other).filter(|other| other != name);
            findings
                .push(Finding::new(FindingKind::IncompatibleFeatures, *name).with_related(others));
        }
    }

    findings
}
