mod common;

use common::{catalog, features};
use fcompat_catalog::FeatureCatalog;
use fcompat_domain::{Declarations, Finding, FindingKind, Severity};
use fcompat_validator::{
    CompatibilityValidator, platforms_for_feature, replacement_candidates, validate,
};
use std::collections::BTreeSet;

fn kinds(findings: &[Finding]) -> Vec<FindingKind> {
    findings.iter().map(|f| f.kind).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

#[test]
fn duplicate_feature_is_reported_once() {
    let findings = validate(&catalog(), &features(&["jaxrs-2.1", "jaxrs-2.1"]));
    assert_eq!(kinds(&findings), vec![FindingKind::FeatureAlreadyIncluded]);
    assert_eq!(findings[0].subject, "jaxrs-2.1");
}

#[test]
fn version_conflict_names_the_base_feature() {
    let findings = validate(&catalog(), &features(&["jaxrs-2.1", "jaxrs-2.0"]));
    assert_eq!(kinds(&findings), vec![FindingKind::FeatureVersionConflict]);
    assert_eq!(findings[0].subject, "jaxrs");
    assert_eq!(findings[0].related, strings(&["jaxrs-2.0", "jaxrs-2.1"]));
}

#[test]
fn renamed_feature_pair_is_reported() {
    let findings = validate(&catalog(), &features(&["jaxrs-2.1", "restfulWS-3.1"]));
    assert_eq!(kinds(&findings), vec![FindingKind::FeatureRenamed]);
    assert_eq!(findings[0].related, strings(&["jaxrs-2.1"]));
}

#[test]
fn incompatible_features_of_one_family() {
    let findings = validate(&catalog(), &features(&["servlet-6.0", "restfulWS-3.0"]));
    assert_eq!(
        kinds(&findings),
        vec![FindingKind::IncompatibleFeatures, FindingKind::IncompatibleFeatures]
    );
    assert_eq!(findings[0].subject, "servlet-6.0");
    assert_eq!(findings[0].related, strings(&["restfulWS-3.0"]));
    assert_eq!(findings[1].subject, "restfulWS-3.0");
    assert_eq!(findings[1].related, strings(&["servlet-6.0"]));
}

#[test]
fn duplicate_feature_suppresses_family_check() {
    let declarations = features(&["servlet-6.0", "restfulWS-3.0", "restfulWS-3.0"]);
    let findings = validate(&catalog(), &declarations);

    assert_eq!(kinds(&findings), vec![FindingKind::FeatureAlreadyIncluded]);
    assert_eq!(findings[0].subject, "restfulWS-3.0");
}

#[test]
fn unknown_feature_suggests_replacements() {
    let findings = validate(&catalog(), &features(&["servlet-9.0", "usr:custom-1.0"]));
    assert_eq!(kinds(&findings), vec![FindingKind::FeatureNotFound]);
    assert_eq!(
        findings[0].related,
        strings(&["servlet", "servlet-4.0", "servlet-5.0", "servlet-6.0"])
    );
    assert_eq!(replacement_candidates(&catalog(), "mpMetrics-1.0"), strings(&["mpMetrics-5.0"]));
}

#[test]
fn conflicting_platforms_are_named() {
    let declarations = Declarations::new().with_platforms(["javaee-8.0", "jakartaee-9.1"]);
    let findings = validate(&catalog(), &declarations);

    assert_eq!(kinds(&findings), vec![FindingKind::PlatformConflict]);
    assert_eq!(findings[0].subject, "jakartaee-9.1");
    assert_eq!(findings[0].related, strings(&["jakartaee-9.1", "javaee-8.0"]));
}

#[test]
fn versionless_resolves_against_declared_platform() {
    let declarations = features(&["servlet"]).with_platforms(["jakartaee-9.1"]);
    assert!(validate(&catalog(), &declarations).is_empty());
}

#[test]
fn versionless_resolves_against_common_platform() {
    let declarations = features(&["servlet", "restfulWS-3.1"]);
    assert!(validate(&catalog(), &declarations).is_empty());
}

#[test]
fn common_platform_spans_every_versioned_feature() {
    let findings = validate(&catalog(), &features(&["servlet", "restfulWS-3.1", "mpHealth-4.0"]));
    assert_eq!(kinds(&findings), vec![FindingKind::NoCommonPlatform]);
    assert_eq!(findings[0].subject, "servlet");
    assert_eq!(findings[0].related, strings(&["mpHealth-4.0", "restfulWS-3.1"]));
}

#[test]
fn versionless_without_anything_to_resolve() {
    let findings = validate(&catalog(), &features(&["servlet"]));
    assert_eq!(kinds(&findings), vec![FindingKind::NoPlatformOrFeatureToResolve]);
}

#[test]
fn versioned_feature_without_platforms_leaves_nothing_in_common() {
    let findings = validate(&catalog(), &features(&["servlet", "localConnector-1.0"]));
    assert_eq!(kinds(&findings), vec![FindingKind::NoCommonPlatform]);
    assert_eq!(findings[0].related, strings(&["localConnector-1.0"]));
}

#[test]
fn versionless_with_disjoint_versioned_features() {
    let findings = validate(&catalog(), &features(&["servlet", "restfulWS-3.0", "jsonp-2.1"]));

    let no_common: Vec<_> =
        findings.iter().filter(|f| f.kind == FindingKind::NoCommonPlatform).collect();
    assert_eq!(no_common.len(), 1);
    assert_eq!(no_common[0].subject, "servlet");
    assert_eq!(no_common[0].related, strings(&["jsonp-2.1", "restfulWS-3.0"]));

    let incompatible = findings.iter().filter(|f| f.kind == FindingKind::IncompatibleFeatures);
    assert_eq!(incompatible.count(), 2);
}

#[test]
fn versionless_with_ambiguous_common_platform() {
    let findings = validate(&catalog(), &features(&["jsonp", "jsonp-2.1"]));
    assert_eq!(kinds(&findings), vec![FindingKind::AmbiguousCommonPlatform]);
    assert_eq!(findings[0].related, strings(&["jakartaee-10.0", "microprofile-6.0"]));
}

#[test]
fn versionless_with_unsupported_inferred_platform() {
    let findings = validate(&catalog(), &features(&["jsonp", "mpHealth-3.1"]));
    assert_eq!(kinds(&findings), vec![FindingKind::NoSupportedPlatform]);
    assert_eq!(findings[0].related, strings(&["microprofile-4.1"]));

    let findings = validate(&catalog(), &features(&["servlet", "mpHealth-4.0"]));
    assert_eq!(kinds(&findings), vec![FindingKind::NoSupportedPlatform]);
    assert_eq!(findings[0].related, strings(&["microprofile-6.0"]));
}

#[test]
fn versionless_with_unsupported_configured_platform() {
    let declarations = features(&["restfulWS"]).with_platforms(["javaee-8.0"]);
    let findings = validate(&catalog(), &declarations);
    assert_eq!(kinds(&findings), vec![FindingKind::NoConfiguredPlatform]);
    assert_eq!(findings[0].related, strings(&["javaee-8.0"]));
}

#[test]
fn same_versionless_feature_twice_is_resolved_once() {
    let declarations = features(&["servlet", "Servlet"]).with_platforms(["jakartaee-10.0"]);
    let findings = validate(&catalog(), &declarations);
    assert_eq!(kinds(&findings), vec![FindingKind::FeatureAlreadyIncluded]);
    assert_eq!(findings[0].subject, "Servlet");
}

#[test]
fn config_elements_need_an_enabling_feature() {
    let enabled = features(&["webProfile-10.0"]).with_config_elements(["httpSession"]);
    assert!(validate(&catalog(), &enabled).is_empty());

    let missing = features(&["mpHealth-4.0"]).with_config_elements(["httpSession", "mpHealth"]);
    let findings = validate(&catalog(), &missing);
    assert_eq!(kinds(&findings), vec![FindingKind::MissingConfiguredFeature]);
    assert_eq!(findings[0].severity(), Severity::Warning);
    assert_eq!(findings[0].related, strings(&["servlet-4.0", "servlet-5.0", "servlet-6.0"]));
}

#[test]
fn checks_run_in_order() {
    let declarations = features(&["bogus-1.0", "servlet"]).with_platforms(["unknown-1.0"]);
    let findings = validate(&catalog(), &declarations);
    assert_eq!(
        kinds(&findings),
        vec![
            FindingKind::FeatureNotFound,
            FindingKind::NoConfiguredPlatform,
            FindingKind::PlatformNotFound,
        ]
    );
}

#[test]
fn empty_catalog_skips_validation() {
    let declarations = features(&["anything-1.0", "servlet"]).with_platforms(["nope-1.0"]);
    assert!(validate(&FeatureCatalog::empty(), &declarations).is_empty());
}

#[test]
fn platform_queries() {
    let catalog = catalog();
    let validator = CompatibilityValidator::default();

    let expected: BTreeSet<String> =
        ["jakartaee-10.0", "jakartaee-9.1", "javaee-8.0"].map(str::to_owned).into();
    assert_eq!(validator.platforms_for_versionless_feature(&catalog, "servlet"), expected);

    let expected: BTreeSet<String> =
        ["microprofile-4.1", "microprofile-6.0"].map(str::to_owned).into();
    assert_eq!(validator.platforms_for_versionless_feature(&catalog, "mpHealth"), expected);

    assert!(platforms_for_feature(&catalog, "jaxrs-2.0").is_empty());
}

#[test]
fn custom_tables_drive_rename_detection() {
    let mut tables = fcompat_domain::config::CompatibilityTables::default();
    tables.renamed_features.clear();
    let validator = CompatibilityValidator::new(tables);

    let findings = validator.validate(&catalog(), &features(&["jaxrs-2.1", "restfulWS-3.1"]));
    assert!(!kinds(&findings).contains(&FindingKind::FeatureRenamed));
}
