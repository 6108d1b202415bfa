use async_trait::async_trait;
use fcompat::domain::config::CompatConfig;
use fcompat::domain::{Declarations, FindingKind, RuntimeIdentity, RuntimeKind, Severity};
use fcompat::resolver::{
    CatalogResolver, CatalogSource, DefaultCatalogProvider, ResolverError,
};
use fcompat::validator::CompatibilityValidator;
use fcompat::{Engine, Report};

fn identity() -> RuntimeIdentity {
    RuntimeIdentity::new(RuntimeKind::Ol, "25.0.0.3")
}

async fn check(declarations: &Declarations) -> Report {
    Engine::from_config(&CompatConfig::default()).check(&identity(), declarations).await
}

#[tokio::test]
async fn consistent_configuration_is_clean() {
    let declarations = Declarations::new()
        .with_features(["servlet-6.0", "restfulWS-3.1", "jsonp-2.1", "mpHealth-4.0"])
        .with_config_elements(["httpSession", "mpHealth"]);

    let report = check(&declarations).await;

    assert_eq!(report.source, CatalogSource::Default);
    assert!(report.findings.is_empty(), "unexpected findings: {:?}", report.findings);
}

#[tokio::test]
async fn mixed_jakarta_versions_are_incompatible() {
    let declarations = Declarations::new().with_features(["servlet-6.0", "restfulWS-3.0"]);

    let report = check(&declarations).await;

    assert!(report.has_errors());
    assert_eq!(report.count(Severity::Error), 2);
    assert!(report.findings.iter().all(|f| f.kind == FindingKind::IncompatibleFeatures));
}

#[tokio::test]
async fn versionless_feature_follows_declared_platform() {
    let declarations =
        Declarations::new().with_features(["servlet"]).with_platforms(["jakartaee-10.0"]);

    let report = check(&declarations).await;
    assert!(report.findings.is_empty(), "unexpected findings: {:?}", report.findings);
}

#[tokio::test]
async fn unconfigured_element_is_a_warning() {
    let declarations = Declarations::new()
        .with_features(["servlet-6.0"])
        .with_config_elements(["mpMetrics"]);

    let report = check(&declarations).await;

    assert!(!report.has_errors());
    assert_eq!(report.count(Severity::Warning), 1);
    assert_eq!(report.findings[0].kind, FindingKind::MissingConfiguredFeature);
    assert_eq!(report.findings[0].subject, "mpMetrics");
}

#[derive(Debug)]
struct BrokenDefault;

#[async_trait]
impl DefaultCatalogProvider for BrokenDefault {
    async fn load(&self) -> Result<Vec<u8>, ResolverError> {
        Ok(b"{ truncated".to_vec())
    }
}

#[tokio::test]
async fn unusable_default_skips_validation() {
    let resolver = CatalogResolver::builder().default_catalog(BrokenDefault).build();
    let engine = Engine::new(resolver, CompatibilityValidator::default());
    let declarations = Declarations::new().with_features(["notAFeature-1.0"]);

    let report = engine.check(&identity(), &declarations).await;

    assert!(report.is_unchecked());
    assert!(report.findings.is_empty());
}

#[tokio::test]
async fn report_serializes_for_tooling() {
    let declarations = Declarations::new().with_features(["servlet-6.0", "servlet-6.0"]);

    let report = check(&declarations).await;
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["source"], "default");
    assert_eq!(json["findings"][0]["kind"], "FeatureAlreadyIncluded");
    assert_eq!(json["identity"]["version"], "25.0.0.3");
}
