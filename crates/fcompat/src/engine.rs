use fcompat_domain::config::CompatConfig;
use fcompat_domain::{Declarations, Finding, RuntimeIdentity, Severity};
use fcompat_resolver::{CatalogResolver, CatalogSource};
use fcompat_validator::CompatibilityValidator;
use serde::Serialize;
use tracing::{info, instrument};

/// Resolver plus validator for one configuration. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Engine {
    resolver: CatalogResolver,
    validator: CompatibilityValidator,
}

impl Engine {
    #[must_use]
    pub const fn new(resolver: CatalogResolver, validator: CompatibilityValidator) -> Self {
        Self { resolver, validator }
    }

    /// Built-in sources wired from `config.sources`, tables from `config.tables`.
    #[must_use]
    pub fn from_config(config: &CompatConfig) -> Self {
        let resolver = CatalogResolver::builder()
            .config(config.resolver.clone())
            .sources(&config.sources)
            .build();
        Self::new(resolver, CompatibilityValidator::new(config.tables.clone()))
    }

    #[must_use]
    pub const fn resolver(&self) -> &CatalogResolver {
        &self.resolver
    }

    #[must_use]
    pub const fn validator(&self) -> &CompatibilityValidator {
        &self.validator
    }

    /// Resolves the catalog of `identity` and validates `declarations` against it.
    #[instrument(skip_all, fields(identity = %identity))]
    pub async fn check(&self, identity: &RuntimeIdentity, declarations: &Declarations) -> Report {
        let snapshot = self.resolver.resolve(identity).await;
        let findings = self.validator.validate(&snapshot, declarations);

        let report = Report { identity: identity.clone(), source: snapshot.source(), findings };
        info!(
            source = %report.source,
            errors = report.count(Severity::Error),
            warnings = report.count(Severity::Warning),
            "Configuration checked"
        );
        report
    }
}

/// Findings of one check, with the catalog they were computed from.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub identity: RuntimeIdentity,
    pub source: CatalogSource,
    pub findings: Vec<Finding>,
}

impl Report {
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|finding| finding.severity() == severity).count()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    /// No catalog was available, so nothing was checked.
    #[must_use]
    pub fn is_unchecked(&self) -> bool {
        self.source == CatalogSource::Empty
    }
}
