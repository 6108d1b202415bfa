//! # Compatibility Validator
//!
//! Stateless checks of a configuration's declared features, platforms and config elements
//! against one [`FeatureCatalog`].
//!
//! ## Validation Order
//!
//! 1. **Features**: existence, duplicates, version conflicts and renamed features.
//! 2. **Versionless features**: resolution against declared platforms or the platform
//!    common to the declared versioned features.
//! 3. **Platforms**: existence, duplicates, version conflicts and conflicting platforms.
//! 4. **Families**: versioned features of one platform family must share a platform.
//! 5. **Config elements**: every used element must be enabled by a declared feature.
//!
//! Findings are data, never errors. An empty catalog means "no data available" and
//! yields no findings at all.

mod elements;
mod families;
mod features;
mod platforms;
mod versionless;

pub use crate::features::replacement_candidates;
pub use crate::platforms::platforms_for_feature;

use fcompat_catalog::FeatureCatalog;
use fcompat_domain::config::CompatibilityTables;
use fcompat_domain::{Declarations, Finding};
use std::collections::BTreeSet;
use tracing::debug;

/// Runs every check with a fixed set of compatibility tables.
#[derive(Debug, Default, Clone)]
pub struct CompatibilityValidator {
    tables: CompatibilityTables,
}

impl CompatibilityValidator {
    #[must_use]
    pub const fn new(tables: CompatibilityTables) -> Self {
        Self { tables }
    }

    #[must_use]
    pub const fn tables(&self) -> &CompatibilityTables {
        &self.tables
    }

    /// Validates `declarations` against `catalog`.
    #[must_use]
    pub fn validate(&self, catalog: &FeatureCatalog, declarations: &Declarations) -> Vec<Finding> {
        if catalog.is_empty() {
            debug!("Catalog is empty, skipping validation");
            return Vec::new();
        }

        let mut scan = features::check(catalog, &self.tables, &declarations.features);
        let mut findings = std::mem::take(&mut scan.findings);

        let declared_platforms = platforms::declared(&declarations.platforms);
        findings.extend(versionless::check(self, catalog, &scan, &declared_platforms));
        findings.extend(platforms::check(catalog, &self.tables, &declarations.platforms));

        if scan.flagged {
            debug!("Duplicate or renamed features found, skipping the family check");
        } else {
            findings.extend(families::check(catalog, &scan.versioned));
        }

        findings.extend(elements::check(
            catalog,
            &declarations.features,
            &declarations.config_elements,
        ));

        debug!(findings = findings.len(), "Validation finished");
        findings
    }

    /// Platforms a versionless feature can resolve to.
    ///
    /// The union of the platforms of every requirement (with the internal versionless
    /// namespace stripped) and, for tolerated requirements, of every tolerated version,
    /// also under the renamed alternate feature name.
    #[must_use]
    pub fn platforms_for_versionless_feature(
        &self,
        catalog: &FeatureCatalog,
        name: &str,
    ) -> BTreeSet<String> {
        versionless::allowed_platforms(catalog, &self.tables, name)
    }
}

/// Validates with the built-in compatibility tables.
#[must_use]
pub fn validate(catalog: &FeatureCatalog, declarations: &Declarations) -> Vec<Finding> {
    CompatibilityValidator::default().validate(catalog, declarations)
}
