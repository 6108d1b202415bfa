use fcompat_catalog::FeatureCatalog;
use fcompat_domain::RuntimeIdentity;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Where a cached catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// Fetched from the remote source.
    Remote,
    /// Generated by the installed runtime.
    Installed,
    /// The bundled default catalog.
    Default,
    /// Every source failed; validation is skipped.
    Empty,
}

impl CatalogSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Installed => "installed",
            Self::Default => "default",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved catalog together with its origin. Dereferences to [`FeatureCatalog`].
#[derive(Debug)]
pub struct CatalogSnapshot {
    identity: RuntimeIdentity,
    source: CatalogSource,
    catalog: Arc<FeatureCatalog>,
}

impl CatalogSnapshot {
    pub(crate) const fn new(
        identity: RuntimeIdentity,
        source: CatalogSource,
        catalog: Arc<FeatureCatalog>,
    ) -> Self {
        Self { identity, source, catalog }
    }

    #[must_use]
    pub const fn identity(&self) -> &RuntimeIdentity {
        &self.identity
    }

    #[must_use]
    pub const fn source(&self) -> CatalogSource {
        self.source
    }

    #[must_use]
    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    /// The shared catalog handle; default-sourced snapshots of every identity share one.
    #[must_use]
    pub const fn shared_catalog(&self) -> &Arc<FeatureCatalog> {
        &self.catalog
    }
}

impl Deref for CatalogSnapshot {
    type Target = FeatureCatalog;

    fn deref(&self) -> &Self::Target {
        &self.catalog
    }
}
