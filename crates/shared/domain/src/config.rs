use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::names::VERSIONLESS_NAMESPACE;

/// Top-level engine configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompatConfigInner {
    pub resolver: ResolverConfig,
    pub sources: SourcesConfig,
    pub tables: CompatibilityTables,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct CompatConfig {
    #[serde(flatten, default)]
    inner: Arc<CompatConfigInner>,
}

impl Deref for CompatConfig {
    type Target = CompatConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for CompatConfig {
    fn deref_mut(&mut self) -> &mut CompatConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Catalog cache knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Minimum interval between two remote fetches for the same runtime identity.
    pub request_delay_seconds: u64,
    /// Upper bound of runtime identities kept in memory.
    pub max_cached_runtimes: u64,
}

impl ResolverConfig {
    #[must_use]
    pub const fn request_delay(&self) -> Duration {
        Duration::from_secs(self.request_delay_seconds)
    }
}

/// Where raw catalogs come from when no custom collaborator is injected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Local mirror of published catalogs (`<kind>/<version>/features-<version>.json`).
    pub mirror_dir: Option<PathBuf>,
    /// Installed runtime root used for the generated catalog fallback.
    pub install_dir: Option<PathBuf>,
    /// Generated catalog location, relative to `install_dir`.
    pub installed_catalog: PathBuf,
}

/// Static lookup tables. Configuration data, never derived from a catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompatibilityTables {
    /// Version-less platform pairs that must not be configured together.
    /// Lookups apply the table in both directions.
    pub conflicting_platforms: BTreeMap<String, String>,
    /// Old feature base name to new base name. Lookups apply it in both directions.
    pub renamed_features: BTreeMap<String, String>,
    /// Namespace of the private features backing versionless public features.
    pub versionless_namespace: String,
}

impl CompatibilityTables {
    /// Conflicting counterpart of a version-less platform name, lower-cased.
    #[must_use]
    pub fn conflicting_platform(&self, base: &str) -> Option<String> {
        bidirectional_lookup(&self.conflicting_platforms, base)
    }

    /// Alternate (old or new) base name of a renamed feature, lower-cased.
    #[must_use]
    pub fn alternate_feature_name(&self, base: &str) -> Option<String> {
        bidirectional_lookup(&self.renamed_features, base)
    }
}

fn bidirectional_lookup(table: &BTreeMap<String, String>, key: &str) -> Option<String> {
    table.iter().find_map(|(left, right)| {
        if left.eq_ignore_ascii_case(key) {
            Some(right.to_lowercase())
        } else if right.eq_ignore_ascii_case(key) {
            Some(left.to_lowercase())
        } else {
            None
        }
    })
}

// --- Default ---

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { request_delay_seconds: 120, max_cached_runtimes: 64 }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            mirror_dir: None,
            install_dir: None,
            installed_catalog: PathBuf::from("lib/features/generated-features.json"),
        }
    }
}

impl Default for CompatibilityTables {
    fn default() -> Self {
        let conflicting_platforms = BTreeMap::from([("javaee".to_owned(), "jakartaee".to_owned())]);

        let renamed_features = [
            ("ejb", "enterpriseBeans"),
            ("ejbHome", "enterpriseBeansHome"),
            ("ejbLite", "enterpriseBeansLite"),
            ("ejbPersistentTimer", "enterpriseBeansPersistentTimer"),
            ("ejbRemote", "enterpriseBeansRemote"),
            ("el", "expressionLanguage"),
            ("jacc", "appAuthorization"),
            ("jaspic", "appAuthentication"),
            ("javaMail", "mail"),
            ("jaxb", "xmlBinding"),
            ("jaxrs", "restfulWS"),
            ("jaxrsClient", "restfulWSClient"),
            ("jaxws", "xmlWS"),
            ("jca", "connectors"),
            ("jcaInboundSecurity", "connectorsInboundSecurity"),
            ("jms", "messaging"),
            ("jpa", "persistence"),
            ("jpaContainer", "persistenceContainer"),
            ("jsf", "faces"),
            ("jsfContainer", "facesContainer"),
            ("jsp", "pages"),
            ("wasJmsClient", "messagingClient"),
            ("wasJmsSecurity", "messagingSecurity"),
            ("wasJmsServer", "messagingServer"),
        ]
        .into_iter()
        .map(|(old, new)| (old.to_owned(), new.to_owned()))
        .collect();

        Self {
            conflicting_platforms,
            renamed_features,
            versionless_namespace: VERSIONLESS_NAMESPACE.to_owned(),
        }
    }
}
