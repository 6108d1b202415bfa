use crate::error::ResolverError;
use crate::providers::{
    BundledDefaultCatalog, FileInstalledCatalog, MirrorFetcher, UnavailableInstalledCatalog,
    UnreachableRemote,
};
use crate::snapshot::{CatalogSnapshot, CatalogSource};
use crate::source::{
    DefaultCatalogProvider, InstalledCatalogProvider, RemoteCatalogFetcher, WorkspaceContext,
};
use fcompat_catalog::{CatalogParser, FeatureCatalog, JsonCatalogParser};
use fcompat_domain::RuntimeIdentity;
use fcompat_domain::config::{ResolverConfig, SourcesConfig};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OnceCell};
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: Arc<CatalogSnapshot>,
    /// Last successful remote fetch; fallback snapshots never carry one.
    fetched_at: Option<Instant>,
}

impl CacheEntry {
    fn is_fresh(&self, request_delay: Duration) -> bool {
        self.fetched_at.is_some_and(|fetched_at| fetched_at.elapsed() < request_delay)
    }
}

#[derive(Debug)]
struct CatalogResolverInner {
    request_delay: Duration,
    workspace: WorkspaceContext,
    remote: Arc<dyn RemoteCatalogFetcher>,
    installed: Arc<dyn InstalledCatalogProvider>,
    default: Arc<dyn DefaultCatalogProvider>,
    parser: Arc<dyn CatalogParser>,
    entries: Cache<RuntimeIdentity, CacheEntry>,
    refresh_locks: Cache<RuntimeIdentity, Arc<Mutex<()>>>,
    default_catalog: OnceCell<Arc<FeatureCatalog>>,
}

/// Resolves and caches one catalog per runtime identity.
///
/// Within `request_delay` of the last successful remote fetch the cached snapshot is
/// returned as is. Otherwise, including whenever the cached snapshot is a fallback, a
/// refresh walks the fallback chain:
///
/// 1. **Remote**: skipped for beta runtimes. When it fails and the cached snapshot came
///    from a remote fetch, that snapshot keeps being served.
/// 2. **Installed**: the catalog generated by the installed runtime, if any.
/// 3. **Default**: the bundled catalog, loaded once per resolver. An unusable default
///    yields an empty catalog.
///
/// Refreshes are single-flight per identity; cheap to clone.
#[derive(Debug, Clone)]
pub struct CatalogResolver {
    inner: Arc<CatalogResolverInner>,
}

impl CatalogResolver {
    /// Creates a new [`CatalogResolverBuilder`].
    pub fn builder() -> CatalogResolverBuilder {
        CatalogResolverBuilder::new()
    }

    /// Returns the catalog of `identity`, refreshing it when the cached one is stale.
    #[instrument(skip_all, fields(identity = %identity))]
    pub async fn resolve(&self, identity: &RuntimeIdentity) -> Arc<CatalogSnapshot> {
        if let Some(entry) = self.fresh_entry(identity).await {
            return entry.snapshot;
        }

        let lock = self
            .inner
            .refresh_locks
            .get_with(identity.clone(), async { Arc::new(Mutex::new(())) })
            .await;
        let _guard = lock.lock().await;

        // Another caller may have refreshed while this one was waiting.
        let previous = self.inner.entries.get(identity).await;
        if let Some(entry) = &previous
            && entry.is_fresh(self.inner.request_delay)
        {
            return Arc::clone(&entry.snapshot);
        }

        let entry = self.refresh(identity, previous).await;
        let snapshot = Arc::clone(&entry.snapshot);
        info!(source = %snapshot.source(), features = snapshot.len(), "Catalog resolved");

        self.inner.entries.insert(identity.clone(), entry).await;
        snapshot
    }

    /// Source of the cached catalog of `identity`, if any.
    pub async fn source(&self, identity: &RuntimeIdentity) -> Option<CatalogSource> {
        self.inner.entries.get(identity).await.map(|entry| entry.snapshot.source())
    }

    /// Identities with a cached catalog, sorted.
    #[must_use]
    pub fn cached_identities(&self) -> Vec<RuntimeIdentity> {
        let mut identities: Vec<RuntimeIdentity> = self
            .inner
            .entries
            .iter()
            .map(|(identity, _)| RuntimeIdentity::clone(&identity))
            .collect();
        identities.sort();
        identities
    }

    /// Drops every cached catalog; the next `resolve` refreshes from scratch.
    ///
    /// Refresh locks survive so an in-flight refresh still excludes new callers.
    pub fn evict_all(&self) {
        info!("Evicting all cached catalogs");
        self.inner.entries.invalidate_all();
    }

    async fn fresh_entry(&self, identity: &RuntimeIdentity) -> Option<CacheEntry> {
        let entry = self.inner.entries.get(identity).await?;
        if entry.is_fresh(self.inner.request_delay) {
            debug!("Serving cached catalog");
            Some(entry)
        } else {
            None
        }
    }

    async fn refresh(
        &self,
        identity: &RuntimeIdentity,
        previous: Option<CacheEntry>,
    ) -> CacheEntry {
        if identity.is_beta() {
            debug!("Beta runtime, remote catalog skipped");
        } else {
            match self.fetch_remote(identity).await {
                Ok(catalog) => {
                    return CacheEntry {
                        snapshot: publish(identity, CatalogSource::Remote, catalog),
                        fetched_at: Some(Instant::now()),
                    };
                },
                Err(err) => {
                    warn!(error = %err, kind = err.variant_name(), "Remote catalog unavailable");
                    // The fetch timestamp stays, so the next request retries the remote.
                    if let Some(entry) = previous
                        && entry.snapshot.source() == CatalogSource::Remote
                    {
                        info!("Keeping previously fetched catalog");
                        return entry;
                    }
                },
            }
        }

        let snapshot = match self.load_installed().await {
            Ok(Some(catalog)) => publish(identity, CatalogSource::Installed, catalog),
            Ok(None) => {
                debug!("No installed catalog available");
                self.default_snapshot(identity).await
            },
            Err(err) => {
                warn!(error = %err, kind = err.variant_name(), "Installed catalog unusable");
                self.default_snapshot(identity).await
            },
        };
        CacheEntry { snapshot, fetched_at: None }
    }

    async fn default_snapshot(&self, identity: &RuntimeIdentity) -> Arc<CatalogSnapshot> {
        let catalog = self.default_catalog().await;
        let source = if catalog.is_empty() { CatalogSource::Empty } else { CatalogSource::Default };
        Arc::new(CatalogSnapshot::new(identity.clone(), source, catalog))
    }

    async fn fetch_remote(
        &self,
        identity: &RuntimeIdentity,
    ) -> Result<FeatureCatalog, ResolverError> {
        let bytes = self.inner.remote.fetch(identity).await?;
        let catalog = self.inner.parser.parse(&bytes)?;
        if catalog.is_empty() {
            return Err(ResolverError::Remote {
                message: "catalog has no features".into(),
                context: None,
            });
        }
        Ok(catalog)
    }

    async fn load_installed(&self) -> Result<Option<FeatureCatalog>, ResolverError> {
        let Some(bytes) = self.inner.installed.generate(&self.inner.workspace).await? else {
            return Ok(None);
        };
        let catalog = self.inner.parser.parse(&bytes)?;
        Ok((!catalog.is_empty()).then_some(catalog))
    }

    async fn default_catalog(&self) -> Arc<FeatureCatalog> {
        let catalog = self
            .inner
            .default_catalog
            .get_or_init(|| async {
                let parsed = match self.inner.default.load().await {
                    Ok(bytes) => self.inner.parser.parse(&bytes).map_err(ResolverError::from),
                    Err(err) => Err(err),
                };
                match parsed {
                    Ok(catalog) => {
                        warm(&catalog);
                        Arc::new(catalog)
                    },
                    Err(err) => {
                        error!(error = %err, "Default catalog unusable, validation disabled");
                        Arc::new(FeatureCatalog::empty())
                    },
                }
            })
            .await;
        Arc::clone(catalog)
    }
}

fn publish(
    identity: &RuntimeIdentity,
    source: CatalogSource,
    catalog: FeatureCatalog,
) -> Arc<CatalogSnapshot> {
    warm(&catalog);
    Arc::new(CatalogSnapshot::new(identity.clone(), source, Arc::new(catalog)))
}

/// Builds the graph before the catalog is published to readers.
fn warm(catalog: &FeatureCatalog) {
    let graph = catalog.graph();
    debug!(
        features = graph.feature_count(),
        config_elements = graph.config_element_count(),
        "Catalog graph ready"
    );
}

/// A fluent builder for a [`CatalogResolver`].
///
/// Unset collaborators default to: no remote source, no installed runtime, the bundled
/// default catalog and the JSON parser.
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct CatalogResolverBuilder {
    config: ResolverConfig,
    request_delay: Option<Duration>,
    workspace: WorkspaceContext,
    remote: Option<Arc<dyn RemoteCatalogFetcher>>,
    installed: Option<Arc<dyn InstalledCatalogProvider>>,
    default: Option<Arc<dyn DefaultCatalogProvider>>,
    parser: Option<Arc<dyn CatalogParser>>,
}

impl CatalogResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request delay and cache bound.
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the configured minimum interval between two remote fetches of one
    /// identity, at full precision.
    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = Some(delay);
        self
    }

    pub fn workspace(mut self, workspace: WorkspaceContext) -> Self {
        self.workspace = workspace;
        self
    }

    /// Wires the file-based providers from configured directories.
    pub fn sources(mut self, sources: &SourcesConfig) -> Self {
        if let Some(mirror) = &sources.mirror_dir {
            self.remote = Some(Arc::new(MirrorFetcher::new(mirror.clone())));
        }
        if sources.install_dir.is_some() {
            self.installed =
                Some(Arc::new(FileInstalledCatalog::new(sources.installed_catalog.clone())));
            self.workspace = WorkspaceContext::new(sources.install_dir.clone());
        }
        self
    }

    pub fn remote(mut self, remote: impl RemoteCatalogFetcher + 'static) -> Self {
        self.remote = Some(Arc::new(remote));
        self
    }

    pub fn installed(mut self, installed: impl InstalledCatalogProvider + 'static) -> Self {
        self.installed = Some(Arc::new(installed));
        self
    }

    pub fn default_catalog(mut self, default: impl DefaultCatalogProvider + 'static) -> Self {
        self.default = Some(Arc::new(default));
        self
    }

    pub fn parser(mut self, parser: impl CatalogParser + 'static) -> Self {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Consumes the builder.
    pub fn build(self) -> CatalogResolver {
        let capacity = self.config.max_cached_runtimes.max(1);
        let inner = CatalogResolverInner {
            request_delay: self.request_delay.unwrap_or_else(|| self.config.request_delay()),
            workspace: self.workspace,
            remote: self.remote.unwrap_or_else(|| Arc::new(UnreachableRemote)),
            installed: self.installed.unwrap_or_else(|| Arc::new(UnavailableInstalledCatalog)),
            default: self.default.unwrap_or_else(|| Arc::new(BundledDefaultCatalog::default())),
            parser: self.parser.unwrap_or_else(|| Arc::new(JsonCatalogParser)),
            entries: Cache::builder().max_capacity(capacity).build(),
            refresh_locks: Cache::builder().max_capacity(capacity).build(),
            default_catalog: OnceCell::new(),
        };

        debug!(request_delay = ?inner.request_delay, capacity, "Catalog resolver ready");
        CatalogResolver { inner: Arc::new(inner) }
    }
}
