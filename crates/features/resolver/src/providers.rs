//! Built-in catalog sources.

use crate::error::{ResolverError, ResolverErrorExt};
use crate::source::{
    DefaultCatalogProvider, InstalledCatalogProvider, RemoteCatalogFetcher, WorkspaceContext,
};
use async_trait::async_trait;
use fcompat_domain::RuntimeIdentity;
use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const BUNDLED_CATALOG: &[u8] = include_bytes!("../assets/default-features.json");

/// Reads published catalogs from a local mirror laid out as
/// `<root>/<kind>/<version>/features-<version>.json`.
#[derive(Debug, Clone)]
pub struct MirrorFetcher {
    root: PathBuf,
}

impl MirrorFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location of the catalog of `identity` inside the mirror.
    #[must_use]
    pub fn catalog_path(&self, identity: &RuntimeIdentity) -> PathBuf {
        self.root
            .join(identity.kind.as_str())
            .join(&identity.version)
            .join(format!("features-{}.json", identity.version))
    }
}

#[async_trait]
impl RemoteCatalogFetcher for MirrorFetcher {
    async fn fetch(&self, identity: &RuntimeIdentity) -> Result<Vec<u8>, ResolverError> {
        let path = self.catalog_path(identity);
        debug!(path = %path.display(), "Reading mirrored catalog");
        tokio::fs::read(&path).await.context(format!("Reading {}", path.display()))
    }
}

/// Always fails; used when no remote source is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnreachableRemote;

#[async_trait]
impl RemoteCatalogFetcher for UnreachableRemote {
    async fn fetch(&self, identity: &RuntimeIdentity) -> Result<Vec<u8>, ResolverError> {
        Err(ResolverError::Remote {
            message: "no remote catalog source configured".into(),
            context: Some(identity.to_string().into()),
        })
    }
}

/// Reads the catalog a runtime installation generated, relative to its install directory.
#[derive(Debug, Clone)]
pub struct FileInstalledCatalog {
    relative: PathBuf,
}

impl FileInstalledCatalog {
    pub fn new(relative: impl Into<PathBuf>) -> Self {
        Self { relative: relative.into() }
    }

    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative
    }
}

#[async_trait]
impl InstalledCatalogProvider for FileInstalledCatalog {
    async fn generate(
        &self,
        workspace: &WorkspaceContext,
    ) -> Result<Option<Vec<u8>>, ResolverError> {
        let Some(install_dir) = workspace.install_dir() else {
            return Ok(None);
        };
        let path = install_dir.join(&self.relative);

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No installed catalog");
                Ok(None)
            },
            Err(err) => Err(err).context(format!("Reading {}", path.display())),
        }
    }
}

/// No installed runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableInstalledCatalog;

#[async_trait]
impl InstalledCatalogProvider for UnavailableInstalledCatalog {
    async fn generate(&self, _: &WorkspaceContext) -> Result<Option<Vec<u8>>, ResolverError> {
        Ok(None)
    }
}

/// The catalog embedded in the binary, or caller-supplied bytes.
#[derive(Debug, Clone)]
pub struct BundledDefaultCatalog {
    bytes: Cow<'static, [u8]>,
}

impl BundledDefaultCatalog {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: Cow::Owned(bytes.into()) }
    }

    /// The embedded catalog.
    #[must_use]
    pub const fn bundled_bytes() -> &'static [u8] {
        BUNDLED_CATALOG
    }
}

impl Default for BundledDefaultCatalog {
    fn default() -> Self {
        Self { bytes: Cow::Borrowed(BUNDLED_CATALOG) }
    }
}

#[async_trait]
impl DefaultCatalogProvider for BundledDefaultCatalog {
    async fn load(&self) -> Result<Vec<u8>, ResolverError> {
        Ok(self.bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fcompat_domain::RuntimeKind;

    #[test]
    fn mirror_layout() {
        let mirror = MirrorFetcher::new("/srv/catalogs");
        let path = mirror.catalog_path(&RuntimeIdentity::new(RuntimeKind::Wlp, "25.0.0.3"));
        assert_eq!(path, PathBuf::from("/srv/catalogs/wlp/25.0.0.3/features-25.0.0.3.json"));
    }

    #[tokio::test]
    async fn unreachable_remote_always_fails() {
        let identity = RuntimeIdentity::new(RuntimeKind::Ol, "25.0.0.3");
        let err = UnreachableRemote.fetch(&identity).await.unwrap_err();
        assert!(matches!(err, ResolverError::Remote { .. }));
        assert_eq!(err.context_str(), Some("ol@25.0.0.3"));
    }

    #[tokio::test]
    async fn installed_catalog_needs_an_install_dir() {
        let provider = FileInstalledCatalog::new("lib/features/generated-features.json");
        let bytes = provider.generate(&WorkspaceContext::default()).await.expect("no error");
        assert!(bytes.is_none());
    }
}
