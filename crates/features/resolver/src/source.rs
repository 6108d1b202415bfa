//! Collaborators that supply raw catalog bytes.

use crate::error::ResolverError;
use async_trait::async_trait;
use fcompat_domain::RuntimeIdentity;
use std::path::{Path, PathBuf};

/// What the resolver knows about the workspace it serves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkspaceContext {
    install_dir: Option<PathBuf>,
}

impl WorkspaceContext {
    #[must_use]
    pub fn new(install_dir: Option<PathBuf>) -> Self {
        Self { install_dir }
    }

    /// Root of the installed runtime, when one is known.
    #[must_use]
    pub fn install_dir(&self) -> Option<&Path> {
        self.install_dir.as_deref()
    }
}

/// Fetches the published catalog of a runtime identity.
#[async_trait]
pub trait RemoteCatalogFetcher: Send + Sync + std::fmt::Debug {
    /// # Errors
    /// Any failure; the resolver falls back to the installed catalog.
    async fn fetch(&self, identity: &RuntimeIdentity) -> Result<Vec<u8>, ResolverError>;
}

/// Produces the catalog generated by a locally installed runtime.
#[async_trait]
pub trait InstalledCatalogProvider: Send + Sync + std::fmt::Debug {
    /// `Ok(None)` means no installed catalog exists for the workspace.
    ///
    /// # Errors
    /// Any failure; the resolver falls back to the bundled default.
    async fn generate(
        &self,
        workspace: &WorkspaceContext,
    ) -> Result<Option<Vec<u8>>, ResolverError>;
}

/// Supplies the last-resort catalog.
#[async_trait]
pub trait DefaultCatalogProvider: Send + Sync + std::fmt::Debug {
    /// # Errors
    /// Any failure; the resolver serves an empty catalog.
    async fn load(&self) -> Result<Vec<u8>, ResolverError>;
}
