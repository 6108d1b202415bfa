//! # Catalog Resolver
//!
//! Supplies a [`FeatureCatalog`](fcompat_catalog::FeatureCatalog) per runtime identity.
//!
//! ## Key Features
//! - **Minimum refresh interval**: a cached catalog is served untouched until
//!   `request_delay` has passed since its last refresh.
//! - **Fallback chain**: remote source, then the installed runtime's generated catalog,
//!   then the bundled default. Failures are logged and never surface to callers.
//! - **Single-flight refresh**: concurrent callers for one identity share a single fetch.
//!
//! ## Example
//!
//! ```rust
//! use fcompat_domain::{RuntimeIdentity, RuntimeKind};
//! use fcompat_resolver::{CatalogResolver, CatalogSource};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let resolver = CatalogResolver::builder().build();
//! let identity = RuntimeIdentity::new(RuntimeKind::Ol, "25.0.0.3");
//!
//! let snapshot = resolver.resolve(&identity).await;
//! assert_eq!(snapshot.source(), CatalogSource::Default);
//! assert!(snapshot.public_feature("servlet-6.0").is_some());
//! # }
//! ```

mod error;
pub mod providers;
mod resolver;
mod snapshot;
pub mod source;

pub use crate::error::{ResolverError, ResolverErrorExt};
pub use crate::providers::{
    BundledDefaultCatalog, FileInstalledCatalog, MirrorFetcher, UnavailableInstalledCatalog,
    UnreachableRemote,
};
pub use crate::resolver::{CatalogResolver, CatalogResolverBuilder};
pub use crate::snapshot::{CatalogSnapshot, CatalogSource};
pub use crate::source::{
    DefaultCatalogProvider, InstalledCatalogProvider, RemoteCatalogFetcher, WorkspaceContext,
};
