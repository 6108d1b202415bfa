//! # Feature Catalog
//!
//! An immutable snapshot of every feature and platform known for one runtime identity,
//! plus the JSON parser that produces it.
//!
//! ## Overview
//!
//! * **[`FeatureCatalog`]**: indexes features by short and symbolic name, exposes the
//!   available platform set and lazily builds its [`FeatureListGraph`] on first use.
//! * **[`CatalogParser`]**: the seam between raw catalog bytes and a snapshot.
//!   [`JsonCatalogParser`] reads the published JSON catalog format.

mod catalog;
mod error;
mod graph;
pub mod parser;

pub use crate::catalog::FeatureCatalog;
pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::parser::{CatalogParser, JsonCatalogParser};
pub use fcompat_graph::FeatureListGraph;
