//! Facade crate for the compatibility engine.
//! Re-exports the engine crates and composes them into an [`Engine`].
//! Keep this crate thin: it should compose other crates, not implement checks.
//!
//! ## Usage
//! ```rust
//! use fcompat::{Engine, domain::{Declarations, RuntimeIdentity, RuntimeKind}};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let engine = Engine::from_config(&Default::default());
//! let identity = RuntimeIdentity::new(RuntimeKind::Ol, "25.0.0.3");
//! let declarations = Declarations::new().with_features(["servlet-6.0", "restfulWS-3.0"]);
//!
//! let report = engine.check(&identity, &declarations).await;
//! assert!(report.has_errors());
//! # }
//! ```

mod engine;

pub use crate::engine::{Engine, Report};
pub use fcompat_catalog as catalog;
pub use fcompat_domain as domain;
pub use fcompat_graph as graph;
pub use fcompat_kernel as kernel;
pub use fcompat_resolver as resolver;
pub use fcompat_validator as validator;
