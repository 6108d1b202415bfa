//! Kernel utilities shared across the engine crates and applications.
//! Keep this crate lightweight; today it owns layered configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use fcompat_kernel::config::load_compat_config;
//!
//! let cfg = load_compat_config(Some("fcompat.toml")).unwrap();
//! assert!(cfg.resolver.request_delay_seconds > 0);
//! ```
pub mod config;

pub use fcompat_domain as domain;
