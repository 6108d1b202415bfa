//! # Domain Models
//!
//! Pure data types shared by every engine crate: features, platforms, runtime identities,
//! caller declarations, findings and configuration.
//! Keep it lean: no I/O, networking, or heavy logic. Only data and simple helpers.

pub mod config;
pub mod declarations;
pub mod feature;
pub mod finding;
pub mod identity;
pub mod names;
pub mod platform;

pub use declarations::Declarations;
pub use feature::{Feature, ToleratedRequirement, Visibility};
pub use finding::{Finding, FindingKind, Severity};
pub use identity::{RuntimeIdentity, RuntimeKind};
pub use platform::PlatformFamily;
