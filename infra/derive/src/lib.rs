#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the compatibility engine workspace.
//!
//! Only one macro lives here today: [`macro@fcompat_error`], the attribute every crate uses
//! to declare its error enum. Consumers also need `thiserror` in their own dependencies,
//! because the expansion derives `::thiserror::Error`.
//!
//! ```toml
//! [dependencies]
//! fcompat-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` whose error converts into this enum.
/// * **Conversions**: Implements `From<T>` for variants holding a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
/// * **Introspection**: `variant_name()` returns the variant identifier as a static
///   string (used as a structured logging field) and `context_str()` returns the
///   attached context, if any.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with **named-field** variants.
/// 2. Variants that support context carry `context: Option<Cow<'static, str>>`.
/// 3. Variants with a source field must also carry a context field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[fcompat_derive::fcompat_error]
/// pub enum CatalogError {
///     #[error("Catalog parse error{}: {source}", format_context(.context))]
///     Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal catalog error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(bytes: &[u8]) -> Result<Vec<RawFeature>, CatalogError> {
///     serde_json::from_slice(bytes).context("Decoding feature list")
/// }
/// ```
#[proc_macro_attribute]
pub fn fcompat_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
