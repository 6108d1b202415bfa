use std::borrow::Cow;

/// Error types of catalog parsing and construction.
#[fcompat_derive::fcompat_error]
pub enum CatalogError {
    /// Malformed JSON payload.
    #[error("Catalog parse error{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Well-formed payload describing an unusable feature entry.
    #[error("Invalid catalog entry{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
