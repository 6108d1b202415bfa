use std::borrow::Cow;

/// Error types of catalog retrieval. The resolver recovers from all of them by falling
/// back to the next source.
#[fcompat_derive::fcompat_error]
pub enum ResolverError {
    /// Reading a local catalog file failed.
    #[error("Catalog IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The remote source is unreachable or answered without a catalog.
    #[error("Remote catalog unavailable{}: {message}", format_context(.context))]
    Remote { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Retrieved bytes are not a usable catalog.
    #[error("Catalog rejected{}: {source}", format_context(.context))]
    Catalog { source: fcompat_catalog::CatalogError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal resolver error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
