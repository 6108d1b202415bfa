//! Name helpers shared by features and platforms.
//!
//! Feature and platform identifiers follow the `<base>-<version>` convention, e.g.
//! `servlet-6.0` or `jakartaee-10.0`. Everything here is case-preserving; callers
//! lower-case before comparing.

/// Vendor prefix for user features. Such features are never validated.
pub const USER_FEATURE_PREFIX: &str = "usr:";

/// Namespace of internal private features backing versionless public features.
pub const VERSIONLESS_NAMESPACE: &str = "io.openliberty.internal.versionless.";

/// Returns `true` when `name` carries a `-<version>` suffix.
#[must_use]
pub fn is_versioned(name: &str) -> bool {
    name.contains('-')
}

/// Returns `true` when `name` has no version suffix.
#[must_use]
pub fn is_versionless(name: &str) -> bool {
    !is_versioned(name)
}

/// Strips the trailing `-<version>` from `name`, if any.
///
/// ```rust
/// use fcompat_domain::names::strip_version;
///
/// assert_eq!(strip_version("jaxrs-2.1"), "jaxrs");
/// assert_eq!(strip_version("jakartaee-10.0"), "jakartaee");
/// assert_eq!(strip_version("servlet"), "servlet");
/// ```
#[must_use]
pub fn strip_version(name: &str) -> &str {
    name.rsplit_once('-').map_or(name, |(base, _)| base)
}

/// Returns the version suffix of `name` (the text after the last `-`).
#[must_use]
pub fn version_of(name: &str) -> Option<&str> {
    name.rsplit_once('-').map(|(_, version)| version)
}

/// Returns `true` for `usr:`-prefixed (user/vendor) features.
#[must_use]
pub fn is_user_feature(name: &str) -> bool {
    name.get(..USER_FEATURE_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(USER_FEATURE_PREFIX))
}

/// Strips the internal versionless namespace from a required feature name.
#[must_use]
pub fn strip_versionless_namespace<'a>(name: &'a str, namespace: &str) -> &'a str {
    match (name.get(..namespace.len()), name.get(namespace.len()..)) {
        (Some(prefix), Some(rest))
            if !rest.is_empty() && prefix.eq_ignore_ascii_case(namespace) =>
        {
            rest
        },
        _ => name,
    }
}

/// Lower-cases an identifier for case-insensitive lookups.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_helpers() {
        assert!(is_versioned("mpHealth-4.0"));
        assert!(is_versionless("mpHealth"));
        assert_eq!(version_of("mpHealth-4.0"), Some("4.0"));
        assert_eq!(version_of("mpHealth"), None);
    }

    #[test]
    fn user_prefix_is_case_insensitive() {
        assert!(is_user_feature("usr:myFeature-1.0"));
        assert!(is_user_feature("USR:myFeature"));
        assert!(!is_user_feature("us"));
        assert!(!is_user_feature("servlet-4.0"));
    }

    #[test]
    fn versionless_namespace_is_removed() {
        assert_eq!(
            strip_versionless_namespace(
                "io.openliberty.internal.versionless.servlet-6.0",
                VERSIONLESS_NAMESPACE
            ),
            "servlet-6.0"
        );
        let plain = strip_versionless_namespace("servlet-6.0", VERSIONLESS_NAMESPACE);
        assert_eq!(plain, "servlet-6.0");
    }
}
