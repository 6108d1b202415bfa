use crate::names;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Feature visibility as published in the catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
    Install,
}

/// A required feature that accepts several alternate versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToleratedRequirement {
    /// Required feature, including its preferred version.
    pub feature: String,
    /// Alternate version suffixes that satisfy the requirement.
    #[serde(default)]
    pub tolerates: Vec<String>,
}

impl ToleratedRequirement {
    pub fn new<I, S>(feature: impl Into<String>, tolerates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { feature: feature.into(), tolerates: tolerates.into_iter().map(Into::into).collect() }
    }
}

/// One catalog feature.
///
/// Features sharing a base name but differing in version are alternatives; they are
/// stored as independent values and never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Short name (e.g. `servlet-6.0`), the case-insensitive key.
    pub name: String,
    /// Fully qualified provide-feature name, when published.
    pub symbolic_name: Option<String>,
    pub version: Option<String>,
    pub visibility: Visibility,
    pub description: Option<String>,
    /// Platform memberships, lower-cased.
    pub platforms: BTreeSet<String>,
    pub requires: Vec<String>,
    pub requires_with_tolerates: Vec<ToleratedRequirement>,
    /// Configuration elements this feature enables directly.
    pub config_elements: Vec<String>,
}

impl Feature {
    /// Creates a feature; the version is derived from the name suffix.
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        let name = name.into().trim().to_owned();
        let version = names::version_of(&name).map(str::to_owned);
        Self {
            name,
            symbolic_name: None,
            version,
            visibility,
            description: None,
            platforms: BTreeSet::new(),
            requires: Vec::new(),
            requires_with_tolerates: Vec::new(),
            config_elements: Vec::new(),
        }
    }

    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public)
    }

    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Private)
    }

    #[must_use]
    pub fn with_symbolic_name(mut self, symbolic_name: impl Into<String>) -> Self {
        self.symbolic_name = Some(symbolic_name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.platforms.extend(platforms.into_iter().map(|p| names::normalize(p.as_ref())));
        self
    }

    #[must_use]
    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires.extend(requires.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_tolerates(mut self, requirement: ToleratedRequirement) -> Self {
        self.requires_with_tolerates.push(requirement);
        self
    }

    #[must_use]
    pub fn with_config_elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config_elements.extend(elements.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    #[must_use]
    pub const fn is_versionless(&self) -> bool {
        self.version.is_none()
    }

    /// Name without its version suffix.
    #[must_use]
    pub fn base_name(&self) -> &str {
        names::strip_version(&self.name)
    }

    /// Returns `true` if `name` matches the short or symbolic name, ignoring case.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.symbolic_name.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_derived_from_name() {
        let versioned = Feature::public("jaxrs-2.1");
        assert_eq!(versioned.version.as_deref(), Some("2.1"));
        assert_eq!(versioned.base_name(), "jaxrs");
        assert!(!versioned.is_versionless());

        let versionless = Feature::public("servlet");
        assert!(versionless.is_versionless());
        assert_eq!(versionless.base_name(), "servlet");
    }

    #[test]
    fn platforms_are_lower_cased() {
        let feature = Feature::private("eeCompatible-10.0").with_platforms(["JakartaEE-10.0"]);
        assert!(feature.platforms.contains("jakartaee-10.0"));
        assert!(!feature.is_public());
    }

    #[test]
    fn matches_short_and_symbolic_names() {
        let feature = Feature::public("servlet-6.0")
            .with_symbolic_name("com.ibm.websphere.appserver.servlet-6.0");
        assert!(feature.matches("SERVLET-6.0"));
        assert!(feature.matches("com.ibm.websphere.appserver.servlet-6.0"));
        assert!(!feature.matches("servlet-5.0"));
    }
}
