//! Validation findings.
//!
//! Findings are plain data: a kind, the offending feature/platform/element and the
//! other identifiers involved. Rendering them against a document is the caller's job;
//! [`Finding::message`] only offers a default English wording.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Every finding the validator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FindingKind {
    FeatureNotFound,
    FeatureAlreadyIncluded,
    FeatureVersionConflict,
    FeatureRenamed,
    PlatformNotFound,
    PlatformAlreadyIncluded,
    PlatformVersionConflict,
    PlatformConflict,
    NoPlatformOrFeatureToResolve,
    NoCommonPlatform,
    AmbiguousCommonPlatform,
    /// The platform inferred from versioned features is not supported.
    NoSupportedPlatform,
    /// None of the explicitly configured platforms is supported.
    NoConfiguredPlatform,
    IncompatibleFeatures,
    MissingConfiguredFeature,
}

impl FindingKind {
    /// Stable code callers can attach to rendered diagnostics.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FeatureNotFound => "incorrect_feature",
            Self::FeatureAlreadyIncluded => "duplicate_feature",
            Self::FeatureVersionConflict => "feature_version_conflict",
            Self::FeatureRenamed => "feature_name_changed",
            Self::PlatformNotFound => "incorrect_platform",
            Self::PlatformAlreadyIncluded => "duplicate_platform",
            Self::PlatformVersionConflict => "platform_version_conflict",
            Self::PlatformConflict => "conflicting_platforms",
            Self::NoPlatformOrFeatureToResolve => "versionless_no_platform_or_feature",
            Self::NoCommonPlatform => "versionless_no_common_platform",
            Self::AmbiguousCommonPlatform => "versionless_ambiguous_platform",
            Self::NoSupportedPlatform => "versionless_unsupported_platform",
            Self::NoConfiguredPlatform => "versionless_no_configured_platform",
            Self::IncompatibleFeatures => "incompatible_features",
            Self::MissingConfiguredFeature => "missing_configured_feature",
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::MissingConfiguredFeature => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    /// The feature, platform or config element the finding is attached to.
    pub subject: String,
    /// Other identifiers involved, sorted and de-duplicated.
    pub related: Vec<String>,
}

impl Finding {
    pub fn new(kind: FindingKind, subject: impl Into<String>) -> Self {
        Self { kind, subject: subject.into(), related: Vec::new() }
    }

    /// Attaches related identifiers; the list is sorted so output stays stable.
    #[must_use]
    pub fn with_related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related.extend(related.into_iter().map(Into::into));
        self.related.sort();
        self.related.dedup();
        self
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Default English message.
    #[must_use]
    pub fn message(&self) -> String {
        let subject = &self.subject;
        let related = self.related.join(", ");
        match self.kind {
            FindingKind::FeatureNotFound => format!("The feature \"{subject}\" does not exist."),
            FindingKind::FeatureAlreadyIncluded => format!("{subject} is already included."),
            FindingKind::FeatureVersionConflict => format!(
                "More than one version of feature {subject} is included. Only one version of a feature may be specified."
            ),
            FindingKind::FeatureRenamed => format!(
                "The {subject} feature cannot be configured with the {related} feature because they are two different versions of the same feature."
            ),
            FindingKind::PlatformNotFound => format!("The platform \"{subject}\" does not exist."),
            FindingKind::PlatformAlreadyIncluded => format!("{subject} is already included."),
            FindingKind::PlatformVersionConflict => format!(
                "More than one version of platform {subject} is included. Only one version of a platform may be specified."
            ),
            FindingKind::PlatformConflict => {
                format!("The following configured platform versions are in conflict [{related}].")
            },
            FindingKind::NoPlatformOrFeatureToResolve => format!(
                "The {subject} versionless feature cannot be resolved. Specify a platform or a feature with a version to enable resolution."
            ),
            FindingKind::NoCommonPlatform => format!(
                "The {subject} versionless feature cannot be resolved. The versioned features [{related}] do not have a platform in common."
            ),
            FindingKind::AmbiguousCommonPlatform => format!(
                "The {subject} versionless feature cannot be resolved since there is more than one common platform [{related}]. Specify a platform to enable resolution."
            ),
            FindingKind::NoSupportedPlatform => format!(
                "The {subject} versionless feature does not support the platform [{related}] inferred from the configured features."
            ),
            FindingKind::NoConfiguredPlatform => format!(
                "The {subject} versionless feature is not supported by the configured platforms [{related}]."
            ),
            FindingKind::IncompatibleFeatures => format!(
                "The {subject} feature does not share a common platform with [{related}]."
            ),
            FindingKind::MissingConfiguredFeature => {
                format!("The {subject} element requires one of the following features: [{related}].")
            },
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.code(), self.message())
    }
}
