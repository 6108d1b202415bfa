use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Runtime distribution a catalog is published for.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeKind {
    #[default]
    #[serde(alias = "openliberty")]
    Ol,
    #[serde(alias = "websphereliberty")]
    Wlp,
}

impl RuntimeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ol => "ol",
            Self::Wlp => "wlp",
        }
    }
}

impl fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ol" | "openliberty" => Ok(Self::Ol),
            "wlp" | "websphereliberty" => Ok(Self::Wlp),
            other => Err(format!("Unknown runtime kind '{other}'")),
        }
    }
}

/// Cache key of a catalog: runtime kind plus version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RuntimeIdentity {
    pub kind: RuntimeKind,
    pub version: String,
}

impl RuntimeIdentity {
    pub fn new(kind: RuntimeKind, version: impl Into<String>) -> Self {
        Self { kind, version: version.into().trim().to_owned() }
    }

    /// Beta versions never publish a remote catalog.
    #[must_use]
    pub fn is_beta(&self) -> bool {
        self.version.to_ascii_lowercase().ends_with("-beta")
    }
}

impl fmt::Display for RuntimeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beta_detection_ignores_case() {
        assert!(RuntimeIdentity::new(RuntimeKind::Ol, "24.0.0.10-beta").is_beta());
        assert!(RuntimeIdentity::new(RuntimeKind::Ol, "24.0.0.10-BETA").is_beta());
        assert!(!RuntimeIdentity::new(RuntimeKind::Wlp, "24.0.0.9").is_beta());
    }

    #[test]
    fn kind_parses_aliases() {
        assert_eq!("OpenLiberty".parse::<RuntimeKind>(), Ok(RuntimeKind::Ol));
        assert_eq!("wlp".parse::<RuntimeKind>(), Ok(RuntimeKind::Wlp));
        assert!("tomcat".parse::<RuntimeKind>().is_err());
        let identity = RuntimeIdentity::new(RuntimeKind::Wlp, " 24.0.0.9 ");
        assert_eq!(identity.to_string(), "wlp@24.0.0.9");
    }
}
