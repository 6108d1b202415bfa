use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform families recognized by their name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlatformFamily {
    JavaEE,
    JakartaEE,
    MicroProfile,
}

impl PlatformFamily {
    pub const ALL: [Self; 3] = [Self::JavaEE, Self::JakartaEE, Self::MicroProfile];

    /// Prefix (including the trailing `-`) shared by every platform of the family.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::JavaEE => "javaee-",
            Self::JakartaEE => "jakartaee-",
            Self::MicroProfile => "microprofile-",
        }
    }

    /// Family of a lower-cased platform name, if it belongs to one.
    #[must_use]
    pub fn of(platform: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.contains(platform))
    }

    #[must_use]
    pub fn contains(self, platform: &str) -> bool {
        platform
            .get(..self.prefix().len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(self.prefix()))
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().trim_end_matches('-'))
    }
}
