//! Bump kinds and their textual names.
//!
//! The names (`invalid`, `patch`, `minor`, `major`, `rc`) are stable: they are
//! used as CLI flag values and in configuration files.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A modify operation on a [`Version`](crate::Version).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Bump {
    /// No-op.
    #[default]
    Invalid,
    /// Increment patch, clear label.
    Patch,
    /// Increment minor, reset patch, clear label.
    Minor,
    /// Increment major, reset minor and patch, clear label.
    Major,
    /// Increment the number of an `rc<N>` label.
    #[serde(rename = "rc")]
    #[value(name = "rc")]
    ReleaseCandidate,
}

impl Bump {
    /// All bump kinds, in ascending order.
    pub const ALL: [Bump; 5] = [
        Bump::Invalid,
        Bump::Patch,
        Bump::Minor,
        Bump::Major,
        Bump::ReleaseCandidate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Bump::Invalid => "invalid",
            Bump::Patch => "patch",
            Bump::Minor => "minor",
            Bump::Major => "major",
            Bump::ReleaseCandidate => "rc",
        }
    }

    /// Parse a bump kind from its textual name. Matching is exact.
    pub fn parse(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|bump| bump.as_str() == s)
            .ok_or_else(|| Error::UnknownBump(s.to_string()))
    }
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bump {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Bump::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for bump in Bump::ALL {
            assert_eq!(Bump::parse(bump.as_str()), Ok(bump));
            assert_eq!(bump.to_string().parse::<Bump>(), Ok(bump));
        }
    }

    #[test]
    fn test_release_candidate_is_rc() {
        assert_eq!(Bump::ReleaseCandidate.as_str(), "rc");
        assert_eq!("rc".parse::<Bump>(), Ok(Bump::ReleaseCandidate));
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert_eq!(
            Bump::parse("Patch"),
            Err(Error::UnknownBump("Patch".to_string()))
        );
        assert_eq!(Bump::parse(""), Err(Error::UnknownBump(String::new())));
    }

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(Bump::default(), Bump::Invalid);
    }

    #[test]
    fn test_value_enum_names_match() {
        for bump in Bump::ALL {
            let value = bump
                .to_possible_value()
                .expect("every bump kind is selectable");
            assert_eq!(value.get_name(), bump.as_str());
        }
    }
}
