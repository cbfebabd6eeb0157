//! Error types for version parsing and bumping.

use std::num::ParseIntError;

use thiserror::Error;

/// Result type alias for vergo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Version component named in overflow errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
    ReleaseCandidate,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Major => write!(f, "major"),
            Component::Minor => write!(f, "minor"),
            Component::Patch => write!(f, "patch"),
            Component::ReleaseCandidate => write!(f, "rc"),
        }
    }
}

/// Unified error type for vergo.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Parse errors
    #[error("malformed semver: expected 3 dot-separated components, found {segments}")]
    Malformed { segments: usize },

    #[error("malformed semver: major: {source}")]
    MalformedMajor {
        #[source]
        source: ParseIntError,
    },

    #[error("malformed semver: minor: {source}")]
    MalformedMinor {
        #[source]
        source: ParseIntError,
    },

    #[error("malformed semver: patch: {source}")]
    MalformedPatch {
        #[source]
        source: ParseIntError,
    },

    // Bump errors
    #[error("malformed semver: only labels in the form of rc<NUMBER> can be bumped, got {label:?}")]
    MalformedLabel { label: String },

    #[error("{component} overflows when bumped")]
    Overflow { component: Component },

    #[error("unable to parse {0:?} as Bump")]
    UnknownBump(String),
}

/// Copyable discriminant of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Malformed,
    MalformedMajor,
    MalformedMinor,
    MalformedPatch,
    MalformedLabel,
    Overflow,
    UnknownBump,
}

impl Error {
    /// Returns the kind tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Malformed { .. } => ErrorKind::Malformed,
            Error::MalformedMajor { .. } => ErrorKind::MalformedMajor,
            Error::MalformedMinor { .. } => ErrorKind::MalformedMinor,
            Error::MalformedPatch { .. } => ErrorKind::MalformedPatch,
            Error::MalformedLabel { .. } => ErrorKind::MalformedLabel,
            Error::Overflow { .. } => ErrorKind::Overflow,
            Error::UnknownBump(_) => ErrorKind::UnknownBump,
        }
    }

    /// Whether this error belongs to the general malformed-version category.
    ///
    /// The component-specific parse errors and the label error all count,
    /// so callers can check the broad category without listing variants.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Malformed
                | ErrorKind::MalformedMajor
                | ErrorKind::MalformedMinor
                | ErrorKind::MalformedPatch
                | ErrorKind::MalformedLabel
        )
    }
}
