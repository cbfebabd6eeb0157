//! The semantic version value type.
//!
//! Textual form: `[v]<major>.<minor>.<patch>[-<label>]`. The first hyphen in
//! the patch segment separates the patch number from the label; the label
//! may contain further hyphens (`v1.22.6-eks-7d68063`).
//!
//! Ordering compares `(major, minor, patch)` numerically and then the label
//! byte-wise. This is not semver pre-release precedence: `rc2` sorts after
//! `rc10`. The `v` prefix is cosmetic and never takes part in equality,
//! ordering or hashing.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::bump::Bump;
use crate::error::{Component, Error, Result};

/// A parsed semantic version.
#[derive(Debug, Clone, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Free-form suffix without its leading hyphen; empty means no label.
    pub label: String,
    has_prefix: bool,
}

impl Version {
    /// Create a version from its components.
    ///
    /// A single leading `-` is stripped from `label` and the rest is
    /// lowercased. The result carries no `v` prefix.
    pub fn new(major: u64, minor: u64, patch: u64, label: &str) -> Self {
        let label = label.strip_prefix('-').unwrap_or(label);
        Version {
            major,
            minor,
            patch,
            label: label.to_lowercase(),
            has_prefix: false,
        }
    }

    /// Set whether the formatted version starts with `v`.
    pub fn with_prefix(mut self, has_prefix: bool) -> Self {
        self.has_prefix = has_prefix;
        self
    }

    /// Whether the version was written with a leading `v`.
    pub fn has_prefix(&self) -> bool {
        self.has_prefix
    }

    /// Parse a version string.
    ///
    /// Surrounding whitespace is ignored. The label is kept verbatim.
    pub fn parse(text: &str) -> Result<Self> {
        let parsed = parse_components(text);
        if let Err(err) = &parsed {
            tracing::trace!(
                target: "vergo.parse",
                input = text,
                kind = ?err.kind(),
                "Rejected version string"
            );
        }
        parsed
    }

    /// Return a copy of this version with `bump` applied.
    ///
    /// [`Bump::Invalid`] yields an unchanged copy. On error `self` is left as
    /// it was.
    pub fn peek_bump(&self, bump: Bump) -> Result<Version> {
        let mut next = self.clone();
        match bump {
            Bump::Invalid => {}
            Bump::Patch => {
                next.patch = increment(self.patch, Component::Patch)?;
                next.label.clear();
            }
            Bump::Minor => {
                next.minor = increment(self.minor, Component::Minor)?;
                next.patch = 0;
                next.label.clear();
            }
            Bump::Major => {
                next.major = increment(self.major, Component::Major)?;
                next.minor = 0;
                next.patch = 0;
                next.label.clear();
            }
            Bump::ReleaseCandidate => {
                next.label = next_release_candidate(&self.label)?;
            }
        }
        Ok(next)
    }

    /// Apply `bump` in place. On error the version is not modified.
    pub fn bump(&mut self, bump: Bump) -> Result<()> {
        match self.peek_bump(bump) {
            Ok(next) => {
                tracing::debug!(
                    target: "vergo.bump",
                    from = %self,
                    to = %next,
                    bump = %bump,
                    "Bumped version"
                );
                *self = next;
                Ok(())
            }
            Err(err) => {
                tracing::debug!(
                    target: "vergo.bump",
                    version = %self,
                    bump = %bump,
                    error = %err,
                    "Bump rejected"
                );
                Err(err)
            }
        }
    }

    /// Consume this version and return it with `bump` applied.
    pub fn bumped(mut self, bump: Bump) -> Result<Version> {
        self.bump(bump)?;
        Ok(self)
    }

    /// Whether this version is newer than `other`.
    pub fn after(&self, other: &Version) -> bool {
        self > other
    }

    /// Whether this version is older than `other`.
    pub fn before(&self, other: &Version) -> bool {
        self < other
    }
}

fn parse_components(text: &str) -> Result<Version> {
    let text = text.trim();
    let (has_prefix, text) = match text.strip_prefix('v') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let segments: Vec<&str> = text.split('.').collect();
    let &[major, minor, patch] = segments.as_slice() else {
        return Err(Error::Malformed {
            segments: segments.len(),
        });
    };

    let major = major
        .parse::<u64>()
        .map_err(|source| Error::MalformedMajor { source })?;
    let minor = minor
        .parse::<u64>()
        .map_err(|source| Error::MalformedMinor { source })?;
    let (patch, label) = patch.split_once('-').unwrap_or((patch, ""));
    let patch = patch
        .parse::<u64>()
        .map_err(|source| Error::MalformedPatch { source })?;

    Ok(Version {
        major,
        minor,
        patch,
        label: label.to_string(),
        has_prefix,
    })
}

fn increment(value: u64, component: Component) -> Result<u64> {
    value.checked_add(1).ok_or(Error::Overflow { component })
}

/// `<anything>rc<N>` becomes `rc<N+1>`; text before `rc` is dropped.
fn next_release_candidate(label: &str) -> Result<String> {
    let malformed = || Error::MalformedLabel {
        label: label.to_string(),
    };
    let (_, number) = label.split_once("rc").ok_or_else(malformed)?;
    let number: u64 = number.parse().map_err(|_| malformed())?;
    let number = increment(number, Component::ReleaseCandidate)?;
    Ok(format!("rc{number}"))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_prefix {
            f.write_str("v")?;
        }
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.label.is_empty() {
            write!(f, "-{}", self.label)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.label == other.label
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.label.hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
