//! Parse, compare and bump semantic versions.
//!
//! This crate provides:
//! - [`Version`]: a `[v]major.minor.patch[-label]` value type with parsing,
//!   formatting and ordering
//! - [`Bump`]: the increment operations and their textual names
//! - A unified [`Error`] type for malformed input and rejected bumps
//!
//! ```
//! use vergo::{Bump, Version};
//!
//! let mut v: Version = "v1.4.2-rc1".parse()?;
//! v.bump(Bump::ReleaseCandidate)?;
//! assert_eq!(v.to_string(), "v1.4.2-rc2");
//!
//! let next = v.peek_bump(Bump::Minor)?;
//! assert_eq!(next.to_string(), "v1.5.0");
//! assert!(next.after(&v));
//! # Ok::<(), vergo::Error>(())
//! ```

pub mod bump;
pub mod error;
mod serde_impls;
pub mod version;

pub use bump::Bump;
pub use error::{Component, Error, ErrorKind, Result};
pub use version::Version;
