// likeness-core - Error types for the likeness equality engine
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for equality comparison.
//!
//! The engine has exactly one failure mode: both operands fall into a
//! category it explicitly refuses to compare. Every other input combination
//! resolves to a boolean.

use std::fmt;

use crate::classify::UnsupportedKind;

/// Result type for equality comparison.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Both operands belong to an explicitly unhandled category. Signals
    /// "this comparison is not trustworthy", not a soft false.
    Unsupported { kind: UnsupportedKind },
}

impl Error {
    /// Create an unsupported-category error.
    pub fn unsupported(kind: UnsupportedKind) -> Self {
        Error::Unsupported { kind }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unsupported { kind } => {
                write!(
                    f,
                    "unsupported comparison: two {} values cannot be compared for equality",
                    kind.name()
                )
            }
        }
    }
}

impl std::error::Error for Error {}
