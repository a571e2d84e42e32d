// likeness-core - Comparison strategies
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Comparison strategies.
//!
//! Each comparer is a stateless strategy exposing `equals(a, b)`. The leaf
//! comparers (value, type, sequence, structural, predicate) each implement
//! one rule; [`DefaultComparer`] composes them behind a fixed-priority
//! category dispatch and injects itself as the element/field comparer of the
//! recursive ones.
//!
//! Only the orchestrator's unsupported-category arm ever returns `Err`; the
//! leaf comparers are infallible in practice.

pub mod default;
pub mod equatable;
pub mod predicate;
pub mod sequence;
pub mod structural;
pub mod types;
pub mod value;

pub use default::{CompareOptions, DefaultComparer};
pub use equatable::is_equatable;
pub use predicate::PredicateComparer;
pub use sequence::SequenceComparer;
pub use structural::StructuralComparer;
pub use types::TypeComparer;
pub use value::ValueComparer;

use crate::error::Result;
use likeness_value::Value;

/// A stateless strategy that decides whether two values are equal.
///
/// Implementations must be pure (lazy-sequence realization is the one
/// documented exception) and deterministic for fixed inputs.
pub trait Comparer {
    /// Decide whether `a` and `b` are equal under this strategy.
    fn equals(&self, a: &Value, b: &Value) -> Result<bool>;
}

/// Compare two values with a fresh default orchestrator: type checking on,
/// full structural mode.
pub fn equal_to(a: &Value, b: &Value) -> Result<bool> {
    DefaultComparer::new().equals(a, b)
}
