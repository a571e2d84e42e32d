// likeness-core - Predicate comparer
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Adapter turning an arbitrary predicate into a comparer.

use likeness_value::Value;

use crate::compare::Comparer;
use crate::error::Result;

/// Comparer that tests equality with a caller-supplied predicate.
pub struct PredicateComparer<F> {
    predicate: F,
}

impl<F> PredicateComparer<F>
where
    F: Fn(&Value, &Value) -> bool,
{
    /// Create a comparer from a predicate.
    pub fn new(predicate: F) -> Self {
        PredicateComparer { predicate }
    }
}

impl<F> Comparer for PredicateComparer<F>
where
    F: Fn(&Value, &Value) -> bool,
{
    fn equals(&self, a: &Value, b: &Value) -> Result<bool> {
        Ok((self.predicate)(a, b))
    }
}
