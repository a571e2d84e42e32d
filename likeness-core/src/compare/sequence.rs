// likeness-core - Ordered sequence comparer
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Ordered, element-wise sequence comparison.
//!
//! Not inherently recursive: recursion happens only because the injected
//! element comparer is typically the orchestrator.

use likeness_value::Value;

use crate::compare::Comparer;
use crate::error::Result;

/// Comparer for finite ordered sequences, parameterized by an injected
/// element comparer.
///
/// Both operands are materialized into indexed lists first (forcing a lazy,
/// single-pass source at most once), lengths are compared with an early
/// false, then elements pairwise by index. A non-sequence operand is
/// unequal to everything here.
pub struct SequenceComparer<'c> {
    element: &'c dyn Comparer,
}

impl<'c> SequenceComparer<'c> {
    /// Create a sequence comparer around an element comparer.
    pub fn new(element: &'c dyn Comparer) -> Self {
        SequenceComparer { element }
    }
}

impl Comparer for SequenceComparer<'_> {
    fn equals(&self, a: &Value, b: &Value) -> Result<bool> {
        let (Some(xs), Some(ys)) = (a.seq_items(), b.seq_items()) else {
            return Ok(false);
        };
        if xs.len() != ys.len() {
            return Ok(false);
        }
        for (x, y) in xs.iter().zip(ys.iter()) {
            if !self.element.equals(x, y)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
