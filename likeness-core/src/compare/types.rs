// likeness-core - Runtime type guard comparer
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Same-runtime-type guard.
//!
//! Used before structural comparison to reject pairs of unrelated types:
//! two same-shaped but differently-typed composites are never structurally
//! equal while this guard is enabled.

use likeness_value::Value;

use crate::compare::Comparer;
use crate::error::Result;

/// Comparer that tests whether two values belong to the same runtime
/// category. Never errs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeComparer;

impl TypeComparer {
    /// Create a type comparer.
    pub fn new() -> Self {
        TypeComparer
    }
}

impl Comparer for TypeComparer {
    fn equals(&self, a: &Value, b: &Value) -> Result<bool> {
        Ok(same_runtime_type(a, b))
    }
}

/// Same runtime type: null-ness first, then the category tag, then for
/// composites the exact constructing class.
pub(crate) fn same_runtime_type(a: &Value, b: &Value) -> bool {
    // A nullish operand only matches the identical marker.
    match (a, b) {
        (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => return true,
        (Value::Null, _) | (_, Value::Null) | (Value::Undefined, _) | (_, Value::Undefined) => {
            return false
        }
        _ => {}
    }
    if a.type_name() != b.type_name() {
        return false;
    }
    // Composites must come from the same constructing class; a plain object
    // only matches a plain object.
    match (a, b) {
        (Value::Object(x), Value::Object(y)) => x.class() == y.class(),
        _ => true,
    }
}
