// likeness-core - Same-value identity comparer
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Same-value identity semantics.
//!
//! NaN equals itself; positive and negative zero are distinct; everything
//! else compares by primitive value or reference identity. This is not
//! ordinary numeric equality.

use likeness_value::Value;

use crate::compare::Comparer;
use crate::error::Result;

/// Comparer applying same-value semantics to primitives and opaque
/// references. Never errs, no side effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueComparer;

impl ValueComparer {
    /// Create a value comparer.
    pub fn new() -> Self {
        ValueComparer
    }
}

impl Comparer for ValueComparer {
    fn equals(&self, a: &Value, b: &Value) -> Result<bool> {
        Ok(same_value(a, b))
    }
}

/// Same-value equality over the whole value model.
///
/// Reference-shaped payloads (callables, objects, sequences, wrappers,
/// opaques) are identical only when they share the same allocation; two
/// structurally equal composites are never value-identical.
pub(crate) fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Undefined, Value::Undefined) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        // Any NaN equals any NaN; otherwise bit comparison keeps +0 and -0
        // apart while ordinary floats compare by value.
        (Value::Float(x), Value::Float(y)) => {
            (x.is_nan() && y.is_nan()) || x.to_bits() == y.to_bits()
        }
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Fn(x), Value::Fn(y)) => x.ptr_eq(y),
        (Value::Seq(x), Value::Seq(y)) => x.ptr_eq(y),
        (Value::LazySeq(x), Value::LazySeq(y)) => x.ptr_eq(y),
        (Value::Object(x), Value::Object(y)) => std::rc::Rc::ptr_eq(x, y),
        (Value::Date(x), Value::Date(y)) => std::rc::Rc::ptr_eq(x, y),
        (Value::Regex(x), Value::Regex(y)) => x.ptr_eq(y),
        (Value::Url(x), Value::Url(y)) => std::rc::Rc::ptr_eq(x, y),
        (Value::Error(x), Value::Error(y)) => std::rc::Rc::ptr_eq(x, y),
        (Value::Buffer(x), Value::Buffer(y)) => std::rc::Rc::ptr_eq(x, y),
        (Value::Weak(x), Value::Weak(y)) => x.ptr_eq(y),
        _ => false,
    }
}
