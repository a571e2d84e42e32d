// likeness-core - Structural field comparer
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Field-by-field comparison of composite values, full or partial.
//!
//! Only own, non-callable fields participate: a function-valued field is a
//! method and is excluded entirely, on both sides. String and symbol keys
//! alike are compared; enumeration order never matters.
//!
//! There is no cycle detection: a structurally self-referential value causes
//! unbounded recursion.

use likeness_value::{OrdMap, PropKey, Value};

use crate::compare::Comparer;
use crate::error::Result;

/// Comparer for keyed composites, parameterized by an injected field
/// comparer and a mode flag.
///
/// In full mode the comparable-key sets must have equal cardinality and
/// every field must match. In partial mode the first operand is the subset:
/// each of its fields must exist on the other operand with an equal value,
/// extra fields on the other operand are ignored, and a field missing on the
/// other operand is unequal. The subset role is fixed by argument position.
///
/// A field present with the undefined marker is not equivalent to the field
/// being absent; both operands must agree on presence.
pub struct StructuralComparer<'c> {
    field: &'c dyn Comparer,
    partial: bool,
}

impl<'c> StructuralComparer<'c> {
    /// Create a structural comparer around a field comparer.
    pub fn new(field: &'c dyn Comparer, partial: bool) -> Self {
        StructuralComparer { field, partial }
    }
}

impl Comparer for StructuralComparer<'_> {
    fn equals(&self, a: &Value, b: &Value) -> Result<bool> {
        let a_fields = comparable_fields(a);
        let b_fields = comparable_fields(b);
        if !self.partial && a_fields.len() != b_fields.len() {
            return Ok(false);
        }
        for (key, a_value) in a_fields.iter() {
            let Some(b_value) = b_fields.get(key) else {
                return Ok(false);
            };
            if !self.field.equals(a_value, b_value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// The own, non-callable data fields of a value. A non-composite operand
/// contributes an empty field set.
fn comparable_fields(value: &Value) -> OrdMap<PropKey, Value> {
    let Some(obj) = value.as_object() else {
        return OrdMap::new();
    };
    obj.fields()
        .iter()
        .filter(|(_, v)| !matches!(v, Value::Fn(_)))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ValueComparer;
    use likeness_value::{NativeFn, Symbol};

    fn obj(pairs: impl IntoIterator<Item = (&'static str, Value)>) -> Value {
        Value::object(pairs.into_iter().map(|(k, v)| (PropKey::str(k), v)))
    }

    #[test]
    fn full_mode_requires_matching_cardinality() {
        let full = StructuralComparer::new(&ValueComparer, false);
        let a = obj([("a", Value::int(1)), ("b", Value::int(2))]);
        let b = obj([("a", Value::int(1))]);
        assert!(!full.equals(&a, &b).unwrap());
        assert!(!full.equals(&b, &a).unwrap());
    }

    #[test]
    fn partial_mode_is_positional() {
        let partial = StructuralComparer::new(&ValueComparer, true);
        let subset = obj([("a", Value::int(1))]);
        let other = obj([("a", Value::int(1)), ("b", Value::int(2))]);
        assert!(partial.equals(&subset, &other).unwrap());
        // Roles are fixed by argument position: the wider value as subset
        // has a field the other side is missing.
        assert!(!partial.equals(&other, &subset).unwrap());
    }

    #[test]
    fn undefined_valued_field_is_not_an_absent_field() {
        let full = StructuralComparer::new(&ValueComparer, false);
        let present = obj([("a", Value::undefined())]);
        let absent = obj([]);
        assert!(!full.equals(&present, &absent).unwrap());
        assert!(full.equals(&present, &present.clone()).unwrap());
    }

    #[test]
    fn callable_fields_are_excluded_on_both_sides() {
        let full = StructuralComparer::new(&ValueComparer, false);
        let with_method = Value::object([
            (PropKey::str("a"), Value::int(1)),
            (
                PropKey::str("speak"),
                Value::function(NativeFn::new("speak", |_| Value::null())),
            ),
        ]);
        let without = obj([("a", Value::int(1))]);
        assert!(full.equals(&with_method, &without).unwrap());
        assert!(full.equals(&without, &with_method).unwrap());
    }

    #[test]
    fn symbol_keys_participate() {
        let full = StructuralComparer::new(&ValueComparer, false);
        let key = Symbol::new("hidden");
        let a = Value::object([(PropKey::sym(key.clone()), Value::int(1))]);
        let b = Value::object([(PropKey::sym(key), Value::int(1))]);
        let c = Value::object([(PropKey::sym(Symbol::new("hidden")), Value::int(1))]);
        assert!(full.equals(&a, &b).unwrap());
        // A distinct symbol with the same description is a different key.
        assert!(!full.equals(&a, &c).unwrap());
    }
}
