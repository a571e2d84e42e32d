// likeness-core - Runtime category classification
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Runtime category classification.
//!
//! [`classify`] maps every value into exactly one [`Category`]. It is the
//! single place where category rules live; the orchestrator consumes the
//! result in one `match`, which keeps the dispatch priority auditable and
//! the classification independently testable.

use likeness_value::{Value, WeakKind};

/// A composite category the engine explicitly refuses to compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnsupportedKind {
    /// Generic error objects
    ErrorObject,
    /// Byte buffers
    Buffer,
    /// Weak-keyed maps
    WeakMap,
    /// Weak-keyed sets
    WeakSet,
}

impl UnsupportedKind {
    /// Human-readable category name.
    pub fn name(&self) -> &'static str {
        match self {
            UnsupportedKind::ErrorObject => "error-object",
            UnsupportedKind::Buffer => "buffer",
            UnsupportedKind::WeakMap => "weak-map",
            UnsupportedKind::WeakSet => "weak-set",
        }
    }
}

/// The disjoint runtime categories the engine dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// The null and undefined markers (mutually distinct)
    Nullish,
    /// Atomic values: booleans, numbers, big integers, strings, symbols
    Primitive,
    /// Function values of any flavour
    Callable,
    /// A composite that declares its own equality capability
    Equatable,
    /// Finite ordered iterable source of values
    Sequence,
    /// Keyed composite data value
    Structural,
    /// Date/time instant wrapper
    WrapperDate,
    /// Pattern-matcher wrapper
    WrapperRegex,
    /// Resource-locator wrapper
    WrapperUrl,
    /// Explicitly unhandled composite category
    Unsupported(UnsupportedKind),
}

/// Classify a value into exactly one category.
///
/// A string is a primitive, never a sequence. An object is [`Category::Equatable`]
/// iff it exposes a callable under the reserved marker key, otherwise
/// [`Category::Structural`].
pub fn classify(value: &Value) -> Category {
    match value {
        Value::Null | Value::Undefined => Category::Nullish,
        Value::Bool(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::BigInt(_)
        | Value::String(_)
        | Value::Symbol(_) => Category::Primitive,
        Value::Fn(_) => Category::Callable,
        Value::Seq(_) | Value::LazySeq(_) => Category::Sequence,
        Value::Object(obj) => {
            if obj.equatable_method().is_some() {
                Category::Equatable
            } else {
                Category::Structural
            }
        }
        Value::Date(_) => Category::WrapperDate,
        Value::Regex(_) => Category::WrapperRegex,
        Value::Url(_) => Category::WrapperUrl,
        Value::Error(_) => Category::Unsupported(UnsupportedKind::ErrorObject),
        Value::Buffer(_) => Category::Unsupported(UnsupportedKind::Buffer),
        Value::Weak(w) => match w.kind() {
            WeakKind::Map => Category::Unsupported(UnsupportedKind::WeakMap),
            WeakKind::Set => Category::Unsupported(UnsupportedKind::WeakSet),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use likeness_value::{NativeFn, PropKey};

    #[test]
    fn nullish_markers_classify_together() {
        assert_eq!(classify(&Value::null()), Category::Nullish);
        assert_eq!(classify(&Value::undefined()), Category::Nullish);
    }

    #[test]
    fn strings_are_primitive_not_sequence() {
        assert_eq!(classify(&Value::string("abc")), Category::Primitive);
    }

    #[test]
    fn all_primitive_shapes() {
        assert_eq!(classify(&Value::bool(true)), Category::Primitive);
        assert_eq!(classify(&Value::int(1)), Category::Primitive);
        assert_eq!(classify(&Value::float(1.5)), Category::Primitive);
        assert_eq!(classify(&Value::bigint(10)), Category::Primitive);
        assert_eq!(
            classify(&Value::symbol(likeness_value::Symbol::new("s"))),
            Category::Primitive
        );
    }

    #[test]
    fn callables_of_every_flavour() {
        use likeness_value::FnKind;
        for kind in [FnKind::Plain, FnKind::Generator, FnKind::Async] {
            let f = Value::function(NativeFn::with_kind("f", kind, |_| Value::null()));
            assert_eq!(classify(&f), Category::Callable);
        }
    }

    #[test]
    fn sequences_eager_and_lazy() {
        assert_eq!(classify(&Value::seq([Value::int(1)])), Category::Sequence);
        assert_eq!(
            classify(&Value::lazy_seq(|| vec![Value::int(1)])),
            Category::Sequence
        );
    }

    #[test]
    fn objects_split_on_the_capability_marker() {
        let plain = Value::object([(PropKey::str("a"), Value::int(1))]);
        assert_eq!(classify(&plain), Category::Structural);

        let capable = Value::object([(
            PropKey::equals_marker(),
            Value::function(NativeFn::new("equals", |_| Value::bool(true))),
        )]);
        assert_eq!(classify(&capable), Category::Equatable);

        // A non-callable under the marker does not opt in.
        let decoy = Value::object([(PropKey::equals_marker(), Value::bool(true))]);
        assert_eq!(classify(&decoy), Category::Structural);
    }

    #[test]
    fn wrappers_and_unsupported_kinds() {
        assert_eq!(classify(&Value::date(0)), Category::WrapperDate);
        assert_eq!(
            classify(&Value::regex("foo").unwrap()),
            Category::WrapperRegex
        );
        assert_eq!(
            classify(&Value::url("https://example.com/").unwrap()),
            Category::WrapperUrl
        );
        assert_eq!(
            classify(&Value::error("Error", "boom")),
            Category::Unsupported(UnsupportedKind::ErrorObject)
        );
        assert_eq!(
            classify(&Value::buffer(vec![1, 2, 3])),
            Category::Unsupported(UnsupportedKind::Buffer)
        );
        assert_eq!(
            classify(&Value::weak_map()),
            Category::Unsupported(UnsupportedKind::WeakMap)
        );
        assert_eq!(
            classify(&Value::weak_set()),
            Category::Unsupported(UnsupportedKind::WeakSet)
        );
    }
}
