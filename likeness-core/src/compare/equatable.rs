// likeness-core - Equatable capability dispatch
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Capability-based self-equality.
//!
//! A value opts in by exposing a callable under the reserved marker key
//! ([`likeness_value::PropKey::equals_marker`]). Detection is structural -
//! "is there a callable member under this key?" - not nominal.
//!
//! When both operands expose the capability, the pair is equal if either
//! direction reports true: `a.equals(b) || b.equals(a)`. This OR-leniency is
//! deliberate and is not guaranteed symmetric; it is governed entirely by
//! the values' own declared logic. A one-sided capability is never equal.

use likeness_value::{NativeFn, Value};

/// Check whether a value exposes the self-equality capability.
pub fn is_equatable(value: &Value) -> bool {
    capability_of(value).is_some()
}

/// Dispatch to the operands' own equality methods, either direction.
///
/// Each method is invoked with the receiver first and the peer second. Only
/// a literal boolean true return counts as equal; any other result is
/// treated as false rather than coerced.
pub(crate) fn dispatch(a: &Value, b: &Value) -> bool {
    let (Some(a_method), Some(b_method)) = (capability_of(a), capability_of(b)) else {
        return false;
    };
    invoke(a_method, a, b) || invoke(b_method, b, a)
}

fn capability_of(value: &Value) -> Option<&NativeFn> {
    value.as_object()?.equatable_method()
}

fn invoke(method: &NativeFn, this: &Value, peer: &Value) -> bool {
    matches!(method.call(&[this.clone(), peer.clone()]), Value::Bool(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use likeness_value::PropKey;

    fn equatable(answer: bool) -> Value {
        Value::object([(
            PropKey::equals_marker(),
            Value::function(NativeFn::new("equals", move |_| Value::bool(answer))),
        )])
    }

    #[test]
    fn either_direction_suffices() {
        assert!(dispatch(&equatable(true), &equatable(false)));
        assert!(dispatch(&equatable(false), &equatable(true)));
        assert!(dispatch(&equatable(true), &equatable(true)));
        assert!(!dispatch(&equatable(false), &equatable(false)));
    }

    #[test]
    fn one_sided_capability_is_unequal() {
        let plain = Value::object([]);
        assert!(!dispatch(&equatable(true), &plain));
        assert!(!dispatch(&plain, &equatable(true)));
    }

    #[test]
    fn non_boolean_returns_do_not_count() {
        let evasive = Value::object([(
            PropKey::equals_marker(),
            Value::function(NativeFn::new("equals", |_| Value::string("yes"))),
        )]);
        assert!(!dispatch(&evasive, &evasive.clone()));
    }

    #[test]
    fn method_receives_receiver_then_peer() {
        let probe = Value::object([(
            PropKey::equals_marker(),
            Value::function(NativeFn::new("equals", |args| {
                // Receiver is the capable object, peer is the int.
                Value::bool(matches!(
                    (args.first(), args.get(1)),
                    (Some(Value::Object(_)), Some(Value::Int(7)))
                ))
            })),
        )]);
        // Route through dispatch requires both sides capable; call directly.
        let method = capability_of(&probe).unwrap();
        assert!(invoke(method, &probe, &Value::int(7)));
        assert!(!invoke(method, &probe, &Value::int(8)));
    }
}
