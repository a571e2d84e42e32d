// likeness-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for likeness integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`obj`] - Build a plain object from string-keyed pairs
//! - [`class_obj`] - Build a named-class instance from string-keyed pairs
//! - [`equatable`] - Build an object whose equality capability always
//!   answers the given boolean
//! - [`partial_comparer`] - A default comparer in partial (subset) mode
//! - [`untyped_comparer`] - A default comparer with type checking off

#![allow(dead_code)]

pub use likeness_core::{
    classify, equal_to, Category, CompareOptions, Comparer, DefaultComparer, Error,
    UnsupportedKind,
};
pub use likeness_value::{NativeFn, PropKey, Symbol, Value};

/// Build a plain object from string-keyed pairs.
pub fn obj(pairs: Vec<(&str, Value)>) -> Value {
    Value::object(pairs.into_iter().map(|(k, v)| (PropKey::str(k), v)))
}

/// Build an instance of a named class from string-keyed pairs.
pub fn class_obj(class: &str, pairs: Vec<(&str, Value)>) -> Value {
    Value::class_instance(class, pairs.into_iter().map(|(k, v)| (PropKey::str(k), v)))
}

/// Build an object exposing the equality capability with a fixed answer.
pub fn equatable(answer: bool) -> Value {
    Value::object([(
        PropKey::equals_marker(),
        Value::function(NativeFn::new("equals", move |_| Value::bool(answer))),
    )])
}

/// A default comparer in partial (subset) structural mode.
pub fn partial_comparer() -> DefaultComparer {
    DefaultComparer::with_options(CompareOptions {
        partial: true,
        ..CompareOptions::default()
    })
}

/// A default comparer with the runtime type guard disabled.
pub fn untyped_comparer() -> DefaultComparer {
    DefaultComparer::with_options(CompareOptions {
        check_type: false,
        ..CompareOptions::default()
    })
}
