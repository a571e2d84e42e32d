// likeness-core - Polymorphic deep-equality engine
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # likeness-core
//!
//! A polymorphic deep-equality engine over `likeness_value::Value`: given
//! two values of unknown shape, decide whether they are equal under a
//! configurable, recursive comparison strategy.
//!
//! ## Quick start
//!
//! ```rust
//! use likeness_core::{equal_to, Comparer, CompareOptions, DefaultComparer};
//! use likeness_value::{PropKey, Value};
//!
//! let a = Value::object([(PropKey::str("x"), Value::int(1))]);
//! let b = Value::object([(PropKey::str("x"), Value::int(1))]);
//! assert!(equal_to(&a, &b).unwrap());
//!
//! // Partial (subset) matching:
//! let comparer = DefaultComparer::with_options(CompareOptions {
//!     partial: true,
//!     ..CompareOptions::default()
//! });
//! let wider = Value::object([
//!     (PropKey::str("x"), Value::int(1)),
//!     (PropKey::str("y"), Value::int(2)),
//! ]);
//! assert!(comparer.equals(&a, &wider).unwrap());
//! ```
//!
//! The engine is synchronous, lock-free and cache-free. Comparing two
//! values of an explicitly unsupported category (error objects, byte
//! buffers, weak collections) returns [`Error::Unsupported`] instead of a
//! misleading boolean.

pub mod classify;
pub mod compare;
pub mod error;

pub use classify::{classify, Category, UnsupportedKind};
pub use compare::{
    equal_to, is_equatable, CompareOptions, Comparer, DefaultComparer, PredicateComparer,
    SequenceComparer, StructuralComparer, TypeComparer, ValueComparer,
};
pub use error::{Error, Result};

// Re-export value types for convenience
pub use likeness_value::{PropKey, Symbol, Value};
