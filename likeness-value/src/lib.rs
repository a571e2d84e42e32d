// likeness-value - Dynamic value model for the likeness equality engine
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # likeness-value
//!
//! The dynamic value model for the likeness deep-equality engine.
//! Provides the tagged `Value` enum and its supporting types; the
//! comparison strategies live in `likeness-core`.

pub mod symbol;
pub mod value;

pub use im::{OrdMap, Vector};
pub use num_bigint::BigInt;
pub use symbol::Symbol;
pub use value::{
    DateVal, ErrorVal, FnKind, LazySeq, NativeFn, ObjectVal, PropKey, RegexVal, Value, WeakColl,
    WeakKind,
};
