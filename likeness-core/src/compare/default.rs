// likeness-core - Default orchestrating comparer
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The orchestrator: a fixed-priority category dispatch composing every
//! other comparer.
//!
//! Dispatch order, first match wins:
//!
//! 1. either operand nullish -> same-value
//! 2. either operand primitive -> same-value
//! 3. either operand callable -> same-value (identity only)
//! 4. either operand equatable -> both must be; either-direction dispatch
//! 5. type checking enabled and runtime types differ -> unequal
//! 6. wrappers canonicalize (date by instant, regex by pattern plus flag
//!    set, url by canonical string); unsupported categories raise
//! 7. sequences -> element-wise, recursing through the orchestrator
//! 8. everything else -> structural, recursing through the orchestrator
//!
//! Recursion terminates only when the input graph does: there is no cycle
//! tracking, so a cyclic value exhausts the stack.

use likeness_value::Value;

use crate::classify::{classify, Category};
use crate::compare::{
    equatable, Comparer, SequenceComparer, StructuralComparer, TypeComparer, ValueComparer,
};
use crate::error::{Error, Result};

/// Orchestrator configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompareOptions {
    /// Guard structural comparison with the runtime type check (step 5).
    pub check_type: bool,
    /// Use partial (subset) mode for the terminal structural fallback.
    pub partial: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            check_type: true,
            partial: false,
        }
    }
}

/// The default comparer: classifies a pair into exactly one category and
/// delegates. Injects itself into the sequence and structural comparers as
/// their element/field comparer, producing controlled mutual recursion.
///
/// Stateless and cheap to construct; holds no caches and no locks.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultComparer {
    value: ValueComparer,
    types: TypeComparer,
    options: CompareOptions,
}

impl DefaultComparer {
    /// Create an orchestrator with default configuration: type checking on,
    /// full structural mode.
    pub fn new() -> Self {
        Self::with_options(CompareOptions::default())
    }

    /// Create an orchestrator with explicit configuration.
    pub fn with_options(options: CompareOptions) -> Self {
        DefaultComparer {
            value: ValueComparer::new(),
            types: TypeComparer::new(),
            options,
        }
    }

    /// The configuration this orchestrator was built with.
    pub fn options(&self) -> CompareOptions {
        self.options
    }
}

impl Comparer for DefaultComparer {
    fn equals(&self, a: &Value, b: &Value) -> Result<bool> {
        let ca = classify(a);
        let cb = classify(b);

        // Scalar-ish categories never compare structurally; a pair with one
        // scalar side falls back to same-value identity.
        if ca == Category::Nullish || cb == Category::Nullish {
            return self.value.equals(a, b);
        }
        if ca == Category::Primitive || cb == Category::Primitive {
            return self.value.equals(a, b);
        }
        if ca == Category::Callable || cb == Category::Callable {
            return self.value.equals(a, b);
        }

        // Self-declared equality takes precedence over every structural
        // rule, and a one-sided capability is never equal.
        if ca == Category::Equatable || cb == Category::Equatable {
            return Ok(ca == cb && equatable::dispatch(a, b));
        }

        if self.options.check_type && !self.types.equals(a, b)? {
            return Ok(false);
        }

        match ca {
            Category::WrapperDate => Ok(match (a, b) {
                (Value::Date(x), Value::Date(y)) => x.epoch_millis() == y.epoch_millis(),
                _ => false,
            }),
            Category::WrapperRegex => Ok(match (a, b) {
                (Value::Regex(x), Value::Regex(y)) => {
                    x.source() == y.source() && x.flags() == y.flags()
                }
                _ => false,
            }),
            Category::WrapperUrl => Ok(match (a, b) {
                (Value::Url(x), Value::Url(y)) => x.as_str() == y.as_str(),
                _ => false,
            }),
            Category::Unsupported(kind) => {
                // One-sided pairings are plainly unequal; only when both
                // operands share the unhandled kind does the engine refuse,
                // loudly, rather than guess.
                if cb != Category::Unsupported(kind) {
                    Ok(false)
                } else {
                    Err(Error::unsupported(kind))
                }
            }
            Category::Sequence => SequenceComparer::new(self).equals(a, b),
            // The remaining category is Structural; the scalar categories
            // all returned above.
            _ => StructuralComparer::new(self, self.options.partial).equals(a, b),
        }
    }
}
