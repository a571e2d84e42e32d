// likeness-value - Symbol type with creation identity
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Symbols are identity primitives with an optional description.
//!
//! # Identity
//!
//! Every call to [`Symbol::new`] produces a symbol that is distinct from every
//! other symbol, even when descriptions collide. Equality, ordering and
//! hashing all go through the creation id, never the description - the
//! description is display-only.
//!
//! # The reserved equality marker
//!
//! Id `0` is never handed out by [`Symbol::new`]; it is reserved for
//! [`Symbol::equals_marker`], the collision-free key under which a value
//! declares its own equality capability. Two calls to `equals_marker` return
//! the same symbol.
//!
//! # Thread behaviour
//!
//! Ids are allocated from a thread-local counter. Values are `Rc`-based and
//! never cross threads, so ids are unique within any graph a comparison can
//! actually see.

use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

thread_local! {
    /// Next symbol id. Starts at 1: id 0 is the reserved equality marker.
    static NEXT_SYMBOL_ID: Cell<u64> = const { Cell::new(1) };
}

/// An identity primitive with an optional description.
#[derive(Clone, Debug)]
pub struct Symbol {
    id: u64,
    description: Option<Rc<str>>,
}

impl Symbol {
    /// Create a fresh symbol with a description. Distinct from every
    /// previously created symbol regardless of the description.
    pub fn new(description: impl Into<Rc<str>>) -> Self {
        Symbol {
            id: next_id(),
            description: Some(description.into()),
        }
    }

    /// Create a fresh symbol without a description.
    pub fn anonymous() -> Self {
        Symbol {
            id: next_id(),
            description: None,
        }
    }

    /// The reserved marker symbol under which a value exposes its
    /// self-equality capability. Always the same symbol.
    pub fn equals_marker() -> Self {
        Symbol {
            id: 0,
            description: Some("equals".into()),
        }
    }

    /// Check whether this symbol is the reserved equality marker.
    pub fn is_equals_marker(&self) -> bool {
        self.id == 0
    }

    /// The creation id of this symbol.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The description, if one was given.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

fn next_id() -> u64 {
    NEXT_SYMBOL_ID.with(|n| {
        let id = n.get();
        n.set(id + 1);
        id
    })
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}
