// likeness-value - Value types for the likeness equality engine
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for likeness.
//!
//! `Value` is the central enum representing every runtime value the equality
//! engine can see: the two nullish markers, the primitives, callables,
//! ordered sequences (eager and lazy), keyed composites, the canonicalizable
//! wrappers (date, regex, url) and the opaque categories the engine refuses
//! to compare (errors, buffers, weak collections).
//!
//! `Value` deliberately implements no deep `PartialEq`: deciding equality is
//! the engine's job, and it is configurable. The only equality notions here
//! are the identity helpers (`ptr_eq`) on the reference-shaped payloads.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use im::{OrdMap, Vector};
use num_bigint::BigInt;
use regex::Regex;
use url::Url;

use crate::symbol::Symbol;

// ============================================================================
// Property Keys
// ============================================================================

/// A field key of a composite value: a string or a symbol.
///
/// Strings order before symbols so `OrdMap<PropKey, Value>` has a stable,
/// deterministic iteration order. Key enumeration order is never significant
/// to equality.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropKey {
    /// String-named field
    Str(Rc<str>),
    /// Symbol-keyed field
    Sym(Symbol),
}

impl PropKey {
    /// Create a string key.
    pub fn str(name: impl Into<Rc<str>>) -> Self {
        PropKey::Str(name.into())
    }

    /// Create a symbol key.
    pub fn sym(symbol: Symbol) -> Self {
        PropKey::Sym(symbol)
    }

    /// The reserved key under which a value declares its equality capability.
    pub fn equals_marker() -> Self {
        PropKey::Sym(Symbol::equals_marker())
    }
}

impl fmt::Display for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropKey::Str(s) => write!(f, "{}", s),
            PropKey::Sym(sym) => write!(f, "[{}]", sym),
        }
    }
}

// ============================================================================
// Composite Objects
// ============================================================================

/// A keyed composite value: named/symbol fields, optionally constructed by a
/// named class.
///
/// `class: None` is a plain data object. `class: Some(name)` is an instance
/// of a named type; the type guard compares class names exactly, so two
/// same-shaped objects of different classes are never structurally equal
/// when type checking is on.
#[derive(Clone, Debug)]
pub struct ObjectVal {
    class: Option<Rc<str>>,
    fields: OrdMap<PropKey, Value>,
}

impl ObjectVal {
    /// Create a plain object from key-value pairs.
    pub fn new(pairs: impl IntoIterator<Item = (PropKey, Value)>) -> Self {
        ObjectVal {
            class: None,
            fields: pairs.into_iter().collect(),
        }
    }

    /// Create an instance of a named class from key-value pairs.
    pub fn with_class(
        class: impl Into<Rc<str>>,
        pairs: impl IntoIterator<Item = (PropKey, Value)>,
    ) -> Self {
        ObjectVal {
            class: Some(class.into()),
            fields: pairs.into_iter().collect(),
        }
    }

    /// The constructing class name, if any.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// All fields, including callable-valued ones.
    pub fn fields(&self) -> &OrdMap<PropKey, Value> {
        &self.fields
    }

    /// Look up a field by key.
    pub fn get(&self, key: &PropKey) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The self-equality capability method, if this object exposes one:
    /// a callable stored under the reserved marker key.
    pub fn equatable_method(&self) -> Option<&NativeFn> {
        match self.fields.get(&PropKey::equals_marker()) {
            Some(Value::Fn(f)) => Some(f),
            _ => None,
        }
    }
}

// ============================================================================
// Function Types
// ============================================================================

/// The flavour of a callable. All flavours compare by identity only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FnKind {
    Plain,
    Generator,
    Async,
}

/// A native (Rust) function value.
#[derive(Clone)]
pub struct NativeFn {
    /// Function name for display
    name: Rc<str>,
    kind: FnKind,
    func: Rc<dyn Fn(&[Value]) -> Value>,
}

impl NativeFn {
    /// Create a plain function.
    pub fn new(name: impl Into<Rc<str>>, func: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self::with_kind(name, FnKind::Plain, func)
    }

    /// Create a function of a specific flavour.
    pub fn with_kind(
        name: impl Into<Rc<str>>,
        kind: FnKind,
        func: impl Fn(&[Value]) -> Value + 'static,
    ) -> Self {
        NativeFn {
            name: name.into(),
            kind,
            func: Rc::new(func),
        }
    }

    /// Get the function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the function flavour.
    pub fn kind(&self) -> FnKind {
        self.kind
    }

    /// Invoke the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// Identity comparison: same underlying closure allocation.
    pub fn ptr_eq(&self, other: &NativeFn) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<fn {}>", self.name)
    }
}

// ============================================================================
// Lazy Sequences
// ============================================================================

enum LazySeqState {
    /// Not yet realized: a single-pass producer.
    Pending(Rc<dyn Fn() -> Vec<Value>>),
    /// Realized and cached.
    Realized(Vector<Value>),
}

/// A lazily produced sequence, realized at most once.
///
/// The producer runs the first time the sequence is materialized and the
/// result is cached; this is the one documented mutation a comparison can
/// cause, and it is idempotent.
#[derive(Clone)]
pub struct LazySeq {
    state: Rc<RefCell<LazySeqState>>,
}

impl LazySeq {
    /// Create a lazy sequence from a producer.
    pub fn new(thunk: impl Fn() -> Vec<Value> + 'static) -> Self {
        LazySeq {
            state: Rc::new(RefCell::new(LazySeqState::Pending(Rc::new(thunk)))),
        }
    }

    /// Materialize the sequence, running the producer if needed.
    pub fn force(&self) -> Vector<Value> {
        let thunk = {
            let state = self.state.borrow();
            match &*state {
                LazySeqState::Realized(items) => return items.clone(),
                LazySeqState::Pending(thunk) => Rc::clone(thunk),
            }
        };
        // Run the producer outside the borrow.
        let items: Vector<Value> = thunk().into_iter().collect();
        *self.state.borrow_mut() = LazySeqState::Realized(items.clone());
        items
    }

    /// Check whether the producer has already run.
    pub fn is_realized(&self) -> bool {
        matches!(&*self.state.borrow(), LazySeqState::Realized(_))
    }

    /// Identity comparison: same underlying state cell.
    pub fn ptr_eq(&self, other: &LazySeq) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for LazySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_realized() {
            write!(f, "#<lazy-seq realized>")
        } else {
            write!(f, "#<lazy-seq pending>")
        }
    }
}

// ============================================================================
// Wrapper Types
// ============================================================================

/// A date/time instant, canonicalized to milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug)]
pub struct DateVal {
    epoch_millis: i64,
}

impl DateVal {
    /// Create an instant from epoch milliseconds.
    pub fn new(epoch_millis: i64) -> Self {
        DateVal { epoch_millis }
    }

    /// The canonical numeric timestamp.
    pub fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }
}

/// A compiled pattern-matcher with a normalized flag set.
///
/// The canonical form is `(source, flags)` where `flags` is sorted and
/// deduplicated, so flag order never matters. The `i`, `m`, `s` and `x`
/// flags are applied to the compiled pattern as inline flags; the remaining
/// flags only participate in the canonical form.
#[derive(Clone, Debug)]
pub struct RegexVal {
    pattern: Rc<Regex>,
    source: Rc<str>,
    flags: Rc<str>,
}

impl RegexVal {
    /// Compile a flagless pattern. Returns `None` on an invalid pattern.
    pub fn new(source: &str) -> Option<Self> {
        Self::with_flags(source, "")
    }

    /// Compile a pattern with flags. Returns `None` on an invalid pattern.
    pub fn with_flags(source: &str, flags: &str) -> Option<Self> {
        let mut normalized: Vec<char> = flags.chars().collect();
        normalized.sort_unstable();
        normalized.dedup();
        let normalized: String = normalized.into_iter().collect();

        let inline: String = normalized
            .chars()
            .filter(|c| matches!(c, 'i' | 'm' | 's' | 'x'))
            .collect();
        let pattern = if inline.is_empty() {
            Regex::new(source).ok()?
        } else {
            Regex::new(&format!("(?{}){}", inline, source)).ok()?
        };

        Some(RegexVal {
            pattern: Rc::new(pattern),
            source: source.into(),
            flags: normalized.into(),
        })
    }

    /// The pattern source, as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The normalized (sorted, deduplicated) flag set.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Test the compiled pattern against a string.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Identity comparison: same compiled-pattern allocation.
    pub fn ptr_eq(&self, other: &RegexVal) -> bool {
        Rc::ptr_eq(&self.pattern, &other.pattern)
    }
}

/// A generic error object. Exists only to be classified as unsupported:
/// the engine refuses to guess what error equality should mean.
#[derive(Clone, Debug)]
pub struct ErrorVal {
    name: Rc<str>,
    message: Rc<str>,
}

impl ErrorVal {
    /// Create an error object.
    pub fn new(name: impl Into<Rc<str>>, message: impl Into<Rc<str>>) -> Self {
        ErrorVal {
            name: name.into(),
            message: message.into(),
        }
    }

    /// The error name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The flavour of a weak-keyed collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeakKind {
    Map,
    Set,
}

/// An opaque weak-keyed collection handle.
///
/// The contents are unobservable; the handle only carries identity and a
/// kind, enough for classification to refuse the comparison loudly.
#[derive(Clone, Debug)]
pub struct WeakColl {
    kind: WeakKind,
    handle: Rc<()>,
}

impl WeakColl {
    /// Create a weak collection handle.
    pub fn new(kind: WeakKind) -> Self {
        WeakColl {
            kind,
            handle: Rc::new(()),
        }
    }

    /// The collection flavour.
    pub fn kind(&self) -> WeakKind {
        self.kind
    }

    /// Identity comparison: same handle allocation.
    pub fn ptr_eq(&self, other: &WeakColl) -> bool {
        Rc::ptr_eq(&self.handle, &other.handle)
    }
}

// ============================================================================
// Value
// ============================================================================

/// A runtime value of unknown shape.
#[derive(Clone, Debug)]
pub enum Value {
    /// The null marker: an intentional absence
    Null,
    /// The undefined marker: a value never set. Distinct from `Null`.
    Undefined,
    /// Boolean true or false
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Arbitrary-precision integer
    BigInt(Rc<BigInt>),
    /// Immutable string. A string is a primitive, never a sequence.
    String(Rc<str>),
    /// Identity primitive with an optional description
    Symbol(Symbol),
    /// Function value (plain, generator or async); identity only
    Fn(NativeFn),
    /// Eager ordered sequence
    Seq(Vector<Value>),
    /// Lazily produced ordered sequence
    LazySeq(LazySeq),
    /// Keyed composite, optionally of a named class
    Object(Rc<ObjectVal>),
    /// Date/time instant wrapper
    Date(Rc<DateVal>),
    /// Compiled pattern-matcher wrapper
    Regex(RegexVal),
    /// Resource-locator wrapper with a canonical string form
    Url(Rc<Url>),
    /// Generic error object (unsupported by the engine)
    Error(Rc<ErrorVal>),
    /// Byte buffer (unsupported by the engine)
    Buffer(Rc<[u8]>),
    /// Weak-keyed collection (unsupported by the engine)
    Weak(WeakColl),
}

impl Value {
    /// Create the null marker.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create the undefined marker.
    pub fn undefined() -> Self {
        Value::Undefined
    }

    /// Create a boolean value.
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value.
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    /// Create a big-integer value.
    pub fn bigint(n: impl Into<BigInt>) -> Self {
        Value::BigInt(Rc::new(n.into()))
    }

    /// Create a string value.
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    /// Create a symbol value.
    pub fn symbol(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }

    /// Create a function value.
    pub fn function(f: NativeFn) -> Self {
        Value::Fn(f)
    }

    /// Create an eager sequence from elements.
    pub fn seq(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Seq(elements.into_iter().collect())
    }

    /// Create a lazy sequence from a producer.
    pub fn lazy_seq(thunk: impl Fn() -> Vec<Value> + 'static) -> Self {
        Value::LazySeq(LazySeq::new(thunk))
    }

    /// Create a plain object from key-value pairs.
    pub fn object(pairs: impl IntoIterator<Item = (PropKey, Value)>) -> Self {
        Value::Object(Rc::new(ObjectVal::new(pairs)))
    }

    /// Create an instance of a named class from key-value pairs.
    pub fn class_instance(
        class: impl Into<Rc<str>>,
        pairs: impl IntoIterator<Item = (PropKey, Value)>,
    ) -> Self {
        Value::Object(Rc::new(ObjectVal::with_class(class, pairs)))
    }

    /// Create a date value at the given epoch milliseconds. Each call is a
    /// distinct instance.
    pub fn date(epoch_millis: i64) -> Self {
        Value::Date(Rc::new(DateVal::new(epoch_millis)))
    }

    /// Create a flagless regex value. Returns `None` on an invalid pattern.
    pub fn regex(source: &str) -> Option<Self> {
        RegexVal::new(source).map(Value::Regex)
    }

    /// Create a regex value with flags. Returns `None` on an invalid pattern.
    pub fn regex_with_flags(source: &str, flags: &str) -> Option<Self> {
        RegexVal::with_flags(source, flags).map(Value::Regex)
    }

    /// Parse a url value. Returns `None` on an unparsable locator.
    pub fn url(locator: &str) -> Option<Self> {
        Url::parse(locator).ok().map(|u| Value::Url(Rc::new(u)))
    }

    /// Create an error-object value.
    pub fn error(name: impl Into<Rc<str>>, message: impl Into<Rc<str>>) -> Self {
        Value::Error(Rc::new(ErrorVal::new(name, message)))
    }

    /// Create a byte-buffer value.
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Buffer(Rc::from(bytes.into()))
    }

    /// Create a weak-keyed map handle.
    pub fn weak_map() -> Self {
        Value::Weak(WeakColl::new(WeakKind::Map))
    }

    /// Create a weak-keyed set handle.
    pub fn weak_set() -> Self {
        Value::Weak(WeakColl::new(WeakKind::Set))
    }

    /// The runtime type tag of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Fn(_) => "fn",
            Value::Seq(_) => "seq",
            Value::LazySeq(_) => "lazy-seq",
            Value::Object(_) => "object",
            Value::Date(_) => "date",
            Value::Regex(_) => "regex",
            Value::Url(_) => "url",
            Value::Error(_) => "error",
            Value::Buffer(_) => "buffer",
            Value::Weak(w) => match w.kind() {
                WeakKind::Map => "weak-map",
                WeakKind::Set => "weak-set",
            },
        }
    }

    /// Check if this value is one of the nullish markers.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Get the composite payload, if this value is an object.
    pub fn as_object(&self) -> Option<&ObjectVal> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Materialize an ordered sequence into an indexed list, forcing a lazy
    /// sequence if needed. `None` for non-sequence values.
    pub fn seq_items(&self) -> Option<Vector<Value>> {
        match self {
            Value::Seq(items) => Some(items.clone()),
            Value::LazySeq(lazy) => Some(lazy.force()),
            _ => None,
        }
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Undefined => write!(f, "undefined"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 {
                    write!(f, "{}.0", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Fn(func) => write!(f, "#<fn {}>", func.name()),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::LazySeq(lazy) => write!(f, "{:?}", lazy),
            Value::Object(obj) => {
                if let Some(class) = obj.class() {
                    write!(f, "#{}", class)?;
                }
                write!(f, "{{")?;
                for (i, (key, value)) in obj.fields().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Date(d) => write!(f, "#<date {}>", d.epoch_millis()),
            Value::Regex(r) => write!(f, "/{}/{}", r.source(), r.flags()),
            Value::Url(u) => write!(f, "#<url {}>", u.as_str()),
            Value::Error(e) => write!(f, "#<error {}: {}>", e.name(), e.message()),
            Value::Buffer(bytes) => write!(f, "#<buffer {} bytes>", bytes.len()),
            Value::Weak(w) => match w.kind() {
                WeakKind::Map => write!(f, "#<weak-map>"),
                WeakKind::Set => write!(f, "#<weak-set>"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_flags_are_normalized() {
        let a = RegexVal::with_flags("foo", "gi").unwrap();
        let b = RegexVal::with_flags("foo", "ig").unwrap();
        assert_eq!(a.flags(), "gi");
        assert_eq!(a.flags(), b.flags());

        let dup = RegexVal::with_flags("foo", "ggi").unwrap();
        assert_eq!(dup.flags(), "gi");
    }

    #[test]
    fn regex_case_flag_affects_matching() {
        let ci = RegexVal::with_flags("foo", "i").unwrap();
        assert!(ci.is_match("FOO"));
        let cs = RegexVal::new("foo").unwrap();
        assert!(!cs.is_match("FOO"));
    }

    #[test]
    fn invalid_regex_is_rejected() {
        assert!(RegexVal::new("(unclosed").is_none());
    }

    #[test]
    fn lazy_seq_realizes_once() {
        use std::cell::Cell;

        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let lazy = LazySeq::new(move || {
            counter.set(counter.get() + 1);
            vec![Value::int(1), Value::int(2)]
        });

        assert!(!lazy.is_realized());
        assert_eq!(lazy.force().len(), 2);
        assert_eq!(lazy.force().len(), 2);
        assert!(lazy.is_realized());
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn equatable_method_requires_a_callable_under_the_marker() {
        let plain = ObjectVal::new([(PropKey::str("a"), Value::int(1))]);
        assert!(plain.equatable_method().is_none());

        let non_callable = ObjectVal::new([(PropKey::equals_marker(), Value::int(1))]);
        assert!(non_callable.equatable_method().is_none());

        let capable = ObjectVal::new([(
            PropKey::equals_marker(),
            Value::function(NativeFn::new("equals", |_| Value::bool(true))),
        )]);
        assert!(capable.equatable_method().is_some());
    }

    #[test]
    fn seq_items_materializes_both_shapes() {
        let eager = Value::seq([Value::int(1), Value::int(2)]);
        assert_eq!(eager.seq_items().unwrap().len(), 2);

        let lazy = Value::lazy_seq(|| vec![Value::int(1)]);
        assert_eq!(lazy.seq_items().unwrap().len(), 1);

        assert!(Value::int(3).seq_items().is_none());
        // Strings are primitives, never sequences.
        assert!(Value::string("abc").seq_items().is_none());
    }
}
