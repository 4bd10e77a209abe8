//! Class value types — the polymorphic argument union accepted by
//! [`crate::join`].
//!
//! A dynamic front-end caller can hand a class-name joiner almost anything:
//! bare strings, numbers, booleans from short-circuit expressions, nested
//! arrays, condition mappings, functions, typed objects that render
//! themselves. [`ClassValue`] models that whole surface as a tagged union so
//! each shape gets its own pure resolution rule instead of runtime type
//! inspection.

use std::fmt;
use std::sync::Arc;

/// A deferred class-name producer. Never a token by itself — it is only
/// invoked through the `toString` mapping override (see [`ClassValue::Map`]).
pub type ClassFn = Arc<dyn Fn() -> String + Send + Sync>;

/// One argument to [`crate::join`].
///
/// Values are cheap to clone (`Arc` for the two trait-object variants) and
/// `Send + Sync`, so class lists can be composed on one thread and joined on
/// another.
#[derive(Clone)]
pub enum ClassValue {
    /// Absent / null / undefined. Never a token.
    Null,
    /// Booleans never name a class, truthy or not — only boolean
    /// *expressions that select another value* matter, and those resolve to
    /// the selected value before they get here.
    Bool(bool),
    /// Integer, stringified in decimal. `0` is falsy and contributes nothing.
    Int(i64),
    /// Float, stringified with whole values in integer form (`1.0` → `1`).
    /// `0.0`, `-0.0` and `NaN` are falsy.
    Float(f64),
    /// A class-name fragment. Edge whitespace is stripped and interior runs
    /// are collapsed before the string becomes a token.
    Str(String),
    /// Ordered list, flattened recursively to unbounded depth.
    List(Vec<ClassValue>),
    /// Plain data record: key-value pairs in insertion order. Each key is a
    /// candidate token, kept iff its value is truthy. An entry named
    /// `toString` holding a [`Callable`](ClassValue::Callable) overrides the
    /// whole mapping (its return value becomes the sole token).
    Map(Vec<(String, ClassValue)>),
    /// Function-like value. Never a token at any position.
    Callable(ClassFn),
    /// A typed value that opts into being a class name via its [`fmt::Display`]
    /// impl — the capability a plain data record does not have.
    Custom(Arc<dyn fmt::Display + Send + Sync>),
}

impl ClassValue {
    /// Truthiness for mapping-entry values, following dynamic-language
    /// convention: `0`, `NaN`, the empty string, null and `false` are falsy;
    /// everything else — including empty containers, callables and
    /// whitespace-only strings — is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            ClassValue::Null => false,
            ClassValue::Bool(b) => *b,
            ClassValue::Int(n) => *n != 0,
            // `== 0.0` also matches -0.0
            ClassValue::Float(x) => !x.is_nan() && *x != 0.0,
            ClassValue::Str(s) => !s.is_empty(),
            ClassValue::List(_)
            | ClassValue::Map(_)
            | ClassValue::Callable(_)
            | ClassValue::Custom(_) => true,
        }
    }

    /// Build a list value from anything convertible.
    pub fn list<V, I>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ClassValue>,
    {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a mapping value from insertion-ordered `(key, value)` pairs.
    ///
    /// ```rust
    /// use classmix_core::{join, ClassValue};
    ///
    /// let attr = join(&[ClassValue::map([("open", true), ("pinned", false)])]);
    /// assert_eq!(attr, "open");
    /// ```
    pub fn map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ClassValue>,
    {
        ClassValue::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Wrap a deferred class-name producer.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        ClassValue::Callable(Arc::new(f))
    }

    /// Wrap a typed value that renders its class name through `Display`.
    pub fn custom<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        ClassValue::Custom(Arc::new(value))
    }
}

impl fmt::Debug for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassValue::Null => f.write_str("Null"),
            ClassValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            ClassValue::Int(n) => f.debug_tuple("Int").field(n).finish(),
            ClassValue::Float(x) => f.debug_tuple("Float").field(x).finish(),
            ClassValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            ClassValue::List(items) => f.debug_tuple("List").field(items).finish(),
            ClassValue::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            ClassValue::Callable(_) => f.write_str("Callable(..)"),
            ClassValue::Custom(value) => f.debug_tuple("Custom").field(&value.to_string()).finish(),
        }
    }
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Str(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Str(s)
    }
}

impl From<&String> for ClassValue {
    fn from(s: &String) -> Self {
        ClassValue::Str(s.clone())
    }
}

impl From<bool> for ClassValue {
    fn from(b: bool) -> Self {
        ClassValue::Bool(b)
    }
}

impl From<i64> for ClassValue {
    fn from(n: i64) -> Self {
        ClassValue::Int(n)
    }
}

impl From<i32> for ClassValue {
    fn from(n: i32) -> Self {
        ClassValue::Int(n.into())
    }
}

impl From<u32> for ClassValue {
    fn from(n: u32) -> Self {
        ClassValue::Int(n.into())
    }
}

impl From<f64> for ClassValue {
    fn from(x: f64) -> Self {
        ClassValue::Float(x)
    }
}

impl From<f32> for ClassValue {
    fn from(x: f32) -> Self {
        ClassValue::Float(x.into())
    }
}

/// `None` is the absent argument; `Some` converts the inner value. Pairs with
/// `bool::then_some` for conditional classes: `is_open.then_some("menu-open")`.
impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => ClassValue::Null,
        }
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        ClassValue::list(items)
    }
}
