//! Value types for style entries.
//!
//! Every entry in a [`StyleObject`](crate::StyleObject) holds a [`StyleValue`]:
//! either a [`Literal`] that is already known, or a computed entry wrapping a
//! zero-argument callback that produces a literal on demand. Computed entries
//! are re-evaluated on every snapshot, never cached, which is what makes
//! time-varying values (counters, clocks, animation frames) work.
//!
//! # Example
//!
//! ```rust
//! use instyle::{Scalar, StyleValue};
//!
//! // Literals convert from the obvious Rust types.
//! let width: StyleValue = "100%".into();
//! let order: StyleValue = 3.into();
//!
//! // Computed entries wrap a closure returning anything literal-like.
//! let tick = StyleValue::computed(|| "45deg");
//! assert_eq!(tick.resolve().collapse(), Some(Scalar::from("45deg")));
//! ```

use std::fmt;
use std::rc::Rc;

/// A single CSS-ready value: a string or a number.
///
/// Numbers display without a trailing `.0` when they are integral, so
/// `Scalar::Num(3.0)` serializes as `3`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text value, emitted verbatim.
    Str(String),
    /// Numeric value.
    Num(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Num(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Num(n)
    }
}

impl From<f32> for Scalar {
    fn from(n: f32) -> Self {
        Scalar::Num(n as f64)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Num(n as f64)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Num(n as f64)
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Num(n as f64)
    }
}

impl From<usize> for Scalar {
    fn from(n: usize) -> Self {
        Scalar::Num(n as f64)
    }
}

/// A fully known style value: a scalar, a list of optional scalars, or null.
///
/// Lists model comma-separated CSS values (font stacks, shadows, transitions)
/// with `None` holes that are dropped when the list collapses. `Null` models
/// an entry that should disappear from the resolved snapshot entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A single scalar value.
    Scalar(Scalar),
    /// An ordered list; `None` items are skipped when joining.
    List(Vec<Option<Scalar>>),
    /// Absent value. Entries resolving to `Null` are dropped at read time.
    Null,
}

impl Literal {
    /// Builds a list literal from optional items.
    ///
    /// ```rust
    /// use instyle::{Literal, Scalar};
    ///
    /// let stack = Literal::list([Some("Helvetica"), None, Some("sans-serif")]);
    /// assert_eq!(stack.collapse(), Some(Scalar::from("Helvetica, sans-serif")));
    /// ```
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
        T: Into<Scalar>,
    {
        Literal::List(items.into_iter().map(|item| item.map(Into::into)).collect())
    }

    /// Collapses the literal into a single CSS-ready scalar.
    ///
    /// Lists drop their `None` holes and join the remaining items with `", "`.
    /// Returns `None` for [`Literal::Null`], which callers treat as "drop this
    /// key". Note that falsy-but-present values survive: an empty string or a
    /// zero collapses to itself, only null-ness removes an entry.
    pub fn collapse(&self) -> Option<Scalar> {
        match self {
            Literal::Scalar(scalar) => Some(scalar.clone()),
            Literal::List(items) => {
                let joined = items
                    .iter()
                    .flatten()
                    .map(Scalar::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(Scalar::Str(joined))
            }
            Literal::Null => None,
        }
    }
}

impl From<Scalar> for Literal {
    fn from(scalar: Scalar) -> Self {
        Literal::Scalar(scalar)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Scalar(s.into())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Scalar(s.into())
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Scalar(n.into())
    }
}

impl From<f32> for Literal {
    fn from(n: f32) -> Self {
        Literal::Scalar(n.into())
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Scalar(n.into())
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Scalar(n.into())
    }
}

impl From<u32> for Literal {
    fn from(n: u32) -> Self {
        Literal::Scalar(n.into())
    }
}

impl From<usize> for Literal {
    fn from(n: usize) -> Self {
        Literal::Scalar(n.into())
    }
}

impl From<Vec<Scalar>> for Literal {
    fn from(items: Vec<Scalar>) -> Self {
        Literal::List(items.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<Scalar>>> for Literal {
    fn from(items: Vec<Option<Scalar>>) -> Self {
        Literal::List(items)
    }
}

impl From<Vec<&str>> for Literal {
    fn from(items: Vec<&str>) -> Self {
        Literal::List(items.into_iter().map(|s| Some(s.into())).collect())
    }
}

impl From<Vec<Option<&str>>> for Literal {
    fn from(items: Vec<Option<&str>>) -> Self {
        Literal::list(items)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Literal::Scalar(v.into()),
            None => Literal::Null,
        }
    }
}

/// Zero-argument callback producing a literal. Invoked once per snapshot.
pub type Resolver = Rc<dyn Fn() -> Literal>;

/// A style entry value: a known literal or a lazily computed one.
///
/// Computed values hold an `Rc` callback, so cloning a [`StyleValue`] (or the
/// [`StyleObject`](crate::StyleObject) containing it) shares the callback.
/// The type is single-threaded on purpose; style bags live and die on one
/// rendering thread.
#[derive(Clone)]
pub enum StyleValue {
    /// A value known at write time.
    Literal(Literal),
    /// A callback resolved at read time, re-invoked on every snapshot.
    Computed(Resolver),
}

impl StyleValue {
    /// Wraps a closure as a computed value.
    ///
    /// The closure may return anything convertible into a [`Literal`],
    /// including `Option<T>` (where `None` drops the key for that snapshot).
    ///
    /// ```rust
    /// use instyle::StyleObject;
    /// use instyle::StyleValue;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let frame = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&frame);
    /// let style = StyleObject::new().with(
    ///     "left",
    ///     StyleValue::computed(move || {
    ///         counter.set(counter.get() + 1);
    ///         format!("{}px", counter.get())
    ///     }),
    /// );
    ///
    /// assert_eq!(style.to_string(), "left: 1px");
    /// assert_eq!(style.to_string(), "left: 2px");
    /// ```
    pub fn computed<F, T>(f: F) -> Self
    where
        F: Fn() -> T + 'static,
        T: Into<Literal>,
    {
        StyleValue::Computed(Rc::new(move || f().into()))
    }

    /// Resolves to a literal, invoking the callback for computed entries.
    ///
    /// Nothing is cached: calling this twice on a computed entry invokes the
    /// callback twice.
    pub fn resolve(&self) -> Literal {
        match self {
            StyleValue::Literal(literal) => literal.clone(),
            StyleValue::Computed(f) => f(),
        }
    }
}

// Manual Debug: closures have no useful representation.
impl fmt::Debug for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            StyleValue::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<Literal> for StyleValue {
    fn from(literal: Literal) -> Self {
        StyleValue::Literal(literal)
    }
}

impl From<Scalar> for StyleValue {
    fn from(scalar: Scalar) -> Self {
        StyleValue::Literal(scalar.into())
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Literal(s.into())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Literal(s.into())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Literal(n.into())
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Literal(n.into())
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Literal(n.into())
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Literal(n.into())
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Literal(n.into())
    }
}

impl From<usize> for StyleValue {
    fn from(n: usize) -> Self {
        StyleValue::Literal(n.into())
    }
}

impl From<Vec<Scalar>> for StyleValue {
    fn from(items: Vec<Scalar>) -> Self {
        StyleValue::Literal(items.into())
    }
}

impl From<Vec<Option<Scalar>>> for StyleValue {
    fn from(items: Vec<Option<Scalar>>) -> Self {
        StyleValue::Literal(items.into())
    }
}

impl From<Vec<&str>> for StyleValue {
    fn from(items: Vec<&str>) -> Self {
        StyleValue::Literal(items.into())
    }
}

impl From<Vec<Option<&str>>> for StyleValue {
    fn from(items: Vec<Option<&str>>) -> Self {
        StyleValue::Literal(items.into())
    }
}

impl<T: Into<Scalar>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        StyleValue::Literal(value.into())
    }
}
