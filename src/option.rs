//! The Option sum type
//!
//! An `Option<A>` is a value that is either present (`Some`) or absent
//! (`None`). Unlike the standard library's type it carries the full
//! tap/extract surface this crate's callers chain over, so it is defined
//! as its own two-variant enum rather than an extension trait.
//!
//! # Example
//!
//! ```ignore
//! let doubled = some(5).map(|x| x * 2);
//! assert_eq!(doubled, some(10));
//!
//! let fallback = none::<i32>().unwrap_or(0);
//! assert_eq!(fallback, 0);
//! ```

use std::fmt::{self, Debug};

/// A value that is either present or absent.
///
/// The variant set is closed: a value is exactly one of `Some` or `None`,
/// fixed at construction. Instances are immutable; transformation methods
/// consume the receiver and build a new value. Equality is structural, so
/// two independently obtained `None` values compare equal, and the
/// parameterless `None` variant is shared across every payload type
/// without allocating.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Option<A> {
    /// A present value.
    Some(A),
    /// Absence of a value.
    None,
}

/// Error produced when extraction is attempted on an absent value.
///
/// Carries the caller-supplied message describing why the value was
/// expected to be present. The type itself is the identifying kind;
/// `Display` output is exactly the message, and the `std::error::Error`
/// impl lets it travel through `?` and ordinary error reporting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct OptionExtractError {
    message: String,
}

impl OptionExtractError {
    fn new(message: impl Into<String>) -> Self {
        OptionExtractError {
            message: message.into(),
        }
    }

    /// The caller-supplied diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Construct a present value.
#[inline]
pub fn some<A>(value: A) -> Option<A> {
    Option::Some(value)
}

/// Obtain the absent value.
#[inline]
pub fn none<A>() -> Option<A> {
    Option::None
}

impl<A> Option<A> {
    /// Check whether a value is present.
    pub fn is_some(&self) -> bool {
        matches!(self, Option::Some(_))
    }

    /// Check whether the value is absent.
    pub fn is_none(&self) -> bool {
        matches!(self, Option::None)
    }

    /// Map a function over the contained value.
    ///
    /// Functor instance. `f` is not invoked on `None`.
    pub fn map<B, F>(self, f: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Option::Some(a) => Option::Some(f(a)),
            Option::None => Option::None,
        }
    }

    /// Monadic bind: chain a computation that may itself be absent.
    ///
    /// `f` is not invoked on `None`.
    pub fn and_then<B, F>(self, f: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Option::Some(a) => f(a),
            Option::None => Option::None,
        }
    }

    /// Alias for and_then.
    pub fn bind<B, F>(self, f: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(f)
    }

    /// Narrow presence by a predicate.
    ///
    /// Keeps the value only when the predicate holds for it.
    pub fn filter<P>(self, predicate: P) -> Option<A>
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Option::Some(a) => {
                if predicate(&a) {
                    Option::Some(a)
                } else {
                    Option::None
                }
            }
            Option::None => Option::None,
        }
    }

    /// Extract the value or fall back to a default.
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Option::Some(a) => a,
            Option::None => default,
        }
    }

    /// Extract the value or compute a fallback.
    ///
    /// The thunk is invoked only when the value is absent.
    pub fn unwrap_or_else<F>(self, f: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Option::Some(a) => a,
            Option::None => f(),
        }
    }

    /// Extract a value the caller asserts is present.
    ///
    /// The message should say why presence was expected; it becomes the
    /// error's `Display` output verbatim when the assertion is violated.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let value = some(5).try_unwrap("validated above")?;
    /// assert_eq!(value, 5);
    /// ```
    pub fn try_unwrap(self, message: impl Into<String>) -> Result<A, OptionExtractError> {
        match self {
            Option::Some(a) => Ok(a),
            Option::None => Err(OptionExtractError::new(message)),
        }
    }

    /// Observe the whole option without altering it.
    ///
    /// The callback is invoked exactly once, on `Some` and `None` alike.
    pub fn tap<F>(self, callback: F) -> Option<A>
    where
        F: FnOnce(&Option<A>),
    {
        callback(&self);
        self
    }

    /// Observe the contained value, if present.
    pub fn for_each<F>(self, callback: F) -> Option<A>
    where
        F: FnOnce(&A),
    {
        if let Option::Some(a) = &self {
            callback(a);
        }
        self
    }

    /// Observe absence.
    pub fn tap_none<F>(self, callback: F) -> Option<A>
    where
        F: FnOnce(),
    {
        if self.is_none() {
            callback();
        }
        self
    }
}

impl<A: Debug> Debug for Option<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Option::Some(a) => f.debug_tuple("Some").field(a).finish(),
            Option::None => write!(f, "None"),
        }
    }
}

impl<A> From<std::option::Option<A>> for Option<A> {
    fn from(opt: std::option::Option<A>) -> Self {
        match opt {
            Some(a) => Option::Some(a),
            None => Option::None,
        }
    }
}

impl<A> From<Option<A>> for std::option::Option<A> {
    fn from(opt: Option<A>) -> Self {
        match opt {
            Option::Some(a) => Some(a),
            Option::None => None,
        }
    }
}
