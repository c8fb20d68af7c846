//! The Result sum type
//!
//! A `Result<E, A>` is the outcome of a fallible computation: either a
//! `Success` carrying the computed value or a `Failure` carrying the
//! error. The error parameter comes first, matching the convention of
//! error-biased sum types.
//!
//! # Example
//!
//! ```ignore
//! let r = success::<String, _>(3).map(|x| x + 1);
//! assert_eq!(r, success(4));
//!
//! let f = failure::<_, i32>("boom".to_string()).map(|x| x + 1);
//! assert!(f.is_failure());
//! ```

use std::fmt::{self, Debug};

/// The outcome of a computation that may fail.
///
/// The variant set is closed: exactly one of `Success` or `Failure`,
/// fixed at construction and immutable thereafter. Transformation
/// methods are success-biased; a `Failure` passes through them with its
/// error payload untouched.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<E, A> {
    /// A successful computation.
    Success(A),
    /// A failed computation.
    Failure(E),
}

/// Construct a successful outcome.
#[inline]
pub fn success<E, A>(value: A) -> Result<E, A> {
    Result::Success(value)
}

/// Construct a failed outcome.
#[inline]
pub fn failure<E, A>(error: E) -> Result<E, A> {
    Result::Failure(error)
}

impl<E, A> Result<E, A> {
    /// Check whether the computation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Result::Success(_))
    }

    /// Check whether the computation failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Result::Failure(_))
    }

    /// Map a function over the success value.
    ///
    /// Functor instance. `f` is not invoked on `Failure`.
    pub fn map<B, F>(self, f: F) -> Result<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Result::Success(a) => Result::Success(f(a)),
            Result::Failure(e) => Result::Failure(e),
        }
    }

    /// Map a function over the error.
    pub fn map_err<F, G>(self, f: G) -> Result<F, A>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Result::Success(a) => Result::Success(a),
            Result::Failure(e) => Result::Failure(f(e)),
        }
    }

    /// Monadic bind: chain a computation that may itself fail.
    pub fn and_then<B, F>(self, f: F) -> Result<E, B>
    where
        F: FnOnce(A) -> Result<E, B>,
    {
        match self {
            Result::Success(a) => f(a),
            Result::Failure(e) => Result::Failure(e),
        }
    }

    /// Alias for and_then.
    pub fn bind<B, F>(self, f: F) -> Result<E, B>
    where
        F: FnOnce(A) -> Result<E, B>,
    {
        self.and_then(f)
    }

    /// Extract the success value or fall back to a default.
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Result::Success(a) => a,
            Result::Failure(_) => default,
        }
    }

    /// Extract the success value or compute a fallback from the error.
    pub fn unwrap_or_else<F>(self, f: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Result::Success(a) => a,
            Result::Failure(e) => f(e),
        }
    }
}

impl<E: Debug, A: Debug> Debug for Result<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Result::Success(a) => f.debug_tuple("Success").field(a).finish(),
            Result::Failure(e) => f.debug_tuple("Failure").field(e).finish(),
        }
    }
}

impl<E, A> From<std::result::Result<A, E>> for Result<E, A> {
    fn from(result: std::result::Result<A, E>) -> Self {
        match result {
            Ok(a) => Result::Success(a),
            Err(e) => Result::Failure(e),
        }
    }
}

impl<E, A> From<Result<E, A>> for std::result::Result<A, E> {
    fn from(result: Result<E, A>) -> Self {
        match result {
            Result::Success(a) => Ok(a),
            Result::Failure(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let r: Result<String, i32> = success(42);
        assert!(r.is_success());
        assert!(!r.is_failure());
    }

    #[test]
    fn test_failure() {
        let r: Result<String, i32> = failure(String::from("error"));
        assert!(!r.is_success());
        assert!(r.is_failure());
    }

    #[test]
    fn test_map() {
        let r: Result<String, i32> = success(3);
        assert_eq!(r.map(|x| x + 1), success(4));
    }

    #[test]
    fn test_map_failure_unchanged() {
        let mut called = false;
        let r: Result<&str, i32> = failure("err");
        let mapped = r.map(|x| {
            called = true;
            x + 1
        });
        assert_eq!(mapped, failure("err"));
        assert!(!called);
    }

    #[test]
    fn test_map_err() {
        let r: Result<String, i32> = failure(String::from("error"));
        assert_eq!(r.map_err(|s| s.len()), failure(5));

        let ok: Result<String, i32> = success(1);
        assert_eq!(ok.map_err(|s| s.len()), success(1));
    }

    #[test]
    fn test_and_then() {
        fn safe_div(a: i32, b: i32) -> Result<String, i32> {
            if b == 0 {
                failure(String::from("division by zero"))
            } else {
                success(a / b)
            }
        }

        assert_eq!(success(10).and_then(|x| safe_div(x, 2)), success(5));
        assert_eq!(
            success(10).and_then(|x| safe_div(x, 0)),
            failure(String::from("division by zero"))
        );

        let initial: Result<String, i32> = failure(String::from("initial"));
        assert_eq!(
            initial.and_then(|x| safe_div(x, 2)),
            failure(String::from("initial"))
        );
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(success::<String, _>(42).unwrap_or(0), 42);
        assert_eq!(failure::<_, i32>(String::from("error")).unwrap_or(0), 0);
    }

    #[test]
    fn test_unwrap_or_else() {
        assert_eq!(success::<String, _>(42).unwrap_or_else(|_| 0), 42);
        assert_eq!(
            failure::<_, i32>(String::from("error")).unwrap_or_else(|s| s.len() as i32),
            5
        );
    }

    #[test]
    fn test_from_std_result() {
        let ok: std::result::Result<i32, String> = Ok(42);
        assert_eq!(Result::from(ok), success(42));

        let err: std::result::Result<i32, String> = Err(String::from("error"));
        assert_eq!(Result::from(err), failure(String::from("error")));

        let back: std::result::Result<i32, String> = success(42).into();
        assert_eq!(back, Ok(42));
    }

    #[test]
    fn test_functor_identity() {
        let r: Result<String, i32> = success(42);
        assert_eq!(r.clone().map(|x| x), r);

        let f: Result<String, i32> = failure(String::from("error"));
        assert_eq!(f.clone().map(|x| x), f);
    }

    #[test]
    fn test_functor_composition() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 2;

        let r: Result<String, i32> = success(5);
        assert_eq!(r.clone().map(|x| f(g(x))), r.map(g).map(f));
    }

    #[test]
    fn test_monad_left_identity() {
        let f = |x: i32| success::<String, i32>(x * 2);
        let a = 5;
        assert_eq!(success(a).and_then(f), f(a));
    }

    #[test]
    fn test_monad_right_identity() {
        let r: Result<String, i32> = success(42);
        assert_eq!(r.clone().and_then(success), r);
    }

    #[test]
    fn test_monad_associativity() {
        let f = |x: i32| success::<String, i32>(x + 1);
        let g = |x: i32| success::<String, i32>(x * 2);

        let r: Result<String, i32> = success(5);
        let left = r.clone().and_then(f).and_then(g);
        let right = r.and_then(|x| f(x).and_then(g));
        assert_eq!(left, right);
    }
}
