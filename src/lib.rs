//! # fpcore
//!
//! Small algebraic building blocks for functional-style Rust: an
//! [`Option`] sum type for values that may be absent, a [`Result`] sum
//! type for computations that may fail, and the [`uncurry`] family of
//! adapters for applying n-ary functions across left-nested pairs.
//!
//! All types are immutable values with structural equality; every
//! operation is pure apart from the explicit observation hooks
//! (`tap`, `for_each`, `tap_none`). The transformation methods satisfy
//! the functor and monad laws, which the test suites assert directly.
//!
//! # Example
//!
//! ```ignore
//! use fpcore::{none, some, uncurry2};
//!
//! let doubled = some(5).map(|x| x * 2);
//! assert_eq!(doubled, some(10));
//!
//! let combined = some(3)
//!     .and_then(|a| some(4).map(|b| (a, b)))
//!     .map(uncurry2(|a, b| a + b));
//! assert_eq!(combined, some(7));
//!
//! let fallback = none::<i32>().unwrap_or(0);
//! assert_eq!(fallback, 0);
//! ```
//!
//! # Modules
//!
//! - [`option`] - presence/absence with the full transform/extract surface
//! - [`result`] - success/failure with success-biased transforms
//! - [`uncurry`] - n-ary functions over left-nested pairs, arities 2..=9
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` derives on [`Option`] and
//!   [`Result`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod option;
pub mod result;
pub mod uncurry;

pub use option::{none, some, Option, OptionExtractError};
pub use result::{failure, success, Result};
pub use uncurry::{
    uncurry2, uncurry3, uncurry4, uncurry5, uncurry6, uncurry7, uncurry8, uncurry9,
};
