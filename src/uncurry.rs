//! Nested-pair uncurrying adapters
//!
//! Adapters that turn an n-ary function into a function over a single
//! left-nested pair of its arguments: `uncurry2` accepts `(a1, a2)`,
//! `uncurry3` accepts `((a1, a2), a3)`, and so on through `uncurry9`.
//! Each extra argument nests one level deeper on the left.
//!
//! The shape matches how multiple optional or fallible values get
//! combined positionally: chain `and_then`/`map` to pair the values up,
//! then apply the adapted function to the accumulated pair in one step.
//!
//! # Example
//!
//! ```ignore
//! let add = uncurry2(|a: i32, b: i32| a + b);
//! assert_eq!(add((3, 4)), 7);
//!
//! let pair = some(3).and_then(|a| some(4).map(|b| (a, b)));
//! assert_eq!(pair.map(uncurry2(|a, b| a + b)), some(7));
//! ```
//!
//! Every adapter is a pure structural transformation: no side effects,
//! no error conditions, and `uncurryN(f)` applied to the nested pair of
//! `a1..aN` is exactly `f(a1, .., aN)`.

/// Adapt a binary function to take its arguments as a pair.
///
/// # Example
///
/// ```ignore
/// let add = uncurry2(|a: i32, b: i32| a + b);
/// assert_eq!(add((3, 4)), 7);
/// ```
#[inline]
pub fn uncurry2<A1, A2, R, F>(f: F) -> impl Fn((A1, A2)) -> R
where
    F: Fn(A1, A2) -> R,
{
    move |(a1, a2)| f(a1, a2)
}

/// Adapt a ternary function to take `((a1, a2), a3)`.
#[inline]
pub fn uncurry3<A1, A2, A3, R, F>(f: F) -> impl Fn(((A1, A2), A3)) -> R
where
    F: Fn(A1, A2, A3) -> R,
{
    move |((a1, a2), a3)| f(a1, a2, a3)
}

/// Adapt a 4-ary function to take `(((a1, a2), a3), a4)`.
#[inline]
pub fn uncurry4<A1, A2, A3, A4, R, F>(f: F) -> impl Fn((((A1, A2), A3), A4)) -> R
where
    F: Fn(A1, A2, A3, A4) -> R,
{
    move |(((a1, a2), a3), a4)| f(a1, a2, a3, a4)
}

/// Adapt a 5-ary function to its left-nested pair form.
#[inline]
pub fn uncurry5<A1, A2, A3, A4, A5, R, F>(f: F) -> impl Fn(((((A1, A2), A3), A4), A5)) -> R
where
    F: Fn(A1, A2, A3, A4, A5) -> R,
{
    move |((((a1, a2), a3), a4), a5)| f(a1, a2, a3, a4, a5)
}

/// Adapt a 6-ary function to its left-nested pair form.
#[inline]
pub fn uncurry6<A1, A2, A3, A4, A5, A6, R, F>(
    f: F,
) -> impl Fn((((((A1, A2), A3), A4), A5), A6)) -> R
where
    F: Fn(A1, A2, A3, A4, A5, A6) -> R,
{
    move |(((((a1, a2), a3), a4), a5), a6)| f(a1, a2, a3, a4, a5, a6)
}

/// Adapt a 7-ary function to its left-nested pair form.
#[inline]
pub fn uncurry7<A1, A2, A3, A4, A5, A6, A7, R, F>(
    f: F,
) -> impl Fn(((((((A1, A2), A3), A4), A5), A6), A7)) -> R
where
    F: Fn(A1, A2, A3, A4, A5, A6, A7) -> R,
{
    move |((((((a1, a2), a3), a4), a5), a6), a7)| f(a1, a2, a3, a4, a5, a6, a7)
}

/// Adapt an 8-ary function to its left-nested pair form.
#[inline]
pub fn uncurry8<A1, A2, A3, A4, A5, A6, A7, A8, R, F>(
    f: F,
) -> impl Fn((((((((A1, A2), A3), A4), A5), A6), A7), A8)) -> R
where
    F: Fn(A1, A2, A3, A4, A5, A6, A7, A8) -> R,
{
    move |(((((((a1, a2), a3), a4), a5), a6), a7), a8)| f(a1, a2, a3, a4, a5, a6, a7, a8)
}

/// Adapt a 9-ary function to its left-nested pair form.
///
/// Nine positional arguments is the ceiling of the family; the input is
/// `((((((((a1, a2), a3), a4), a5), a6), a7), a8), a9)`.
#[inline]
pub fn uncurry9<A1, A2, A3, A4, A5, A6, A7, A8, A9, R, F>(
    f: F,
) -> impl Fn(((((((((A1, A2), A3), A4), A5), A6), A7), A8), A9)) -> R
where
    F: Fn(A1, A2, A3, A4, A5, A6, A7, A8, A9) -> R,
{
    move |((((((((a1, a2), a3), a4), a5), a6), a7), a8), a9)| {
        f(a1, a2, a3, a4, a5, a6, a7, a8, a9)
    }
}
