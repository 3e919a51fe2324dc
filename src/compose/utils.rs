//! Helper functions for function composition.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose!(identity, f)` and `compose!(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use tinyfun::compose;
/// use tinyfun::compose::identity;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(compose!(identity, double)(5), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}
