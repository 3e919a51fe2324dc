//! Folding collections into a single value.
//!
//! ```text
//! foldl(f, v, [c0, c1, ..., cN]) = f(...f(f(v, c0), c1)..., cN)
//! foldr(f, v, [c0, c1, ..., cN]) = f(...f(f(v, cN), cN-1)..., c0)
//! ```
//!
//! Both folds call `function(accumulator, element)`; `foldr` only changes
//! the traversal order.
//!
//! # Examples
//!
//! ```rust
//! use tinyfun::compose::{foldl, foldr};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! assert_eq!(foldl(|sum, n| sum + n, 0, &numbers), 15);
//!
//! let reversed = foldr(
//!     |mut acc: Vec<i32>, n: &i32| {
//!         acc.push(*n);
//!         acc
//!     },
//!     Vec::new(),
//!     &numbers,
//! );
//! assert_eq!(reversed, vec![5, 4, 3, 2, 1]);
//! ```

/// Folds the elements produced by `iterator`, in iteration order.
///
/// An exhausted iterator returns `init` unchanged.
#[inline]
pub fn fold_iterator<V, F, I>(function: F, init: V, iterator: I) -> V
where
    I: Iterator,
    F: FnMut(V, I::Item) -> V,
{
    iterator.fold(init, function)
}

/// Left fold: accumulates from the first element to the last.
///
/// # Examples
///
/// ```rust
/// use tinyfun::compose::foldl;
///
/// let concatenated = foldl(
///     |mut acc: Vec<i32>, n: i32| {
///         acc.push(n);
///         acc
///     },
///     vec![0, 1, 2],
///     vec![3, 4, 5, 6],
/// );
/// assert_eq!(concatenated, vec![0, 1, 2, 3, 4, 5, 6]);
/// ```
#[inline]
pub fn foldl<V, F, C>(function: F, init: V, collection: C) -> V
where
    C: IntoIterator,
    F: FnMut(V, C::Item) -> V,
{
    fold_iterator(function, init, collection.into_iter())
}

/// Right fold: accumulates from the last element to the first.
#[inline]
pub fn foldr<V, F, C>(function: F, init: V, collection: C) -> V
where
    C: IntoIterator,
    C::IntoIter: DoubleEndedIterator,
    F: FnMut(V, C::Item) -> V,
{
    fold_iterator(function, init, collection.into_iter().rev())
}

/// Invokes `function` on every element of `collection`, in order.
#[inline]
pub fn for_each<F, C>(function: F, collection: C)
where
    C: IntoIterator,
    F: FnMut(C::Item),
{
    collection.into_iter().for_each(function);
}
