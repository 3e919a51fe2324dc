//! Functional combinators over the containers in [`control`](crate::control)
//! and over ordinary collections.
//!
//! # Overview
//!
//! - [`fmap`] / [`fmap!`]: Map a function over Optionals (only when all are
//!   engaged) or lazily over a borrowed collection
//! - [`foldl`], [`foldr`], [`fold_iterator`]: Fold a collection into one value
//! - [`for_each`]: Visit every element of a collection
//! - [`compose!`]: Compose functions right-to-left
//! - [`curry!`]: Convert an N-argument function to curried form
//! - [`strip`]: Unwrap a container, defaulting when it is empty
//! - [`identity`]: The unit of composition
//!
//! # Examples
//!
//! ## Sum of squares
//!
//! ```
//! use tinyfun::compose::{fmap, foldl};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let squares: Vec<i32> = fmap(|n: &i32| n * n, &numbers).collect();
//! assert_eq!(foldl(|sum, n| sum + n, 0, squares), 55);
//! ```
//!
//! ## Combining optional values
//!
//! ```
//! use tinyfun::control::Optional;
//! use tinyfun::fmap;
//!
//! let concatenate = |left: i32, right: i32| format!("{left}{right}");
//! assert_eq!(
//!     fmap!(concatenate, Optional::new(3), Optional::new(3)),
//!     Optional::new("33".to_string())
//! );
//! assert!(fmap!(concatenate, Optional::new(3), Optional::empty()).is_empty());
//! ```
//!
//! ## Composition and currying
//!
//! ```
//! use tinyfun::{compose, curry};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let add_then_double = compose!(double, curry!(add, 2)(1));
//! assert_eq!(add_then_double(4), 10);
//! ```

mod compose_macro;
mod curry_macro;
mod fmap;
mod fold;
mod strip;
mod utils;

pub use fmap::{Fmap, Transformation, fmap};
pub use fold::{fold_iterator, foldl, foldr, for_each};
pub use strip::{Strip, strip};
pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry;
pub use crate::fmap;

/// Maps a function over any number (1 to 6) of Optionals.
///
/// `fmap!(f, a, b, c)` is shorthand for `fmap(f, (a, b, c))`: `f` runs with
/// the contained values only if every optional is engaged.
///
/// The macro and the [`fmap`](fn@fmap) function share one path, so
/// `use tinyfun::compose::fmap;` brings both into scope. Importing
/// `tinyfun::fmap` alongside it is a duplicate import.
///
/// # Examples
///
/// ```
/// use tinyfun::control::Optional;
/// use tinyfun::fmap;
///
/// let volume = |w: u32, h: u32, d: u32| w * h * d;
/// assert_eq!(fmap!(volume, Optional::new(2), Optional::new(3), Optional::new(4)), Optional::new(24));
/// ```
#[macro_export]
macro_rules! fmap {
    ($function:expr, $($optional:expr),+ $(,)?) => {
        $crate::compose::fmap($function, ($($optional,)+))
    };
}
