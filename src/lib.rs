//! # tinyfun
//!
//! Single-slot functional containers and the combinators built on them.
//!
//! ## Overview
//!
//! - **Containers**: [`Optional`](control::Optional) (zero or one value),
//!   [`OneOf`](control::OneOf) (exactly one of two alternatives),
//!   [`Lazy`](control::Lazy) (memoized deferred computation)
//! - **Combinators**: `fmap`, `foldl`, `foldr`, `compose!`, `curry!`, `strip`
//! - **Errors**: checked accessors return [`BadAccess`]; unchecked accessors
//!   (`Deref`, `into_inner`) trust the caller
//!
//! ## Feature Flags
//!
//! - `control`: Containers (default)
//! - `compose`: Combinator layer (default)
//! - `serde`: Serialization for `Optional` and `OneOf`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tinyfun::prelude::*;
//!
//! let parsed: Optional<i32> = "42".parse::<i32>().ok().into();
//! let doubled = fmap(|n: i32| n * 2, parsed);
//! assert_eq!(doubled.get_value(), Ok(&84));
//!
//! let payment: OneOf<String, f32> = OneOf::with_value2(23.7);
//! assert_eq!(payment.get_value1(), Err(BadAccess::InactiveAlternative { requested: 1, held: 2 }));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
pub mod prelude {
    pub use crate::apply::{Apply, apply};
    pub use crate::error::BadAccess;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod apply;
pub mod error;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "compose")]
pub mod compose;

pub use error::BadAccess;
