//! Single-slot value containers.
//!
//! This module provides the containers the combinator layer works on:
//!
//! - [`Optional`]: Zero or one value, with checked and unchecked access
//! - [`OneOf`]: Exactly one of two alternatives, fixed at construction
//! - [`Lazy`]: Deferred computation with memoization
//!
//! # Examples
//!
//! ## Optional Values
//!
//! ```rust
//! use tinyfun::control::Optional;
//!
//! let mut age: Optional<u32> = Optional::empty();
//! assert!(age.get_value().is_err());
//!
//! age.assign(24);
//! let next_year = age.and_then(|age| Optional::new(age + 1));
//! assert_eq!(next_year.get_value_or(0_u32), 25);
//! ```
//!
//! ## Lazy Evaluation
//!
//! ```rust
//! use tinyfun::control::Lazy;
//!
//! let lazy = Lazy::new(|| (1..=10).product::<u64>());
//! assert!(!lazy.has_evaluated());
//! assert_eq!(*lazy, 3_628_800);
//! ```

mod lazy;
mod one_of;
mod optional;
mod slot;

pub use lazy::Lazy;
pub use one_of::OneOf;
pub use optional::{Optional, make_optional};
