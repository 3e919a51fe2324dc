//! The error returned by checked accessors.
//!
//! [`BadAccess`] is the only error kind in the crate. It is produced when a
//! checked accessor is asked for a value that is not there: reading an empty
//! [`Optional`](crate::control::Optional), or reading the alternative a
//! [`OneOf`](crate::control::OneOf) does not hold.
//!
//! # Examples
//!
//! ```rust
//! use tinyfun::BadAccess;
//! use tinyfun::control::Optional;
//!
//! let empty: Optional<i32> = Optional::empty();
//! assert_eq!(empty.get_value(), Err(BadAccess::Disengaged));
//! ```

use thiserror::Error;

/// Error signalled by a checked accessor whose precondition does not hold.
///
/// Callers avoid it by querying `has_value` / `is_value1` / `is_value2` first,
/// or propagate it with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BadAccess {
    /// The optional holds no value.
    #[error("bad access: optional is disengaged")]
    Disengaged,
    /// The requested alternative is not the one held.
    #[error("bad access: requested value{requested} but value{held} is held")]
    InactiveAlternative {
        /// The alternative that was asked for (1 or 2).
        requested: u8,
        /// The alternative that is actually live (1 or 2).
        held: u8,
    },
}

impl BadAccess {
    pub(crate) fn disengaged() -> Self {
        let error = Self::Disengaged;
        tracing::debug!(%error, "checked access failed");
        error
    }

    pub(crate) fn inactive(requested: u8) -> Self {
        let error = Self::InactiveAlternative {
            requested,
            held: if requested == 1 { 2 } else { 1 },
        };
        tracing::debug!(%error, "checked access failed");
        error
    }
}
