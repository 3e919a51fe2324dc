//! Removing the container around a value.

use crate::control::{Lazy, Optional};

/// Containers that can be unwrapped into a plain value without failing.
pub trait Strip {
    /// The unwrapped value type.
    type Value;

    /// Returns the contained value, or a default when there is none.
    fn strip(self) -> Self::Value;
}

impl<T: Default> Strip for Optional<T> {
    type Value = T;

    fn strip(self) -> T {
        self.into_option().unwrap_or_default()
    }
}

impl<T: Default> Strip for Option<T> {
    type Value = T;

    fn strip(self) -> T {
        self.unwrap_or_default()
    }
}

impl<T, F: FnOnce() -> T> Strip for Lazy<T, F> {
    type Value = T;

    /// Evaluates the lazy value if needed.
    fn strip(self) -> T {
        self.into_inner()
    }
}

/// Returns the value inside `container`, or `T::default()` if it is empty.
///
/// # Examples
///
/// ```rust
/// use tinyfun::compose::strip;
/// use tinyfun::control::{Lazy, Optional};
///
/// assert_eq!(strip(Optional::new(3)), 3);
/// assert_eq!(strip(Optional::<String>::empty()), "");
/// assert_eq!(strip(Lazy::new(|| 9)), 9);
/// ```
#[inline]
pub fn strip<C: Strip>(container: C) -> C::Value {
    container.strip()
}
