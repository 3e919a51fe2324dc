//! OneOf - a value that is exactly one of two types.
//!
//! [`OneOf<A, B>`] is a minimal sum type: it is constructed with exactly one
//! alternative and keeps that alternative for its whole lifetime. There is no
//! empty state and no operation switching the held alternative; the payload of
//! the held alternative can still be mutated in place.
//!
//! # Examples
//!
//! ```rust
//! use tinyfun::control::OneOf;
//!
//! type Payment = OneOf<String, f32>;
//!
//! let card = Payment::with_value1("Alex".to_string());
//! assert!(card.is_value1());
//! assert_eq!(card.get_value1().map(String::as_str), Ok("Alex"));
//! assert!(card.get_value2().is_err());
//!
//! let cash = Payment::with_value2(23.7);
//! assert!(cash.is_value2());
//! ```

use std::fmt;

use crate::error::BadAccess;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Alternative<A, B> {
    #[cfg_attr(feature = "serde", serde(rename = "Value1"))]
    First(A),
    #[cfg_attr(feature = "serde", serde(rename = "Value2"))]
    Second(B),
}

/// A tagged union holding either an `A` (alternative 1) or a `B`
/// (alternative 2).
///
/// Only the live alternative is ever dropped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OneOf<A, B> {
    alternative: Alternative<A, B>,
}

impl<A, B> OneOf<A, B> {
    /// Creates a `OneOf` holding the first alternative.
    #[inline]
    pub const fn with_value1(value: A) -> Self {
        Self {
            alternative: Alternative::First(value),
        }
    }

    /// Creates a `OneOf` holding the second alternative.
    #[inline]
    pub const fn with_value2(value: B) -> Self {
        Self {
            alternative: Alternative::Second(value),
        }
    }

    /// Returns `true` if the first alternative is held.
    #[inline]
    pub const fn is_value1(&self) -> bool {
        matches!(self.alternative, Alternative::First(_))
    }

    /// Returns `true` if the second alternative is held.
    #[inline]
    pub const fn is_value2(&self) -> bool {
        matches!(self.alternative, Alternative::Second(_))
    }

    /// Returns a reference to the first alternative.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess::InactiveAlternative`] if the second alternative is
    /// held.
    pub fn get_value1(&self) -> Result<&A, BadAccess> {
        match &self.alternative {
            Alternative::First(value) => Ok(value),
            Alternative::Second(_) => Err(BadAccess::inactive(1)),
        }
    }

    /// Returns a reference to the second alternative.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess::InactiveAlternative`] if the first alternative is
    /// held.
    pub fn get_value2(&self) -> Result<&B, BadAccess> {
        match &self.alternative {
            Alternative::Second(value) => Ok(value),
            Alternative::First(_) => Err(BadAccess::inactive(2)),
        }
    }

    /// Returns a mutable reference to the first alternative.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess::InactiveAlternative`] if the second alternative is
    /// held.
    pub fn get_value1_mut(&mut self) -> Result<&mut A, BadAccess> {
        match &mut self.alternative {
            Alternative::First(value) => Ok(value),
            Alternative::Second(_) => Err(BadAccess::inactive(1)),
        }
    }

    /// Returns a mutable reference to the second alternative.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess::InactiveAlternative`] if the first alternative is
    /// held.
    pub fn get_value2_mut(&mut self) -> Result<&mut B, BadAccess> {
        match &mut self.alternative {
            Alternative::Second(value) => Ok(value),
            Alternative::First(_) => Err(BadAccess::inactive(2)),
        }
    }

    /// Consumes the union and returns the first alternative.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess::InactiveAlternative`] if the second alternative is
    /// held.
    pub fn into_value1(self) -> Result<A, BadAccess> {
        match self.alternative {
            Alternative::First(value) => Ok(value),
            Alternative::Second(_) => Err(BadAccess::inactive(1)),
        }
    }

    /// Consumes the union and returns the second alternative.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess::InactiveAlternative`] if the first alternative is
    /// held.
    pub fn into_value2(self) -> Result<B, BadAccess> {
        match self.alternative {
            Alternative::Second(value) => Ok(value),
            Alternative::First(_) => Err(BadAccess::inactive(2)),
        }
    }

    /// Eliminates the union by applying the function matching the held
    /// alternative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::OneOf;
    ///
    /// let describe = |payment: OneOf<String, f32>| {
    ///     payment.fold(|card| format!("card {card}"), |cash| format!("cash {cash}"))
    /// };
    /// assert_eq!(describe(OneOf::with_value2(5.0)), "cash 5");
    /// ```
    pub fn fold<T, F, G>(self, on_value1: F, on_value2: G) -> T
    where
        F: FnOnce(A) -> T,
        G: FnOnce(B) -> T,
    {
        match self.alternative {
            Alternative::First(value) => on_value1(value),
            Alternative::Second(value) => on_value2(value),
        }
    }

    /// Converts into a `Result`, the first alternative becoming `Ok`.
    pub fn into_result(self) -> Result<A, B> {
        match self.alternative {
            Alternative::First(value) => Ok(value),
            Alternative::Second(value) => Err(value),
        }
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for OneOf<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alternative {
            Alternative::First(value) => formatter.debug_tuple("Value1").field(value).finish(),
            Alternative::Second(value) => formatter.debug_tuple("Value2").field(value).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_first_alternative_queries() {
        let value: OneOf<i32, String> = OneOf::with_value1(3);
        assert!(value.is_value1());
        assert!(!value.is_value2());
        assert_eq!(value.get_value1(), Ok(&3));
    }

    #[rstest]
    fn test_mutating_payload_keeps_alternative() {
        let mut value: OneOf<Vec<i32>, String> = OneOf::with_value1(vec![1]);
        value.get_value1_mut().unwrap().push(2);
        assert!(value.is_value1());
        assert_eq!(value.get_value1(), Ok(&vec![1, 2]));
        assert!(value.get_value2_mut().is_err());
    }

    #[rstest]
    fn test_into_result() {
        let value: OneOf<i32, &str> = OneOf::with_value2("two");
        assert_eq!(value.into_result(), Err("two"));
    }

    #[rstest]
    fn test_debug_format() {
        let value: OneOf<i32, &str> = OneOf::with_value1(1);
        assert_eq!(format!("{value:?}"), "Value1(1)");
    }
}
