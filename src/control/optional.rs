//! Optional - a value that may or may not be present.
//!
//! This module provides the [`Optional<T>`] type, a single-slot container that
//! is either *empty* or *engaged* with exactly one value. Besides the usual
//! construction and mutation operations it offers two deliberately separate
//! ways of reading the value:
//!
//! - **Checked** accessors ([`Optional::get_value`] and friends) return
//!   `Result<_, BadAccess>` and never panic.
//! - **Unchecked** access through [`Deref`] / [`DerefMut`] and
//!   [`Optional::into_inner`] trusts the caller: reading an empty optional
//!   this way is a precondition violation and panics.
//!
//! # Examples
//!
//! ```rust
//! use tinyfun::control::Optional;
//!
//! let mut name: Optional<String> = Optional::empty();
//! assert!(!name.has_value());
//!
//! name.assign("Alex".to_string());
//! assert_eq!(name.get_value().map(String::as_str), Ok("Alex"));
//! assert_eq!(name.len(), 4); // unchecked, through Deref
//!
//! name.reset();
//! assert!(name.get_value().is_err());
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::slot::Slot;
use crate::error::BadAccess;

/// A container holding zero or one value of type `T`.
///
/// `Optional<T>` owns a single slot. The contained value is dropped when the
/// optional is reset, reassigned or dropped itself, and only if one is
/// present.
///
/// # Examples
///
/// ```rust
/// use tinyfun::control::Optional;
///
/// let engaged = Optional::new(2);
/// let empty: Optional<i32> = Optional::empty();
///
/// assert_eq!(engaged.get_value_or(0), 2);
/// assert_eq!(empty.get_value_or(0), 0);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    slot: Slot<T>,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Optional;
    ///
    /// let empty: Optional<String> = Optional::empty();
    /// assert!(!empty.has_value());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self { slot: Slot::Vacant }
    }

    /// Creates an optional engaged with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Optional;
    ///
    /// let engaged = Optional::new(4);
    /// assert!(engaged.has_value());
    /// assert_eq!(*engaged, 4);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            slot: Slot::Occupied(value),
        }
    }

    /// Converts an optional of another type, preserving emptiness.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Optional;
    ///
    /// let narrow: Optional<u8> = Optional::new(200);
    /// let wide: Optional<u32> = Optional::convert_from(narrow);
    /// assert_eq!(wide, Optional::new(200_u32));
    /// ```
    pub fn convert_from<U>(other: Optional<U>) -> Self
    where
        U: Into<T>,
    {
        match other.slot.into_inner() {
            Some(value) => Self::new(value.into()),
            None => Self::empty(),
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Stores `value`, dropping the previous occupant first.
    #[inline]
    pub fn assign(&mut self, value: T) {
        self.slot.put(value);
    }

    /// Replaces the content with a converted copy of `other`'s content.
    ///
    /// The previous occupant is dropped in any case; the optional ends up
    /// engaged exactly when `other` is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Optional;
    ///
    /// let mut target: Optional<i64> = Optional::new(1);
    /// target.assign_from(Optional::<i32>::empty());
    /// assert!(!target.has_value());
    ///
    /// target.assign_from(Optional::new(5_i32));
    /// assert_eq!(target, Optional::new(5_i64));
    /// ```
    pub fn assign_from<U>(&mut self, other: Optional<U>)
    where
        U: Into<T>,
    {
        self.slot.clear();
        if let Some(value) = other.slot.into_inner() {
            self.slot.put(value.into());
        }
    }

    /// Stores `value` and returns a mutable reference to it.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.slot.put(value)
    }

    /// Builds a new value with `constructor`, then stores it.
    ///
    /// The constructor runs before the current occupant is touched, so if it
    /// panics the optional keeps its previous content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Optional;
    ///
    /// let mut numbers: Optional<Vec<i32>> = Optional::empty();
    /// numbers.emplace_with(|| vec![1, 2, 3]).push(4);
    /// assert_eq!(numbers.get_value().map(Vec::len), Ok(4));
    /// ```
    pub fn emplace_with<F>(&mut self, constructor: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = constructor();
        self.slot.put(value)
    }

    /// Drops the contained value, if any. Calling it on an empty optional
    /// does nothing.
    #[inline]
    pub fn reset(&mut self) {
        self.slot.clear();
    }

    /// Moves the contained value out, leaving the optional empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self::from(self.slot.take())
    }

    /// Stores `value` and returns the previous content.
    pub fn replace(&mut self, value: T) -> Self {
        let previous = self.take();
        self.slot.put(value);
        previous
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if the optional holds a value.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.slot.is_occupied()
    }

    /// Returns `true` if the optional holds no value.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.has_value()
    }

    // =========================================================================
    // Checked Access
    // =========================================================================

    /// Returns a reference to the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess::Disengaged`] if the optional is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::BadAccess;
    /// use tinyfun::control::Optional;
    ///
    /// assert_eq!(Optional::new(2).get_value(), Ok(&2));
    /// assert_eq!(Optional::<i32>::empty().get_value(), Err(BadAccess::Disengaged));
    /// ```
    pub fn get_value(&self) -> Result<&T, BadAccess> {
        self.slot.get().ok_or_else(BadAccess::disengaged)
    }

    /// Returns a mutable reference to the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess::Disengaged`] if the optional is empty.
    pub fn get_value_mut(&mut self) -> Result<&mut T, BadAccess> {
        self.slot.get_mut().ok_or_else(BadAccess::disengaged)
    }

    /// Consumes the optional and returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`BadAccess::Disengaged`] if the optional is empty.
    pub fn into_value(self) -> Result<T, BadAccess> {
        self.slot.into_inner().ok_or_else(BadAccess::disengaged)
    }

    /// Consumes the optional and returns the contained value or `default`
    /// converted into `T`.
    pub fn into_value_or<U>(self, default: U) -> T
    where
        U: Into<T>,
    {
        self.slot.into_inner().unwrap_or_else(|| default.into())
    }

    // =========================================================================
    // Unchecked Access
    // =========================================================================

    /// Consumes the optional and returns the contained value without a
    /// checked error path.
    ///
    /// # Panics
    ///
    /// Panics if the optional is empty. Use [`Optional::into_value`] when
    /// emptiness is a possibility.
    pub fn into_inner(self) -> T {
        match self.slot.into_inner() {
            Some(value) => value,
            None => panic!("unchecked access to an empty Optional"),
        }
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Chains a computation on the contained value.
    ///
    /// If engaged, invokes `function` with the value and returns its result
    /// unchanged. If empty, `function` is not invoked and the default of its
    /// result type is returned (an empty `Optional` or `None`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Optional;
    ///
    /// fn half(value: i32) -> Optional<i32> {
    ///     if value % 2 == 0 { Optional::new(value / 2) } else { Optional::empty() }
    /// }
    ///
    /// assert_eq!(Optional::new(8).and_then(half).and_then(half), Optional::new(2));
    /// assert!(Optional::new(3).and_then(half).is_empty());
    /// assert!(Optional::<i32>::empty().and_then(half).is_empty());
    /// ```
    pub fn and_then<R, F>(self, function: F) -> R
    where
        F: FnOnce(T) -> R,
        R: Default,
    {
        self.slot.into_inner().map_or_else(R::default, function)
    }

    /// Chains a computation on a reference to the contained value.
    ///
    /// Behaves like [`Optional::and_then`] without consuming the optional.
    pub fn and_then_ref<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&T) -> R,
        R: Default,
    {
        self.slot.get().map_or_else(R::default, function)
    }

    /// Chains a computation on a mutable reference to the contained value.
    ///
    /// Behaves like [`Optional::and_then`] without consuming the optional.
    pub fn and_then_mut<R, F>(&mut self, function: F) -> R
    where
        F: FnOnce(&mut T) -> R,
        R: Default,
    {
        self.slot.get_mut().map_or_else(R::default, function)
    }

    /// Returns `self` if engaged, otherwise the optional produced by
    /// `function`. The function is only invoked when `self` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Optional;
    ///
    /// let fallback = || Optional::new(0);
    /// assert_eq!(Optional::new(7).or_else(fallback), Optional::new(7));
    /// assert_eq!(Optional::<i32>::empty().or_else(fallback), Optional::new(0));
    /// ```
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.has_value() { self } else { function() }
    }

    /// Maps the contained value, preserving emptiness.
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.slot.into_inner() {
            Some(value) => Optional::new(function(value)),
            None => Optional::empty(),
        }
    }

    // =========================================================================
    // Views and Conversions
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self.slot.get() {
            Some(value) => Optional::new(value),
            None => Optional::empty(),
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        match self.slot.get_mut() {
            Some(value) => Optional::new(value),
            None => Optional::empty(),
        }
    }

    /// Returns an iterator over the zero or one contained value.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.slot.get().into_iter()
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.slot.into_inner()
    }
}

impl<T: Clone> Optional<T> {
    /// Returns a copy of the contained value, or `default` converted into `T`.
    ///
    /// Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Optional;
    ///
    /// let empty: Optional<String> = Optional::empty();
    /// assert_eq!(empty.get_value_or("anonymous"), "anonymous");
    /// ```
    pub fn get_value_or<U>(&self, default: U) -> T
    where
        U: Into<T>,
    {
        self.slot.get().map_or_else(|| default.into(), Clone::clone)
    }
}

/// Creates an engaged optional from anything convertible into `T`.
///
/// # Examples
///
/// ```rust
/// use tinyfun::control::{make_optional, Optional};
///
/// let name: Optional<String> = make_optional("max");
/// assert_eq!(name.get_value().map(String::as_str), Ok("max"));
/// ```
pub fn make_optional<T, A>(arguments: A) -> Optional<T>
where
    A: Into<T>,
{
    Optional::new(arguments.into())
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Optional<T> {
    /// Creates an empty optional.
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Optional<T> {
    type Target = T;

    /// Unchecked access to the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the optional is empty.
    fn deref(&self) -> &T {
        match self.slot.get() {
            Some(value) => value,
            None => panic!("unchecked access to an empty Optional"),
        }
    }
}

impl<T> DerefMut for Optional<T> {
    fn deref_mut(&mut self) -> &mut T {
        match self.slot.get_mut() {
            Some(value) => value,
            None => panic!("unchecked access to an empty Optional"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or_else(Self::empty, Self::new)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.slot.into_inner()
    }
}

impl<T> From<&Optional<T>> for bool {
    /// `true` iff the optional is engaged.
    fn from(optional: &Optional<T>) -> Self {
        optional.has_value()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slot.into_inner().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => formatter.debug_tuple("Engaged").field(value).finish(),
            None => formatter.write_str("Empty"),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.slot.get().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
