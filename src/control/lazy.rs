//! Lazy evaluation with memoization.
//!
//! This module provides the `Lazy<T, F>` type for lazy evaluation.
//! Values are computed only when needed and cached for subsequent accesses.
//!
//! # Examples
//!
//! ```rust
//! use tinyfun::control::Lazy;
//!
//! let lazy = Lazy::new(|| {
//!     println!("Computing...");
//!     42
//! });
//!
//! // No output yet - computation is deferred
//! assert!(!lazy.has_evaluated());
//!
//! // Now "Computing..." is printed
//! assert_eq!(*lazy.get(), 42);
//!
//! // No recomputation - result is memoized
//! assert_eq!(*lazy, 42);
//! assert!(lazy.has_evaluated());
//! ```

use std::cell::{Cell, OnceCell, RefCell};
use std::fmt;
use std::ops::Deref;

use crate::apply::Apply;

const POISONED: &str = "Lazy instance has been poisoned";
const REENTRANT: &str = "Lazy instance accessed during its own evaluation";

/// A lazily evaluated value with memoization.
///
/// `Lazy<T, F>` defers computation until the value is first accessed via
/// [`get`](Lazy::get) or dereference. Once computed, the value is cached and
/// every later access returns the cached value without recomputation.
///
/// # Type Parameters
///
/// * `T` - The type of the computed value
/// * `F` - The type of the deferred computation (defaults to `fn() -> T`)
///
/// # Thread Safety
///
/// `Lazy` is not `Sync`; the compiler rejects sharing it between threads,
/// so two callers can never race on the first evaluation.
///
/// # Poisoning
///
/// If the computation panics, the lazy value is poisoned and every later
/// access panics as well. Accessing the value from inside its own
/// computation panics with a separate message; if that panic escapes the
/// computation, the value ends up poisoned.
///
/// # Examples
///
/// ```rust
/// use tinyfun::control::Lazy;
/// use std::cell::Cell;
///
/// let call_count = Cell::new(0);
/// let lazy = Lazy::new(|| {
///     call_count.set(call_count.get() + 1);
///     42
/// });
///
/// assert_eq!(call_count.get(), 0); // Not called yet
///
/// let _ = lazy.get();
/// let _ = lazy.get();
/// assert_eq!(call_count.get(), 1); // Called once
/// ```
pub struct Lazy<T, F = fn() -> T> {
    initializer: RefCell<Option<F>>,
    value: OnceCell<T>,
    poisoned: Cell<bool>,
}

/// Marks the lazy value as poisoned unless defused with `mem::forget`
/// after the computation returns.
struct PoisonOnUnwind<'a> {
    poisoned: &'a Cell<bool>,
}

impl Drop for PoisonOnUnwind<'_> {
    fn drop(&mut self) {
        self.poisoned.set(true);
    }
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value from a zero-argument computation.
    ///
    /// The computation will not run until the value is first accessed.
    #[inline]
    pub const fn new(initializer: F) -> Self {
        Self {
            initializer: RefCell::new(Some(initializer)),
            value: OnceCell::new(),
            poisoned: Cell::new(false),
        }
    }

    /// Returns a reference to the value, computing it on first access.
    ///
    /// # Panics
    ///
    /// - If the computation panics; the lazy value is poisoned afterwards.
    /// - If the lazy value is already poisoned.
    /// - If called from inside the computation itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| "hello".to_string());
    /// assert_eq!(lazy.get().len(), 5);
    /// ```
    pub fn get(&self) -> &T {
        if let Some(value) = self.value.get() {
            return value;
        }
        let initializer = self.initializer.borrow_mut().take();
        let Some(initializer) = initializer else {
            if self.poisoned.get() {
                tracing::warn!(target: "tinyfun::lazy", "access to a poisoned Lazy");
                panic!("{POISONED}");
            }
            tracing::warn!(target: "tinyfun::lazy", "re-entrant access to a Lazy under evaluation");
            panic!("{REENTRANT}");
        };
        tracing::trace!(target: "tinyfun::lazy", "evaluating deferred computation");
        let guard = PoisonOnUnwind {
            poisoned: &self.poisoned,
        };
        let value = initializer();
        std::mem::forget(guard);
        self.value.get_or_init(|| value)
    }

    /// Returns a mutable reference to the value, computing it on first
    /// access.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Lazy::get`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Lazy;
    ///
    /// let mut lazy = Lazy::new(|| vec![1, 2, 3]);
    /// lazy.get_mut().push(4);
    /// assert_eq!(lazy.get().as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn get_mut(&mut self) -> &mut T {
        self.get();
        match self.value.get_mut() {
            Some(value) => value,
            None => unreachable!("Lazy should be evaluated at this point"),
        }
    }

    /// Consumes the lazy value and returns the computed value, computing it
    /// if it has not been evaluated yet.
    ///
    /// # Panics
    ///
    /// Panics if the lazy value is poisoned.
    pub fn into_inner(self) -> T {
        let Self { initializer, value, .. } = self;
        if let Some(value) = value.into_inner() {
            return value;
        }
        match initializer.into_inner() {
            Some(initializer) => {
                tracing::trace!(target: "tinyfun::lazy", "evaluating deferred computation");
                initializer()
            }
            None => {
                tracing::warn!(target: "tinyfun::lazy", "access to a poisoned Lazy");
                panic!("{POISONED}")
            }
        }
    }
}

impl<T> Lazy<T> {
    /// Creates a lazy value that captures `function` together with its
    /// `arguments` tuple. Nothing is evaluated until the first access.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Lazy;
    ///
    /// fn power(base: u64, exponent: u32) -> u64 {
    ///     base.pow(exponent)
    /// }
    ///
    /// let lazy = Lazy::with_arguments(power, (2, 10));
    /// assert!(!lazy.has_evaluated());
    /// assert_eq!(*lazy, 1024);
    /// ```
    pub fn with_arguments<Function, Arguments>(
        function: Function,
        arguments: Arguments,
    ) -> Lazy<T, impl FnOnce() -> T>
    where
        Function: Apply<Arguments, Output = T>,
    {
        Lazy::new(move || function.apply(arguments))
    }

    /// Creates a lazy value that is already evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Lazy;
    ///
    /// let lazy = Lazy::new_with_value(42);
    /// assert!(lazy.has_evaluated());
    /// ```
    #[inline]
    pub fn new_with_value(value: T) -> Self {
        Self {
            initializer: RefCell::new(None),
            value: OnceCell::from(value),
            poisoned: Cell::new(false),
        }
    }

    /// Lifts a value into the lazy context. Alias of
    /// [`Lazy::new_with_value`].
    #[inline]
    pub fn pure(value: T) -> Self {
        Self::new_with_value(value)
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns whether the computation has already run.
    #[inline]
    pub fn has_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Always `true`: a lazy value always *will* produce a value.
    ///
    /// This is not the same as [`Lazy::has_evaluated`].
    #[inline]
    #[allow(clippy::unused_self)]
    pub const fn has_value(&self) -> bool {
        true
    }

    /// Returns the value if it has been computed, without triggering the
    /// computation.
    #[inline]
    pub fn try_get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Returns whether the computation panicked.
    ///
    /// A computation that is still running is not poisoned.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        self.poisoned.get()
    }

    fn is_evaluating(&self) -> bool {
        !self.poisoned.get() && self.value.get().is_none() && self.initializer.borrow().is_none()
    }
}

// =============================================================================
// Functor-like Operations (map, flat_map)
// =============================================================================

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Applies a function to the lazy value, producing a new lazy value.
    ///
    /// Neither value is computed until the result is accessed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Lazy;
    ///
    /// let doubled = Lazy::new(|| 21).map(|x| x * 2);
    /// assert_eq!(*doubled.get(), 42);
    /// ```
    pub fn map<U, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        G: FnOnce(T) -> U,
    {
        Lazy::new(move || function(self.into_inner()))
    }

    /// Applies a function that returns a `Lazy`, then flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Lazy;
    ///
    /// let result = Lazy::new(|| 21).flat_map(|x| Lazy::new(move || x * 2));
    /// assert_eq!(*result.get(), 42);
    /// ```
    pub fn flat_map<U, H, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        H: FnOnce() -> U,
        G: FnOnce(T) -> Lazy<U, H>,
    {
        Lazy::new(move || function(self.into_inner()).into_inner())
    }

    /// Combines two lazy values into a lazy tuple.
    pub fn zip<U, H>(self, other: Lazy<U, H>) -> Lazy<(T, U), impl FnOnce() -> (T, U)>
    where
        H: FnOnce() -> U,
    {
        Lazy::new(move || (self.into_inner(), other.into_inner()))
    }

    /// Combines two lazy values using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfun::control::Lazy;
    ///
    /// let sum = Lazy::new(|| 20).zip_with(Lazy::new(|| 22), |a, b| a + b);
    /// assert_eq!(*sum.get(), 42);
    /// ```
    pub fn zip_with<U, V, H, G>(self, other: Lazy<U, H>, function: G) -> Lazy<V, impl FnOnce() -> V>
    where
        H: FnOnce() -> U,
        G: FnOnce(T, U) -> V,
    {
        Lazy::new(move || function(self.into_inner(), other.into_inner()))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T, F: FnOnce() -> T> Deref for Lazy<T, F> {
    type Target = T;

    /// Same as [`Lazy::get`].
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T: Default> Default for Lazy<T> {
    /// Creates a lazy value that computes the default value of `T`.
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            None if self.is_poisoned() => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
            None if self.is_evaluating() => formatter.debug_tuple("Lazy").field(&"<evaluating>").finish(),
            None => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_lazy_basic_creation() {
        let lazy = Lazy::new(|| 42);
        assert!(!lazy.has_evaluated());
        assert!(lazy.has_value());
    }

    #[rstest]
    fn test_lazy_get_computes_value() {
        let lazy = Lazy::new(|| 42);
        assert_eq!(*lazy.get(), 42);
        assert!(lazy.has_evaluated());
    }

    #[rstest]
    fn test_lazy_memoization() {
        let call_count = Cell::new(0);
        let lazy = Lazy::new(|| {
            call_count.set(call_count.get() + 1);
            42
        });

        let first = *lazy.get();
        let second = *lazy;
        assert_eq!((first, second), (42, 42));
        assert_eq!(call_count.get(), 1);
    }

    #[rstest]
    fn test_lazy_try_get_does_not_evaluate() {
        let lazy = Lazy::new(|| 1);
        assert!(lazy.try_get().is_none());
        assert!(!lazy.has_evaluated());
    }

    #[rstest]
    fn test_lazy_panicking_computation_sets_poisoned_flag() {
        let lazy: Lazy<i32, _> = Lazy::new(|| panic!("boom"));
        assert!(!lazy.is_poisoned());
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| *lazy.get()));
        assert!(result.is_err());
        assert!(lazy.is_poisoned());
    }

    #[rstest]
    fn test_lazy_debug_format() {
        let lazy = Lazy::new(|| 7);
        assert_eq!(format!("{lazy:?}"), "Lazy(\"<uninit>\")");
        lazy.get();
        assert_eq!(format!("{lazy:?}"), "Lazy(7)");
    }
}
