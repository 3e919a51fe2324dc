//! Mapping a function over containers.
//!
//! [`fmap`] has two shapes, selected by what it is given:
//!
//! - **Optionals** (a single [`Optional`] or a tuple of up to six): the
//!   function is invoked with all contained values only if every optional is
//!   engaged; otherwise the result is empty and the function never runs.
//! - **A borrowed collection** (`&C` where `&C: IntoIterator`): the result is
//!   a [`Transformation`] view. Nothing is computed until the view is
//!   materialized with [`Transformation::collect`] or iterated.
//!
//! # Examples
//!
//! ```rust
//! use tinyfun::compose::fmap;
//! use tinyfun::control::Optional;
//!
//! let sum = fmap(|a: i32, b: i32| a + b, (Optional::new(1), Optional::new(2)));
//! assert_eq!(sum, Optional::new(3));
//!
//! let numbers = vec![1, 2, 3];
//! let squares: Vec<i32> = fmap(|n: &i32| n * n, &numbers).collect();
//! assert_eq!(squares, vec![1, 4, 9]);
//! ```

use crate::control::Optional;

/// Containers a function can be mapped over with [`fmap`].
pub trait Fmap<F> {
    /// The result of mapping `F` over `Self`.
    type Output;

    /// Maps `function` over `self`.
    fn fmap(self, function: F) -> Self::Output;
}

/// Maps `function` over `source`.
///
/// See the [module documentation](self) for the two shapes of `source`.
#[inline]
pub fn fmap<F, S>(function: F, source: S) -> S::Output
where
    S: Fmap<F>,
{
    source.fmap(function)
}

impl<F, R, A> Fmap<F> for Optional<A>
where
    F: FnOnce(A) -> R,
{
    type Output = Optional<R>;

    fn fmap(self, function: F) -> Optional<R> {
        self.map(function)
    }
}

macro_rules! impl_fmap_for_optional_tuple {
    ($($value_type:ident $value:ident),+) => {
        impl<F, R, $($value_type),+> Fmap<F> for ($(Optional<$value_type>,)+)
        where
            F: FnOnce($($value_type),+) -> R,
        {
            type Output = Optional<R>;

            fn fmap(self, function: F) -> Optional<R> {
                let ($($value,)+) = self;
                if $($value.has_value())&&+ {
                    Optional::new(function($($value.into_inner()),+))
                } else {
                    Optional::empty()
                }
            }
        }
    };
}

impl_fmap_for_optional_tuple!(A a);
impl_fmap_for_optional_tuple!(A a, B b);
impl_fmap_for_optional_tuple!(A a, B b, C c);
impl_fmap_for_optional_tuple!(A a, B b, C c, D d);
impl_fmap_for_optional_tuple!(A a, B b, C c, D d, E e);
impl_fmap_for_optional_tuple!(A a, B b, C c, D d, E e, G g);

impl<'a, C, F> Fmap<F> for &'a C
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    type Output = Transformation<'a, C, F>;

    fn fmap(self, function: F) -> Transformation<'a, C, F> {
        Transformation {
            source: self,
            function,
        }
    }
}

/// A lazy view mapping a function over a borrowed collection.
///
/// The view only holds the collection and the function. Each
/// materialization makes one forward pass over the source, applying the
/// function to every element in order. The output container type is chosen
/// by the caller and need not match the source's.
///
/// # Examples
///
/// ```rust
/// use std::collections::LinkedList;
/// use tinyfun::compose::fmap;
///
/// let words = ["a", "bb", "ccc"];
/// let lengths = fmap(|word: &&str| word.len(), &words);
///
/// let as_list: LinkedList<usize> = lengths.collect();
/// assert_eq!(as_list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub struct Transformation<'a, C: ?Sized, F> {
    source: &'a C,
    function: F,
}

impl<'a, C, F> Transformation<'a, C, F>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    /// Returns an iterator applying the function to each source element.
    pub fn iter<U>(&self) -> impl Iterator<Item = U> + '_
    where
        F: Fn(<&'a C as IntoIterator>::Item) -> U,
    {
        self.source.into_iter().map(&self.function)
    }

    /// Materializes the view into a new container of type `B`.
    ///
    /// Same as [`Transformation::collect`].
    pub fn get<B, U>(&self) -> B
    where
        F: Fn(<&'a C as IntoIterator>::Item) -> U,
        B: FromIterator<U>,
    {
        self.collect()
    }

    /// Materializes the view into a new container of type `B`.
    ///
    /// This is where the function is invoked, once per source element.
    pub fn collect<B, U>(&self) -> B
    where
        F: Fn(<&'a C as IntoIterator>::Item) -> U,
        B: FromIterator<U>,
    {
        self.iter().collect()
    }
}

impl<'a, C, F, U> IntoIterator for Transformation<'a, C, F>
where
    C: ?Sized,
    &'a C: IntoIterator,
    F: FnMut(<&'a C as IntoIterator>::Item) -> U,
{
    type Item = U;
    type IntoIter = std::iter::Map<<&'a C as IntoIterator>::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter().map(self.function)
    }
}
