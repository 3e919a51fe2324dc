//! Calling a function with a tuple of arguments.
//!
//! [`Apply`] lets code that stores "a function plus its arguments" keep them
//! as a single tuple and invoke the function later. It is implemented for
//! every [`FnOnce`] of arity 0 to 6.
//!
//! # Examples
//!
//! ```rust
//! use tinyfun::apply::{apply, Apply};
//!
//! fn add3(first: i32, second: i32, third: i32) -> i32 {
//!     first + second + third
//! }
//!
//! assert_eq!(apply(add3, (1, 2, 3)), 6);
//! assert_eq!((|| "no arguments").apply(()), "no arguments");
//! ```

/// A function that can be invoked with its arguments packed in a tuple.
pub trait Apply<Arguments> {
    /// The function's return type.
    type Output;

    /// Invokes the function, unpacking `arguments` into its parameters.
    fn apply(self, arguments: Arguments) -> Self::Output;
}

macro_rules! impl_apply {
    ($($argument_type:ident $argument:ident),*) => {
        impl<Function, Output, $($argument_type),*> Apply<($($argument_type,)*)> for Function
        where
            Function: FnOnce($($argument_type),*) -> Output,
        {
            type Output = Output;

            #[inline]
            #[allow(clippy::unused_unit)]
            fn apply(self, ($($argument,)*): ($($argument_type,)*)) -> Output {
                self($($argument),*)
            }
        }
    };
}

impl_apply!();
impl_apply!(A a);
impl_apply!(A a, B b);
impl_apply!(A a, B b, C c);
impl_apply!(A a, B b, C c, D d);
impl_apply!(A a, B b, C c, D d, E e);
impl_apply!(A a, B b, C c, D d, E e, G g);

/// Invokes `function` with the tuple `arguments`.
#[inline]
pub fn apply<Function, Arguments>(function: Function, arguments: Arguments) -> Function::Output
where
    Function: Apply<Arguments>,
{
    function.apply(arguments)
}
