//! The `compose!` macro for function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the returned closure
/// owns the whole chain and threads its argument from the last function to
/// the first.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `move |x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use tinyfun::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
///
/// // add_one(double(square(3))) = add_one(double(9)) = 19
/// assert_eq!(compose!(add_one, double, square)(3), 19);
/// ```
///
/// Types change along the chain:
///
/// ```
/// use tinyfun::compose;
///
/// let length_of_number = compose!(|text: String| text.len(), |n: i32| n.to_string());
/// assert_eq!(length_of_number(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner(input))
    }};
}
