//! The `curry!` macro for converting multi-argument functions to curried form.
//!
//! Currying is fixed-arity: the number of arguments is written next to the
//! function, and every intermediate closure captures exactly one more
//! argument. The function itself is shared between the intermediate closures
//! through `std::rc::Rc`, and captured arguments are cloned on each final
//! call, so partial applications can be reused:
//!
//! ```
//! use tinyfun::curry;
//!
//! fn multiply_times(times: u32, value: i64) -> i64 {
//!     (0..times).fold(1, |product, _| product * value)
//! }
//!
//! let square = curry!(multiply_times, 2)(2);
//! let cube = curry!(multiply_times, 2)(3);
//! assert_eq!(square(5), 25);
//! assert_eq!(cube(5), 125);
//! ```

/// Converts a function of `N` arguments (1 to 6) into `N` nested
/// one-argument closures.
///
/// `curry!(f, 3)(a)(b)(c) == f(a, b, c)`. The function is only invoked once
/// the last argument is supplied.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types except the last must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use tinyfun::curry;
///
/// fn add3(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry!(add3, 3);
/// assert_eq!(curried(1)(2)(3), add3(1, 2, 3));
///
/// let add_ten_and = curried(4)(6);
/// assert_eq!(add_ten_and(1), 11);
/// assert_eq!(add_ten_and(5), 15);
/// ```
///
/// An arity that does not match the function fails to compile:
///
/// ```compile_fail
/// use tinyfun::curry;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let _ = curry!(add, 3)(1)(2)(3);
/// ```
#[macro_export]
macro_rules! curry {
    ($function:expr, 1 $(,)?) => {{
        let function = $function;
        move |first| function(first)
    }};

    ($function:expr, 2 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};

    ($function:expr, 3 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};

    ($function:expr, 4 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};

    ($function:expr, 5 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        let function = ::std::rc::Rc::clone(&function);
                        let first = ::std::clone::Clone::clone(&first);
                        let second = ::std::clone::Clone::clone(&second);
                        let third = ::std::clone::Clone::clone(&third);
                        move |fifth| {
                            function(
                                ::std::clone::Clone::clone(&first),
                                ::std::clone::Clone::clone(&second),
                                ::std::clone::Clone::clone(&third),
                                ::std::clone::Clone::clone(&fourth),
                                fifth,
                            )
                        }
                    }
                }
            }
        }
    }};

    ($function:expr, 6 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        let function = ::std::rc::Rc::clone(&function);
                        let first = ::std::clone::Clone::clone(&first);
                        let second = ::std::clone::Clone::clone(&second);
                        let third = ::std::clone::Clone::clone(&third);
                        move |fifth| {
                            let function = ::std::rc::Rc::clone(&function);
                            let first = ::std::clone::Clone::clone(&first);
                            let second = ::std::clone::Clone::clone(&second);
                            let third = ::std::clone::Clone::clone(&third);
                            let fourth = ::std::clone::Clone::clone(&fourth);
                            move |sixth| {
                                function(
                                    ::std::clone::Clone::clone(&first),
                                    ::std::clone::Clone::clone(&second),
                                    ::std::clone::Clone::clone(&third),
                                    ::std::clone::Clone::clone(&fourth),
                                    ::std::clone::Clone::clone(&fifth),
                                    sixth,
                                )
                            }
                        }
                    }
                }
            }
        }
    }};
}
