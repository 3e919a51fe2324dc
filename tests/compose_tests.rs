#![cfg(feature = "compose")]
//! Tests for the compose! macro and identity.

use rstest::rstest;
use tinyfun::compose;
use tinyfun::compose::identity;

fn add_one(x: i32) -> i32 {
    x + 1
}

fn double(x: i32) -> i32 {
    x * 2
}

fn square(x: i32) -> i32 {
    x * x
}

#[rstest]
fn compose_single_function_is_unchanged() {
    assert_eq!(compose!(double)(21), 42);
}

#[rstest]
#[case(0, 1)]
#[case(5, 11)]
#[case(-3, -5)]
fn compose_two_functions(#[case] input: i32, #[case] expected: i32) {
    let composed = compose!(add_one, double);
    assert_eq!(composed(input), expected);
}

#[rstest]
fn compose_applies_rightmost_first() {
    // add_one(double(square(3))) = add_one(double(9)) = 19
    assert_eq!(compose!(add_one, double, square)(3), 19);
    // square(double(add_one(3))) = square(8) = 64
    assert_eq!(compose!(square, double, add_one)(3), 64);
}

#[rstest]
fn compose_changes_types_along_the_chain() {
    let describe = compose!(
        |length: usize| format!("{length} digits"),
        |text: String| text.len(),
        |n: u64| n.to_string()
    );
    assert_eq!(describe(12345), "5 digits");
}

#[rstest]
fn compose_with_closures_capturing_state() {
    let offset = 100;
    let shifted = compose!(move |x: i32| x + offset, double);
    assert_eq!(shifted(1), 102);
}

#[rstest]
fn compose_with_identity() {
    assert_eq!(compose!(identity, double)(7), double(7));
    assert_eq!(compose!(double, identity)(7), double(7));
}

#[rstest]
fn composed_function_is_reusable() {
    let composed = compose!(add_one, square);
    let results: Vec<i32> = (1..=3).map(&composed).collect();
    assert_eq!(results, vec![2, 5, 10]);
    assert_eq!(composed(4), 17);
}

#[rstest]
fn compose_accepts_trailing_comma() {
    assert_eq!(compose!(add_one, double,)(1), 3);
}
