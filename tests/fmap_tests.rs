#![cfg(feature = "compose")]
//! Tests for fmap over Optionals and over collections.

use rstest::rstest;
use std::cell::Cell;
use std::collections::{BTreeSet, LinkedList, VecDeque};
use tinyfun::compose::{Fmap, fmap};
use tinyfun::control::Optional;

// =============================================================================
// Optionals
// =============================================================================

fn strcat(left: i32, right: i32) -> String {
    format!("{left}{right}")
}

#[rstest]
fn fmap_two_engaged_optionals() {
    let result = fmap!(strcat, Optional::new(3), Optional::new(3));
    assert!(result.has_value());
    assert_eq!(*result, "33");
}

#[rstest]
#[case(Optional::new(3), Optional::empty())]
#[case(Optional::empty(), Optional::new(3))]
#[case(Optional::empty(), Optional::empty())]
fn fmap_with_any_empty_optional_is_empty(#[case] left: Optional<i32>, #[case] right: Optional<i32>) {
    assert!(fmap(strcat, (left, right)).is_empty());
}

#[rstest]
fn fmap_never_invokes_function_when_an_optional_is_empty() {
    let called = Cell::new(false);
    let result = fmap!(
        |a: i32, b: i32, c: i32| {
            called.set(true);
            a + b + c
        },
        Optional::new(1),
        Optional::empty(),
        Optional::new(3)
    );
    assert!(result.is_empty());
    assert!(!called.get());
}

#[rstest]
fn fmap_single_optional() {
    assert_eq!(fmap(|n: i32| n + 1, Optional::new(1)), Optional::new(2));
    assert!(fmap(|n: i32| n + 1, Optional::empty()).is_empty());
}

#[rstest]
fn fmap_six_optionals() {
    let result = fmap!(
        |a: u8, b: u16, c: u32, d: i8, e: i16, f: i32| {
            i64::from(a) + i64::from(b) + i64::from(c) + i64::from(d) + i64::from(e) + i64::from(f)
        },
        Optional::new(1),
        Optional::new(2),
        Optional::new(3),
        Optional::new(4),
        Optional::new(5),
        Optional::new(6),
    );
    assert_eq!(result, Optional::new(21));
}

#[rstest]
fn fmap_method_form() {
    let result = (Optional::new("a"), Optional::new(2)).fmap(|text: &str, count: usize| text.repeat(count));
    assert_eq!(result, Optional::new("aa".to_string()));
}

// =============================================================================
// Collections
// =============================================================================

#[rstest]
fn fmap_squares_a_vector() {
    let numbers = vec![1, 2, 3, 4, 5];
    let squares: Vec<i32> = fmap(|n: &i32| n * n, &numbers).collect();
    assert_eq!(squares, vec![1, 4, 9, 16, 25]);
}

#[rstest]
fn fmap_into_a_different_container() {
    let numbers = vec![1, 2, 3];
    let doubled: LinkedList<i32> = fmap(|n: &i32| n * 2, &numbers).collect();
    assert_eq!(doubled.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);

    let words: VecDeque<&str> = VecDeque::from(["b", "a", "b"]);
    let unique: BTreeSet<String> = fmap(|word: &&str| word.to_uppercase(), &words).collect();
    assert_eq!(unique.into_iter().collect::<Vec<_>>(), vec!["A", "B"]);
}

#[rstest]
fn fmap_over_empty_collection() {
    let empty: Vec<i32> = Vec::new();
    let result: Vec<i32> = fmap(|n: &i32| n + 1, &empty).collect();
    assert!(result.is_empty());
}

#[rstest]
fn fmap_over_collection_is_lazy() {
    let calls = Cell::new(0);
    let numbers = [1, 2, 3];
    let view = fmap(
        |n: &i32| {
            calls.set(calls.get() + 1);
            n * 10
        },
        &numbers,
    );
    assert_eq!(calls.get(), 0);

    let first: Vec<i32> = view.collect();
    assert_eq!(first, vec![10, 20, 30]);
    assert_eq!(calls.get(), 3);

    let second: Vec<i32> = view.collect();
    assert_eq!(second, first);
    assert_eq!(calls.get(), 6);
}

#[rstest]
fn fmap_view_iterates_in_source_order() {
    let letters = vec!['a', 'b', 'c'];
    let view = fmap(|c: &char| c.to_ascii_uppercase(), &letters);
    assert_eq!(view.iter().collect::<String>(), "ABC");

    let mut upper = Vec::new();
    for letter in view {
        upper.push(letter);
    }
    assert_eq!(upper, vec!['A', 'B', 'C']);
}

#[rstest]
fn fmap_over_slice() {
    let values: &[u8] = &[1, 2];
    let view = fmap(|value: &u8| u32::from(*value) << 8, values);
    let widened: Vec<u32> = view.get();
    assert_eq!(widened, vec![256, 512]);
    assert_eq!(view.get::<LinkedList<u32>, _>().len(), 2);
}
