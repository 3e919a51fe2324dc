#![cfg(feature = "compose")]
//! Tests for strip.

use rstest::rstest;
use std::cell::Cell;
use tinyfun::compose::{Strip, strip};
use tinyfun::control::{Lazy, Optional};

#[rstest]
#[case(Optional::new(3), 3)]
#[case(Optional::empty(), 0)]
fn strip_optional(#[case] optional: Optional<i32>, #[case] expected: i32) {
    assert_eq!(strip(optional), expected);
}

#[rstest]
fn strip_empty_optional_string_is_empty() {
    assert_eq!(strip(Optional::<String>::empty()), "");
}

#[rstest]
fn strip_option() {
    assert_eq!(strip(Some(vec![1])), vec![1]);
    assert_eq!(strip(None::<Vec<i32>>), Vec::<i32>::new());
}

#[rstest]
fn strip_forces_lazy() {
    let evaluated = Cell::new(false);
    let lazy = Lazy::new(|| {
        evaluated.set(true);
        "forced"
    });
    assert!(!evaluated.get());
    assert_eq!(lazy.strip(), "forced");
    assert!(evaluated.get());
}
