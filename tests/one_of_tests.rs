#![cfg(feature = "control")]
//! Unit tests for OneOf<A, B>.

use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;
use tinyfun::BadAccess;
use tinyfun::control::OneOf;

type Payment = OneOf<String, f32>;

#[rstest]
fn first_alternative_is_held() {
    let card = Payment::with_value1("Alex".to_string());
    assert!(card.is_value1());
    assert!(!card.is_value2());
    assert_eq!(card.get_value1().map(String::as_str), Ok("Alex"));
}

#[rstest]
fn second_alternative_is_held() {
    let cash = Payment::with_value2(23.7);
    assert!(cash.is_value2());
    assert!(!cash.is_value1());
    assert_eq!(cash.get_value2(), Ok(&23.7));
}

#[rstest]
fn wrong_alternative_signals_bad_access() {
    let mut cash = Payment::with_value2(23.7);
    let expected = BadAccess::InactiveAlternative {
        requested: 1,
        held: 2,
    };
    assert_eq!(cash.get_value1(), Err(expected));
    assert_eq!(cash.get_value1_mut(), Err(expected));
    assert_eq!(cash.into_value1(), Err(expected));

    let card = Payment::with_value1(String::new());
    assert_eq!(
        card.into_value2(),
        Err(BadAccess::InactiveAlternative {
            requested: 2,
            held: 1,
        })
    );
}

#[rstest]
fn bad_access_message_names_both_alternatives() {
    let error = Payment::with_value2(1.0).get_value1().unwrap_err();
    assert_eq!(error.to_string(), "bad access: requested value1 but value2 is held");
}

#[rstest]
fn held_payload_can_be_mutated() {
    let mut card = Payment::with_value1("Al".to_string());
    card.get_value1_mut().unwrap().push_str("ex");
    assert_eq!(card.into_value1(), Ok("Alex".to_string()));
}

#[rstest]
fn clone_preserves_alternative() {
    let original = Payment::with_value1("copy".to_string());
    let copy = original.clone();
    assert_eq!(original, copy);
    assert!(copy.is_value1());
}

#[rstest]
fn same_type_alternatives_stay_distinct() {
    let first: OneOf<i32, i32> = OneOf::with_value1(1);
    let second: OneOf<i32, i32> = OneOf::with_value2(1);
    assert_ne!(first, second);
    assert_eq!(first.get_value2(), Err(BadAccess::InactiveAlternative { requested: 2, held: 1 }));
}

#[rstest]
#[case(OneOf::with_value1(3), "left 3")]
#[case(OneOf::with_value2('r'), "right r")]
fn fold_applies_matching_function(#[case] value: OneOf<i32, char>, #[case] expected: &str) {
    let description = value.fold(|left| format!("left {left}"), |right| format!("right {right}"));
    assert_eq!(description, expected);
}

#[rstest]
fn into_result_maps_alternatives() {
    assert_eq!(OneOf::<u8, &str>::with_value1(1).into_result(), Ok(1));
    assert_eq!(OneOf::<u8, &str>::with_value2("e").into_result(), Err("e"));
}

#[rstest]
fn debug_names_alternative() {
    assert_eq!(format!("{:?}", Payment::with_value2(2.5)), "Value2(2.5)");
    assert_eq!(format!("{:?}", OneOf::<i32, ()>::with_value1(4)), "Value1(4)");
}

struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[rstest]
fn only_held_alternative_is_dropped() {
    let drops = Rc::new(Cell::new(0));
    {
        let _value: OneOf<DropCounter, String> = OneOf::with_value1(DropCounter(Rc::clone(&drops)));
    }
    assert_eq!(drops.get(), 1);

    {
        let _value: OneOf<String, DropCounter> = OneOf::with_value1(String::from("unrelated"));
    }
    assert_eq!(drops.get(), 1);
}
