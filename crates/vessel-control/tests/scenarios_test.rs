//! Composing the containers instead of relying on nulls, in-place mutation and raised errors.

use std::num::ParseIntError;

use vessel_control::{Attempt, Either, Fault, Optional};

fn head(items: &[i32]) -> Optional<i32> {
    Optional::of(items.first().copied())
}

fn divide(x: i32, y: i32) -> Either<Fault, i32> {
    if y == 0 {
        Either::left(Fault::msg("The denominator can not be 0"))
    } else {
        Either::right(x / y)
    }
}

fn add(x: &str, y: &str) -> Attempt<i32> {
    let x = Attempt::of(|| x.parse::<i32>());
    let y = Attempt::of(|| y.parse::<i32>());
    x.flat_map(|x| y.map(|y| x + y))
}

// ---------------------------------------------------------------------------
// absence
// ---------------------------------------------------------------------------

#[test]
fn consumer_always_knows_head_may_be_missing() {
    let described = head(&[]).fold(|| "No Element".to_string(), |x| x.to_string());
    assert_eq!(described, "No Element");
    let described = head(&[4, 5]).fold(|| "No Element".to_string(), |x| x.to_string());
    assert_eq!(described, "4");
}

#[test]
fn optional_feeds_a_list_fold() {
    let sum = |items: Vec<i32>| items.into_iter().fold(0, |acc, item| acc + item);
    assert_eq!(sum(Optional::some(1).into_iter().collect()), 1);
    assert_eq!(sum(Optional::none().into_iter().collect()), 0);
}

#[test]
fn first_element_through_optional() {
    assert_eq!(head(&[1, 2, 3]), Optional::some(1));
}

// ---------------------------------------------------------------------------
// errors as values
// ---------------------------------------------------------------------------

#[test]
fn division_by_zero_is_a_left() {
    assert_eq!(divide(6, 3), Either::right(2));
    let failed = divide(1, 0);
    assert!(failed.is_left());
    assert_eq!(
        failed.get_left().map(Fault::message),
        Ok("The denominator can not be 0".to_string())
    );
}

#[test]
fn adding_parsed_strings() {
    assert_eq!(add("1", "2"), Attempt::success(3));
}

#[test]
fn adding_unparseable_strings_keeps_the_parse_error() {
    let sum = add("1", "a");
    assert!(sum.is_failure());
    assert!(
        sum.get_cause()
            .expect("cause")
            .is::<ParseIntError>()
    );
}

#[test]
fn chained_conversions_round_trip() {
    assert_eq!(Attempt::success(1).to_option(), Optional::some(1));
    assert_eq!(
        Attempt::<i32>::failure(Fault::msg("Error")).to_option(),
        Optional::none()
    );
    assert_eq!(Attempt::success(1).to_either(), Either::right(1));
    assert_eq!(Optional::some(1).to_either("Error").to_option(), Optional::some(1));
    assert_eq!(
        Optional::<i32>::none().to_either("Error").to_option(),
        Optional::none()
    );
}

#[test]
fn inputs_are_left_untouched() {
    let first = vec![1, 2];
    let second = vec![3, 4];
    let joined = Optional::traverse(first.iter().chain(second.iter()), |item| {
        Optional::some(*item)
    });
    assert_eq!(joined, Optional::some(vec![1, 2, 3, 4]));
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
}
