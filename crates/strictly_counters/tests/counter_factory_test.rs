//! Tests for the counter factory contract.

use strictly_counters::{make_counter, TickError};

#[test]
fn test_first_tick_returns_step() {
    for step in [1, 10, -3, 0, 42, i64::MAX, i64::MIN] {
        let counter = make_counter(step);
        assert_eq!(counter.tick().expect("Valid tick"), step);
    }
}

#[test]
fn test_nth_tick_returns_step_times_n() {
    let counter = make_counter(9);

    for n in 1..=100i64 {
        assert_eq!(counter.tick().expect("Valid tick"), 9 * n);
    }

    assert_eq!(counter.ticks(), 100);
    assert_eq!(counter.total(), 900);
}

#[test]
fn test_zero_step_stays_at_zero() {
    let counter = make_counter(0);

    for _ in 0..10 {
        assert_eq!(counter.tick().expect("Valid tick"), 0);
    }
}

#[test]
fn test_negative_step_counts_down() {
    let counter = make_counter(-5);

    assert_eq!(counter.tick().expect("Valid tick"), -5);
    assert_eq!(counter.tick().expect("Valid tick"), -10);
    assert_eq!(counter.tick().expect("Valid tick"), -15);
}

#[test]
fn test_separate_counters_are_independent() {
    let by_ten = make_counter(10);
    let by_seven = make_counter(7);

    assert_eq!(by_ten.tick().expect("Valid tick"), 10);
    assert_eq!(by_ten.tick().expect("Valid tick"), 20);

    assert_eq!(by_seven.tick().expect("Valid tick"), 7);
    assert_eq!(by_seven.tick().expect("Valid tick"), 14);

    // by_seven's activity must not have perturbed by_ten
    assert_eq!(by_ten.tick().expect("Valid tick"), 30);
}

#[test]
fn test_step_is_fixed_at_creation() {
    let counter = make_counter(4);
    counter.tick().expect("Valid tick");

    assert_eq!(counter.step(), 4);
}

#[test]
fn test_overflow_is_an_explicit_error() {
    let counter = make_counter(i64::MAX);

    assert_eq!(counter.tick().expect("Valid tick"), i64::MAX);

    let result = counter.tick();
    assert!(matches!(result, Err(TickError::Overflow { .. })));

    // The failed tick left the counter unchanged
    assert_eq!(counter.total(), i64::MAX);
    assert_eq!(counter.ticks(), 1);
}

#[test]
fn test_negative_overflow_is_an_explicit_error() {
    let counter = make_counter(i64::MIN);

    assert_eq!(counter.tick().expect("Valid tick"), i64::MIN);

    let result = counter.tick();
    assert!(matches!(
        result,
        Err(TickError::Overflow {
            total: i64::MIN,
            step: i64::MIN
        })
    ));
}
