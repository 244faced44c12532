//! Tests for history replay and serialized histories.

use strictly_counters::{make_counter, Counter, Tick, TickError};

#[test]
fn test_replay_reproduces_recorded_state() {
    let counter = make_counter(4);
    for _ in 0..3 {
        counter.tick().expect("Valid tick");
    }

    let snapshot = counter.snapshot();
    let replayed =
        Counter::replay(snapshot.step(), snapshot.history()).expect("Valid replay");

    assert_eq!(replayed.snapshot(), snapshot);
}

#[test]
fn test_replay_of_empty_history_is_a_fresh_counter() {
    let replayed = Counter::replay(11, &[]).expect("Valid replay");

    assert_eq!(replayed.total(), 0);
    assert_eq!(replayed.ticks(), 0);
    assert_eq!(replayed.tick().expect("Valid tick"), 11);
}

#[test]
fn test_replay_rejects_foreign_history() {
    let counter = make_counter(4);
    for _ in 0..3 {
        counter.tick().expect("Valid tick");
    }

    // Same history, wrong step
    let result = Counter::replay(5, counter.snapshot().history());
    assert!(matches!(result, Err(TickError::TraceMismatch { .. })));
}

#[test]
fn test_replay_rejects_tampered_history() {
    let history = vec![Tick::new(4), Tick::new(9), Tick::new(12)];

    let result = Counter::replay(4, &history);
    assert!(matches!(
        result,
        Err(TickError::TraceMismatch {
            recorded: 9,
            expected: 8
        })
    ));
}

#[test]
fn test_replayed_counter_keeps_counting() {
    let counter = make_counter(6);
    counter.tick().expect("Valid tick");
    counter.tick().expect("Valid tick");

    let replayed =
        Counter::replay(6, counter.snapshot().history()).expect("Valid replay");

    // Replayed and original are independent from here on
    assert_eq!(replayed.tick().expect("Valid tick"), 18);
    assert_eq!(counter.total(), 12);
}

#[test]
fn test_serialized_history_replays() {
    let counter = make_counter(-3);
    for _ in 0..4 {
        counter.tick().expect("Valid tick");
    }

    let json = serde_json::to_string(counter.snapshot().history()).expect("Serializable");
    let history: Vec<Tick> = serde_json::from_str(&json).expect("Deserializable");

    let replayed = Counter::replay(-3, &history).expect("Valid replay");
    assert_eq!(replayed.snapshot(), counter.snapshot());
}
