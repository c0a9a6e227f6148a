//! SelectionState navigation tests

use findreadme_core::menu::{MenuPhase, SelectionState};
use findreadme_core::tui::NavAction;

#[test]
fn test_next_navigation_wraps_through_exit() {
    let mut state = SelectionState::new(3);
    assert_eq!(state.current(), 0);

    state.next();
    assert_eq!(state.current(), 1);
    state.next();
    assert_eq!(state.current(), 2);
    state.next();
    assert_eq!(state.current(), 3);

    // wrap around to first
    state.next();
    assert_eq!(state.current(), 0);
}

#[test]
fn test_previous_navigation_wraps_through_exit() {
    let mut state = SelectionState::new(3);

    // wrap around to the exit entry
    state.previous();
    assert_eq!(state.current(), 3);
    state.previous();
    assert_eq!(state.current(), 2);
    state.previous();
    assert_eq!(state.current(), 1);
    state.previous();
    assert_eq!(state.current(), 0);
}

#[test]
fn test_navigation_empty() {
    let mut state = SelectionState::new(0);

    state.next();
    assert_eq!(state.current(), 0);
    state.previous();
    assert_eq!(state.current(), 0);
}

#[test]
fn test_cycle_length_is_option_count_plus_one() {
    for count in 0..10 {
        let mut state = SelectionState::new(count);
        for step in 1..=count + 1 {
            state.apply(NavAction::Down);
            if step <= count {
                assert_eq!(state.current(), step);
            }
        }
        assert_eq!(state.current(), 0, "count = {count}");
    }
}

#[test]
fn test_index_in_range_for_mixed_sequences() {
    // deterministic pseudo random walk
    let mut seed: u32 = 7;
    for count in 0..8 {
        let mut state = SelectionState::new(count);
        for _ in 0..200 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let action = match (seed >> 16) % 3 {
                0 => NavAction::Up,
                1 => NavAction::Down,
                _ => NavAction::None,
            };
            state.apply(action);
            assert!(state.current() <= count);
            assert_eq!(state.phase(), MenuPhase::Navigating);
        }
    }
}

#[test]
fn test_up_then_down_is_identity() {
    for count in 0..5 {
        for start in 0..=count {
            let mut state = SelectionState::new(count);
            for _ in 0..start {
                state.next();
            }
            state.previous();
            state.next();
            assert_eq!(state.current(), start);
        }
    }
}
