mod common;

use counter_view::ui::counter::{CounterIntent, CounterReducer, CounterState};
use counter_view::ui::mvi::Reducer;

#[test]
fn initial_state_is_zero() {
    assert_eq!(CounterState::default().value(), 0);
}

#[test]
fn increment_from_initial() {
    let new = CounterReducer::reduce(CounterState::default(), CounterIntent::Increment);
    assert_eq!(new.value(), 1);
    assert_eq!(new.display_text(), "1");
}

#[test]
fn increment_uses_latest_state() {
    let once = CounterReducer::reduce(CounterState::default(), CounterIntent::Increment);
    let twice = CounterReducer::reduce(once, CounterIntent::Increment);
    assert_eq!(twice.value(), once.value() + 1);
}

#[test]
fn increment_changes_state() {
    let state = CounterState::default();
    let new = CounterReducer::reduce(state, CounterIntent::Increment);
    assert_ne!(state, new);
}

#[test]
fn display_text_has_no_decoration() {
    let state = (0..42).fold(CounterState::default(), |state, _| {
        CounterReducer::reduce(state, CounterIntent::Increment)
    });
    assert_eq!(state.display_text(), "42");
}
