//! Reducer for the counter view.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Applies counter intents.
///
/// The new value is always derived from the state passed in, never from a
/// captured copy, so sequential activations compose.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => state.incremented(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_zero() {
        assert_eq!(CounterState::default().value(), 0);
        assert_eq!(CounterState::default().display_text(), "0");
    }

    #[test]
    fn increment_adds_one() {
        let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Increment);
        assert_eq!(state.value(), 1);
    }

    #[test]
    fn increments_compose() {
        let state = (0..7).fold(CounterState::default(), |state, _| {
            CounterReducer::reduce(state, CounterIntent::Increment)
        });
        assert_eq!(state.value(), 7);
        assert_eq!(state.display_text(), "7");
    }
}
