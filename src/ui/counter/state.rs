use crate::ui::mvi::UiState;

/// State of the counter view.
///
/// Created as zero when the view mounts and only ever advanced by
/// [`CounterReducer`](super::CounterReducer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    value: i64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Text shown by the display node: plain base-10, no padding.
    pub fn display_text(&self) -> String {
        self.value.to_string()
    }

    pub(super) fn incremented(self) -> Self {
        Self {
            value: self.value.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incremented_saturates_at_max() {
        let state = CounterState { value: i64::MAX };
        assert_eq!(state.incremented().value(), i64::MAX);
    }

    #[test]
    fn display_text_is_plain_decimal() {
        let state = CounterState { value: 1007 };
        assert_eq!(state.display_text(), "1007");
    }
}
