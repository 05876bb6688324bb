use crate::config::UiConfig;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;
use crate::ui::view::{
    Action, ViewNode, COMPONENT_APP, COUNTER_DISPLAY, INCREMENT_BUTTON, INCREMENT_LABEL,
};
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The counter component plus the bits of host state the UI loop needs.
///
/// A new `App` is a fresh mount: the counter starts at zero.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    show_footer: bool,
    /// Counter state (MVI pattern).
    counter: CounterState,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            should_quit: false,
            size: None,
            show_footer: config.show_footer,
            counter: CounterState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn show_footer(&self) -> bool {
        self.show_footer
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    /// Build the view tree for the current state. Has no side effects.
    pub fn render(&self) -> ViewNode {
        ViewNode::container(
            COMPONENT_APP,
            vec![
                ViewNode::heading(COUNTER_DISPLAY, self.counter.display_text()),
                ViewNode::button(
                    INCREMENT_BUTTON,
                    INCREMENT_LABEL,
                    Action::Counter(CounterIntent::Increment),
                ),
            ],
        )
    }

    /// Increment the counter. The new value is visible to the next `render`.
    pub fn on_increment_activated(&mut self) {
        self.dispatch_counter(CounterIntent::Increment);
        tracing::debug!(value = self.counter.value(), "counter incremented");
    }

    /// Activate the node carrying `tag`, as a click on it would.
    ///
    /// Returns `false` when no such node exists or it has no action.
    pub fn activate(&mut self, tag: &str) -> bool {
        let action = self.render().find_one(tag).and_then(|node| node.action);
        match action {
            Some(Action::Counter(CounterIntent::Increment)) => {
                self.on_increment_activated();
                true
            }
            None => false,
        }
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Last known terminal area, used for mouse hit-testing.
    pub fn area(&self) -> Option<Rect> {
        self.size.map(|(width, height)| Rect {
            x: 0,
            y: 0,
            width,
            height,
        })
    }

    fn dispatch_counter(&mut self, intent: CounterIntent) {
        dispatch_mvi!(self, counter, CounterReducer, intent);
    }
}
