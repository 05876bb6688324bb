//! Intents for the counter view.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// The increment button was activated (key press or click).
    Increment,
}

impl Intent for CounterIntent {}
