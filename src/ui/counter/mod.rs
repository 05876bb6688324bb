//! Counter feature module.
//!
//! Holds the single integer the counter view displays.
//!
//! - `state.rs` - `CounterState { value }`, starts at 0
//! - `intent.rs` - the one user action (`Increment`)
//! - `reducer.rs` - `value -> value + 1`

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
