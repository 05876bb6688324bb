//! Model-View-Intent (MVI) primitives for the counter UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: owned snapshot of everything a view needs to render
//! - **Intent**: a user activation (key press, mouse click)
//! - **Reducer**: pure `(State, Intent) -> State` transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
