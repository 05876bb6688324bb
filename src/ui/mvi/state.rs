//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// `Default` is the state at mount time; `PartialEq` lets callers tell
/// whether a dispatch changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
