//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are produced from user activations and consumed by reducers.
pub trait Intent: Send + 'static {}
