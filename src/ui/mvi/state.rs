//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned into the reducer, compared to detect
/// changes, and defaulted when a view is first built.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
