//! Base trait for store state.

/// Marker trait for state held by a [`Store`](super::Store).
///
/// States should be:
/// - Immutable (transitions build a new value)
/// - Cheap to clone (share unchanged parts)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + 'static {}
