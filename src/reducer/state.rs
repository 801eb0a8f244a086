//! Marker trait for state trees.

/// Marker trait for values held in a store or addressed by a cursor.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Shareable across threads (readers may hold old snapshots)
///
/// Implemented for every type that qualifies.
pub trait State: Clone + Send + Sync + 'static {}

impl<T> State for T where T: Clone + Send + Sync + 'static {}
