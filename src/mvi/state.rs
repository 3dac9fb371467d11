//! State held by a [`Store`](crate::store::Store).

/// A complete state record.
///
/// The store clones it to hand out snapshots, compares old and new records
/// to log whether a dispatch changed anything, and builds the first record
/// from `Default`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
