//! Base trait for actions in MVI architecture.

use std::fmt::Debug;

/// Marker trait for action values.
///
/// Actions are closed sets of transitions, one variant per effect, each
/// carrying exactly the payload it needs. `Debug` is required so the store
/// can log what it dispatches.
pub trait Action: Debug + Send + 'static {}
