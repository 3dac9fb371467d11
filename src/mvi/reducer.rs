//! The transition function a store is parameterised over.

use super::action::Action;
use super::state::UiState;

/// Computes the next state for a dispatched action.
///
/// A `Store<R>` calls `R::reduce` once per action with a copy of the
/// current record and keeps whatever comes back; nothing else writes the
/// slot. Implementations take no `self` and must not perform I/O, so the
/// same inputs always yield an equal record.
pub trait Reducer: 'static {
    type State: UiState;
    type Action: Action;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
