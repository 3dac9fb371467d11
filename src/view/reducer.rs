//! Reducer for the view store.

use crate::mvi::Reducer;

use super::action::ViewAction;
use super::state::ViewState;

/// Reducer for view state transitions.
///
/// Each arm copies the previous record and overrides exactly the field the
/// action names.
pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Action = ViewAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ViewAction::SetCount(count) => ViewState { count, ..state },
            ViewAction::SetText(text) => ViewState { text, ..state },
            ViewAction::SetColor(color) => ViewState { color, ..state },
            ViewAction::ToggleGood => ViewState {
                is_good: !state.is_good,
                ..state
            },
        }
    }
}
