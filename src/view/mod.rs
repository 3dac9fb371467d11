//! View state feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The complete view record (count, text, color, is_good)
//! - `action.rs` - Closed set of transitions and their textual decoder
//! - `reducer.rs` - State transitions (pure, no side effects)

mod action;
mod reducer;
mod state;

pub use action::ViewAction;
pub use reducer::ViewReducer;
pub use state::{Color, ViewState};

/// Store specialised to the view state.
pub type ViewStore = crate::store::Store<ViewReducer>;
