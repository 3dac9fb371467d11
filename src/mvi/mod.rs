//! Model-View-Intent (MVI) primitives.
//!
//! Base traits for unidirectional data flow:
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot held by a store
//! - **Action**: A requested transition
//! - **Reducer**: Pure function that computes the next state

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::UiState;
