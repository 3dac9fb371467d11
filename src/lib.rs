//! Scoped state store for view layers.
//!
//! A [`ViewState`](view::ViewState) record lives in a [`Store`](store::Store);
//! [`ViewAction`](view::ViewAction)s are threaded through the pure
//! [`ViewReducer`](view::ViewReducer), and consumers reach the store through
//! an explicitly passed [`Scope`](scope::Scope).

pub mod config;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod scope;
pub mod store;
pub mod view;

pub use error::StoreError;
pub use scope::{get_dispatch, get_state, init_store_scope, Scope};
pub use store::{Dispatcher, Store, Subscription};
