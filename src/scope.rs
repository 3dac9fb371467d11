//! Store scopes and accessors.
//!
//! A [`Scope`] is passed explicitly to whatever code needs the store. A
//! scope either provides a store or it does not; the accessors fail with
//! [`StoreError::NoProvider`] rather than falling back to a default.
//! A scope borrows its store, so neither can outlive the region that
//! created the store.

use crate::error::StoreError;
use crate::mvi::Reducer;
use crate::store::{Dispatcher, Store};

/// Handle giving a region of code access to (at most) one store.
pub struct Scope<'a, R: Reducer> {
    store: Option<&'a Store<R>>,
}

impl<R: Reducer> Clone for Scope<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Reducer> Copy for Scope<'_, R> {}

impl<R: Reducer> Default for Scope<'_, R> {
    fn default() -> Self {
        Self::root()
    }
}

impl<'a, R: Reducer> Scope<'a, R> {
    /// Scope with no provider. Accessors on it always fail.
    pub fn root() -> Self {
        Self { store: None }
    }

    /// Scope providing a store owned by the caller.
    pub fn with_store(store: &'a Store<R>) -> Self {
        Self { store: Some(store) }
    }

    pub fn has_provider(&self) -> bool {
        self.store.is_some()
    }

    /// The store provided to this scope.
    pub fn store(&self) -> Result<&'a Store<R>, StoreError> {
        self.store.ok_or_else(|| StoreError::NoProvider {
            state: std::any::type_name::<R::State>(),
        })
    }

    /// Run `children` in a nested scope with a fresh store of its own.
    ///
    /// The nested store starts from the default state, shadows any store
    /// `self` provides, and is dropped when `children` returns.
    pub fn init_store_scope<T>(&self, children: impl FnOnce(&Scope<'_, R>) -> T) -> T {
        let store = Store::<R>::default();
        tracing::debug!(
            state = std::any::type_name::<R::State>(),
            shadows_parent = self.has_provider(),
            "store scope opened"
        );
        let result = children(&Scope::with_store(&store));
        tracing::debug!(state = std::any::type_name::<R::State>(), "store scope closed");
        result
    }
}

/// Run `children` with a scope providing a fresh default store.
///
/// The store is dropped when `children` returns; dispatchers and
/// subscriptions obtained inside the scope become inert. The scope itself
/// cannot leave `children`:
///
/// ```compile_fail
/// use viewstate::init_store_scope;
/// use viewstate::view::ViewReducer;
///
/// let escaped = init_store_scope::<ViewReducer, _>(|scope| *scope);
/// ```
pub fn init_store_scope<R: Reducer, T>(children: impl FnOnce(&Scope<'_, R>) -> T) -> T {
    Scope::root().init_store_scope(children)
}

/// Read accessor: snapshot of the state provided to `scope`.
pub fn get_state<R: Reducer>(scope: &Scope<'_, R>) -> Result<R::State, StoreError> {
    scope.store().map(Store::state)
}

/// Write accessor: dispatch handle for the store provided to `scope`.
pub fn get_dispatch<R: Reducer>(scope: &Scope<'_, R>) -> Result<Dispatcher<R>, StoreError> {
    scope.store().map(Store::dispatcher)
}
