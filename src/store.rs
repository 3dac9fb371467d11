//! State store.
//!
//! Owns a single state slot, threads dispatched actions through a
//! [`Reducer`] and fans the resulting snapshot out to subscribers.
//! The `Store` is the only strong owner of the slot: dispatchers and
//! subscriptions hold weak references and go inert once it is dropped.

use std::cell::Cell;
use std::collections::VecDeque;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};

use crate::mvi::Reducer;

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Listeners<S> {
    next_id: u64,
    entries: Vec<(u64, Listener<S>)>,
}

struct Inner<R: Reducer> {
    state: Mutex<R::State>,
    listeners: Mutex<Listeners<R::State>>,
    /// Held for a whole drain. The flag is set while the owning thread is
    /// inside a drain, so only its own nested dispatches get queued.
    drain: ReentrantMutex<Cell<bool>>,
    /// Actions dispatched by subscribers of the running drain.
    nested: Mutex<VecDeque<R::Action>>,
}

/// State slot driven by reducer `R`.
pub struct Store<R: Reducer> {
    inner: Arc<Inner<R>>,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(initial),
                listeners: Mutex::new(Listeners {
                    next_id: 0,
                    entries: Vec::new(),
                }),
                drain: ReentrantMutex::new(Cell::new(false)),
                nested: Mutex::new(VecDeque::new()),
            }),
        }
    }

    /// Get a snapshot of the current state.
    ///
    /// The snapshot is detached: later dispatches never change it.
    pub fn state(&self) -> R::State {
        self.inner.state.lock().clone()
    }

    /// Run `action` through the reducer and notify subscribers.
    ///
    /// The action has been applied when this returns. A dispatch from
    /// another thread waits for the running one to finish. A dispatch from
    /// inside a subscriber is queued and applied, in order, before the
    /// outermost call returns.
    pub fn dispatch(&self, action: R::Action) {
        self.inner.dispatch(action);
    }

    /// Get a dispatch handle bound to this store.
    ///
    /// The handle does not keep the store alive.
    pub fn dispatcher(&self) -> Dispatcher<R> {
        Dispatcher {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Register a listener called with every new snapshot.
    ///
    /// The listener stays registered until the returned [`Subscription`]
    /// is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<R>
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let mut listeners = self.inner.listeners.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        tracing::trace!(id, total = listeners.entries.len(), "subscriber added");

        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.lock().entries.len()
    }
}

impl<R: Reducer> Inner<R> {
    fn dispatch(&self, action: R::Action) {
        let drain = self.drain.lock();
        if drain.get() {
            let mut nested = self.nested.lock();
            nested.push_back(action);
            tracing::trace!(pending = nested.len(), "nested dispatch queued");
            return;
        }

        drain.set(true);
        let _draining = scopeguard::guard(&*drain, |flag| flag.set(false));
        // A panicking reducer or subscriber abandons what its drain queued.
        let _discard = scopeguard::guard_on_unwind(&self.nested, |nested| {
            let dropped = std::mem::take(&mut *nested.lock());
            if !dropped.is_empty() {
                tracing::warn!(
                    dropped = dropped.len(),
                    "discarding nested actions after panic during dispatch"
                );
            }
        });

        let mut next = Some(action);
        while let Some(action) = next {
            let snapshot = self.apply(action);
            self.notify(&snapshot);
            next = self.nested.lock().pop_front();
        }
    }

    fn apply(&self, action: R::Action) -> R::State {
        let mut slot = self.state.lock();
        tracing::debug!(?action, "dispatch");

        let next = R::reduce(slot.clone(), action);
        let changed = next != *slot;
        *slot = next.clone();

        tracing::debug!(changed, "state replaced");
        next
    }

    fn notify(&self, snapshot: &R::State) {
        // Listeners run without the slot or listener lock held so they may
        // dispatch, subscribe or unsubscribe.
        let listeners: Vec<Listener<R::State>> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::trace!(subscribers = listeners.len(), "notifying subscribers");
        for listener in listeners {
            listener(snapshot);
        }
    }
}

/// Dispatch entry point bound to one store.
pub struct Dispatcher<R: Reducer> {
    inner: Weak<Inner<R>>,
}

impl<R: Reducer> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Dispatcher<R> {
    /// Dispatch `action` to the bound store.
    ///
    /// Once the store has been dropped this only logs a warning.
    pub fn dispatch(&self, action: R::Action) {
        match self.inner.upgrade() {
            Some(inner) => inner.dispatch(action),
            None => tracing::warn!(?action, "dispatch on a dropped store ignored"),
        }
    }

    /// Whether the bound store is still alive.
    pub fn is_live(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

/// Registration handle returned by [`Store::subscribe`].
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription<R: Reducer> {
    id: u64,
    store: Weak<Inner<R>>,
}

impl<R: Reducer> Subscription<R> {
    /// Remove the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl<R: Reducer> Drop for Subscription<R> {
    fn drop(&mut self) {
        let Some(inner) = self.store.upgrade() else {
            return;
        };
        let mut listeners = inner.listeners.lock();
        listeners.entries.retain(|(id, _)| *id != self.id);
        tracing::trace!(id = self.id, total = listeners.entries.len(), "subscriber removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Color, ViewAction, ViewReducer, ViewState};
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::mpsc;
    use std::time::Duration;

    type TestStore = Store<ViewReducer>;

    fn recorder(store: &TestStore) -> (Arc<Mutex<Vec<ViewState>>>, Subscription<ViewReducer>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let sub = store.subscribe(move |state| sink.lock().push(state.clone()));
        (seen, sub)
    }

    #[test]
    fn starts_with_default_state() {
        let store = TestStore::default();
        assert_eq!(store.state(), ViewState::default());
    }

    #[test]
    fn dispatch_replaces_state_without_touching_snapshots() {
        let store = TestStore::default();
        let before = store.state();

        store.dispatch(ViewAction::SetCount(5));

        assert_eq!(before, ViewState::default());
        assert_eq!(store.state().count, 5);
    }

    #[test]
    fn dispatchers_share_one_slot() {
        let store = TestStore::default();
        let other = store.dispatcher();
        other.dispatch(ViewAction::SetText("shared".into()));
        assert_eq!(store.state().text, "shared");
    }

    #[test]
    fn subscribers_see_every_snapshot() {
        let store = TestStore::default();
        let (seen, _sub) = recorder(&store);

        store.dispatch(ViewAction::SetCount(5));
        store.dispatch(ViewAction::SetColor(Color::Yellow));

        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].count, 5);
        assert_eq!(seen[0].color, Color::Red);
        assert_eq!(seen[1].color, Color::Yellow);
    }

    #[test]
    fn unchanged_state_still_notifies() {
        let store = TestStore::default();
        let (seen, _sub) = recorder(&store);

        store.dispatch(ViewAction::SetCount(0));

        assert_eq!(seen.lock().as_slice(), &[ViewState::default()]);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let store = TestStore::default();
        let (seen, sub) = recorder(&store);
        assert_eq!(store.subscriber_count(), 1);

        store.dispatch(ViewAction::ToggleGood);
        sub.unsubscribe();
        store.dispatch(ViewAction::ToggleGood);

        assert_eq!(store.subscriber_count(), 0);
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn nested_dispatch_is_processed_in_order() {
        let store = TestStore::default();
        let (first, _first_sub) = recorder(&store);

        let dispatcher = store.dispatcher();
        let _chain = store.subscribe(move |state| {
            if state.count == 1 {
                dispatcher.dispatch(ViewAction::SetCount(2));
            }
        });
        let (last, _last_sub) = recorder(&store);

        store.dispatch(ViewAction::SetCount(1));

        let counts = |seen: &Arc<Mutex<Vec<ViewState>>>| {
            seen.lock().iter().map(|s| s.count).collect::<Vec<_>>()
        };
        assert_eq!(counts(&first), vec![1, 2]);
        assert_eq!(counts(&last), vec![1, 2]);
        assert_eq!(store.state().count, 2);
    }

    #[test]
    fn dispatcher_does_not_outlive_store() {
        let store = TestStore::default();
        let dispatcher = store.dispatcher();
        assert!(dispatcher.is_live());

        drop(store);

        assert!(!dispatcher.is_live());
        dispatcher.dispatch(ViewAction::ToggleGood);
    }

    #[test]
    fn panicking_subscriber_leaves_store_usable() {
        let store = TestStore::default();
        let bomb = store.subscribe(|_| panic!("subscriber failure"));

        let result = catch_unwind(AssertUnwindSafe(|| {
            store.dispatch(ViewAction::SetCount(9));
        }));
        assert!(result.is_err());
        assert_eq!(store.state().count, 9);

        drop(bomb);
        store.dispatch(ViewAction::SetCount(10));
        assert_eq!(store.state().count, 10);
    }

    #[test]
    fn panic_discards_only_actions_queued_by_that_drain() {
        let store = TestStore::default();
        let dispatcher = store.dispatcher();
        let chain = store.subscribe(move |state| {
            if state.count == 1 {
                dispatcher.dispatch(ViewAction::SetCount(2));
            }
        });
        let bomb = store.subscribe(|state| {
            if state.count == 1 {
                panic!("subscriber failure");
            }
        });

        let result = catch_unwind(AssertUnwindSafe(|| {
            store.dispatch(ViewAction::SetCount(1));
        }));
        assert!(result.is_err());
        assert_eq!(store.state().count, 1);

        drop(bomb);
        drop(chain);
        store.dispatch(ViewAction::SetText("after".into()));
        let state = store.state();
        assert_eq!(state.count, 1);
        assert_eq!(state.text, "after");
    }

    #[test]
    fn dispatch_from_other_thread() {
        let store = TestStore::default();
        let dispatcher = store.dispatcher();

        std::thread::spawn(move || dispatcher.dispatch(ViewAction::SetText("remote".into())))
            .join()
            .unwrap();

        assert_eq!(store.state().text, "remote");
    }

    #[test]
    fn cross_thread_dispatch_waits_for_running_drain() {
        let store = TestStore::default();
        let (entered_tx, entered_rx) = mpsc::channel::<()>();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let entered_tx = Mutex::new(entered_tx);
        let release_rx = Mutex::new(release_rx);

        let _blocker = store.subscribe(move |state| {
            if state.count == 1 && state.text == "hello" {
                entered_tx.lock().send(()).unwrap();
                release_rx.lock().recv().unwrap();
            }
        });

        std::thread::scope(|s| {
            s.spawn(|| store.dispatch(ViewAction::SetCount(1)));
            entered_rx.recv().unwrap();

            s.spawn(move || {
                std::thread::sleep(Duration::from_millis(50));
                release_tx.send(()).unwrap();
            });

            store.dispatch(ViewAction::SetText("mine".into()));
            let state = store.state();
            assert_eq!(state.text, "mine");
            assert_eq!(state.count, 1);
        });
    }
}
