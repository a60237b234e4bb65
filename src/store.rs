//! Store contract and the dispatch handle embedded in props.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::sync::Arc;
#[cfg(any(test, feature = "testing"))]
#[cfg(feature = "no_std")]
use alloc::vec::Vec;
#[cfg(not(feature = "no_std"))]
use std::sync::Arc;

#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Callback invoked by a [`Store`] after every state transition.
pub type Listener = Box<dyn Fn() + Send + Sync>;

/// Handle returned by [`Store::subscribe`]. Calling it removes the listener.
///
/// Being `FnOnce`, it can only ever be invoked a single time.
pub type Unsubscribe = Box<dyn FnOnce() + Send>;

/// The contract a state container must satisfy to be bound to components.
///
/// oxide-connect never implements a store itself. Implement this trait for
/// your own state container (reducer based or otherwise) and hand it to a
/// [`Provider`](crate::Provider).
///
/// Implementations are expected to notify all listeners synchronously after
/// each state transition, in subscription order.
///
/// # Example
///
/// ```rust
/// use std::sync::Mutex;
/// use oxide_connect::{Listener, Store, Unsubscribe};
///
/// struct Flag {
///     on: Mutex<bool>,
///     listeners: Mutex<Vec<Listener>>,
/// }
///
/// impl Store for Flag {
///     type State = bool;
///     type Action = bool;
///     type Output = ();
///
///     fn get_state(&self) -> bool {
///         *self.on.lock().unwrap()
///     }
///
///     fn dispatch(&self, action: bool) {
///         *self.on.lock().unwrap() = action;
///         for listener in self.listeners.lock().unwrap().iter() {
///             listener();
///         }
///     }
///
///     fn subscribe(&self, listener: Listener) -> Unsubscribe {
///         self.listeners.lock().unwrap().push(listener);
///         Box::new(|| {})
///     }
/// }
/// ```
pub trait Store: Send + Sync {
    /// Snapshot type returned by [`get_state`](Self::get_state).
    type State;
    /// Action type accepted by [`dispatch`](Self::dispatch).
    type Action;
    /// Value returned from [`dispatch`](Self::dispatch).
    type Output;

    /// Read the current state. Must not have side effects.
    fn get_state(&self) -> Self::State;

    /// Apply an action. This is the only way a store is mutated.
    fn dispatch(&self, action: Self::Action) -> Self::Output;

    /// Register a listener, returning the handle that removes it.
    fn subscribe(&self, listener: Listener) -> Unsubscribe;
}

/// Dispatch capability that can be embedded in props.
///
/// Clone this handle into callbacks so a component can send actions to the
/// store it was connected to, without holding the store type directly.
pub struct Dispatch<S: Store>(Arc<S>);

impl<S: Store> Clone for Dispatch<S> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<S: Store> Dispatch<S> {
    /// Create a dispatch handle bound to `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self(store)
    }

    /// Send an action to the bound store.
    pub fn dispatch(&self, action: S::Action) -> S::Output {
        self.0.dispatch(action)
    }

    /// The store this handle dispatches to.
    pub fn store(&self) -> &Arc<S> {
        &self.0
    }
}

#[cfg(any(test, feature = "testing"))]
type Reducer<State, Action> = Box<dyn Fn(&State, Action) -> State + Send + Sync>;

#[cfg(any(test, feature = "testing"))]
struct TestStoreInner<State> {
    state: State,
    listeners: Vec<(usize, portable_atomic_util::Arc<Listener>)>,
    next_id: usize,
    subscribe_calls: usize,
    unsubscribe_calls: usize,
}

#[cfg(any(test, feature = "testing"))]
/// Reducer-driven store for tests.
///
/// Only available with the `testing` feature.
///
/// Listeners are notified synchronously after every dispatch. The store keeps
/// count of subscribe and unsubscribe calls so tests can assert on the
/// subscription lifecycle of connected components.
///
/// # Example
///
/// ```rust
/// use oxide_connect::{Store, TestStore};
///
/// let store = TestStore::new(0, |count: &i32, by: i32| count + by);
/// store.dispatch(2);
/// store.dispatch(3);
///
/// assert_eq!(store.get_state(), 5);
/// assert_eq!(store.listener_count(), 0);
/// ```
pub struct TestStore<State, Action> {
    inner: portable_atomic_util::Arc<Mutex<TestStoreInner<State>>>,
    reducer: Reducer<State, Action>,
}

#[cfg(any(test, feature = "testing"))]
impl<State, Action> TestStore<State, Action>
where
    State: Clone + Send + 'static,
    Action: Send + 'static,
{
    pub fn new<F>(initial: State, reducer: F) -> Self
    where
        F: Fn(&State, Action) -> State + Send + Sync + 'static,
    {
        Self {
            inner: portable_atomic_util::Arc::new(Mutex::new(TestStoreInner {
                state: initial,
                listeners: Vec::new(),
                next_id: 0,
                subscribe_calls: 0,
                unsubscribe_calls: 0,
            })),
            reducer: Box::new(reducer),
        }
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    /// Total number of [`Store::subscribe`] calls.
    pub fn subscribe_calls(&self) -> usize {
        self.inner.lock().subscribe_calls
    }

    /// Total number of times an [`Unsubscribe`] handle was invoked.
    pub fn unsubscribe_calls(&self) -> usize {
        self.inner.lock().unsubscribe_calls
    }
}

#[cfg(any(test, feature = "testing"))]
impl<State, Action> Store for TestStore<State, Action>
where
    State: Clone + Send + 'static,
    Action: Send + 'static,
{
    type State = State;
    type Action = Action;
    type Output = ();

    fn get_state(&self) -> State {
        self.inner.lock().state.clone()
    }

    fn dispatch(&self, action: Action) {
        // Listeners run without the lock held so they may read the state.
        let listeners: Vec<_> = {
            let mut inner = self.inner.lock();
            inner.state = (self.reducer)(&inner.state, action);
            inner
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect()
        };

        for listener in listeners {
            (*listener)();
        }
    }

    fn subscribe(&self, listener: Listener) -> Unsubscribe {
        let id = {
            let mut inner = self.inner.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribe_calls += 1;
            inner
                .listeners
                .push((id, portable_atomic_util::Arc::new(listener)));
            id
        };

        let inner = self.inner.clone();
        Box::new(move || {
            let mut inner = inner.lock();
            inner.unsubscribe_calls += 1;
            inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        })
    }
}
