#![cfg_attr(feature = "no_std", no_std)]

//! Bindings between components and a unidirectional state store.
//!
//! Two primitives connect a component tree to a store:
//!
//! - [`Provider`] holds the store and hands a [`Context`] to its subtree.
//! - [`connect`] (or the [`Connector`] builder) turns mapping functions into a
//!   decorator that wraps a [`Component`] into a [`Connected`] one. A connected
//!   component reads the store from its context, subscribes to store
//!   notifications, derives props from state and dispatch, and renders only
//!   when its own props change identity or the store notifies.
//!
//! The store and the renderer are external: implement [`Store`] for your state
//! container and [`Component`] for your leaf components.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use oxide_connect::{Connector, Listener, Props, Provider, ProviderProps, Store, Unsubscribe};
//!
//! enum Action { Increment }
//!
//! #[derive(Default)]
//! struct Counter {
//!     count: Mutex<i32>,
//!     listeners: Mutex<Vec<Listener>>,
//! }
//!
//! impl Store for Counter {
//!     type State = i32;
//!     type Action = Action;
//!     type Output = ();
//!
//!     fn get_state(&self) -> i32 {
//!         *self.count.lock().unwrap()
//!     }
//!
//!     fn dispatch(&self, action: Action) {
//!         match action {
//!             Action::Increment => *self.count.lock().unwrap() += 1,
//!         }
//!         for listener in self.listeners.lock().unwrap().iter() {
//!             listener();
//!         }
//!     }
//!
//!     fn subscribe(&self, listener: Listener) -> Unsubscribe {
//!         self.listeners.lock().unwrap().push(listener);
//!         Box::new(|| {})
//!     }
//! }
//!
//! let store = Arc::new(Counter::default());
//! let provider = Provider::new(ProviderProps::new(store.clone()).child("app"));
//!
//! let rendered = Arc::new(Mutex::new(Vec::new()));
//! let sink = rendered.clone();
//!
//! let mut counter = Connector::<Counter>::new()
//!     .map_state_to_props(|count, _own| Props::new().with("count", *count))
//!     .wrap(move |props: Props| {
//!         sink.lock().unwrap().push(*props.get::<i32>("count").unwrap());
//!     });
//!
//! counter.mount(&provider.child_context(), Arc::new(Props::new()))?;
//!
//! store.dispatch(Action::Increment);
//! counter.process_notifications()?;
//!
//! assert_eq!(*rendered.lock().unwrap(), vec![0, 1]);
//! # Ok::<(), oxide_connect::ConnectError>(())
//! ```

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
mod component;
mod connect;
mod connected;
mod context;
mod error;
mod props;
mod provider;
mod store;

// Public re-exports
pub use component::Component;
pub use connect::{
    connect, ConnectOptions, Connector, MapDispatchToProps, MapStateToProps, DISPATCH_KEY,
};
pub use connected::{Connected, Lifecycle};
pub use context::Context;
pub use error::ConnectError;
pub use props::{PropValue, Props};
pub use provider::{Provider, ProviderProps};
pub use store::{Dispatch, Listener, Store, Unsubscribe};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use component::TestComponent;
#[cfg(any(test, feature = "testing"))]
pub use store::TestStore;
