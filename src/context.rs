//! Explicit context handed from a [`Provider`](crate::Provider) to its subtree.

#[cfg(feature = "no_std")]
use alloc::sync::Arc;
#[cfg(not(feature = "no_std"))]
use std::sync::Arc;

use crate::Store;

/// The value a [`Provider`](crate::Provider) exposes to its descendants.
///
/// Contexts are passed down explicitly and read by
/// [`Connected::mount`](crate::Connected::mount). They carry a shared handle to
/// the store, never the store itself.
pub struct Context<S: Store> {
    /// The single store of the application.
    pub store: Arc<S>,
}

impl<S: Store> Context<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: Store> Clone for Context<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
