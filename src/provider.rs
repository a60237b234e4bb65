//! Makes a store available to the connected components below it.

#[cfg(feature = "no_std")]
use alloc::sync::Arc;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;
#[cfg(not(feature = "no_std"))]
use std::sync::Arc;

use tracing::trace;

use crate::{Context, Store};

/// Properties of a [`Provider`].
pub struct ProviderProps<S: Store, C> {
    /// The single store of the application.
    pub store: Arc<S>,
    /// The subtree. Only the first child is rendered.
    pub children: Vec<C>,
}

impl<S: Store, C> ProviderProps<S, C> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: C) -> Self {
        self.children.push(child);
        self
    }
}

/// Root of a connected subtree.
///
/// The provider hands a [`Context`] to its descendants. The context is built
/// from the current props on every request, so replacing the store through
/// [`set_props`](Self::set_props) is visible to every later read.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use oxide_connect::{Provider, ProviderProps, TestStore};
///
/// let store = Arc::new(TestStore::new((), |_: &(), _: ()| ()));
/// let provider = Provider::new(ProviderProps::new(store.clone()).child("app"));
///
/// assert!(Arc::ptr_eq(&provider.child_context().store, &store));
/// assert_eq!(provider.render(), Some(&"app"));
/// ```
pub struct Provider<S: Store, C> {
    props: ProviderProps<S, C>,
}

impl<S: Store, C> Provider<S, C> {
    pub fn new(props: ProviderProps<S, C>) -> Self {
        Self { props }
    }

    /// The context for the subtree, reflecting the current store.
    pub fn child_context(&self) -> Context<S> {
        Context::new(Arc::clone(&self.props.store))
    }

    /// The first child, unchanged. `None` without children.
    pub fn render(&self) -> Option<&C> {
        self.props.children.first()
    }

    pub fn render_mut(&mut self) -> Option<&mut C> {
        self.props.children.first_mut()
    }

    /// Re-render the provider with new props.
    pub fn set_props(&mut self, props: ProviderProps<S, C>) {
        if !Arc::ptr_eq(&self.props.store, &props.store) {
            trace!("provider store replaced");
        }
        self.props = props;
    }

    pub fn props(&self) -> &ProviderProps<S, C> {
        &self.props
    }
}
