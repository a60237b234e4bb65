//! The connector factory: mapping functions and options, applied to components.

#[cfg(feature = "no_std")]
use alloc::sync::Arc;
#[cfg(not(feature = "no_std"))]
use std::sync::Arc;

use crate::{Component, Connected, Dispatch, Props, Store};

/// Key of the [`Dispatch`] prop injected when no dispatch mapping is given.
pub const DISPATCH_KEY: &str = "dispatch";

/// Derives props from the store state and the component's own props.
///
/// Called on every render of a connected component.
pub type MapStateToProps<S> = Arc<dyn Fn(&<S as Store>::State, &Props) -> Props + Send + Sync>;

/// Derives props from the store's dispatch handle and the component's own props.
///
/// Called on every render of a connected component.
pub type MapDispatchToProps<S> = Arc<dyn Fn(&Dispatch<S>, &Props) -> Props + Send + Sync>;

/// Decoration-time options of a [`Connector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectOptions {
    /// When no dispatch mapping is given, add a [`Dispatch`] handle under
    /// [`DISPATCH_KEY`]. With `false` nothing is added and the component relies
    /// on its own props.
    pub inject_default_dispatch: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            inject_default_dispatch: true,
        }
    }
}

/// Connects components to a store.
///
/// Holds the mapping functions and options chosen at decoration time. A
/// connector is cheap to clone and can [`wrap`](Self::wrap) any number of
/// components; each wrap produces an independent [`Connected`] instance.
///
/// Whether wrapped components subscribe to the store is decided here, by the
/// presence of a state mapping, and never changes afterwards.
pub struct Connector<S: Store> {
    map_state: Option<MapStateToProps<S>>,
    map_dispatch: Option<MapDispatchToProps<S>>,
    options: ConnectOptions,
}

impl<S: Store> Clone for Connector<S> {
    fn clone(&self) -> Self {
        Self {
            map_state: self.map_state.clone(),
            map_dispatch: self.map_dispatch.clone(),
            options: self.options,
        }
    }
}

impl<S: Store + 'static> Default for Connector<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Store + 'static> Connector<S> {
    /// A connector with no mappings and default options.
    pub fn new() -> Self {
        Self {
            map_state: None,
            map_dispatch: None,
            options: ConnectOptions::default(),
        }
    }

    pub fn map_state_to_props<F>(mut self, map: F) -> Self
    where
        F: Fn(&S::State, &Props) -> Props + Send + Sync + 'static,
    {
        self.map_state = Some(Arc::new(map));
        self
    }

    pub fn map_dispatch_to_props<F>(mut self, map: F) -> Self
    where
        F: Fn(&Dispatch<S>, &Props) -> Props + Send + Sync + 'static,
    {
        self.map_dispatch = Some(Arc::new(map));
        self
    }

    pub fn with_options(mut self, options: ConnectOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ConnectOptions {
        self.options
    }

    /// Whether wrapped components subscribe to store notifications.
    pub fn subscribes(&self) -> bool {
        self.map_state.is_some()
    }

    /// Apply the connector to a component.
    pub fn wrap<C: Component>(&self, component: C) -> Connected<S, C> {
        Connected::new(self.clone(), component)
    }

    /// Compute the full prop set for one render.
    pub(crate) fn merge_props(&self, store: &Arc<S>, own: &Props) -> Props {
        let state_props = self
            .map_state
            .as_ref()
            .map(|map| map(&store.get_state(), own));

        let dispatch_props = match &self.map_dispatch {
            Some(map) => Some(map(&Dispatch::new(Arc::clone(store)), own)),
            None if self.options.inject_default_dispatch => {
                Some(Props::new().with(DISPATCH_KEY, Dispatch::new(Arc::clone(store))))
            }
            None => None,
        };

        Props::merge(own, state_props, dispatch_props)
    }
}

/// Create a [`Connector`] from optional mapping functions.
///
/// Either mapping may be `None`. Without `map_state_to_props` the wrapped
/// components never subscribe to the store.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use oxide_connect::{connect, MapStateToProps, Props, TestStore};
///
/// type Counter = TestStore<i32, i32>;
///
/// let count: MapStateToProps<Counter> =
///     Arc::new(|count: &i32, _own: &Props| Props::new().with("count", *count));
///
/// let connector = connect::<Counter>(Some(count), None);
/// assert!(connector.subscribes());
///
/// let inert = connect::<Counter>(None, None);
/// assert!(!inert.subscribes());
/// ```
pub fn connect<S: Store + 'static>(
    map_state_to_props: Option<MapStateToProps<S>>,
    map_dispatch_to_props: Option<MapDispatchToProps<S>>,
) -> Connector<S> {
    Connector {
        map_state: map_state_to_props,
        map_dispatch: map_dispatch_to_props,
        options: ConnectOptions::default(),
    }
}
