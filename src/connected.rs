//! The connected component: subscription lifecycle and the render gate.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::sync::Arc;
#[cfg(not(feature = "no_std"))]
use std::sync::Arc;

use flume::{Receiver, Sender};
use tracing::{debug, trace};

use crate::{Component, ConnectError, Connector, Context, Props, Store, Unsubscribe};

/// Where a [`Connected`] component is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Unmounted,
    Mounted {
        /// Whether a store subscription is live.
        subscribed: bool,
    },
}

struct Mounted<S> {
    store: Arc<S>,
    own_props: Arc<Props>,
    unsubscribe: Option<Unsubscribe>,
}

/// A component wrapped by a [`Connector`].
///
/// This is an explicit state machine driven by the host through four entry
/// points:
/// 1. [`mount`](Self::mount) renders once, then subscribes to the store when the
///    connector has a state mapping
/// 2. [`receive_props`](Self::receive_props) records whether the own props
///    changed identity and renders only if they did
/// 3. [`process_notifications`](Self::process_notifications) renders once per
///    store notification received since the last call
/// 4. [`unmount`](Self::unmount) releases the subscription
///
/// A provider that swaps its store hands the new context to mounted
/// descendants through [`receive_context`](Self::receive_context).
///
/// Store listeners only enqueue a token on a channel; rendering always happens
/// on the thread driving the component. Every notification forces a render,
/// even when the derived props are identical to the previous ones.
///
/// Dropping a mounted component unmounts it.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use oxide_connect::{Connector, Context, Props, Store, TestComponent, TestStore};
///
/// let store = Arc::new(TestStore::new(0, |count: &i32, by: i32| count + by));
/// let component = TestComponent::new();
///
/// let mut connected = Connector::<TestStore<i32, i32>>::new()
///     .map_state_to_props(|count: &i32, _own: &Props| Props::new().with("count", *count))
///     .wrap(component.clone());
///
/// let own = Arc::new(Props::new());
/// connected.mount(&Context::new(store.clone()), own.clone())?;
///
/// store.dispatch(1);
/// assert_eq!(connected.process_notifications()?, 1);
///
/// // Same allocation: the render gate holds.
/// assert!(!connected.receive_props(own)?);
///
/// connected.unmount();
/// assert_eq!(store.unsubscribe_calls(), 1);
/// assert_eq!(component.count(), 2);
/// # Ok::<(), oxide_connect::ConnectError>(())
/// ```
pub struct Connected<S: Store + 'static, C: Component> {
    connector: Connector<S>,
    component: C,
    mounted: Option<Mounted<S>>,
    props_changed: bool,
    notifier: Sender<()>,
    notifications: Receiver<()>,
}

impl<S: Store + 'static, C: Component> Connected<S, C> {
    pub(crate) fn new(connector: Connector<S>, component: C) -> Self {
        let (notifier, notifications) = flume::unbounded();

        Connected {
            connector,
            component,
            mounted: None,
            props_changed: true,
            notifier,
            notifications,
        }
    }

    /// Mount the component under `context` with its initial own props.
    ///
    /// Renders the wrapped component, then subscribes to the context store if
    /// the connector has a state mapping.
    pub fn mount(
        &mut self,
        context: &Context<S>,
        own_props: Arc<Props>,
    ) -> Result<(), ConnectError> {
        if self.mounted.is_some() {
            return Err(ConnectError::AlreadyMounted);
        }

        // Tokens left over from a previous mount belong to a dead subscription.
        self.notifications.drain().for_each(drop);

        let store = Arc::clone(&context.store);
        self.mounted = Some(Mounted {
            store: Arc::clone(&store),
            own_props,
            unsubscribe: None,
        });
        self.props_changed = true;
        self.render()?;

        let subscribed = self.connector.subscribes();
        if subscribed {
            let notifier = self.notifier.clone();
            let unsubscribe = store.subscribe(Box::new(move || {
                trace!("store notification queued");
                notifier.send(()).ok();
            }));
            if let Some(mounted) = self.mounted.as_mut() {
                mounted.unsubscribe = Some(unsubscribe);
            }
        }

        debug!(
            component = self.component.display_name(),
            subscribed, "connected component mounted"
        );
        Ok(())
    }

    /// Release the store subscription, if any, and return to unmounted.
    ///
    /// The unsubscribe handle is invoked at most once. Unmounting an unmounted
    /// component does nothing.
    pub fn unmount(&mut self) {
        let Some(mut mounted) = self.mounted.take() else {
            return;
        };

        if let Some(unsubscribe) = mounted.unsubscribe.take() {
            unsubscribe();
            debug!(
                component = self.component.display_name(),
                "unsubscribed from store"
            );
        }

        let discarded = self.notifications.drain().count();
        debug!(
            component = self.component.display_name(),
            discarded, "connected component unmounted"
        );
    }

    /// Receive the context of a re-rendered provider.
    ///
    /// Later renders read state from and dispatch to the context store. The
    /// subscription made at mount is kept as is. Does not render.
    pub fn receive_context(&mut self, context: &Context<S>) -> Result<(), ConnectError> {
        let mounted = self.mounted.as_mut().ok_or(ConnectError::NotMounted)?;
        if !Arc::ptr_eq(&mounted.store, &context.store) {
            trace!(
                component = self.component.display_name(),
                "context store replaced"
            );
            mounted.store = Arc::clone(&context.store);
        }
        Ok(())
    }

    /// Receive own props from the parent and render if they changed.
    ///
    /// Change is decided by allocation identity only. Returns whether the
    /// component rendered.
    pub fn receive_props(&mut self, next: Arc<Props>) -> Result<bool, ConnectError> {
        let mounted = self.mounted.as_mut().ok_or(ConnectError::NotMounted)?;
        self.props_changed = !Arc::ptr_eq(&mounted.own_props, &next);
        mounted.own_props = next;

        if !self.should_update() {
            trace!(
                component = self.component.display_name(),
                "render skipped, own props unchanged"
            );
            return Ok(false);
        }

        self.render()?;
        Ok(true)
    }

    /// The render gate: whether an own-props update should render.
    ///
    /// Forced updates do not consult it.
    pub fn should_update(&self) -> bool {
        self.props_changed
    }

    /// Render now, bypassing the render gate.
    pub fn force_update(&mut self) -> Result<(), ConnectError> {
        self.render()
    }

    /// Render once for every store notification queued since the last call.
    ///
    /// Returns the number of renders performed.
    pub fn process_notifications(&mut self) -> Result<usize, ConnectError> {
        if self.mounted.is_none() {
            return Err(ConnectError::NotMounted);
        }

        let mut rendered = 0;
        while self.notifications.try_recv().is_ok() {
            self.force_update()?;
            rendered += 1;
        }
        Ok(rendered)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match &self.mounted {
            None => Lifecycle::Unmounted,
            Some(mounted) => Lifecycle::Mounted {
                subscribed: mounted.unsubscribe.is_some(),
            },
        }
    }

    pub fn is_subscribed(&self) -> bool {
        matches!(self.lifecycle(), Lifecycle::Mounted { subscribed: true })
    }

    /// The own props of the last update, while mounted.
    pub fn own_props(&self) -> Option<&Arc<Props>> {
        self.mounted.as_ref().map(|mounted| &mounted.own_props)
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    fn render(&mut self) -> Result<(), ConnectError> {
        let mounted = self.mounted.as_ref().ok_or(ConnectError::NotMounted)?;
        self.props_changed = false;

        let props = self.connector.merge_props(&mounted.store, &mounted.own_props);
        trace!(
            component = self.component.display_name(),
            props = props.len(),
            "rendering"
        );
        self.component.render(props);
        Ok(())
    }
}

impl<S: Store + 'static, C: Component> Drop for Connected<S, C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
