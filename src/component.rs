//! Component abstraction for rendering merged Props.

#[cfg(any(test, feature = "testing"))]
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

use crate::Props;

/// A leaf component that can be wrapped by a [`Connector`](crate::Connector).
///
/// Implement this trait to integrate oxide-connect with your rendering system
/// (UI framework, terminal, embedded display, etc.).
///
/// [`render`](Self::render) is called by [`Connected`](crate::Connected) with the
/// own props of the component merged with the props derived from the store.
///
/// Any `FnMut(Props)` closure is a component, so functional components need
/// no wrapper type.
///
/// # Example
///
/// ```rust
/// use oxide_connect::{Component, Props};
///
/// struct Title;
///
/// impl Component for Title {
///     fn render(&mut self, props: Props) {
///         if let Some(text) = props.get::<&str>("text") {
///             println!("# {text}");
///         }
///     }
///
///     fn display_name(&self) -> &str {
///         "Title"
///     }
/// }
/// ```
pub trait Component {
    /// Render the given props.
    ///
    /// Props may contain a [`Dispatch`](crate::Dispatch) handle or callbacks
    /// built from one, which send actions back to the store.
    fn render(&mut self, props: Props);

    /// Name used to identify the component in log events.
    fn display_name(&self) -> &str {
        core::any::type_name::<Self>()
    }
}

impl<F> Component for F
where
    F: FnMut(Props),
{
    fn render(&mut self, props: Props) {
        self(props)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test component that captures all rendered Props for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so keep one clone in the test and
/// wrap the other.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use oxide_connect::{Connector, Context, Props, TestComponent, TestStore};
///
/// let store = Arc::new(TestStore::new(3, |count: &i32, by: i32| count + by));
/// let component = TestComponent::new();
///
/// let mut connected = Connector::<TestStore<i32, i32>>::new()
///     .map_state_to_props(|count: &i32, _own: &Props| Props::new().with("count", *count))
///     .wrap(component.clone());
///
/// connected.mount(&Context::new(store), Arc::new(Props::new())).unwrap();
///
/// component.with_renders(|renders| {
///     assert_eq!(renders[0].get::<i32>("count"), Some(&3));
/// });
/// ```
pub struct TestComponent {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Clone for TestComponent {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Component for TestComponent {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }

    fn display_name(&self) -> &str {
        "TestComponent"
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for TestComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl TestComponent {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// The closure receives every Props rendered so far, oldest first. Use it
    /// to make assertions or to invoke callbacks carried in the props.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}
