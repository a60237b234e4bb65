//! String-keyed property bags passed to components.

#[cfg(feature = "no_std")]
use alloc::borrow::Cow;
#[cfg(feature = "no_std")]
use alloc::collections::BTreeMap;
#[cfg(feature = "no_std")]
use alloc::sync::Arc;
#[cfg(not(feature = "no_std"))]
use std::borrow::Cow;
#[cfg(not(feature = "no_std"))]
use std::collections::BTreeMap;
#[cfg(not(feature = "no_std"))]
use std::sync::Arc;

use core::any::Any;
use core::fmt;

/// A single type-erased prop value.
///
/// Values are shared, so cloning a [`Props`] never clones the values themselves.
#[derive(Clone)]
pub struct PropValue(Arc<dyn Any + Send + Sync>);

impl PropValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrow the value as `T`, or `None` if it holds another type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).downcast_ref::<T>()
    }

    /// Whether both values are the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PropValue(..)")
    }
}

/// Props received by a component.
///
/// Own props are handed to a connected component as `Arc<Props>`; a new
/// allocation means "changed", the same allocation means "unchanged". The
/// contents are never compared.
///
/// # Example
///
/// ```rust
/// use oxide_connect::Props;
///
/// let props = Props::new().with("title", "Inbox").with("unread", 3u32);
///
/// assert_eq!(props.get::<&str>("title"), Some(&"Inbox"));
/// assert_eq!(props.get::<u32>("unread"), Some(&3));
/// assert_eq!(props.get::<i64>("unread"), None);
/// ```
#[derive(Clone, Default)]
pub struct Props {
    entries: BTreeMap<Cow<'static, str>, PropValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<T: Any + Send + Sync>(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: T,
    ) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, returning the value it replaced.
    pub fn insert<T: Any + Send + Sync>(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: T,
    ) -> Option<PropValue> {
        self.insert_value(key, PropValue::new(value))
    }

    pub fn insert_value(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: PropValue,
    ) -> Option<PropValue> {
        self.entries.insert(key.into(), value)
    }

    /// Typed read of `key`.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key).and_then(|value| value.downcast_ref::<T>())
    }

    pub fn value(&self, key: &str) -> Option<&PropValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|key| &**key)
    }

    /// Copy every entry of `other` into `self`. On collision `other` wins.
    pub fn extend(&mut self, other: Props) {
        self.entries.extend(other.entries);
    }

    /// Merge the three prop sources of a connected component.
    ///
    /// Precedence on key collision: dispatch props over state props over own
    /// props. The result is always a new bag; `own` is left untouched.
    pub fn merge(own: &Props, state: Option<Props>, dispatch: Option<Props>) -> Props {
        let mut merged = own.clone();
        for layer in [state, dispatch].into_iter().flatten() {
            merged.extend(layer);
        }
        merged
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

impl<K: Into<Cow<'static, str>>> FromIterator<(K, PropValue)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, PropValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect(),
        }
    }
}
