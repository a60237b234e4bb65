//! Errors raised by misuse of a connected component's lifecycle.

use thiserror::Error;

/// Lifecycle misuse of a [`Connected`](crate::Connected) component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// Returned by `mount` on a component that is already mounted.
    #[error("component is already mounted")]
    AlreadyMounted,

    /// Returned by `receive_props`, `receive_context`, `force_update` and
    /// `process_notifications` before mount or after unmount.
    #[error("component is not mounted")]
    NotMounted,
}
