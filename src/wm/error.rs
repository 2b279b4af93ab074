//! Error taxonomy for the fullscreen workflow.
//!
//! Every variant here is fatal to the program: the search either keeps
//! polling (a missing window is not an error) or aborts on the first
//! failure it cannot recover from.

use thiserror::Error;

pub type WmResult<T> = std::result::Result<T, WmError>;

#[derive(Debug, Error)]
pub enum WmError {
    /// The display connection could not be established at startup.
    #[error("unable to connect to the X server: {0}")]
    Connection(#[from] x11rb::errors::ConnectError),

    /// A property read could not be completed.
    #[error("{property} query failed: {detail}")]
    Query {
        property: &'static str,
        detail: String,
    },

    /// A query succeeded but the property the workflow depends on is not
    /// set at all, e.g. no EWMH window manager is publishing a client list.
    #[error("{property} is not set on the server")]
    MissingProperty { property: &'static str },

    /// A property write or client message could not be handed to the
    /// server. The window manager is the sole authority on state changes,
    /// so an undeliverable request has no fallback.
    #[error("failed to send {what}: {detail}")]
    Transmit { what: &'static str, detail: String },
}

impl WmError {
    pub(crate) fn query(property: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Query {
            property,
            detail: err.to_string(),
        }
    }

    pub(crate) fn transmit(what: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Transmit {
            what,
            detail: err.to_string(),
        }
    }
}
