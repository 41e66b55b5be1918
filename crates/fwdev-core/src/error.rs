//! Core error types.

use thiserror::Error;

/// Device record errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Protocol error.
    #[error("protocol error: {0}")]
    Protocol(#[from] fwdev_proto::Error),

    /// The payload shape cannot carry a device record.
    #[error("unsupported envelope type: {0}")]
    UnsupportedEnvelope(String),

    /// A keyed envelope was requested for a device without an ID.
    #[error("device has no ID")]
    MissingId,
}
