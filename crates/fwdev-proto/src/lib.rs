//! fwdev protocol types.
//!
//! This crate defines the generic wire payload that device records travel in:
//! typed [`Variant`] values, ordered [`VariantMap`]s and the top-level
//! [`Envelope`] shapes. It knows nothing about devices; the mapping between
//! records and maps lives in `fwdev-core`.
//!
//! # Modules
//!
//! - [`value`] - Typed scalar and array values
//! - [`map`] - Ordered string-keyed maps
//! - [`envelope`] - Top-level payload shapes
//! - [`wire`] - rkyv byte encoding for envelopes
//! - [`error`] - Protocol error types

pub mod envelope;
pub mod error;
pub mod map;
pub mod value;
pub mod wire;

pub use envelope::{Envelope, EnvelopeKind};
pub use error::Error;
pub use map::{VariantEntry, VariantMap};
pub use value::Variant;
pub use wire::{decode_envelope, encode_envelope};
