//! fwdev Core - device records, variant map codec and text dump.
//!
//! A [`Device`] holds the identity, version and capability metadata of one
//! piece of hardware. The [`codec`] module moves devices in and out of the
//! generic [`VariantMap`](fwdev_proto::VariantMap) payload used on the bus,
//! and [`render`] produces the aligned text dump shown to users.
//!
//! ```
//! use fwdev_core::{codec, flags, Device};
//! use fwdev_core::proto::EnvelopeKind;
//!
//! let device = Device::new()
//!     .with_id("USB:foo")
//!     .with_guid("2082b5e0-7a64-478a-b1b2-e3404fab6dad")
//!     .with_name("ColorHug2")
//!     .with_flag(flags::ALLOW_ONLINE);
//!
//! let envelope = codec::to_envelope(&device, EnvelopeKind::Keyed).unwrap();
//! let decoded = codec::from_envelope(&envelope).unwrap();
//! assert_eq!(decoded, device);
//! ```

pub mod checksum;
pub mod codec;
pub mod config;
pub mod device;
pub mod error;
pub mod flags;
pub mod keys;
pub mod render;

pub use checksum::{ChecksumFormatter, ChecksumKind, DefaultChecksumFormatter};
pub use codec::{
    apply_entry, apply_variant_map, decode, decode_bytes, encode_bytes, from_envelope,
    from_variant_map, to_envelope, to_variant_map, LIST_SEPARATOR,
};
pub use config::RenderConfig;
pub use device::{Device, UniqueList};
pub use error::Error;
pub use flags::{DefaultFlagNames, FlagNameResolver};
pub use render::{render, Renderer};

/// Re-export protocol types.
pub use fwdev_proto as proto;
