//! Conversion between [`Device`] records and variant maps.
//!
//! # List encoding
//!
//! GUIDs and checksums travel as a single string joined with
//! [`LIST_SEPARATOR`]. An element that itself contains a comma is split on
//! the way back in; existing consumers depend on this encoding, so it is not
//! replaced with a string array.
//!
//! # Device ID
//!
//! The ID is carried by the keyed envelope, never as a `DeviceId` entry in
//! the map produced by [`to_variant_map`].

use crate::device::Device;
use crate::error::Error;
use crate::keys;
use bytes::Bytes;
use fwdev_proto::{Envelope, EnvelopeKind, Variant, VariantMap};
use tracing::{debug, trace, warn};

/// Separator for list fields on the wire.
pub const LIST_SEPARATOR: char = ',';

/// How a wire key is applied to a device.
#[derive(Clone, Copy)]
enum FieldSetter {
    /// String value stored as-is.
    Str(fn(&mut Device, String)),
    /// String value split on [`LIST_SEPARATOR`], each piece added.
    List(fn(&mut Device, &str)),
    /// 64-bit unsigned value.
    U64(fn(&mut Device, u64)),
    /// 32-bit unsigned value.
    U32(fn(&mut Device, u32)),
}

impl FieldSetter {
    fn expected_type(&self) -> &'static str {
        match self {
            FieldSetter::Str(_) | FieldSetter::List(_) => "s",
            FieldSetter::U64(_) => "t",
            FieldSetter::U32(_) => "u",
        }
    }

    /// Apply `value`, returning `false` if it has the wrong type.
    fn apply(&self, device: &mut Device, value: &Variant) -> bool {
        match (self, value) {
            (FieldSetter::Str(set), Variant::String(s)) => set(device, s.clone()),
            (FieldSetter::List(add), Variant::String(s)) => {
                if !s.is_empty() {
                    for item in s.split(LIST_SEPARATOR) {
                        add(device, item);
                    }
                }
            }
            (FieldSetter::U64(set), Variant::Uint64(v)) => set(device, *v),
            (FieldSetter::U32(set), Variant::Uint32(v)) => set(device, *v),
            _ => return false,
        }
        true
    }
}

static FIELD_SETTERS: &[(&str, FieldSetter)] = &[
    (keys::FLAGS, FieldSetter::U64(|d, v| d.set_flags(v))),
    (keys::CREATED, FieldSetter::U64(|d, v| d.set_created(v))),
    (keys::MODIFIED, FieldSetter::U64(|d, v| d.set_modified(v))),
    (keys::GUID, FieldSetter::List(|d, v| d.add_guid(v))),
    (keys::DEVICE_ID, FieldSetter::Str(|d, v| d.set_id(v))),
    (keys::NAME, FieldSetter::Str(|d, v| d.set_name(v))),
    (keys::SUMMARY, FieldSetter::Str(|d, v| d.set_summary(v))),
    (keys::VENDOR, FieldSetter::Str(|d, v| d.set_vendor(v))),
    (keys::HOMEPAGE, FieldSetter::Str(|d, v| d.set_homepage(v))),
    (keys::DESCRIPTION, FieldSetter::Str(|d, v| d.set_description(v))),
    (keys::CHECKSUM, FieldSetter::List(|d, v| d.add_checksum(v))),
    (keys::PLUGIN, FieldSetter::Str(|d, v| d.set_provider(v))),
    (keys::VERSION, FieldSetter::Str(|d, v| d.set_version(v))),
    (keys::VERSION_LOWEST, FieldSetter::Str(|d, v| d.set_version_lowest(v))),
    (
        keys::VERSION_BOOTLOADER,
        FieldSetter::Str(|d, v| d.set_version_bootloader(v)),
    ),
    (keys::FLASHES_LEFT, FieldSetter::U32(|d, v| d.set_flashes_left(v))),
];

fn setter_for(key: &str) -> Option<FieldSetter> {
    FIELD_SETTERS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, setter)| *setter)
}

fn join_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for item in items {
        if !out.is_empty() {
            out.push(LIST_SEPARATOR);
        }
        out.push_str(item);
    }
    out
}

/// Build a variant map holding every present field of `device`.
///
/// Unset strings, zero numbers and empty lists are omitted.
pub fn to_variant_map(device: &Device) -> VariantMap {
    let mut map = VariantMap::new();

    if !device.guids().is_empty() {
        map.insert(keys::GUID, join_list(device.guids().iter()));
    }
    if let Some(name) = device.name() {
        map.insert(keys::NAME, name);
    }
    if let Some(summary) = device.summary() {
        map.insert(keys::SUMMARY, summary);
    }
    if let Some(vendor) = device.vendor() {
        map.insert(keys::VENDOR, vendor);
    }
    if let Some(homepage) = device.homepage() {
        map.insert(keys::HOMEPAGE, homepage);
    }
    if device.flags() > 0 {
        map.insert(keys::FLAGS, device.flags());
    }
    if device.created() > 0 {
        map.insert(keys::CREATED, device.created());
    }
    if device.modified() > 0 {
        map.insert(keys::MODIFIED, device.modified());
    }
    if let Some(description) = device.description() {
        map.insert(keys::DESCRIPTION, description);
    }
    if !device.checksums().is_empty() {
        map.insert(keys::CHECKSUM, join_list(device.checksums().iter()));
    }
    if let Some(provider) = device.provider() {
        map.insert(keys::PLUGIN, provider);
    }
    if let Some(version) = device.version() {
        map.insert(keys::VERSION, version);
    }
    if let Some(version_lowest) = device.version_lowest() {
        map.insert(keys::VERSION_LOWEST, version_lowest);
    }
    if let Some(version_bootloader) = device.version_bootloader() {
        map.insert(keys::VERSION_BOOTLOADER, version_bootloader);
    }
    if device.flashes_left() > 0 {
        map.insert(keys::FLASHES_LEFT, device.flashes_left());
    }

    map
}

/// Wrap the variant map of `device` in the requested envelope shape.
pub fn to_envelope(device: &Device, kind: EnvelopeKind) -> Result<Envelope, Error> {
    let map = to_variant_map(device);
    match kind {
        EnvelopeKind::Dict => Ok(Envelope::Dict(map)),
        EnvelopeKind::Tuple => Ok(Envelope::Tuple(map)),
        EnvelopeKind::Keyed => {
            let id = device.id().ok_or(Error::MissingId)?;
            Ok(Envelope::Keyed {
                id: id.to_string(),
                map,
            })
        }
    }
}

/// Encode `device` to bytes in the requested envelope shape.
pub fn encode_bytes(device: &Device, kind: EnvelopeKind) -> Result<Bytes, Error> {
    let envelope = to_envelope(device, kind)?;
    Ok(fwdev_proto::encode_envelope(&envelope)?)
}

/// Apply a single key/value pair to `device`.
///
/// Unknown keys are ignored. A value with the wrong type for its key leaves
/// the field untouched.
pub fn apply_entry(device: &mut Device, key: &str, value: &Variant) {
    let Some(setter) = setter_for(key) else {
        trace!(key, "ignoring unknown device key");
        return;
    };
    if !setter.apply(device, value) {
        warn!(
            key,
            expected = setter.expected_type(),
            actual = value.type_string(),
            "ignoring device value with unexpected type"
        );
    }
}

/// Apply every entry of `map` to `device`, in map order.
pub fn apply_variant_map(device: &mut Device, map: &VariantMap) {
    for entry in map {
        apply_entry(device, &entry.key, &entry.value);
    }
}

/// Build a new device from a variant map.
pub fn from_variant_map(map: &VariantMap) -> Device {
    let mut device = Device::new();
    apply_variant_map(&mut device, map);
    device
}

/// Build a device from any record-carrying envelope.
///
/// Returns `None` for envelope shapes that cannot carry a device.
pub fn from_envelope(envelope: &Envelope) -> Option<Device> {
    let device = match envelope {
        Envelope::Dict(map) | Envelope::Tuple(map) => from_variant_map(map),
        Envelope::Keyed { id, map } => {
            let mut device = Device::new();
            device.set_id(id.as_str());
            apply_variant_map(&mut device, map);
            device
        }
        Envelope::Array(_) | Envelope::Value(_) => {
            warn!(shape = %envelope.type_string(), "device envelope type not known");
            return None;
        }
    };
    debug!(
        id = device.id().unwrap_or_default(),
        guids = device.guids().len(),
        "decoded device"
    );
    Some(device)
}

/// Like [`from_envelope`], reporting unsupported shapes as an error.
pub fn decode(envelope: &Envelope) -> Result<Device, Error> {
    from_envelope(envelope).ok_or_else(|| Error::UnsupportedEnvelope(envelope.type_string()))
}

/// Decode a device from bytes produced by [`encode_bytes`].
pub fn decode_bytes(data: &[u8]) -> Result<Device, Error> {
    let envelope = fwdev_proto::decode_envelope(data)?;
    decode(&envelope)
}

impl Device {
    /// See [`to_variant_map`].
    pub fn to_variant_map(&self) -> VariantMap {
        to_variant_map(self)
    }

    /// See [`to_envelope`].
    pub fn to_data(&self, kind: EnvelopeKind) -> Result<Envelope, Error> {
        to_envelope(self, kind)
    }

    /// See [`from_envelope`].
    pub fn from_data(envelope: &Envelope) -> Option<Self> {
        from_envelope(envelope)
    }
}

impl TryFrom<&Envelope> for Device {
    type Error = Error;

    fn try_from(envelope: &Envelope) -> Result<Self, Self::Error> {
        decode(envelope)
    }
}
