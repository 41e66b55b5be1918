//! Wire key names for device fields.
//!
//! These names are shared with existing consumers of the variant map and the
//! text dump and must not change.

/// Comma-joined GUIDs.
pub const GUID: &str = "Guid";
/// Device ID.
pub const DEVICE_ID: &str = "DeviceId";
/// Display name.
pub const NAME: &str = "Name";
/// One line summary.
pub const SUMMARY: &str = "Summary";
/// Vendor name.
pub const VENDOR: &str = "Vendor";
/// Vendor homepage URL.
pub const HOMEPAGE: &str = "Homepage";
/// AppStream description.
pub const DESCRIPTION: &str = "Description";
/// Providing plugin.
pub const PLUGIN: &str = "Plugin";
/// Device flags, `u64`.
pub const FLAGS: &str = "Flags";
/// Creation time, `u64` UNIX seconds.
pub const CREATED: &str = "Created";
/// Modification time, `u64` UNIX seconds.
pub const MODIFIED: &str = "Modified";
/// Comma-joined checksums.
pub const CHECKSUM: &str = "Checksum";
/// Firmware version.
pub const VERSION: &str = "Version";
/// Lowest accepted firmware version.
pub const VERSION_LOWEST: &str = "VersionLowest";
/// Bootloader version.
pub const VERSION_BOOTLOADER: &str = "VersionBootloader";
/// Flash cycles left, `u32`.
pub const FLASHES_LEFT: &str = "FlashesLeft";
