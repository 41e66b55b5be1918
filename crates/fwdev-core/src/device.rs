//! The device record.

/// An ordered list that ignores duplicate insertions.
///
/// Membership is an O(n) scan, which is fine for the handful of GUIDs and
/// checksums a device carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueList {
    items: Vec<String>,
}

impl UniqueList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` unless it is already present.
    ///
    /// Returns `true` if the value was added.
    pub fn add(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Check if `value` is present.
    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|v| v == value)
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// The elements in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for UniqueList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = UniqueList::new();
        for item in iter {
            list.add(item);
        }
        list
    }
}

impl<S: Into<String>> Extend<S> for UniqueList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

macro_rules! string_field {
    ($(#[$doc:meta])* $field:ident, $set:ident, $clear:ident, $with:ident) => {
        $(#[$doc])*
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        #[doc = concat!("Set `", stringify!($field), "`.")]
        pub fn $set(&mut self, value: impl Into<String>) {
            self.$field = Some(value.into());
        }

        #[doc = concat!("Unset `", stringify!($field), "`.")]
        pub fn $clear(&mut self) {
            self.$field = None;
        }

        #[doc = concat!("Builder form of `", stringify!($set), "`.")]
        pub fn $with(mut self, value: impl Into<String>) -> Self {
            self.$set(value);
            self
        }
    };
}

/// Identity, versioning and capability metadata for one device.
///
/// String fields distinguish "unset" (`None`) from the empty string. Numeric
/// fields use 0 for unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Device {
    id: Option<String>,
    created: u64,
    modified: u64,
    flags: u64,
    guids: UniqueList,
    name: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    vendor: Option<String>,
    homepage: Option<String>,
    provider: Option<String>,
    version: Option<String>,
    version_lowest: Option<String>,
    version_bootloader: Option<String>,
    checksums: UniqueList,
    flashes_left: u32,
}

impl Device {
    /// Create an empty device.
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(
        /// Opaque stable identifier, e.g. `USB:foo`.
        id, set_id, clear_id, with_id
    );
    string_field!(
        /// Display name, e.g. `ColorHug2`.
        name, set_name, clear_name, with_name
    );
    string_field!(
        /// One line summary.
        summary, set_summary, clear_summary, with_summary
    );
    string_field!(
        /// Description in AppStream markup.
        description, set_description, clear_description, with_description
    );
    string_field!(
        /// Vendor name.
        vendor, set_vendor, clear_vendor, with_vendor
    );
    string_field!(
        /// Vendor homepage URL.
        homepage, set_homepage, clear_homepage, with_homepage
    );
    string_field!(
        /// Name of the plugin that provides this device, e.g. `colorhug`.
        provider, set_provider, clear_provider, with_provider
    );
    string_field!(
        /// Current firmware version, e.g. `1.2.3`.
        version, set_version, clear_version, with_version
    );
    string_field!(
        /// Lowest firmware version the device will accept.
        version_lowest, set_version_lowest, clear_version_lowest, with_version_lowest
    );
    string_field!(
        /// Bootloader version.
        version_bootloader,
        set_version_bootloader,
        clear_version_bootloader,
        with_version_bootloader
    );

    /// Creation time as UNIX seconds, or 0 if unset.
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Set the creation time in UNIX seconds.
    pub fn set_created(&mut self, created: u64) {
        self.created = created;
    }

    /// Modification time as UNIX seconds, or 0 if unset.
    pub fn modified(&self) -> u64 {
        self.modified
    }

    /// Set the modification time in UNIX seconds.
    pub fn set_modified(&mut self, modified: u64) {
        self.modified = modified;
    }

    /// Flash cycles left, or 0 if unknown.
    pub fn flashes_left(&self) -> u32 {
        self.flashes_left
    }

    /// Set the number of flash cycles left.
    pub fn set_flashes_left(&mut self, flashes_left: u32) {
        self.flashes_left = flashes_left;
    }

    // Flags

    /// The device flag bit-set, see [`crate::flags`].
    pub fn flags(&self) -> u64 {
        self.flags
    }

    /// Replace the whole flag set. Unknown bits are kept.
    pub fn set_flags(&mut self, flags: u64) {
        self.flags = flags;
    }

    /// Set the bits of `flag`.
    pub fn add_flag(&mut self, flag: u64) {
        self.flags |= flag;
    }

    /// Clear the bits of `flag`.
    pub fn remove_flag(&mut self, flag: u64) {
        self.flags &= !flag;
    }

    /// Check if any bit of `flag` is set.
    pub fn has_flag(&self, flag: u64) -> bool {
        self.flags & flag != 0
    }

    /// Builder form of [`add_flag`](Self::add_flag).
    pub fn with_flag(mut self, flag: u64) -> Self {
        self.add_flag(flag);
        self
    }

    // GUIDs

    /// GUIDs in insertion order.
    pub fn guids(&self) -> &UniqueList {
        &self.guids
    }

    /// Replace all GUIDs, dropping duplicates.
    pub fn set_guids<I, S>(&mut self, guids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guids = guids.into_iter().collect();
    }

    /// Add a GUID if it is not already present.
    pub fn add_guid(&mut self, guid: impl Into<String>) {
        self.guids.add(guid);
    }

    /// Check if the device has this GUID.
    pub fn has_guid(&self, guid: &str) -> bool {
        self.guids.contains(guid)
    }

    /// The first GUID added, if any.
    pub fn guid_default(&self) -> Option<&str> {
        self.guids.first()
    }

    /// Builder form of [`add_guid`](Self::add_guid).
    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.add_guid(guid);
        self
    }

    // Checksums

    /// Checksums in insertion order.
    pub fn checksums(&self) -> &UniqueList {
        &self.checksums
    }

    /// Replace all checksums, dropping duplicates.
    pub fn set_checksums<I, S>(&mut self, checksums: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.checksums = checksums.into_iter().collect();
    }

    /// Add a checksum if it is not already present.
    pub fn add_checksum(&mut self, checksum: impl Into<String>) {
        self.checksums.add(checksum);
    }

    /// Check if the device has this checksum.
    pub fn has_checksum(&self, checksum: &str) -> bool {
        self.checksums.contains(checksum)
    }

    /// The first checksum added, if any.
    pub fn checksum_default(&self) -> Option<&str> {
        self.checksums.first()
    }

    /// Builder form of [`add_checksum`](Self::add_checksum).
    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.add_checksum(checksum);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags;

    #[test]
    fn test_new_device_is_empty() {
        let device = Device::new();
        assert_eq!(device.id(), None);
        assert_eq!(device.name(), None);
        assert_eq!(device.flags(), 0);
        assert_eq!(device.created(), 0);
        assert_eq!(device.flashes_left(), 0);
        assert!(device.guids().is_empty());
        assert_eq!(device.guid_default(), None);
        assert_eq!(device.checksum_default(), None);
    }

    #[test]
    fn test_string_fields() {
        let mut device = Device::new();
        device.set_vendor("Hughski");
        assert_eq!(device.vendor(), Some("Hughski"));

        device.set_vendor(String::from("Other"));
        assert_eq!(device.vendor(), Some("Other"));

        // Empty is not the same as unset
        device.set_vendor("");
        assert_eq!(device.vendor(), Some(""));

        device.clear_vendor();
        assert_eq!(device.vendor(), None);
    }

    #[test]
    fn test_add_guid_is_idempotent() {
        let mut device = Device::new();
        device.add_guid("b");
        device.add_guid("a");
        device.add_guid("b");

        let guids: Vec<&str> = device.guids().iter().collect();
        assert_eq!(guids, vec!["b", "a"]);
        assert_eq!(device.guid_default(), Some("b"));
        assert!(device.has_guid("a"));
        assert!(!device.has_guid("c"));
    }

    #[test]
    fn test_set_checksums_dedups() {
        let mut device = Device::new();
        device.add_checksum("old");
        device.set_checksums(["x", "y", "x"]);

        assert_eq!(device.checksums().as_slice(), &["x".to_string(), "y".to_string()]);
        assert!(!device.has_checksum("old"));
        assert_eq!(device.checksum_default(), Some("x"));
    }

    #[test]
    fn test_flags() {
        let mut device = Device::new();
        device.add_flag(flags::INTERNAL);
        device.add_flag(flags::REQUIRE_AC);
        assert!(device.has_flag(flags::INTERNAL));
        assert!(device.has_flag(flags::REQUIRE_AC));
        assert!(!device.has_flag(flags::LOCKED));

        device.remove_flag(flags::INTERNAL);
        assert!(!device.has_flag(flags::INTERNAL));
        assert_eq!(device.flags(), flags::REQUIRE_AC);
    }

    #[test]
    fn test_flags_any_bit() {
        for i in 0..64 {
            let flag = 1u64 << i;
            let mut device = Device::new();
            device.add_flag(flag);
            assert!(device.has_flag(flag));
            device.remove_flag(flag);
            assert!(!device.has_flag(flag));
        }

        // Bits unknown to this build survive
        let mut device = Device::new();
        device.set_flags(1 << 62 | flags::LOCKED);
        assert_eq!(device.flags(), 1 << 62 | flags::LOCKED);
    }

    #[test]
    fn test_builder() {
        let device = Device::new()
            .with_id("USB:foo")
            .with_guid("2082b5e0-7a64-478a-b1b2-e3404fab6dad")
            .with_name("ColorHug2")
            .with_flag(flags::ALLOW_ONLINE);

        assert_eq!(device.id(), Some("USB:foo"));
        assert_eq!(device.name(), Some("ColorHug2"));
        assert!(device.has_flag(flags::ALLOW_ONLINE));
    }

    #[test]
    fn test_numeric_fields_and_checksum_builder() {
        let mut device = Device::new()
            .with_version_bootloader("0.1")
            .with_checksum("abc")
            .with_checksum("abc");
        device.set_created(1_500_000_000);
        device.set_modified(1_600_000_000);
        device.set_flashes_left(3);

        assert_eq!(device.version_bootloader(), Some("0.1"));
        assert_eq!(device.checksums().len(), 1);
        assert_eq!(device.checksum_default(), Some("abc"));
        assert_eq!(device.created(), 1_500_000_000);
        assert_eq!(device.modified(), 1_600_000_000);
        assert_eq!(device.flashes_left(), 3);
    }

    #[test]
    fn test_unique_list_extend() {
        let mut list: UniqueList = ["a", "b"].into_iter().collect();
        list.extend(["b", "c"]);
        assert_eq!(list.len(), 3);
        list.clear();
        assert!(list.is_empty());
    }
}
