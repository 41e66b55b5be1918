//! Device flag bits and their symbolic names.
//!
//! Flags are plain `u64` bit-sets. Bits without a name here are still valid:
//! a newer daemon may send flags this build does not know about, and they
//! are kept as-is.

use std::borrow::Cow;

/// No flags set.
pub const NONE: u64 = 0;
/// Device cannot be removed easily.
pub const INTERNAL: u64 = 1 << 0;
/// Device can be updated online.
pub const ALLOW_ONLINE: u64 = 1 << 1;
/// Device can be updated offline.
pub const ALLOW_OFFLINE: u64 = 1 << 2;
/// Device requires AC power to update.
pub const REQUIRE_AC: u64 = 1 << 3;
/// Device is locked.
pub const LOCKED: u64 = 1 << 4;
/// Device is supported by the metadata.
pub const SUPPORTED: u64 = 1 << 5;
/// Device requires a bootloader mode to be updated.
pub const NEEDS_BOOTLOADER: u64 = 1 << 6;
/// Device has been registered with other plugins.
pub const REGISTERED: u64 = 1 << 7;
/// Device requires a reboot to finish the update.
pub const NEEDS_REBOOT: u64 = 1 << 8;
/// Unknown flag.
pub const UNKNOWN: u64 = u64::MAX;

const NAMES: &[(u64, &str)] = &[
    (NONE, "none"),
    (INTERNAL, "internal"),
    (ALLOW_ONLINE, "allow-online"),
    (ALLOW_OFFLINE, "allow-offline"),
    (REQUIRE_AC, "require-ac"),
    (LOCKED, "locked"),
    (SUPPORTED, "supported"),
    (NEEDS_BOOTLOADER, "needs-bootloader"),
    (REGISTERED, "registered"),
    (NEEDS_REBOOT, "needs-reboot"),
    (UNKNOWN, "unknown"),
];

/// Convert a single flag value to its name.
pub fn flag_to_string(flag: u64) -> Option<&'static str> {
    NAMES.iter().find(|(v, _)| *v == flag).map(|(_, n)| *n)
}

/// Convert a flag name to its value, or [`UNKNOWN`] if unrecognised.
pub fn flag_from_string(name: &str) -> u64 {
    NAMES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(v, _)| *v)
        .unwrap_or(UNKNOWN)
}

/// Iterate over every set bit in `flags`, lowest first.
pub fn set_bits(flags: u64) -> impl Iterator<Item = u64> {
    (0..64)
        .map(|i| 1u64 << i)
        .filter(move |bit| flags & bit != 0)
}

/// Maps flag bits to symbolic names and back.
pub trait FlagNameResolver: Send + Sync {
    /// Name of a single flag bit, or of `0` for the empty set.
    fn flag_to_name(&self, flag: u64) -> Cow<'static, str>;

    /// Flag bit for a name.
    fn flag_from_name(&self, name: &str) -> u64;
}

/// Resolver backed by the built-in flag table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFlagNames;

impl FlagNameResolver for DefaultFlagNames {
    fn flag_to_name(&self, flag: u64) -> Cow<'static, str> {
        Cow::Borrowed(flag_to_string(flag).unwrap_or("unknown"))
    }

    fn flag_from_name(&self, name: &str) -> u64 {
        flag_from_string(name)
    }
}

/// Render a flag set as `name|name|...`, or the name of `0` if empty.
pub fn flags_to_string(flags: u64, resolver: &dyn FlagNameResolver) -> String {
    let names: Vec<Cow<'static, str>> = set_bits(flags)
        .map(|bit| resolver.flag_to_name(bit))
        .collect();
    if names.is_empty() {
        return resolver.flag_to_name(NONE).into_owned();
    }
    names.join("|")
}
