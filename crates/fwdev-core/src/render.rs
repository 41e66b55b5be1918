//! Human-readable text dump of a device.

use crate::checksum::{ChecksumFormatter, DefaultChecksumFormatter};
use crate::config::RenderConfig;
use crate::device::Device;
use crate::flags::{flags_to_string, DefaultFlagNames, FlagNameResolver};
use crate::keys;
use chrono::{DateTime, Datelike};
use std::fmt;

/// Latest year that still formats as four digits.
const MAX_DATE_YEAR: i32 = 9999;

/// Flash counts at or above this are not shown; only a nearly exhausted
/// device is worth pointing out.
pub const FLASHES_LEFT_SHOW_BELOW: u32 = 2;

/// Renders devices as aligned `key: value` lines.
pub struct Renderer {
    config: RenderConfig,
    flag_names: Box<dyn FlagNameResolver>,
    checksums: Box<dyn ChecksumFormatter>,
}

impl Renderer {
    /// Create a renderer with the default layout and collaborators.
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
            flag_names: Box::new(DefaultFlagNames),
            checksums: Box::new(DefaultChecksumFormatter),
        }
    }

    /// Set the layout.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the flag name resolver.
    pub fn with_flag_names(mut self, resolver: impl FlagNameResolver + 'static) -> Self {
        self.flag_names = Box::new(resolver);
        self
    }

    /// Set the checksum display formatter.
    pub fn with_checksum_formatter(mut self, formatter: impl ChecksumFormatter + 'static) -> Self {
        self.checksums = Box::new(formatter);
        self
    }

    /// The layout in use.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `device`, one line per present field.
    pub fn render(&self, device: &Device) -> String {
        let mut out = String::new();

        for guid in device.guids().iter() {
            self.push_kv(&mut out, keys::GUID, guid);
        }
        self.push_opt(&mut out, keys::DEVICE_ID, device.id());
        self.push_opt(&mut out, keys::DESCRIPTION, device.description());
        self.push_opt(&mut out, keys::PLUGIN, device.provider());
        self.push_kv(
            &mut out,
            keys::FLAGS,
            &flags_to_string(device.flags(), self.flag_names.as_ref()),
        );
        for checksum in device.checksums().iter() {
            let display = self.checksums.format_for_display(checksum);
            self.push_kv(&mut out, keys::CHECKSUM, &display);
        }
        self.push_opt(&mut out, keys::VENDOR, device.vendor());
        self.push_opt(&mut out, keys::VERSION, device.version());
        self.push_opt(&mut out, keys::VERSION_LOWEST, device.version_lowest());
        self.push_opt(&mut out, keys::VERSION_BOOTLOADER, device.version_bootloader());
        if device.flashes_left() > 0 && device.flashes_left() < FLASHES_LEFT_SHOW_BELOW {
            self.push_kv(&mut out, keys::FLASHES_LEFT, &device.flashes_left().to_string());
        }
        self.push_date(&mut out, keys::CREATED, device.created());
        self.push_date(&mut out, keys::MODIFIED, device.modified());

        out
    }

    fn push_kv(&self, out: &mut String, key: &str, value: &str) {
        let pad = self.config.key_width.saturating_sub(key.len());
        out.extend(std::iter::repeat(' ').take(self.config.indent));
        out.push_str(key);
        out.push_str(": ");
        out.extend(std::iter::repeat(' ').take(pad));
        out.push_str(value);
        out.push('\n');
    }

    fn push_opt(&self, out: &mut String, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push_kv(out, key, value);
        }
    }

    fn push_date(&self, out: &mut String, key: &str, secs: u64) {
        if let Some(date) = format_date(secs) {
            self.push_kv(out, key, &date);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// UTC `YYYY-MM-DD` date for a UNIX timestamp.
///
/// `None` for 0 and for timestamps past the end of year 9999.
pub fn format_date(secs: u64) -> Option<String> {
    if secs == 0 {
        return None;
    }
    let secs = i64::try_from(secs).ok()?;
    let date = DateTime::from_timestamp(secs, 0)?;
    if date.year() > MAX_DATE_YEAR {
        return None;
    }
    Some(date.format("%Y-%m-%d").to_string())
}

/// Render `device` with the default renderer.
pub fn render(device: &Device) -> String {
    Renderer::new().render(device)
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_device_only_has_flags() {
        assert_eq!(render(&Device::new()), "  Flags:                none\n");
    }

    #[test]
    fn test_padding() {
        let device = Device::new().with_vendor("Hughski");
        let text = render(&device);
        assert!(text.contains("  Vendor:               Hughski\n"));

        // Value column is the same for every key
        let device = Device::new()
            .with_vendor("a")
            .with_version_bootloader("b");
        for line in render(&device).lines() {
            assert_eq!(&line[23..24], " ", "{:?}", line);
            assert_ne!(&line[24..25], " ", "{:?}", line);
        }
    }

    #[test]
    fn test_long_key_is_not_truncated() {
        let renderer = Renderer::new().with_config(RenderConfig::new().with_key_width(4));
        assert_eq!(renderer.config().key_width, 4);
        assert_eq!(renderer.config().indent, 2);
        let text = renderer.render(&Device::new().with_version("1"));
        assert!(text.contains("  Version: 1\n"));
    }

    #[test]
    fn test_flags_line() {
        let device = Device::new()
            .with_flag(flags::ALLOW_OFFLINE)
            .with_flag(flags::REQUIRE_AC);
        let text = render(&device);
        assert!(text.contains("  Flags:                allow-offline|require-ac\n"));
    }

    #[test]
    fn test_flashes_left_threshold() {
        let mut device = Device::new();
        for (count, shown) in [(0, false), (1, true), (2, false), (100, false)] {
            device.set_flashes_left(count);
            let text = render(&device);
            assert_eq!(text.contains("FlashesLeft"), shown, "count {}", count);
        }
        device.set_flashes_left(1);
        assert!(render(&device).contains("  FlashesLeft:          1\n"));
    }

    #[test]
    fn test_dates() {
        assert_eq!(format_date(0), None);
        assert_eq!(format_date(1514764800), Some("2018-01-01".to_string()));
        assert_eq!(format_date(u64::MAX), None);

        // Last second of 9999 is the latest four-digit year
        assert_eq!(format_date(253402300799), Some("9999-12-31".to_string()));
        assert_eq!(format_date(253402300800), None);

        let mut device = Device::new();
        device.set_created(1514764800);
        let text = render(&device);
        assert!(text.contains("  Created:              2018-01-01\n"));
        assert!(!text.contains("Modified"));

        device.set_modified(253402300800);
        assert!(!render(&device).contains("Modified"));
    }

    #[test]
    fn test_custom_flag_names() {
        struct Terse;
        impl FlagNameResolver for Terse {
            fn flag_to_name(&self, flag: u64) -> std::borrow::Cow<'static, str> {
                if flag == 0 {
                    "-".into()
                } else {
                    format!("bit{}", flag.trailing_zeros()).into()
                }
            }

            fn flag_from_name(&self, _name: &str) -> u64 {
                flags::UNKNOWN
            }
        }

        let renderer = Renderer::new().with_flag_names(Terse);
        assert_eq!(renderer.render(&Device::new()), "  Flags:                -\n");

        let device = Device::new().with_flag(flags::INTERNAL).with_flag(1 << 40);
        assert_eq!(renderer.render(&device), "  Flags:                bit0|bit40\n");
    }

    #[test]
    fn test_custom_collaborators() {
        struct Upper;
        impl ChecksumFormatter for Upper {
            fn format_for_display(&self, checksum: &str) -> String {
                checksum.to_uppercase()
            }
        }

        let renderer = Renderer::new()
            .with_config(RenderConfig::new().with_indent(0))
            .with_checksum_formatter(Upper);
        let text = renderer.render(&Device::new().with_checksum("abc"));
        assert!(text.contains("\nChecksum:             ABC\n"));
    }
}
