//! Checksum display formatting.

/// Hash algorithm of a checksum string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumKind {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl ChecksumKind {
    /// Display name, e.g. `SHA256`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumKind::Md5 => "MD5",
            ChecksumKind::Sha1 => "SHA1",
            ChecksumKind::Sha256 => "SHA256",
            ChecksumKind::Sha512 => "SHA512",
        }
    }

    /// Parse an algorithm prefix such as `sha256`.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.to_ascii_lowercase().as_str() {
            "md5" => Some(ChecksumKind::Md5),
            "sha1" => Some(ChecksumKind::Sha1),
            "sha256" => Some(ChecksumKind::Sha256),
            "sha512" => Some(ChecksumKind::Sha512),
            _ => None,
        }
    }

    /// Guess the algorithm from the length of a hex digest.
    ///
    /// Unrecognised lengths are reported as SHA1.
    pub fn guess(checksum: &str) -> Self {
        match checksum.len() {
            32 => ChecksumKind::Md5,
            40 => ChecksumKind::Sha1,
            64 => ChecksumKind::Sha256,
            128 => ChecksumKind::Sha512,
            _ => ChecksumKind::Sha1,
        }
    }
}

/// Split an optional `algo:` prefix off a checksum.
pub fn split_checksum(checksum: &str) -> (ChecksumKind, &str) {
    if let Some((prefix, digest)) = checksum.split_once(':') {
        if let Some(kind) = ChecksumKind::from_prefix(prefix) {
            return (kind, digest);
        }
    }
    (ChecksumKind::guess(checksum), checksum)
}

/// Converts a raw checksum string to a human-presentable form.
pub trait ChecksumFormatter: Send + Sync {
    fn format_for_display(&self, checksum: &str) -> String;
}

/// Formats checksums as `KIND(digest)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultChecksumFormatter;

impl ChecksumFormatter for DefaultChecksumFormatter {
    fn format_for_display(&self, checksum: &str) -> String {
        let (kind, digest) = split_checksum(checksum);
        format!("{}({})", kind.as_str(), digest)
    }
}
