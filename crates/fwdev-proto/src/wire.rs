//! Byte encoding for envelopes.
//!
//! Envelopes are encoded with rkyv and validated on the way back in. The
//! transport that moves these bytes is not part of this crate.

use crate::envelope::Envelope;
use crate::Error;
use bytes::Bytes;
use rkyv::util::AlignedVec;

/// Encode an envelope to bytes.
pub fn encode_envelope(envelope: &Envelope) -> Result<Bytes, Error> {
    let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(envelope)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    Ok(Bytes::copy_from_slice(&bytes))
}

/// Decode an envelope from bytes produced by [`encode_envelope`].
///
/// The input does not need to be aligned.
pub fn decode_envelope(data: &[u8]) -> Result<Envelope, Error> {
    let mut aligned = AlignedVec::<16>::with_capacity(data.len());
    aligned.extend_from_slice(data);
    rkyv::from_bytes::<Envelope, rkyv::rancor::Error>(&aligned)
        .map_err(|e| Error::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Variant, VariantMap};

    #[test]
    fn test_keyed_envelope_survives_bytes() {
        let envelope = Envelope::Keyed {
            id: "USB:foo".into(),
            map: VariantMap::new()
                .with("Guid", "2082b5e0-7a64-478a-b1b2-e3404fab6dad")
                .with("Flags", 34u64)
                .with("FlashesLeft", 1u32),
        };

        let bytes = encode_envelope(&envelope).unwrap();
        let decoded = decode_envelope(&bytes).unwrap();
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn test_unaligned_input() {
        let envelope = Envelope::Array(vec![Variant::Uint64(1), Variant::from("x")]);
        let bytes = encode_envelope(&envelope).unwrap();

        let mut shifted = vec![0u8];
        shifted.extend_from_slice(&bytes);
        let decoded = decode_envelope(&shifted[1..]).unwrap();
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result = decode_envelope(&[0xff; 3]);
        assert!(matches!(result, Err(Error::Deserialization(_))));
    }
}
