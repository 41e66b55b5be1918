//! Top-level payload shapes.
//!
//! A transport hands over a device record in one of a few envelope shapes.
//! Only [`Envelope::Dict`], [`Envelope::Tuple`] and [`Envelope::Keyed`] carry
//! a record; the remaining shapes exist so that malformed payloads can be
//! represented and rejected with a useful type string.

use crate::map::VariantMap;
use crate::value::Variant;
use crate::Error;
use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};
use std::fmt;
use std::str::FromStr;

/// An inbound or outbound payload.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize)]
pub enum Envelope {
    /// A bare map, `a{sv}`.
    Dict(VariantMap),
    /// A single-element tuple wrapping a map, `(a{sv})`.
    Tuple(VariantMap),
    /// An identifier keyed to a map, `{sa{sv}}`.
    Keyed {
        /// Record identifier.
        id: String,
        /// Record fields.
        map: VariantMap,
    },
    /// A plain list of values, `av`.
    Array(Vec<Variant>),
    /// A single scalar value.
    Value(Variant),
}

impl Envelope {
    /// Type string describing the shape of this envelope.
    pub fn type_string(&self) -> String {
        match self {
            Envelope::Dict(_) => EnvelopeKind::Dict.type_string().to_string(),
            Envelope::Tuple(_) => EnvelopeKind::Tuple.type_string().to_string(),
            Envelope::Keyed { .. } => EnvelopeKind::Keyed.type_string().to_string(),
            Envelope::Array(_) => "av".to_string(),
            Envelope::Value(v) => v.type_string().to_string(),
        }
    }

    /// The record-carrying kind of this envelope, if any.
    pub fn kind(&self) -> Option<EnvelopeKind> {
        match self {
            Envelope::Dict(_) => Some(EnvelopeKind::Dict),
            Envelope::Tuple(_) => Some(EnvelopeKind::Tuple),
            Envelope::Keyed { .. } => Some(EnvelopeKind::Keyed),
            Envelope::Array(_) | Envelope::Value(_) => None,
        }
    }
}

/// The envelope shapes that carry a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeKind {
    /// `a{sv}`
    Dict,
    /// `(a{sv})`
    Tuple,
    /// `{sa{sv}}`
    Keyed,
}

impl EnvelopeKind {
    /// Type string for this kind.
    pub fn type_string(&self) -> &'static str {
        match self {
            EnvelopeKind::Dict => "a{sv}",
            EnvelopeKind::Tuple => "(a{sv})",
            EnvelopeKind::Keyed => "{sa{sv}}",
        }
    }
}

impl fmt::Display for EnvelopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_string())
    }
}

impl FromStr for EnvelopeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a{sv}" => Ok(EnvelopeKind::Dict),
            "(a{sv})" => Ok(EnvelopeKind::Tuple),
            "{sa{sv}}" => Ok(EnvelopeKind::Keyed),
            other => Err(Error::UnsupportedEnvelope(other.to_string())),
        }
    }
}
