//! Field serializers for the JSON diagnostic view of key material.
//!
//! Byte buffers render as lowercase hex, object identifiers in their dotted
//! decimal form. This view is one-way; the wire format is always DER.

use {
    der::asn1::{BitString, ObjectIdentifier as Oid, OctetString},
    serde::Serializer,
};

pub(crate) fn bytes<S: Serializer>(value: &OctetString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(value.as_bytes()))
}

pub(crate) fn opt_bits<S: Serializer>(
    value: &Option<BitString>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(bits) => serializer.serialize_some(&hex::encode(bits.raw_bytes())),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn oid<S: Serializer>(value: &Oid, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
