//! Bare DSA grammars.
//!
//! Domain parameters are the `(p, q, g)` SEQUENCE from [RFC 3279 §2.3.2];
//! public and private keys are single `INTEGER`s (`y = g^x mod p` and `x`).
//!
//! [RFC 3279 §2.3.2]: https://datatracker.ietf.org/doc/html/rfc3279#section-2.3.2

use {
    crate::{error::Result, num::Unsigned, utils},
    der::{DecodeValue, EncodeValue, FixedTag, Header, Length, Reader, Sequence, Tag, Writer},
    serde::Serialize,
};

/// ```asn1
/// Dss-Parms ::= SEQUENCE {
///     p  INTEGER,
///     q  INTEGER,
///     g  INTEGER
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Sequence, Serialize)]
pub struct Params {
    pub p: Unsigned,
    pub q: Unsigned,
    pub g: Unsigned,
}

impl Params {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        utils::decode_der("DSA parameters", bytes)
    }

    pub fn encode(&self) -> Vec<u8> {
        utils::encode_der(self)
    }
}

/// The public value `y`, a bare `INTEGER`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Public(pub Unsigned);

impl Public {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        utils::decode_der("DSA public", bytes)
    }

    pub fn encode(&self) -> Vec<u8> {
        utils::encode_der(self)
    }
}

impl FixedTag for Public {
    const TAG: Tag = Tag::Integer;
}

impl EncodeValue for Public {
    fn value_len(&self) -> der::Result<Length> {
        self.0.value_len()
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.0.encode_value(writer)
    }
}

impl<'a> DecodeValue<'a> for Public {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        Unsigned::decode_value(reader, header).map(Self)
    }
}

/// The private value `x`, a bare `INTEGER`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Private(pub Unsigned);

impl Private {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        utils::decode_der("DSA private", bytes)
    }

    pub fn encode(&self) -> Vec<u8> {
        utils::encode_der(self)
    }
}

impl FixedTag for Private {
    const TAG: Tag = Tag::Integer;
}

impl EncodeValue for Private {
    fn value_len(&self) -> der::Result<Length> {
        self.0.value_len()
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.0.encode_value(writer)
    }
}

impl<'a> DecodeValue<'a> for Private {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        Unsigned::decode_value(reader, header).map(Self)
    }
}
