//! Big-integer binding for ASN.1 `INTEGER` fields.

use {
    der::{asn1::Uint, DecodeValue, EncodeValue, FixedTag, Header, Length, Reader, Tag, Writer},
    num_bigint::BigUint,
    serde::{Serialize, Serializer},
    std::fmt::{self, Display, Formatter},
};

/// A non-negative arbitrary-precision ASN.1 `INTEGER`.
///
/// Key components originate from modulus-style `INTEGER` fields, so only the
/// unsigned interpretation exists. The canonical DER byte form (minimal
/// length, sign padding byte) is delegated to [`Uint`].
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Unsigned(pub BigUint);

impl From<BigUint> for Unsigned {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for Unsigned {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl Display for Unsigned {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decimal rendering, matching the big-integer parser.
impl Serialize for Unsigned {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl FixedTag for Unsigned {
    const TAG: Tag = Tag::Integer;
}

impl EncodeValue for Unsigned {
    fn value_len(&self) -> der::Result<Length> {
        Uint::new(&self.0.to_bytes_be())?.value_len()
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        Uint::new(&self.0.to_bytes_be())?.encode_value(writer)
    }
}

impl<'a> DecodeValue<'a> for Unsigned {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        let uint = Uint::decode_value(reader, header)?;
        Ok(Self(BigUint::from_bytes_be(uint.as_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        der::{Decode, Encode},
        hex_literal::hex,
    };

    #[test]
    fn test_canonical_integers() {
        for (value, expected) in [
            (0u64, &hex!("02 01 00")[..]),
            (127, &hex!("02 01 7f")[..]),
            (128, &hex!("02 02 0080")[..]),
            (65537, &hex!("02 03 010001")[..]),
        ] {
            let value = Unsigned::from(value);
            let encoded = value.to_der().unwrap();
            assert_eq!(encoded, expected);
            assert_eq!(Unsigned::from_der(&encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_decode_rejects_negative() {
        // INTEGER -1
        assert!(Unsigned::from_der(&hex!("02 01 ff")).is_err());
    }

    #[test]
    fn test_decimal_display() {
        let value = Unsigned::from(BigUint::from(1u8) << 64);
        assert_eq!(value.to_string(), "18446744073709551616");
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            serde_json::json!("18446744073709551616")
        );
    }
}
