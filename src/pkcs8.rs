//! PKCS#8 `PrivateKeyInfo` envelope.
//!
//! See [RFC 5208 §5]. Only version 0 exists; the optional attributes slot
//! is parsed and discarded on decode and never emitted on encode. The inner
//! octet string is re-parsed with the private-key grammar selected by the
//! algorithm OID.
//!
//! [RFC 5208 §5]: https://datatracker.ietf.org/doc/html/rfc5208#section-5

use {
    crate::{
        algorithm_identifier::{AlgorithmIdentifier, KeyAlgorithm},
        dsa, ec, ensure_err,
        error::{Error, Result},
        rsa, utils,
    },
    der::{
        asn1::{Null, OctetString},
        Sequence,
    },
    serde::Serialize,
};

/// A private key wrapped with its algorithm identifier.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum PrivateKeyInfo {
    Rsa(rsa::Private),
    Dsa(dsa::Params, dsa::Private),
    Ec(ec::Params, ec::Private),
}

/// ```asn1
/// PrivateKeyInfo ::= SEQUENCE {
///     version              INTEGER { v1(0) },
///     privateKeyAlgorithm  AlgorithmIdentifier,
///     privateKey           OCTET STRING,
///     attributes           [0] IMPLICIT Attributes OPTIONAL
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct Body {
    version: u64,
    algorithm: AlgorithmIdentifier,
    private_key: OctetString,
    #[asn1(context_specific = "0", tag_mode = "IMPLICIT", optional = "true")]
    attributes: Option<Null>,
}

impl PrivateKeyInfo {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let body: Body = utils::decode_der("PKCS8", bytes)?;
        ensure_err!(body.version == 0, Error::Pkcs8Version(body.version));
        let key_bytes = body.private_key.as_bytes();
        match KeyAlgorithm::try_from(body.algorithm)? {
            KeyAlgorithm::Rsa => Ok(Self::Rsa(rsa::Private::decode(key_bytes)?)),
            KeyAlgorithm::Dsa(params) => Ok(Self::Dsa(params, dsa::Private::decode(key_bytes)?)),
            KeyAlgorithm::Ec(params) => Ok(Self::Ec(params, ec::Private::decode(key_bytes)?)),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let (algorithm, key_bytes) = match self {
            Self::Rsa(key) => (KeyAlgorithm::Rsa, key.encode()),
            Self::Dsa(params, key) => (KeyAlgorithm::Dsa(params.clone()), key.encode()),
            Self::Ec(params, key) => (KeyAlgorithm::Ec(params.clone()), key.encode()),
        };
        utils::encode_der(&Body {
            version: 0,
            algorithm: AlgorithmIdentifier::from(&algorithm),
            private_key: OctetString::new(key_bytes).unwrap(),
            attributes: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::num::Unsigned,
        der::asn1::{BitString, ObjectIdentifier as Oid},
        hex_literal::hex,
    };

    fn rsa_key() -> rsa::Private {
        rsa::Private {
            n: Unsigned::from(3233u64),
            e: Unsigned::from(17u64),
            d: Unsigned::from(413u64),
            p: Unsigned::from(61u64),
            q: Unsigned::from(53u64),
            dp: Unsigned::from(53u64),
            dq: Unsigned::from(49u64),
            qinv: Unsigned::from(38u64),
            other_primes: Vec::new(),
        }
    }

    const RSA_FIXTURE: [u8; 53] = hex!(
        "3033 020100
         300d 0609 2a864886f70d010101 0500
         041f 301d 020100 02020ca1 020111 0202019d
         02013d 020135 020135 020131 020126"
    );

    #[test]
    fn test_rsa_roundtrip() {
        let key = PrivateKeyInfo::Rsa(rsa_key());
        let encoded = key.encode();
        assert_eq!(encoded, RSA_FIXTURE);
        assert_eq!(PrivateKeyInfo::decode(&encoded).unwrap(), key);
    }

    #[test]
    fn test_attributes_parsed_and_dropped() {
        // Same key with an empty [0] IMPLICIT attributes slot appended.
        let mut encoded = RSA_FIXTURE.to_vec();
        encoded[1] += 2;
        encoded.extend(hex!("8000"));

        let decoded = PrivateKeyInfo::decode(&encoded).unwrap();
        assert_eq!(decoded, PrivateKeyInfo::Rsa(rsa_key()));
        // Re-encoding drops the attributes.
        assert_eq!(decoded.encode(), RSA_FIXTURE);
    }

    #[test]
    fn test_version_must_be_zero() {
        let mut encoded = RSA_FIXTURE.to_vec();
        encoded[4] = 0x01;
        let err = PrivateKeyInfo::decode(&encoded).unwrap_err();
        assert_eq!(err, Error::Pkcs8Version(1));
        assert_eq!(err.to_string(), "PKCS8: version 1 not supported");
    }

    #[test]
    fn test_dsa_roundtrip() {
        let key = PrivateKeyInfo::Dsa(
            dsa::Params {
                p: Unsigned::from(23u64),
                q: Unsigned::from(11u64),
                g: Unsigned::from(4u64),
            },
            dsa::Private(Unsigned::from(7u64)),
        );
        assert_eq!(PrivateKeyInfo::decode(&key.encode()).unwrap(), key);
    }

    #[test]
    fn test_ec_roundtrip() {
        let key = PrivateKeyInfo::Ec(
            ec::Params::Named(Oid::new_unwrap("1.2.840.10045.3.1.7")),
            ec::Private {
                k: OctetString::new(vec![0xaa; 32]).unwrap(),
                params: None,
                public_key: Some(BitString::from_bytes(&[0x04, 0x05]).unwrap()),
            },
        );
        assert_eq!(PrivateKeyInfo::decode(&key.encode()).unwrap(), key);
    }

    #[test]
    fn test_unknown_algorithm() {
        let encoded = hex!("300e 020100 3005 0603 2b6570 0402 0000");
        let err = PrivateKeyInfo::decode(&encoded).unwrap_err();
        assert_eq!(err.to_string(), "Couldn't parse key");
    }

    #[test]
    fn test_leftover() {
        let mut encoded = RSA_FIXTURE.to_vec();
        encoded.push(0x00);
        let err = PrivateKeyInfo::decode(&encoded).unwrap_err();
        assert_eq!(err.to_string(), "PKCS8: key with non empty leftover");
    }

    #[test]
    fn test_json_view() {
        let key = PrivateKeyInfo::Ec(
            ec::Params::Named(Oid::new_unwrap("1.2.840.10045.3.1.7")),
            ec::Private {
                k: OctetString::new(vec![0xab, 0xcd]).unwrap(),
                params: None,
                public_key: None,
            },
        );
        assert_eq!(
            serde_json::to_value(&key).unwrap(),
            serde_json::json!({
                "Ec": [
                    {"Named": "1.2.840.10045.3.1.7"},
                    {"k": "abcd", "params": null, "public_key": null}
                ]
            })
        );
    }
}
