//! X.509 `SubjectPublicKeyInfo` envelope.
//!
//! See [RFC 5280 §4.1]. Decoding dispatches on the algorithm OID; the
//! subjectPublicKey bit string is re-parsed with the family's key grammar
//! for RSA and DSA, while for EC it already *is* the point octets
//! (RFC 5480) and is taken as-is.
//!
//! [RFC 5280 §4.1]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1

use {
    crate::{
        algorithm_identifier::{AlgorithmIdentifier, KeyAlgorithm},
        dsa, ec,
        error::{Error, Result},
        rsa, utils,
    },
    der::{
        asn1::{BitString, OctetString},
        Sequence, Tag,
    },
    serde::Serialize,
};

/// A public key wrapped with its algorithm identifier.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum SubjectPublicKeyInfo {
    Rsa(rsa::Public),
    Dsa(dsa::Params, dsa::Public),
    Ec(ec::Params, ec::Public),
}

/// ```asn1
/// SubjectPublicKeyInfo ::= SEQUENCE {
///     algorithm         AlgorithmIdentifier,
///     subjectPublicKey  BIT STRING
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct Body {
    algorithm: AlgorithmIdentifier,
    subject_public_key: BitString,
}

impl SubjectPublicKeyInfo {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let body: Body = utils::decode_der("X509", bytes)?;
        let key_bytes = body
            .subject_public_key
            .as_bytes()
            .ok_or_else(|| Error::Asn1(Tag::BitString.value_error()))?;
        match KeyAlgorithm::try_from(body.algorithm)? {
            KeyAlgorithm::Rsa => Ok(Self::Rsa(rsa::Public::decode(key_bytes)?)),
            KeyAlgorithm::Dsa(params) => Ok(Self::Dsa(params, dsa::Public::decode(key_bytes)?)),
            KeyAlgorithm::Ec(params) => {
                Ok(Self::Ec(params, ec::Public(OctetString::new(key_bytes)?)))
            }
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let (algorithm, key_bytes) = match self {
            Self::Rsa(key) => (KeyAlgorithm::Rsa, key.encode()),
            Self::Dsa(params, key) => (KeyAlgorithm::Dsa(params.clone()), key.encode()),
            Self::Ec(params, point) => {
                (KeyAlgorithm::Ec(params.clone()), point.as_bytes().to_vec())
            }
        };
        utils::encode_der(&Body {
            algorithm: AlgorithmIdentifier::from(&algorithm),
            subject_public_key: BitString::from_bytes(&key_bytes).unwrap(),
        })
    }
}
