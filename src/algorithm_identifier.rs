//! The OID-discriminated algorithm layer shared by both key envelopes.
//!
//! An [`AlgorithmIdentifier`] carries the raw `(algorithm, parameters)`
//! SEQUENCE; [`KeyAlgorithm`] is the same data with the parameters decoded
//! per key family. The mapping rejects identifiers whose parameters do not
//! fit the family selected by the OID.

use {
    crate::{
        dsa,
        ec::{self, ParamsBody},
        error::{Error, Result},
    },
    der::{
        asn1::{Null, ObjectIdentifier as Oid},
        Any, Decode, Encode, Sequence,
    },
};

// PKCS#1: rsaEncryption
pub const ID_RSA: Oid = Oid::new_unwrap("1.2.840.113549.1.1.1");
// ANSI X9.57: id-dsa
pub const ID_DSA: Oid = Oid::new_unwrap("1.2.840.10040.4.1");
// ANSI X9.62: id-ecPublicKey
pub const ID_EC: Oid = Oid::new_unwrap("1.2.840.10045.2.1");

/// Key algorithm discriminator; unrecognized OIDs are preserved for
/// diagnostics but fail every downstream mapping.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Algo {
    Rsa,
    Dsa,
    Ec,
    Unknown(Oid),
}

impl Algo {
    pub fn oid(self) -> Oid {
        match self {
            Self::Rsa => ID_RSA,
            Self::Dsa => ID_DSA,
            Self::Ec => ID_EC,
            Self::Unknown(oid) => oid,
        }
    }
}

impl From<Oid> for Algo {
    fn from(oid: Oid) -> Self {
        match oid {
            ID_RSA => Self::Rsa,
            ID_DSA => Self::Dsa,
            ID_EC => Self::Ec,
            _ => Self::Unknown(oid),
        }
    }
}

/// RFC 5280 `AlgorithmIdentifier` with uninterpreted parameters.
///
/// ```asn1
/// AlgorithmIdentifier ::= SEQUENCE {
///     algorithm   OBJECT IDENTIFIER,
///     parameters  ANY DEFINED BY algorithm OPTIONAL
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct AlgorithmIdentifier {
    pub algorithm: Oid,
    pub parameters: Option<Any>,
}

/// An algorithm identifier with the parameters decoded for its family:
/// NULL for RSA, domain parameters for DSA and EC.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyAlgorithm {
    Rsa,
    Dsa(dsa::Params),
    Ec(ec::Params),
}

impl TryFrom<AlgorithmIdentifier> for KeyAlgorithm {
    type Error = Error;

    fn try_from(identifier: AlgorithmIdentifier) -> Result<Self> {
        match Algo::from(identifier.algorithm) {
            Algo::Rsa => match &identifier.parameters {
                Some(parameters) if parameters.is_null() => Ok(Self::Rsa),
                _ => Err(Error::AlgorithmMismatch),
            },
            Algo::Dsa => {
                let parameters = identifier.parameters.ok_or(Error::AlgorithmMismatch)?;
                let params: dsa::Params = parameters
                    .decode_as()
                    .map_err(|_| Error::AlgorithmMismatch)?;
                Ok(Self::Dsa(params))
            }
            Algo::Ec => {
                let parameters = identifier.parameters.ok_or(Error::AlgorithmMismatch)?;
                let body = ParamsBody::from_der(&parameters.to_der()?)
                    .map_err(|_| Error::AlgorithmMismatch)?;
                Ok(Self::Ec(body.try_into()?))
            }
            Algo::Unknown(_) => Err(Error::UnknownKey),
        }
    }
}

impl From<&KeyAlgorithm> for AlgorithmIdentifier {
    fn from(algorithm: &KeyAlgorithm) -> Self {
        let (algo, parameters) = match algorithm {
            KeyAlgorithm::Rsa => (Algo::Rsa, Any::from(Null)),
            KeyAlgorithm::Dsa(params) => (Algo::Dsa, Any::encode_from(params).unwrap()),
            KeyAlgorithm::Ec(params) => {
                let body = ParamsBody::from(params);
                let parameters = Any::from_der(&body.to_der().unwrap()).unwrap();
                (Algo::Ec, parameters)
            }
        };
        Self {
            algorithm: algo.oid(),
            parameters: Some(parameters),
        }
    }
}
