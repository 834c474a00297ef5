use std::fmt::{self, Display, Formatter};

pub type Result<T> = core::result::Result<T, Error>;

/// Decode failures surfaced by the public entry points.
///
/// Every variant renders as the human-readable message existing consumers
/// match on; `Asn1` carries tag/length-level failures from the codec layer
/// verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Malformed ASN.1 or a structure that does not fit the grammar.
    Asn1(der::Error),
    /// Input continues past the end of the top-level structure.
    Leftover(&'static str),
    /// RSA private key version does not agree with the otherPrimeInfos field.
    RsaVersion,
    /// Unsupported version in an EC specified-domain structure.
    EcDomainVersion(u64),
    /// Unsupported version in an EC private key.
    EcPrivateVersion(u64),
    /// Unsupported outer PKCS#8 version.
    Pkcs8Version(u64),
    /// Algorithm identifier whose parameters do not fit the named family.
    AlgorithmMismatch,
    /// EC field type OID whose parameters have a different shape.
    FieldMismatch,
    /// Characteristic-two basis OID whose parameters have a different shape.
    BasisMismatch,
    /// Envelope names an algorithm outside RSA, DSA and EC.
    UnknownKey,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Asn1(err) => write!(f, "{}", err),
            Error::Leftover(context) => write!(f, "{}: key with non empty leftover", context),
            Error::RsaVersion => {
                write!(f, "RSA private key version inconsistent with key data")
            }
            Error::EcDomainVersion(version) => {
                write!(f, "EC domain parameters: version {} not supported", version)
            }
            Error::EcPrivateVersion(version) => {
                write!(f, "EC private key: version {} not supported", version)
            }
            Error::Pkcs8Version(version) => {
                write!(f, "PKCS8: version {} not supported", version)
            }
            Error::AlgorithmMismatch => write!(f, "Algorithm OID and parameters doesn't match"),
            Error::FieldMismatch => write!(f, "field type and parameters doesn't match"),
            Error::BasisMismatch => {
                write!(f, "field basis type and parameters doesn't match")
            }
            Error::UnknownKey => write!(f, "Couldn't parse key"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Asn1(err) => Some(err),
            _ => None,
        }
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::Asn1(err)
    }
}
