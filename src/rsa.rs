//! PKCS#1 RSA key grammars.
//!
//! See [RFC 8017 Appendix A.1]. The private key grammar keeps the
//! multi-prime `otherPrimeInfos` list; its `version` discriminant is derived
//! from the list on encode and checked against it on decode.
//!
//! [RFC 8017 Appendix A.1]: https://datatracker.ietf.org/doc/html/rfc8017#appendix-A.1

use {
    crate::{
        ensure_err,
        error::{Error, Result},
        num::Unsigned,
        utils,
    },
    der::Sequence,
    serde::Serialize,
};

/// ```asn1
/// RSAPublicKey ::= SEQUENCE {
///     modulus         INTEGER,  -- n
///     publicExponent  INTEGER   -- e
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Sequence, Serialize)]
pub struct Public {
    pub n: Unsigned,
    pub e: Unsigned,
}

impl Public {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        utils::decode_der("RSA public", bytes)
    }

    pub fn encode(&self) -> Vec<u8> {
        utils::encode_der(self)
    }
}

/// One entry of `otherPrimeInfos` in a multi-prime key.
///
/// ```asn1
/// OtherPrimeInfo ::= SEQUENCE {
///     prime        INTEGER,  -- ri
///     exponent     INTEGER,  -- di
///     coefficient  INTEGER   -- ti
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Sequence, Serialize)]
pub struct OtherPrimeInfo {
    pub r: Unsigned,
    pub d: Unsigned,
    pub t: Unsigned,
}

/// ```asn1
/// RSAPrivateKey ::= SEQUENCE {
///     version          Version,
///     modulus          INTEGER,  -- n
///     publicExponent   INTEGER,  -- e
///     privateExponent  INTEGER,  -- d
///     prime1           INTEGER,  -- p
///     prime2           INTEGER,  -- q
///     exponent1        INTEGER,  -- d mod (p-1)
///     exponent2        INTEGER,  -- d mod (q-1)
///     coefficient      INTEGER,  -- (inverse of q) mod p
///     otherPrimeInfos  OtherPrimeInfos OPTIONAL
/// }
/// ```
///
/// `version` is not stored: it is `1` exactly when `other_primes` is
/// non-empty and `0` otherwise, and a wire value violating that rule is
/// rejected.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Private {
    pub n: Unsigned,
    pub e: Unsigned,
    pub d: Unsigned,
    pub p: Unsigned,
    pub q: Unsigned,
    pub dp: Unsigned,
    pub dq: Unsigned,
    pub qinv: Unsigned,
    pub other_primes: Vec<OtherPrimeInfo>,
}

/// On-wire form with the version discriminant still exposed.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct PrivateBody {
    version: u64,
    n: Unsigned,
    e: Unsigned,
    d: Unsigned,
    p: Unsigned,
    q: Unsigned,
    dp: Unsigned,
    dq: Unsigned,
    qinv: Unsigned,
    other_primes: Option<Vec<OtherPrimeInfo>>,
}

impl TryFrom<PrivateBody> for Private {
    type Error = Error;

    fn try_from(body: PrivateBody) -> Result<Self> {
        let multi = body.other_primes.as_ref().is_some_and(|infos| !infos.is_empty());
        ensure_err!(body.version == u64::from(multi), Error::RsaVersion);
        Ok(Self {
            n: body.n,
            e: body.e,
            d: body.d,
            p: body.p,
            q: body.q,
            dp: body.dp,
            dq: body.dq,
            qinv: body.qinv,
            other_primes: body.other_primes.unwrap_or_default(),
        })
    }
}

impl From<&Private> for PrivateBody {
    fn from(key: &Private) -> Self {
        Self {
            version: u64::from(!key.other_primes.is_empty()),
            n: key.n.clone(),
            e: key.e.clone(),
            d: key.d.clone(),
            p: key.p.clone(),
            q: key.q.clone(),
            dp: key.dp.clone(),
            dq: key.dq.clone(),
            qinv: key.qinv.clone(),
            other_primes: if key.other_primes.is_empty() {
                None
            } else {
                Some(key.other_primes.clone())
            },
        }
    }
}

impl Private {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let body: PrivateBody = utils::decode_der("RSA private", bytes)?;
        body.try_into()
    }

    pub fn encode(&self) -> Vec<u8> {
        utils::encode_der(&PrivateBody::from(self))
    }
}
