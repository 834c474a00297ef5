//! Elliptic-curve key grammars per SEC1 and RFC 5480.
//!
//! Points and field elements stay in their octet encodings; nothing here
//! interprets curve arithmetic.

mod field;

pub use self::field::{
    Basis, Field, ID_CHARACTERISTIC_TWO_FIELD, ID_GN_BASIS, ID_PP_BASIS, ID_PRIME_FIELD,
    ID_TP_BASIS,
};
use {
    self::field::FieldBody,
    crate::{
        ensure_err,
        error::{Error, Result},
        num::Unsigned,
        utils,
    },
    der::{
        asn1::{BitString, Null, ObjectIdentifier as Oid, OctetString},
        Choice, DecodeValue, EncodeValue, FixedTag, Header, Length, Reader, Sequence, Tag, Writer,
    },
    serde::Serialize,
};

/// Domain parameters as they appear in key material.
///
/// ```asn1
/// ECParameters ::= CHOICE {
///     namedCurve    OBJECT IDENTIFIER,
///     implicitCurve NULL,
///     specifiedCurve SpecifiedECDomain
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Params {
    Named(#[serde(serialize_with = "crate::json::oid")] Oid),
    Implicit,
    Specified(SpecifiedDomain),
}

/// Fully spelled out domain parameters (SEC1 `SpecifiedECDomain`, always
/// version 1 on the wire).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SpecifiedDomain {
    pub field: Field,
    pub curve: Curve,
    #[serde(serialize_with = "crate::json::bytes")]
    pub base: OctetString,
    pub order: Unsigned,
    pub cofactor: Option<Unsigned>,
}

/// Curve coefficients in their field-element octet encodings.
///
/// ```asn1
/// Curve ::= SEQUENCE {
///     a     OCTET STRING,
///     b     OCTET STRING,
///     seed  BIT STRING OPTIONAL
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Sequence, Serialize)]
pub struct Curve {
    #[serde(serialize_with = "crate::json::bytes")]
    pub a: OctetString,
    #[serde(serialize_with = "crate::json::bytes")]
    pub b: OctetString,
    #[serde(serialize_with = "crate::json::opt_bits")]
    pub seed: Option<BitString>,
}

#[derive(Clone, Debug, Eq, PartialEq, Choice)]
pub(crate) enum ParamsBody {
    Named(Oid),
    Implicit(Null),
    Specified(DomainBody),
}

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub(crate) struct DomainBody {
    version: u64,
    field: FieldBody,
    curve: Curve,
    base: OctetString,
    order: Unsigned,
    cofactor: Option<Unsigned>,
}

impl TryFrom<ParamsBody> for Params {
    type Error = Error;

    fn try_from(body: ParamsBody) -> Result<Self> {
        Ok(match body {
            ParamsBody::Named(oid) => Self::Named(oid),
            ParamsBody::Implicit(Null) => Self::Implicit,
            ParamsBody::Specified(domain) => Self::Specified(domain.try_into()?),
        })
    }
}

impl From<&Params> for ParamsBody {
    fn from(params: &Params) -> Self {
        match params {
            Params::Named(oid) => Self::Named(*oid),
            Params::Implicit => Self::Implicit(Null),
            Params::Specified(domain) => Self::Specified(domain.into()),
        }
    }
}

impl TryFrom<DomainBody> for SpecifiedDomain {
    type Error = Error;

    fn try_from(body: DomainBody) -> Result<Self> {
        ensure_err!(body.version == 1, Error::EcDomainVersion(body.version));
        Ok(Self {
            field: body.field.try_into()?,
            curve: body.curve,
            base: body.base,
            order: body.order,
            cofactor: body.cofactor,
        })
    }
}

impl From<&SpecifiedDomain> for DomainBody {
    fn from(domain: &SpecifiedDomain) -> Self {
        Self {
            version: 1,
            field: FieldBody::from(&domain.field),
            curve: domain.curve.clone(),
            base: domain.base.clone(),
            order: domain.order.clone(),
            cofactor: domain.cofactor.clone(),
        }
    }
}

impl Params {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let body: ParamsBody = utils::decode_der("EC parameters", bytes)?;
        body.try_into()
    }

    pub fn encode(&self) -> Vec<u8> {
        utils::encode_der(&ParamsBody::from(self))
    }
}

/// An elliptic-curve point in its SEC1 octet encoding, uninterpreted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Public(#[serde(serialize_with = "crate::json::bytes")] pub OctetString);

impl Public {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        utils::decode_der("EC public", bytes)
    }

    pub fn encode(&self) -> Vec<u8> {
        utils::encode_der(self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FixedTag for Public {
    const TAG: Tag = Tag::OctetString;
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
        OctetString::decode_value(reader, header).map(Self)
    }
}

/// SEC1 `ECPrivateKey`, always version 1 on the wire.
///
/// ```asn1
/// ECPrivateKey ::= SEQUENCE {
///     version     INTEGER { ecPrivkeyVer1(1) },
///     privateKey  OCTET STRING,
///     parameters  [0] EXPLICIT ECParameters OPTIONAL,
///     publicKey   [1] EXPLICIT BIT STRING OPTIONAL
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Private {
    #[serde(serialize_with = "crate::json::bytes")]
    pub k: OctetString,
    pub params: Option<Params>,
    #[serde(serialize_with = "crate::json::opt_bits")]
    pub public_key: Option<BitString>,
}

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct PrivateBody {
    version: u64,
    private_key: OctetString,
    #[asn1(context_specific = "0", tag_mode = "EXPLICIT", optional = "true")]
    parameters: Option<ParamsBody>,
    #[asn1(context_specific = "1", tag_mode = "EXPLICIT", optional = "true")]
    public_key: Option<BitString>,
}

impl TryFrom<PrivateBody> for Private {
    type Error = Error;

    fn try_from(body: PrivateBody) -> Result<Self> {
        ensure_err!(body.version == 1, Error::EcPrivateVersion(body.version));
        Ok(Self {
            k: body.private_key,
            params: body.parameters.map(TryInto::try_into).transpose()?,
            public_key: body.public_key,
        })
    }
}

impl From<&Private> for PrivateBody {
    fn from(key: &Private) -> Self {
        Self {
            version: 1,
            private_key: key.k.clone(),
            parameters: key.params.as_ref().map(ParamsBody::from),
            public_key: key.public_key.clone(),
        }
    }
}

impl Private {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let body: PrivateBody = utils::decode_der("EC private", bytes)?;
        body.try_into()
    }

    pub fn encode(&self) -> Vec<u8> {
        utils::encode_der(&PrivateBody::from(self))
    }
}
