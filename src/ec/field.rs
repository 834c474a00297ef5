//! RFC 5480 `FieldID` with its two field families.

use {
    crate::{
        error::{Error, Result},
        num::Unsigned,
    },
    der::{
        asn1::{Null, ObjectIdentifier as Oid},
        Any, Sequence,
    },
    serde::Serialize,
};

// ANSI X9.62 field types, 1.2.840.10045.1
pub const ID_PRIME_FIELD: Oid = Oid::new_unwrap("1.2.840.10045.1.1");
pub const ID_CHARACTERISTIC_TWO_FIELD: Oid = Oid::new_unwrap("1.2.840.10045.1.2");
// Characteristic-two basis arcs, 1.2.840.10045.1.2.3
pub const ID_GN_BASIS: Oid = Oid::new_unwrap("1.2.840.10045.1.2.3.1");
pub const ID_TP_BASIS: Oid = Oid::new_unwrap("1.2.840.10045.1.2.3.2");
pub const ID_PP_BASIS: Oid = Oid::new_unwrap("1.2.840.10045.1.2.3.3");

/// The finite field a curve is defined over.
///
/// ```asn1
/// FieldID ::= SEQUENCE {
///     fieldType   OBJECT IDENTIFIER,
///     parameters  ANY DEFINED BY fieldType
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Field {
    /// Prime field of order `p`.
    Prime(Unsigned),
    /// Binary extension field `GF(2^m)` with its polynomial basis.
    CharacteristicTwo { m: Unsigned, basis: Basis },
}

/// Basis representation of a characteristic-two field.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Basis {
    GaussianNormal,
    Trinomial(Unsigned),
    Pentanomial {
        k1: Unsigned,
        k2: Unsigned,
        k3: Unsigned,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub(crate) struct FieldBody {
    pub field_type: Oid,
    pub parameters: Any,
}

/// ```asn1
/// Characteristic-two ::= SEQUENCE {
///     m           INTEGER,
///     basis       OBJECT IDENTIFIER,
///     parameters  ANY DEFINED BY basis
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct CharacteristicTwoBody {
    m: Unsigned,
    basis: Oid,
    parameters: Any,
}

#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct PentanomialBody {
    k1: Unsigned,
    k2: Unsigned,
    k3: Unsigned,
}

impl TryFrom<FieldBody> for Field {
    type Error = Error;

    fn try_from(body: FieldBody) -> Result<Self> {
        match body.field_type {
            ID_PRIME_FIELD => {
                let modulus: Unsigned = body
                    .parameters
                    .decode_as()
                    .map_err(|_| Error::FieldMismatch)?;
                Ok(Self::Prime(modulus))
            }
            ID_CHARACTERISTIC_TWO_FIELD => {
                let inner: CharacteristicTwoBody = body
                    .parameters
                    .decode_as()
                    .map_err(|_| Error::FieldMismatch)?;
                Ok(Self::CharacteristicTwo {
                    m: inner.m,
                    basis: Basis::from_wire(inner.basis, &inner.parameters)?,
                })
            }
            _ => Err(Error::FieldMismatch),
        }
    }
}

impl From<&Field> for FieldBody {
    fn from(field: &Field) -> Self {
        match field {
            Field::Prime(modulus) => Self {
                field_type: ID_PRIME_FIELD,
                parameters: Any::encode_from(modulus).unwrap(),
            },
            Field::CharacteristicTwo { m, basis } => {
                let (basis_type, parameters) = basis.to_wire();
                Self {
                    field_type: ID_CHARACTERISTIC_TWO_FIELD,
                    parameters: Any::encode_from(&CharacteristicTwoBody {
                        m: m.clone(),
                        basis: basis_type,
                        parameters,
                    })
                    .unwrap(),
                }
            }
        }
    }
}

impl Basis {
    fn from_wire(basis: Oid, parameters: &Any) -> Result<Self> {
        match basis {
            ID_GN_BASIS if parameters.is_null() => Ok(Self::GaussianNormal),
            ID_TP_BASIS => {
                let k: Unsigned = parameters.decode_as().map_err(|_| Error::BasisMismatch)?;
                Ok(Self::Trinomial(k))
            }
            ID_PP_BASIS => {
                let body: PentanomialBody =
                    parameters.decode_as().map_err(|_| Error::BasisMismatch)?;
                Ok(Self::Pentanomial {
                    k1: body.k1,
                    k2: body.k2,
                    k3: body.k3,
                })
            }
            _ => Err(Error::BasisMismatch),
        }
    }

    fn to_wire(&self) -> (Oid, Any) {
        match self {
            Self::GaussianNormal => (ID_GN_BASIS, Any::from(Null)),
            Self::Trinomial(k) => (ID_TP_BASIS, Any::encode_from(k).unwrap()),
            Self::Pentanomial { k1, k2, k3 } => (
                ID_PP_BASIS,
                Any::encode_from(&PentanomialBody {
                    k1: k1.clone(),
                    k2: k2.clone(),
                    k3: k3.clone(),
                })
                .unwrap(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, der::Decode, hex_literal::hex};

    fn roundtrip(field: Field) {
        let body = FieldBody::from(&field);
        assert_eq!(Field::try_from(body).unwrap(), field);
    }

    #[test]
    fn test_prime_field_wire() {
        let body = FieldBody::from(&Field::Prime(Unsigned::from(23u64)));
        let encoded = crate::utils::encode_der(&body);
        assert_eq!(encoded, hex!("300c 0607 2a8648ce3d0101 020117"));
        let decoded = FieldBody::from_der(&encoded).unwrap();
        assert_eq!(Field::try_from(decoded).unwrap(), Field::Prime(Unsigned::from(23u64)));
    }

    #[test]
    fn test_characteristic_two_bases() {
        roundtrip(Field::CharacteristicTwo {
            m: Unsigned::from(163u64),
            basis: Basis::GaussianNormal,
        });
        roundtrip(Field::CharacteristicTwo {
            m: Unsigned::from(163u64),
            basis: Basis::Trinomial(Unsigned::from(7u64)),
        });
        roundtrip(Field::CharacteristicTwo {
            m: Unsigned::from(163u64),
            basis: Basis::Pentanomial {
                k1: Unsigned::from(3u64),
                k2: Unsigned::from(6u64),
                k3: Unsigned::from(7u64),
            },
        });
    }

    #[test]
    fn test_prime_field_with_sequence_parameters() {
        // fieldType prime, parameters an (empty) SEQUENCE.
        let encoded = hex!("300b 0607 2a8648ce3d0101 3000");
        let body = FieldBody::from_der(&encoded).unwrap();
        let err = Field::try_from(body).unwrap_err();
        assert_eq!(err, Error::FieldMismatch);
        assert_eq!(err.to_string(), "field type and parameters doesn't match");
    }

    #[test]
    fn test_basis_oid_parameter_disagreement() {
        // gnBasis carrying an INTEGER instead of NULL.
        let body = FieldBody {
            field_type: ID_CHARACTERISTIC_TWO_FIELD,
            parameters: Any::encode_from(&CharacteristicTwoBody {
                m: Unsigned::from(163u64),
                basis: ID_GN_BASIS,
                parameters: Any::encode_from(&Unsigned::from(7u64)).unwrap(),
            })
            .unwrap(),
        };
        let err = Field::try_from(body).unwrap_err();
        assert_eq!(err, Error::BasisMismatch);
        assert_eq!(
            err.to_string(),
            "field basis type and parameters doesn't match"
        );
    }

    #[test]
    fn test_unknown_field_type() {
        let body = FieldBody {
            field_type: Oid::new_unwrap("1.2.3.4"),
            parameters: Any::from(Null),
        };
        assert_eq!(Field::try_from(body), Err(Error::FieldMismatch));
    }
}
