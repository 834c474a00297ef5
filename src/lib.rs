//! DER codecs for asymmetric key material, no application logic.
//!
//! Covers the four classic containers: bare PKCS#1 RSA keys, bare DSA and
//! SEC1 EC keys, the X.509 `SubjectPublicKeyInfo` envelope for public keys
//! and the PKCS#8 `PrivateKeyInfo` envelope for private keys. Each type is
//! parsed as deeply as its grammar allows, so rich enums are available for
//! the application to match on.
//!
//! Encoding always produces DER, so equal values encode to identical bytes;
//! decoding is the inverse and rejects trailing input. Values are plain
//! immutable data: nothing here generates keys, checks their arithmetic, or
//! touches PEM armor.
//!
//! Most types also serialize through `serde` into a JSON view for
//! diagnostics (big integers as decimal strings, byte strings as hex). That
//! view is one-way and not part of the wire contract.

pub mod algorithm_identifier;
pub mod dsa;
pub mod ec;
mod error;
mod json;
pub mod num;
pub mod pkcs8;
pub mod rsa;
mod utils;
pub mod x509;

pub use self::{
    error::{Error, Result},
    num::Unsigned,
    pkcs8::PrivateKeyInfo,
    x509::SubjectPublicKeyInfo,
};
