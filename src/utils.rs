use {
    crate::error::{Error, Result},
    der::{Decode, Encode, Reader, SliceReader},
};

#[macro_export]
macro_rules! ensure_err {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Serializes a complete top-level value as DER.
///
/// Key material never exceeds the codec's length limits, so encoding a
/// well-formed value cannot fail.
pub(crate) fn encode_der<T: Encode>(value: &T) -> Vec<u8> {
    let mut bytes = Vec::new();
    value.encode_to_vec(&mut bytes).unwrap();
    bytes
}

/// Parses a single top-level value and rejects anything left in the input.
pub(crate) fn decode_der<'a, T: Decode<'a>>(context: &'static str, bytes: &'a [u8]) -> Result<T> {
    let mut reader = SliceReader::new(bytes)?;
    let value = T::decode(&mut reader)?;
    ensure_err!(reader.is_finished(), Error::Leftover(context));
    Ok(value)
}
