//! Lehmer Code Facades
//!
//! Entry points for converting integers to and from the factorial number
//! system. The big-number functions are the primary contract; the `u64` and
//! decimal-text variants wrap them.

use entities_lehmer_code::LehmerCode;
use entities_utilities::BigNumber;
use infrastructure_lehmer_encoding::{
    DecodeError, DecodeResult, EncodeError, EncodeResult, LehmerCodec,
};

/// Encode a non-negative integer as its canonical Lehmer code
pub fn to_lehmer(n: &BigNumber) -> EncodeResult<LehmerCode> {
    LehmerCodec::encode(n)
}

/// Decode a most-significant-first digit sequence
pub fn from_lehmer(digits: &[BigNumber]) -> DecodeResult<BigNumber> {
    LehmerCodec::decode(digits)
}

/// Encode a `u64`
///
/// Every digit of a canonical code is bounded by its place order, so the
/// digits of any `u64` fit in `u64`.
pub fn to_lehmer_u64(n: u64) -> EncodeResult<Vec<u64>> {
    let code = LehmerCodec::encode(&BigNumber::from_u64(n))?;
    code.to_u64_digits()
        .ok_or_else(|| EncodeError::InvalidInput(format!("digits of {} exceed u64", n)))
}

/// Decode `u64` digits into a `u64`
///
/// Fails with [`DecodeError::Overflow`] rather than wrapping when the value
/// is larger than `u64::MAX`.
pub fn from_lehmer_u64(digits: &[u64]) -> DecodeResult<u64> {
    let code = LehmerCode::from_u64_digits(digits);
    let value = LehmerCodec::decode_code(&code)?;
    value.to_u64().ok_or_else(|| {
        tracing::debug!(value = %value, "decoded value exceeds u64");
        DecodeError::Overflow
    })
}

/// Encode an integer given as decimal text
pub fn to_lehmer_str(n: &str) -> EncodeResult<LehmerCode> {
    let value: BigNumber = n
        .parse()
        .map_err(|e| EncodeError::InvalidInput(format!("{}", e)))?;
    LehmerCodec::encode(&value)
}

/// Decode digits given as decimal text, returning decimal text
pub fn from_lehmer_str(digits: &[&str]) -> DecodeResult<String> {
    let parsed = digits
        .iter()
        .map(|d| {
            d.parse::<BigNumber>()
                .map_err(|e| DecodeError::InvalidInput(format!("{}", e)))
        })
        .collect::<DecodeResult<Vec<BigNumber>>>()?;
    Ok(LehmerCodec::decode(&parsed)?.to_string())
}
