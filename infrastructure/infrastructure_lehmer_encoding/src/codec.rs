//! Lehmer Codec Module
//!
//! Stateless entry point bundling the encoder, decoder and length finder.

use entities_lehmer_code::LehmerCode;
use entities_utilities::BigNumber;

use crate::common::{DecodeResult, EncodeResult};
use crate::{decoder, encoder, length};

/// Lehmer code codec
pub struct LehmerCodec;

impl LehmerCodec {
    /// Encode an integer as its canonical Lehmer code
    pub fn encode(value: &BigNumber) -> EncodeResult<LehmerCode> {
        encoder::to_lehmer(value)
    }

    /// Decode a most-significant-first digit sequence
    pub fn decode(digits: &[BigNumber]) -> DecodeResult<BigNumber> {
        decoder::from_lehmer(digits)
    }

    /// Decode a [`LehmerCode`]
    pub fn decode_code(code: &LehmerCode) -> DecodeResult<BigNumber> {
        decoder::decode_code(code)
    }

    /// Digit count of the canonical code for `value`
    pub fn length(value: &BigNumber) -> EncodeResult<usize> {
        length::lehmer_length(value)
    }
}
