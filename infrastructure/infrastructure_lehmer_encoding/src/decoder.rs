//! Decoder Module
//!
//! Converts a Lehmer code back into the integer it represents.
//!
//! Digits are read from the right. The digit at distance `f` from the right
//! end is weighted by `f!`, and the running factorial grows by one
//! multiplication per digit. The input is only borrowed.

use entities_lehmer_code::LehmerCode;
use entities_utilities::{BigNumber, FactorialSequence};

use crate::common::{DecodeError, DecodeResult};

/// Decode a most-significant-first digit sequence
///
/// Digits above their place bound are not rejected; they simply contribute
/// `digit * f!` like any other.
///
/// # Examples
/// ```
/// use entities_utilities::BigNumber;
/// use infrastructure_lehmer_encoding::from_lehmer;
///
/// let digits: Vec<BigNumber> = [1u64, 0, 0, 1, 1, 0].into_iter().map(BigNumber::from).collect();
/// assert_eq!(from_lehmer(&digits).unwrap().to_u64(), Some(123));
/// ```
pub fn from_lehmer(digits: &[BigNumber]) -> DecodeResult<BigNumber> {
    if digits.is_empty() {
        tracing::debug!("rejecting empty digit sequence");
        return Err(DecodeError::InvalidInput(
            "empty digit sequence".to_string(),
        ));
    }

    let mut value = BigNumber::zero();
    for (distance, (digit, place)) in digits
        .iter()
        .rev()
        .zip(FactorialSequence::new())
        .enumerate()
    {
        if digit.is_negative() {
            tracing::debug!(digit = %digit, distance, "rejecting negative digit");
            return Err(DecodeError::InvalidInput(format!(
                "negative digit {} at distance {} from the right",
                digit, distance
            )));
        }
        value = digit.mul_add(&place, &value);
    }

    tracing::trace!(digits = digits.len(), value = %value, "decoded lehmer code");
    Ok(value)
}

/// Decode a [`LehmerCode`]
pub fn decode_code(code: &LehmerCode) -> DecodeResult<BigNumber> {
    from_lehmer(code.digits())
}
