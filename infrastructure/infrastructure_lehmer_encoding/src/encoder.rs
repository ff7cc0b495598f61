//! Encoder Module
//!
//! Converts a non-negative integer into its canonical Lehmer code.
//!
//! The encoder sizes the code with the length finder, then peels digits off
//! from the highest place value down. Each digit is the quotient of the
//! running remainder by the current place value `k!`; the remainder carries on
//! to the next lower place.

use entities_lehmer_code::LehmerCode;
use entities_utilities::{BigNumber, FactorialSequence};

use crate::common::{EncodeError, EncodeResult};
use crate::length::length_of;

/// Encode `n` as its canonical Lehmer code
///
/// # Examples
/// ```
/// use entities_utilities::BigNumber;
/// use infrastructure_lehmer_encoding::to_lehmer;
///
/// let code = to_lehmer(&BigNumber::from_u64(16)).unwrap();
/// assert_eq!(code.to_u64_digits(), Some(vec![2, 2, 0, 0]));
/// ```
pub fn to_lehmer(n: &BigNumber) -> EncodeResult<LehmerCode> {
    check_non_negative(n)?;
    let length = length_of(n);
    let digits = digits_of(n, length);
    tracing::trace!(value = %n, length, "encoded lehmer code");
    Ok(LehmerCode::new(digits))
}

/// Produce exactly `length` digits of `n`, most significant first
///
/// With `length` from [`lehmer_length`](crate::lehmer_length) the result is
/// canonical. A shorter `length` is not rejected; the leading digit then
/// absorbs whatever the lower places cannot hold.
pub fn extract_digits(n: &BigNumber, length: usize) -> EncodeResult<Vec<BigNumber>> {
    check_non_negative(n)?;
    Ok(digits_of(n, length))
}

fn check_non_negative(n: &BigNumber) -> EncodeResult<()> {
    if n.is_negative() {
        tracing::debug!(value = %n, "rejecting negative value");
        return Err(EncodeError::InvalidInput(format!(
            "cannot encode negative value {}",
            n
        )));
    }
    Ok(())
}

fn digits_of(n: &BigNumber, length: usize) -> Vec<BigNumber> {
    if length <= 1 {
        return vec![BigNumber::zero()];
    }

    // places[k] == k!
    let places: Vec<BigNumber> = FactorialSequence::new().take(length).collect();

    let mut digits = Vec::with_capacity(length);
    let mut remainder = n.clone();
    for place in places[1..].iter().rev() {
        // place values are factorials, never zero
        let (digit, rest) = remainder
            .div_rem(place)
            .unwrap_or_else(|| (BigNumber::zero(), remainder.clone()));
        digits.push(digit);
        remainder = rest;
    }
    // 0! carries no information
    digits.push(BigNumber::zero());
    digits
}
