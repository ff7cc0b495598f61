//! Length Finder
//!
//! Sizes the canonical Lehmer code of an integer.

use entities_utilities::BigNumber;

use crate::common::{EncodeError, EncodeResult};

/// Number of digits in the canonical Lehmer code of `n`
///
/// This is the smallest `k` with `k! > n`. The factorial is grown one
/// multiplication at a time, so the loop runs exactly `k` times.
///
/// # Examples
/// ```
/// use entities_utilities::BigNumber;
/// use infrastructure_lehmer_encoding::lehmer_length;
///
/// assert_eq!(lehmer_length(&BigNumber::from_u64(0)).unwrap(), 1);
/// assert_eq!(lehmer_length(&BigNumber::from_u64(24)).unwrap(), 5);
/// ```
pub fn lehmer_length(n: &BigNumber) -> EncodeResult<usize> {
    if n.is_negative() {
        tracing::debug!(value = %n, "rejecting negative value");
        return Err(EncodeError::InvalidInput(format!(
            "cannot encode negative value {}",
            n
        )));
    }
    Ok(length_of(n))
}

/// Length of a value already known to be non-negative
pub(crate) fn length_of(n: &BigNumber) -> usize {
    let mut factorial = BigNumber::one();
    let mut step: u64 = 1;
    loop {
        factorial = factorial.times_small(step);
        step += 1;
        if factorial > *n {
            break;
        }
    }
    (step - 1) as usize
}
