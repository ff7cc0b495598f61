//! Factorial Utilities
//!
//! Factorials are the place values of the factorial number system. Both the
//! encoder and the decoder walk them one multiplication at a time, so the
//! running product is exposed as an iterator in addition to the one-shot
//! [`factorial`] function.

use crate::big::BigNumber;

/// Compute k! exactly
///
/// The empty product gives 0! = 1! = 1.
///
/// # Examples
/// ```
/// use entities_utilities::factorial;
///
/// assert_eq!(factorial(0).to_u64(), Some(1));
/// assert_eq!(factorial(5).to_u64(), Some(120));
/// ```
pub fn factorial(k: u64) -> BigNumber {
    (2..=k).fold(BigNumber::one(), |acc, i| acc.times_small(i))
}

/// Running factorials 0!, 1!, 2!, ...
///
/// Each call to `next` costs one multiplication. The sequence is unbounded.
#[derive(Debug, Clone)]
pub struct FactorialSequence {
    order: u64,
    current: BigNumber,
}

impl FactorialSequence {
    /// Start the sequence at 0! = 1
    pub fn new() -> Self {
        Self {
            order: 0,
            current: BigNumber::one(),
        }
    }

    /// Order of the factorial the next call to `next` yields
    pub fn order(&self) -> u64 {
        self.order
    }
}

impl Default for FactorialSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FactorialSequence {
    type Item = BigNumber;

    fn next(&mut self) -> Option<BigNumber> {
        let value = self.current.clone();
        self.order += 1;
        self.current = self.current.times_small(self.order);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_factorials() {
        let expected = [1u64, 1, 2, 6, 24, 120, 720, 5040];
        for (k, want) in expected.iter().enumerate() {
            assert_eq!(factorial(k as u64).to_u64(), Some(*want), "{}!", k);
        }
    }

    #[test]
    fn test_factorial_beyond_u64() {
        // 20! is the largest factorial that fits in a u64
        assert_eq!(factorial(20).to_u64(), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21).to_u64(), None);
        assert_eq!(factorial(25).to_string(), "15511210043330985984000000");
    }

    #[test]
    fn test_sequence_matches_factorial() {
        let seq: Vec<BigNumber> = FactorialSequence::new().take(30).collect();
        for (k, value) in seq.iter().enumerate() {
            assert_eq!(*value, factorial(k as u64));
        }
    }

    #[test]
    fn test_sequence_order() {
        let mut seq = FactorialSequence::new();
        assert_eq!(seq.order(), 0);
        seq.next();
        seq.next();
        assert_eq!(seq.order(), 2);
        assert_eq!(seq.next().and_then(|f| f.to_u64()), Some(2));
    }
}
