//! Big Number Operations
//!
//! Provides arbitrary precision integer operations for the Lehmer code
//! workspace. Every value that can outgrow a machine word (the integer being
//! encoded, intermediate factorial products, decoded sums) is a `BigNumber`.
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic.
//! All operations are exact; there is no floating point path.

use std::fmt;
use std::str::FromStr;

use malachite::Integer;

/// Big number representation using malachite's Integer
///
/// Signed, so that callers handing in a negative value can be told so
/// instead of having the sign silently discarded.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// The value zero
    pub fn zero() -> Self {
        Self {
            value: Integer::from(0u32),
        }
    }

    /// The value one
    pub fn one() -> Self {
        Self {
            value: Integer::from(1u32),
        }
    }

    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u32
    pub fn from_u32(value: u32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i32
    pub fn from_i32(value: i32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to usize
    pub fn to_usize(&self) -> Option<usize> {
        usize::try_from(&self.value).ok()
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if the number is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big numbers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Multiply by a machine-sized factor: x * k
    pub fn times_small(&self, k: u64) -> Self {
        Self {
            value: &self.value * Integer::from(k),
        }
    }

    /// Multiply and add: x * y + z
    pub fn mul_add(&self, y: &Self, z: &Self) -> Self {
        Self {
            value: &self.value * &y.value + &z.value,
        }
    }

    /// Divide two big numbers: x / y, truncating toward zero
    ///
    /// Returns None if dividing by zero
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value / &other.value,
        })
    }

    /// Remainder of division: x % y (takes the sign of x)
    ///
    /// Returns None if dividing by zero
    pub fn rem(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value % &other.value,
        })
    }

    /// Quotient and remainder in one call
    ///
    /// For non-negative operands this is floor division.
    pub fn div_rem(&self, other: &Self) -> Option<(Self, Self)> {
        Some((self.div(other)?, self.rem(other)?))
    }

    /// Divide by a machine-sized divisor
    pub fn div_small(&self, k: u64) -> Option<Self> {
        self.div(&Self::from_u64(k))
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Error returned when text is not a base-10 integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBigNumberError {
    input: String,
}

impl ParseBigNumberError {
    /// The text that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseBigNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a decimal integer: {:?}", self.input)
    }
}

impl std::error::Error for ParseBigNumberError {}

impl FromStr for BigNumber {
    type Err = ParseBigNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // malachite accepts a leading '-' but not '+'
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        Integer::from_str(digits)
            .map(Self::from_integer)
            .map_err(|_| ParseBigNumberError {
                input: s.to_string(),
            })
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<usize> for BigNumber {
    fn from(value: usize) -> Self {
        Self {
            value: Integer::from(value),
        }
    }
}

impl From<Integer> for BigNumber {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}
