//! Lehmer Code Module
//!
//! Digit sequences of the factorial number system.

use std::fmt;
use std::slice;

use entities_utilities::BigNumber;

/// A digit sequence in the factorial number system, most significant first
///
/// For a code of length `L`, the digit at sequence position `p` has place
/// value `(L - 1 - p)!`. The type itself holds any digits it is given; use
/// [`LehmerCode::is_canonical`] to check the per-place digit bound.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct LehmerCode {
    digits: Vec<BigNumber>,
}

/// A digit together with the order of the factorial it multiplies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceValue<'a> {
    /// `k` such that the place value is `k!`
    pub order: usize,
    pub digit: &'a BigNumber,
}

impl LehmerCode {
    /// Wrap a most-significant-first digit sequence
    pub fn new(digits: Vec<BigNumber>) -> Self {
        Self { digits }
    }

    /// Build a code from machine-sized digits
    pub fn from_u64_digits(digits: &[u64]) -> Self {
        Self {
            digits: digits.iter().copied().map(BigNumber::from_u64).collect(),
        }
    }

    /// The digits, most significant first
    pub fn digits(&self) -> &[BigNumber] {
        &self.digits
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True when the code holds no digits at all
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Give up the digit vector
    pub fn into_digits(self) -> Vec<BigNumber> {
        self.digits
    }

    /// Digits paired with their factorial order, least significant first
    pub fn place_values(&self) -> impl Iterator<Item = PlaceValue<'_>> + '_ {
        self.digits
            .iter()
            .rev()
            .enumerate()
            .map(|(order, digit)| PlaceValue { order, digit })
    }

    /// Whether every digit respects its place bound
    ///
    /// A canonical code is non-empty and the digit with place value `k!`
    /// lies in `0..=k`. This implies the rightmost digit is `0`.
    pub fn is_canonical(&self) -> bool {
        !self.is_empty()
            && self.place_values().all(|place| {
                !place.digit.is_negative()
                    && place.digit.to_usize().is_some_and(|d| d <= place.order)
            })
    }

    /// Convert every digit to `u64`
    ///
    /// Returns None if any digit is negative or too large.
    pub fn to_u64_digits(&self) -> Option<Vec<u64>> {
        self.digits.iter().map(BigNumber::to_u64).collect()
    }
}

impl fmt::Display for LehmerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", digit)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<BigNumber>> for LehmerCode {
    fn from(digits: Vec<BigNumber>) -> Self {
        Self::new(digits)
    }
}

impl AsRef<[BigNumber]> for LehmerCode {
    fn as_ref(&self) -> &[BigNumber] {
        &self.digits
    }
}

impl FromIterator<BigNumber> for LehmerCode {
    fn from_iter<I: IntoIterator<Item = BigNumber>>(iter: I) -> Self {
        Self {
            digits: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LehmerCode {
    type Item = &'a BigNumber;
    type IntoIter = slice::Iter<'a, BigNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.iter()
    }
}

impl IntoIterator for LehmerCode {
    type Item = BigNumber;
    type IntoIter = std::vec::IntoIter<BigNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.into_iter()
    }
}
