//! Integration tests for entities_lehmer_code crate

use entities_lehmer_code::*;
use entities_utilities::{factorial, BigNumber};

#[test]
fn test_weighted_sum_through_place_values() {
    // 1234 = 1*6! + 4*5! + 1*4! + 1*3! + 2*2! + 0*1! + 0*0!
    let code = LehmerCode::from_u64_digits(&[1, 4, 1, 1, 2, 0, 0]);
    let total = code.place_values().fold(BigNumber::zero(), |acc, place| {
        place.digit.mul_add(&factorial(place.order as u64), &acc)
    });
    assert_eq!(total.to_u64(), Some(1234));
}

#[test]
fn test_maximal_canonical_code() {
    // [k-1, k-2, ..., 1, 0] is the largest canonical code of length k
    let code: LehmerCode = (0..12u64).rev().map(BigNumber::from_u64).collect();
    assert!(code.is_canonical());
    assert_eq!(code.len(), 12);
    assert_eq!(code.digits().first().and_then(BigNumber::to_u64), Some(11));
}

#[test]
fn test_codes_compare_by_digits() {
    let a = LehmerCode::from_u64_digits(&[1, 0]);
    let b = LehmerCode::new(vec![BigNumber::one(), BigNumber::zero()]);
    assert_eq!(a, b);
    assert_ne!(a, LehmerCode::from_u64_digits(&[1, 0, 0]));
}
