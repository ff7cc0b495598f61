//! Integration tests for entities_utilities crate
//!
//! These tests verify big number and factorial operations end-to-end.

use entities_utilities::*;

#[test]
fn test_big_number_operations_integration() {
    let big1 = BigNumber::from_i64(1234567890123456i64);
    let big2 = BigNumber::from_i64(987654321098765i64);

    let sum = big1.plus(&big2);
    assert_eq!(sum.to_i64(), Some(2222222211222221));

    let prod = big1.times(&big2);
    // Too large for i64, but exact
    assert!(prod.to_i64().is_none());
    assert_eq!(prod.div(&big2), Some(big1.clone()));
    assert_eq!(prod.rem(&big2).map(|r| r.is_zero()), Some(true));
}

#[test]
fn test_big_number_edge_cases() {
    let zero = BigNumber::from_i64(0);
    assert_eq!(zero.to_i64(), Some(0));
    assert_eq!(zero, BigNumber::default());

    let max_i64 = BigNumber::from_i64(i64::MAX);
    assert_eq!(max_i64.to_i64(), Some(i64::MAX));

    let min_i64 = BigNumber::from_i64(i64::MIN);
    assert_eq!(min_i64.to_i64(), Some(i64::MIN));
    assert_eq!(min_i64.to_u64(), None);

    let max_u64 = BigNumber::from_u64(u64::MAX);
    assert_eq!(max_u64.to_u64(), Some(u64::MAX));
    assert_eq!(max_u64.to_i64(), None);
}

#[test]
fn test_factorial_division_chain() {
    // Dividing k! by k, k-1, ... walks the place values back down to 1
    let mut place = factorial(30);
    for k in (1..=30u64).rev() {
        place = place.div_small(k).unwrap();
        assert_eq!(place, factorial(k - 1));
    }
    assert_eq!(place, BigNumber::one());
}

#[test]
fn test_factorial_sequence_strictly_grows_after_one() {
    let values: Vec<BigNumber> = FactorialSequence::new().take(40).collect();
    assert_eq!(values[0], values[1]);
    for pair in values[1..].windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_factorial_display_round_trip() {
    let hundred = factorial(100);
    let text = hundred.to_string();
    assert_eq!(text.len(), 158);
    assert!(text.starts_with("93326215443944152681"));
    assert_eq!(text.parse::<BigNumber>().unwrap(), hundred);
}
