//! Entities Layer: Lehmer Code
//!
//! Provides the digit-sequence value type of the factorial number system.
//!
//! ## Overview
//!
//! A Lehmer code is an ordered sequence of non-negative digits, most
//! significant first. The digit at distance `k` from the right end has place
//! value `k!` and, in canonical form, lies in `0..=k`. Because `0! = 1! = 1`
//! the rightmost digit of a canonical code is always `0`.
//!
//! This crate only models the value. Conversion to and from integers lives in
//! `infrastructure_lehmer_encoding`.
//!
//! ## See Also
//!
//! - [`entities_utilities`](../entities_utilities/index.html): BigNumber and factorials

pub mod lehmer_code;

pub use lehmer_code::{LehmerCode, PlaceValue};
