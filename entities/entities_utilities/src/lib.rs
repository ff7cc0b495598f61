//! Entities Layer: Utilities
//!
//! Provides utility functions:
//! - Big number operations
//! - Factorials (the place values of the factorial number system)

pub mod big;
pub mod factorial;

pub use big::{BigNumber, ParseBigNumberError};
pub use factorial::{factorial, FactorialSequence};
