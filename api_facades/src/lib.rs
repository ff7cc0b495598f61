//! API Facades Layer
//!
//! The public surface of the workspace: two pure functions, `to_lehmer` and
//! `from_lehmer`, plus fixed-width and decimal-text variants of each.
//!
//! All facades call underlying Rust modules from inner layers and hold no
//! state, so they can be called from any number of threads at once.

pub mod lehmer_facades;

// Re-export main facade functions and the types they traffic in
pub use lehmer_facades::*;
pub use entities_lehmer_code::LehmerCode;
pub use entities_utilities::BigNumber;
pub use infrastructure_lehmer_encoding::{DecodeError, EncodeError};
