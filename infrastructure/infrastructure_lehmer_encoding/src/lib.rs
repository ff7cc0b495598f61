//! Infrastructure Layer: Lehmer Code Encoding
//!
//! Converts non-negative integers to and from the factorial number system.
//!
//! ## Overview
//!
//! In the factorial number system the digit at distance `k` from the right
//! has place value `k!` and lies in `0..=k`. Every non-negative integer has
//! exactly one such representation of minimal length, its canonical Lehmer
//! code. All arithmetic goes through [`BigNumber`](entities_utilities::BigNumber),
//! so values of any size convert exactly.
//!
//! ## Components
//!
//! - **[`length`](length/index.html)**: smallest `k` with `k! > n`
//! - **[`encoder`](encoder/index.html)**: integer to canonical code
//! - **[`decoder`](decoder/index.html)**: digit sequence to integer
//! - **[`codec`](codec/index.html)**: `LehmerCodec`, the three above behind one type
//!
//! ## Diagnostics
//!
//! Events are emitted through `tracing` (`trace` for conversions, `debug` for
//! rejected input). No subscriber is installed by this crate.
//!
//! ## See Also
//!
//! - [`entities_lehmer_code`](../../entities/entities_lehmer_code/index.html): LehmerCode type
//! - [`entities_utilities`](../../entities/entities_utilities/index.html): BigNumber and factorials

mod common;

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod length;

pub use codec::LehmerCodec;
pub use decoder::{decode_code, from_lehmer};
pub use encoder::{extract_digits, to_lehmer};
pub use length::lehmer_length;

// Re-export error types for convenience
pub use common::{DecodeError, DecodeResult, EncodeError, EncodeResult};
