//! Exact factorials over decimal digit sequences.
//!
//! Arguments up to [`BASELINE`] are computed in native `u64` arithmetic; past
//! it, the result is grown one schoolbook [`multiply`](multiply::multiply) at a
//! time. [`Factorials`] keeps computed results around so that later requests
//! can continue from them.

pub mod digits;
pub mod multiply;
pub mod stats;

mod factorial;
mod fixed;

pub use digits::DigitSequence;
pub use factorial::*;
pub use fixed::*;
