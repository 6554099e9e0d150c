//! Ready-made transformations. Small, pure, law-abiding; exercised across
//! the tests, demos, and benches.

pub mod arith;
pub mod delay;
pub mod stateless;

pub use arith::{PartialSums, RunningMax, RunningSum};
pub use delay::{Delay, Delayed};
pub use stateless::{Identity, Stateless};
