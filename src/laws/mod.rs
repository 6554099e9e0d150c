//! Law checking. Witnesses over samples, not proofs: bounded, reportable,
//! honest about what they did and did not see.

pub mod agreement;
pub mod bisim;
pub mod causality;

pub use agreement::AgreementWitness;
pub use bisim::{fingerprint, BisimWitness, Divergence, StreamWitness, MAX_TRACE};
pub use causality::{apply_next_agrees, CausalityWitness};
