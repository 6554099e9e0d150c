//! Two machine models for transforming an infinite input stream into an
//! infinite output stream, one element in lockstep with one element out:
//! causal functions (per-length prefix transforms obeying the truncation
//! law) and transducers (steppable state machines). Converters map between
//! them; witnesses keep the equivalence honest.

pub mod core;
pub mod laws;
pub mod transforms;

/// Prelude for convenient imports of primary API types.
pub mod prelude {
    pub use crate::core::stream::{from_fn, from_iter, iterate, repeat};
    pub use crate::core::{
        causal_to_transducer, transducer_to_causal, Causal, Folded, Prefix, PrefixInterpreter,
        PrefixMap, Replay, Source, StepInterpreter, Transducer, Unfold,
    };
    pub use crate::laws::{
        apply_next_agrees, fingerprint, AgreementWitness, BisimWitness, CausalityWitness,
        StreamWitness,
    };
    pub use crate::transforms::{
        Delay, Delayed, Identity, PartialSums, RunningMax, RunningSum, Stateless,
    };
}

// Re-export primary types at crate root for convenience.
pub use crate::core::{
    causal_to_transducer, transducer_to_causal, Causal, Folded, Prefix, PrefixInterpreter,
    PrefixMap, Replay, Source, StepInterpreter, Transducer, Unfold,
};
pub use crate::laws::{AgreementWitness, BisimWitness, CausalityWitness, StreamWitness};
