//! The guts. Prefixes, the two machine models, interpreters, converters.

pub mod causal;
pub mod convert;
pub mod interpret;
pub mod prefix;
pub mod stream;
pub mod transducer;

pub use causal::{Causal, PrefixMap};
pub use convert::{causal_to_transducer, transducer_to_causal, Folded, Replay};
pub use interpret::{PrefixInterpreter, StepInterpreter};
pub use prefix::Prefix;
pub use stream::{from_fn, from_iter, iterate, repeat, Exhaustible, FromFn, Iterate, Repeat, Source};
pub use transducer::{Transducer, Unfold};
