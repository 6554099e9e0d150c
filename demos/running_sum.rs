//! The running-sum walkthrough: one transformation, two machine models, one
//! output stream.

use lockstep::core::convert::{causal_to_transducer, transducer_to_causal};
use lockstep::core::interpret::{PrefixInterpreter, StepInterpreter};
use lockstep::core::stream::{iterate, Source};
use lockstep::laws::BisimWitness;
use lockstep::transforms::RunningSum;

fn main() {
    // 1. The transducer view: hidden state is the committed total.
    let mut direct = StepInterpreter::new(RunningSum::new(), iterate(1i64, |n| n + 1));
    println!("transducer:      {:?}", direct.take_prefix(8).as_slice());

    // 2. The causal-function view of the same machine.
    let mut folded = PrefixInterpreter::new(
        transducer_to_causal(RunningSum::new()),
        iterate(1i64, |n| n + 1),
    );
    println!("causal function: {:?}", folded.take_prefix(8).as_slice());

    // 3. Round trip back to a transducer, then bounded bisimulation.
    let round = causal_to_transducer(transducer_to_causal(RunningSum::new()));
    let sequences: Vec<Vec<i64>> = (0i64..4).map(|k| (k..k + 32).collect()).collect();
    let witness = BisimWitness::verify(&RunningSum::new(), &round, &sequences);
    println!(
        "round trip bisimilar to depth {}: {}",
        witness.depth,
        witness.is_valid()
    );
}
