//! Checkpoint a transformation mid-stream and branch it. Old states stay
//! valid because stepping never mutates.

use lockstep::core::interpret::StepInterpreter;
use lockstep::core::stream::{iterate, Source};
use lockstep::core::transducer::Transducer;
use lockstep::transforms::RunningSum;

fn main() {
    let mut run = StepInterpreter::new(RunningSum::new(), iterate(1i64, |n| n + 1));
    for _ in 0..3 {
        println!("committed: {}", run.pull());
    }

    // Checkpoint after three elements (total = 6).
    let checkpoint = *run.machine();

    // Branch A: keep summing with different inputs.
    let mut a = checkpoint;
    for x in [100i64, 200] {
        let (output, next) = a.step(x);
        println!("branch a: {output}");
        a = next;
    }

    // Branch B: drain the total back to zero, from the same checkpoint.
    let (output, _) = checkpoint.step(-6);
    println!("branch b: {output}");

    // The main line never noticed either branch.
    println!("main line continues: {}", run.pull());
}
