//! Stream interpreters. One input pulled, one output committed, never
//! revised, never ahead.

use super::causal::Causal;
use super::prefix::Prefix;
use super::stream::Source;
use super::transducer::Transducer;

/// Drives a transducer over an infinite input: pull one element, step once,
/// commit the output, thread the successor machine forward.
#[derive(Debug, Clone)]
pub struct StepInterpreter<T, S> {
    machine: T,
    input: S,
}

impl<T, S> StepInterpreter<T, S> {
    #[inline(always)]
    pub const fn new(machine: T, input: S) -> Self {
        Self { machine, input }
    }

    /// The machine as of the last committed output. Clone it to checkpoint
    /// the transformation; the interpreter advances independently.
    #[inline(always)]
    pub fn machine(&self) -> &T {
        &self.machine
    }
}

impl<T, S> Source for StepInterpreter<T, S>
where
    T: Transducer,
    S: Source<Item = T::In>,
{
    type Item = T::Out;

    fn pull(&mut self) -> T::Out {
        let input = self.input.pull();
        let (output, next) = self.machine.step(input);
        self.machine = next;
        output
    }
}

/// Drives a causal function by accumulating the full input history: each
/// output is `apply_next(history, x)`, then the history grows by `x`.
///
/// The history is load-bearing. An interpreter that re-applies the length-1
/// component per element forgets everything before the latest input and is
/// wrong for any transformation with state.
#[derive(Clone)]
pub struct PrefixInterpreter<C: Causal, S> {
    causal: C,
    history: Prefix<C::In>,
    input: S,
}

impl<C: Causal, S> PrefixInterpreter<C, S> {
    pub fn new(causal: C, input: S) -> Self {
        Self {
            causal,
            history: Prefix::empty(),
            input,
        }
    }

    /// Everything consumed so far, in order.
    #[inline(always)]
    pub fn history(&self) -> &Prefix<C::In> {
        &self.history
    }
}

impl<C, S> Source for PrefixInterpreter<C, S>
where
    C: Causal,
    S: Source<Item = C::In>,
{
    type Item = C::Out;

    fn pull(&mut self) -> C::Out {
        let input = self.input.pull();
        let output = self.causal.apply_next(&self.history, input.clone());
        self.history = self.history.extend(input);
        output
    }
}
