//! Converters between the two machine models. Fold one way, replay the
//! other; neither changes observable behavior.

use std::sync::Arc;

use super::causal::Causal;
use super::prefix::Prefix;
use super::transducer::Transducer;

/// A transducer viewed as a causal function: `transform(p)` folds `step`
/// over `p` from the origin machine, keeping the outputs and discarding the
/// final state.
///
/// The folded family satisfies the causality law because folding commutes
/// with prefix extension: the transform of `extend(p, x)` is the transform
/// of `p` with one more step appended.
#[derive(Debug, Clone)]
pub struct Folded<T> {
    origin: T,
}

impl<T> Folded<T> {
    #[inline(always)]
    pub const fn new(origin: T) -> Self {
        Self { origin }
    }

    #[inline(always)]
    pub fn origin(&self) -> &T {
        &self.origin
    }
}

impl<T> Causal for Folded<T>
where
    T: Transducer + Clone,
    T::In: Clone,
{
    type In = T::In;
    type Out = T::Out;

    fn transform(&self, input: &Prefix<T::In>) -> Prefix<T::Out> {
        let mut machine = self.origin.clone();
        let mut outputs = Vec::with_capacity(input.len());
        for element in input.iter() {
            let (output, next) = machine.step(element.clone());
            outputs.push(output);
            machine = next;
        }
        Prefix::from_vec(outputs)
    }
}

/// A causal function viewed as a transducer: the hidden state is the prefix
/// accumulated so far. `step` commits `apply_next(history, x)` and advances
/// to `extend(history, x)`, the same accumulation strategy as
/// [`PrefixInterpreter`](crate::core::interpret::PrefixInterpreter).
pub struct Replay<C: Causal> {
    causal: Arc<C>,
    history: Prefix<C::In>,
}

impl<C: Causal> Replay<C> {
    pub fn new(causal: C) -> Self {
        Self {
            causal: Arc::new(causal),
            history: Prefix::empty(),
        }
    }

    /// Branch from a previously accumulated history.
    pub fn with_history(causal: C, history: Prefix<C::In>) -> Self {
        Self {
            causal: Arc::new(causal),
            history,
        }
    }

    #[inline(always)]
    pub fn history(&self) -> &Prefix<C::In> {
        &self.history
    }
}

impl<C: Causal> Clone for Replay<C> {
    fn clone(&self) -> Self {
        Self {
            causal: Arc::clone(&self.causal),
            history: self.history.clone(),
        }
    }
}

impl<C: Causal> Transducer for Replay<C> {
    type In = C::In;
    type Out = C::Out;

    fn step(&self, input: C::In) -> (C::Out, Self) {
        let output = self.causal.apply_next(&self.history, input.clone());
        let next = Self {
            causal: Arc::clone(&self.causal),
            history: self.history.extend(input),
        };
        (output, next)
    }
}

/// `transducer → causal function`.
#[inline(always)]
pub fn transducer_to_causal<T>(machine: T) -> Folded<T> {
    Folded::new(machine)
}

/// `causal function → transducer`.
#[inline(always)]
pub fn causal_to_transducer<C: Causal>(causal: C) -> Replay<C> {
    Replay::new(causal)
}
