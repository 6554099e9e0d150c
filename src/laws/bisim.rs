//! Bounded bisimulation. The coinductive relation is traded for depth-bounded
//! unfolding over caller-supplied inputs, with a counterexample trace on
//! divergence.

use arrayvec::ArrayVec;
use zerocopy::{Immutable, IntoBytes};

use crate::core::stream::Source;
use crate::core::transducer::Transducer;

/// Upper bound on the inputs recorded in a divergence trace.
pub const MAX_TRACE: usize = 32;

/// Where two machines came apart: the index of the first disagreeing output
/// and the inputs consumed up to that point (bounded).
#[derive(Debug, Clone)]
pub struct Divergence<A> {
    pub position: usize,
    pub trace: ArrayVec<A, MAX_TRACE>,
}

/// Outcome of unfolding two transducers side by side along each input
/// sequence, comparing outputs stepwise.
///
/// Bisimilarity proper is coinductive and cannot be decided in finite time;
/// `holds` means "no tested sequence separated them within its length".
#[derive(Debug, Clone)]
pub struct BisimWitness<A> {
    /// Longest unfolding depth reached.
    pub depth: usize,
    pub sequences_tested: usize,
    pub holds: bool,
    pub divergence: Option<Divergence<A>>,
}

impl<A: Clone> BisimWitness<A> {
    pub fn verify<L, R>(left: &L, right: &R, inputs: &[Vec<A>]) -> Self
    where
        L: Transducer<In = A> + Clone,
        R: Transducer<In = A, Out = L::Out> + Clone,
        L::Out: PartialEq,
    {
        let mut depth = 0;
        for (tested, sequence) in inputs.iter().enumerate() {
            depth = depth.max(sequence.len());
            let mut l = left.clone();
            let mut r = right.clone();
            let mut trace: ArrayVec<A, MAX_TRACE> = ArrayVec::new();
            for (position, input) in sequence.iter().enumerate() {
                if !trace.is_full() {
                    trace.push(input.clone());
                }
                let (out_l, next_l) = l.step(input.clone());
                let (out_r, next_r) = r.step(input.clone());
                if out_l != out_r {
                    return Self {
                        depth,
                        sequences_tested: tested + 1,
                        holds: false,
                        divergence: Some(Divergence { position, trace }),
                    };
                }
                l = next_l;
                r = next_r;
            }
        }
        Self {
            depth,
            sequences_tested: inputs.len(),
            holds: true,
            divergence: None,
        }
    }

    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// Outcome of comparing two output streams element by element to a fixed
/// depth. Same bounded reading as [`BisimWitness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamWitness {
    pub depth: usize,
    pub holds: bool,
    pub divergence_position: Option<usize>,
}

impl StreamWitness {
    pub fn verify<L, R>(left: &mut L, right: &mut R, depth: usize) -> Self
    where
        L: Source,
        R: Source<Item = L::Item>,
        L::Item: PartialEq,
    {
        for position in 0..depth {
            if left.pull() != right.pull() {
                return Self {
                    depth,
                    holds: false,
                    divergence_position: Some(position),
                };
            }
        }
        Self {
            depth,
            holds: true,
            divergence_position: None,
        }
    }

    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// Content hash of the next `count` elements of a source. Streams that agree
/// to depth `count` fingerprint identically; a mismatch pins a divergence
/// somewhere inside the window.
pub fn fingerprint<S>(source: &mut S, count: usize) -> [u8; 32]
where
    S: Source,
    S::Item: IntoBytes + Immutable,
{
    let mut hasher = blake3::Hasher::new();
    for _ in 0..count {
        let element = source.pull();
        hasher.update(element.as_bytes());
    }
    *hasher.finalize().as_bytes()
}
