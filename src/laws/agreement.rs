//! Extensional agreement between causal functions, sampled pointwise.

use crate::core::causal::Causal;
use crate::core::prefix::Prefix;

/// Outcome of comparing two causal functions on a set of sample prefixes.
///
/// Extensional equality quantifies over every length and every prefix; that
/// is not decidable, so the witness compares the samples it is given and
/// nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgreementWitness {
    pub prefixes_tested: usize,
    pub holds: bool,
    /// Length of the first sample on which the two disagreed.
    pub failure_length: Option<usize>,
}

impl AgreementWitness {
    pub fn verify<L, R>(left: &L, right: &R, samples: &[Prefix<L::In>]) -> Self
    where
        L: Causal,
        R: Causal<In = L::In, Out = L::Out>,
        L::Out: PartialEq,
    {
        for (tested, sample) in samples.iter().enumerate() {
            if left.transform(sample) != right.transform(sample) {
                return Self {
                    prefixes_tested: tested + 1,
                    holds: false,
                    failure_length: Some(sample.len()),
                };
            }
        }
        Self {
            prefixes_tested: samples.len(),
            holds: true,
            failure_length: None,
        }
    }

    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}
