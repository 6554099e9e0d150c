//! The truncation-commuting law, checked by sampling. A witness, not a
//! proof: it only speaks for the prefixes it saw.

use crate::core::causal::Causal;
use crate::core::prefix::Prefix;

/// Outcome of sampling the causality law over a set of prefixes.
///
/// For each sample `p` and each truncation depth, checks length preservation
/// and `transform(truncate(q)) == truncate(transform(q))`. The full law over
/// an unbounded family is not decidable at runtime; `holds` means "no sample
/// refuted it".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CausalityWitness {
    /// Individual law instances checked.
    pub checks: usize,
    pub holds: bool,
    /// Length of the prefix on which the first violation surfaced.
    pub failure_length: Option<usize>,
}

impl CausalityWitness {
    pub fn verify<C>(causal: &C, samples: &[Prefix<C::In>]) -> Self
    where
        C: Causal,
        C::Out: Clone + PartialEq,
    {
        let mut checks = 0;
        for sample in samples {
            let full = causal.transform(sample);
            checks += 1;
            if full.len() != sample.len() {
                return Self::refuted(checks, sample.len());
            }

            // Walk the sample down one truncation at a time, comparing the
            // shorter transform against the truncated longer one.
            let mut longer = sample.clone();
            let mut longer_out = full;
            while let Some(shorter) = longer.truncate() {
                let shorter_out = causal.transform(&shorter);
                checks += 1;
                if shorter_out.len() != shorter.len() {
                    return Self::refuted(checks, shorter.len());
                }
                let truncated = match longer_out.truncate() {
                    Some(t) => t,
                    None => return Self::refuted(checks, longer.len()),
                };
                if shorter_out != truncated {
                    return Self::refuted(checks, longer.len());
                }
                longer = shorter;
                longer_out = shorter_out;
            }
        }
        Self {
            checks,
            holds: true,
            failure_length: None,
        }
    }

    const fn refuted(checks: usize, at: usize) -> Self {
        Self {
            checks,
            holds: false,
            failure_length: Some(at),
        }
    }

    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// The defining equation of `apply_next`, restated as a standalone check:
/// `apply_next(c, p, x) == last(transform(extend(p, x)))`.
pub fn apply_next_agrees<C>(causal: &C, history: &Prefix<C::In>, input: C::In) -> bool
where
    C: Causal,
    C::Out: PartialEq,
{
    let committed = causal.apply_next(history, input.clone());
    let extended = history.extend(input);
    match causal.transform(&extended).into_last() {
        Some(expected) => committed == expected,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::causal::PrefixMap;
    use crate::transforms::PartialSums;

    fn samples() -> Vec<Prefix<i64>> {
        vec![
            Prefix::empty(),
            Prefix::from_vec(vec![4]),
            Prefix::from_vec(vec![1, 2]),
            Prefix::from_vec(vec![5, -3, 9, 0, 2]),
        ]
    }

    #[test]
    fn test_partial_sums_passes() {
        let witness = CausalityWitness::verify(&PartialSums::new(), &samples());
        assert!(witness.is_valid());
        assert!(witness.checks > 0);
    }

    #[test]
    fn test_history_rewriter_is_refuted() {
        // Reversing the prefix rewrites already-committed output.
        let rewriter = PrefixMap::new(|p: &Prefix<i64>| p.iter().rev().cloned().collect());
        let witness = CausalityWitness::verify(&rewriter, &samples());
        assert!(!witness.is_valid());
        assert!(witness.failure_length.is_some());
    }

    #[test]
    fn test_length_breaker_is_refuted() {
        // Dropping an element breaks length preservation before the
        // commuting check even runs.
        let dropper = PrefixMap::new(|p: &Prefix<i64>| {
            p.iter().skip(1).cloned().collect()
        });
        let witness = CausalityWitness::verify(&dropper, &samples());
        assert!(!witness.is_valid());
    }

    #[test]
    fn test_apply_next_equation() {
        let history = Prefix::from_vec(vec![10, 20]);
        assert!(apply_next_agrees(&PartialSums::new(), &history, 12));
        assert!(apply_next_agrees(&PartialSums::new(), &Prefix::empty(), -4));
    }
}
