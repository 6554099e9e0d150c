//! Causal functions: length-preserving prefix transforms. The first n
//! outputs depend only on the first n inputs.

use std::marker::PhantomData;

use super::prefix::Prefix;

/// A family of per-length prefix transforms, one polymorphic `transform`
/// standing for every component: `component(n)` is `transform` restricted to
/// length-n prefixes.
///
/// Contract, not checked per call:
/// - `transform` preserves length.
/// - Truncation commutes: `transform(truncate(p)) == truncate(transform(p))`
///   for every non-empty `p`.
///
/// The law cannot be verified at runtime for an unbounded family; sample it
/// with [`CausalityWitness`](crate::laws::CausalityWitness).
pub trait Causal {
    type In: Clone;
    type Out;

    /// Apply the length-n component to a length-n prefix.
    fn transform(&self, input: &Prefix<Self::In>) -> Prefix<Self::Out>;

    /// The length-1 component viewed as a plain function. The only way a
    /// caller observes a causal function element-wise.
    fn apply_one(&self, input: Self::In) -> Self::Out {
        self.apply_next(&Prefix::empty(), input)
    }

    /// Given the history consumed so far and one new element, the single
    /// output committed for that element:
    /// `last(transform(extend(history, x)))`.
    ///
    /// This is the operation that drives interpretation; the equation above
    /// is restated as [`apply_next_agrees`](crate::laws::apply_next_agrees).
    fn apply_next(&self, history: &Prefix<Self::In>, input: Self::In) -> Self::Out {
        let extended = history.extend(input);
        let output = self.transform(&extended);
        debug_assert_eq!(
            output.len(),
            extended.len(),
            "causal component must preserve length"
        );
        match output.into_last() {
            Some(committed) => committed,
            None => panic!("causal component produced an empty output for a non-empty input"),
        }
    }
}

/// A caller-supplied family of prefix transforms. The causality law is the
/// constructor's precondition.
pub struct PrefixMap<A, B, F> {
    transform: F,
    _io: PhantomData<fn(&A) -> B>,
}

impl<A, B, F> PrefixMap<A, B, F> {
    #[inline(always)]
    pub const fn new(transform: F) -> Self {
        Self {
            transform,
            _io: PhantomData,
        }
    }
}

impl<A, B, F: Clone> Clone for PrefixMap<A, B, F> {
    fn clone(&self) -> Self {
        Self {
            transform: self.transform.clone(),
            _io: PhantomData,
        }
    }
}

impl<A, B, F> Causal for PrefixMap<A, B, F>
where
    A: Clone,
    F: Fn(&Prefix<A>) -> Prefix<B>,
{
    type In = A;
    type Out = B;

    #[inline]
    fn transform(&self, input: &Prefix<A>) -> Prefix<B> {
        (self.transform)(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doubling() -> PrefixMap<i64, i64, impl Fn(&Prefix<i64>) -> Prefix<i64>> {
        PrefixMap::new(|p: &Prefix<i64>| p.iter().map(|x| x * 2).collect())
    }

    #[test]
    fn test_transform_applies_componentwise() {
        let c = doubling();
        let out = c.transform(&Prefix::from_vec(vec![1, 2, 3]));
        assert_eq!(out.as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn test_apply_one_unwraps_singleton() {
        let c = doubling();
        assert_eq!(c.apply_one(21), 42);
    }

    #[test]
    fn test_apply_next_commits_only_the_last_output() {
        let c = doubling();
        let history = Prefix::from_vec(vec![1, 2]);
        assert_eq!(c.apply_next(&history, 5), 10);
        // History untouched.
        assert_eq!(history.len(), 2);
    }
}
