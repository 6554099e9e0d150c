//! Pull-based infinite sources. No termination signal, no lookahead.

use super::prefix::Prefix;

/// An infinite sequence, consumed one element per `pull`. Infinite is a
/// contract, not a check: a source never signals termination. How "infinite"
/// is realized (generation, a feed, a finite run treated as an error) is the
/// embedder's choice.
pub trait Source {
    type Item;

    /// Produce the next element. There is always a next.
    fn pull(&mut self) -> Self::Item;

    /// Consume the next `n` elements into a prefix.
    fn take_prefix(&mut self, n: usize) -> Prefix<Self::Item>
    where
        Self: Sized,
    {
        (0..n).map(|_| self.pull()).collect()
    }
}

/// Source backed by a closure.
pub struct FromFn<F>(F);

#[inline(always)]
pub fn from_fn<T, F: FnMut() -> T>(generate: F) -> FromFn<F> {
    FromFn(generate)
}

impl<T, F: FnMut() -> T> Source for FromFn<F> {
    type Item = T;

    #[inline(always)]
    fn pull(&mut self) -> T {
        (self.0)()
    }
}

/// `seed, f(seed), f(f(seed)), …`
pub struct Iterate<T, F> {
    next: T,
    advance: F,
}

#[inline(always)]
pub fn iterate<T: Clone, F: FnMut(&T) -> T>(seed: T, advance: F) -> Iterate<T, F> {
    Iterate {
        next: seed,
        advance,
    }
}

impl<T: Clone, F: FnMut(&T) -> T> Source for Iterate<T, F> {
    type Item = T;

    fn pull(&mut self) -> T {
        let current = self.next.clone();
        self.next = (self.advance)(&current);
        current
    }
}

/// The constant stream.
pub struct Repeat<T>(T);

#[inline(always)]
pub fn repeat<T: Clone>(element: T) -> Repeat<T> {
    Repeat(element)
}

impl<T: Clone> Source for Repeat<T> {
    type Item = T;

    #[inline(always)]
    fn pull(&mut self) -> T {
        self.0.clone()
    }
}

/// A finite iterator promoted to a source under the "exhaustion is an
/// embedder error" policy: pulling past the end panics.
pub struct Exhaustible<I> {
    inner: I,
}

#[inline(always)]
pub fn from_iter<I: IntoIterator>(input: I) -> Exhaustible<I::IntoIter> {
    Exhaustible {
        inner: input.into_iter(),
    }
}

impl<I: Iterator> Source for Exhaustible<I> {
    type Item = I::Item;

    fn pull(&mut self) -> I::Item {
        match self.inner.next() {
            Some(element) => element,
            None => panic!("infinite source contract violated: upstream iterator exhausted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterate_naturals() {
        let mut naturals = iterate(1u64, |n| n + 1);
        assert_eq!(naturals.pull(), 1);
        assert_eq!(naturals.pull(), 2);
        assert_eq!(naturals.pull(), 3);
    }

    #[test]
    fn test_take_prefix_pulls_exactly_n() {
        let mut naturals = iterate(0u64, |n| n + 1);
        assert_eq!(naturals.take_prefix(3).as_slice(), &[0, 1, 2]);
        // The source kept its position.
        assert_eq!(naturals.pull(), 3);
    }

    #[test]
    fn test_repeat_is_constant() {
        let mut xs = repeat(7i64);
        assert_eq!(xs.take_prefix(4).as_slice(), &[7, 7, 7, 7]);
    }

    #[test]
    fn test_from_fn_threads_captured_state() {
        let mut n = 0u64;
        let mut source = from_fn(move || {
            n += 2;
            n
        });
        assert_eq!(source.take_prefix(3).as_slice(), &[2, 4, 6]);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_exhaustible_panics_past_the_end() {
        let mut source = from_iter(vec![1, 2]);
        source.pull();
        source.pull();
        source.pull();
    }
}
