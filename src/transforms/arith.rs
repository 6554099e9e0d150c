//! Arithmetic accumulators. State = the committed total.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::core::causal::Causal;
use crate::core::prefix::Prefix;
use crate::core::transducer::Transducer;

/// Running sum. `step(x)` commits `total + x` and carries it forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(FromBytes, IntoBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct RunningSum {
    pub total: i64,
}

const _: () = {
    assert!(std::mem::size_of::<RunningSum>() == 8);
};

impl RunningSum {
    #[inline(always)]
    pub const fn new() -> Self {
        Self { total: 0 }
    }

    #[inline(always)]
    pub const fn with_total(total: i64) -> Self {
        Self { total }
    }
}

impl Transducer for RunningSum {
    type In = i64;
    type Out = i64;

    #[inline(always)]
    fn step(&self, input: i64) -> (i64, Self) {
        let total = self.total.wrapping_add(input);
        (total, Self { total })
    }
}

/// Max-so-far latch. Once committed, the high-water mark only rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(FromBytes, IntoBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct RunningMax {
    pub high: u64,
}

impl RunningMax {
    #[inline(always)]
    pub const fn new() -> Self {
        Self { high: 0 }
    }

    #[inline(always)]
    pub const fn with_high(high: u64) -> Self {
        Self { high }
    }
}

impl Transducer for RunningMax {
    type In = u64;
    type Out = u64;

    #[inline(always)]
    fn step(&self, input: u64) -> (u64, Self) {
        let high = self.high.max(input);
        (high, Self { high })
    }
}

/// Prefix sums defined directly at the prefix level, independent of
/// [`RunningSum`]. The two describe the same transformation; the test suite
/// holds them to it through the converters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialSums;

impl PartialSums {
    #[inline(always)]
    pub const fn new() -> Self {
        Self
    }
}

impl Causal for PartialSums {
    type In = i64;
    type Out = i64;

    fn transform(&self, input: &Prefix<i64>) -> Prefix<i64> {
        let mut total = 0i64;
        input
            .iter()
            .map(|x| {
                total = total.wrapping_add(*x);
                total
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_sum_scenario() {
        let t0 = RunningSum::new();
        let (y1, t1) = t0.step(1);
        let (y2, t2) = t1.step(2);
        let (y3, t3) = t2.step(3);
        let (y4, _) = t3.step(4);
        assert_eq!([y1, y2, y3, y4], [1, 3, 6, 10]);
    }

    #[test]
    fn test_running_sum_wraps_instead_of_overflowing() {
        let (y, _) = RunningSum::with_total(i64::MAX).step(1);
        assert_eq!(y, i64::MIN);
    }

    #[test]
    fn test_running_max_latches() {
        let (y1, t1) = RunningMax::new().step(10);
        let (y2, t2) = t1.step(3);
        let (y3, _) = t2.step(42);
        assert_eq!([y1, y2, y3], [10, 10, 42]);
    }

    #[test]
    fn test_running_max_respects_its_floor() {
        let (y, _) = RunningMax::with_high(100).step(7);
        assert_eq!(y, 100);
    }

    #[test]
    fn test_partial_sums_transform() {
        let out = PartialSums::new().transform(&Prefix::from_vec(vec![1, 2, 3, 4]));
        assert_eq!(out.as_slice(), &[1, 3, 6, 10]);
    }

    #[test]
    fn test_partial_sums_preserves_length() {
        for n in 0..8 {
            let input: Prefix<i64> = (0..n).collect();
            assert_eq!(PartialSums::new().transform(&input).len(), n as usize);
        }
    }
}
