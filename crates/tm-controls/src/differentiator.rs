//! Discrete differentiator: one backward difference per tick.

use std::ops::{Div, Sub};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Backward-difference differentiator over a fixed sampling period.
///
/// Each [`step`](Self::step) returns `(now - last) / period` and then stores
/// `now` as the new `last`. The constructor seeds `last`, so the first output
/// reflects that seed: callers should initialize it to the first expected
/// sample, or accept one transient spurious derivative.
///
/// `S` is the period scalar type and `V` the sample value type; `V` may be a
/// vector as long as it supports the required arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Differentiator<S, V> {
    period: S,
    last: V,
}

impl<S, V> Differentiator<S, V>
where
    S: Copy + PartialOrd + Zero,
    V: Copy + Sub<Output = V> + Div<S, Output = V>,
{
    /// Create a differentiator with sampling period `period` and seed sample
    /// `last`.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is not positive.
    pub fn new(period: S, last: V) -> ControlResult<Self> {
        if period <= S::zero() {
            return Err(ControlError::InvalidArg {
                what: "period must be positive",
            });
        }
        Ok(Self { period, last })
    }

    /// Advance one tick: emit the backward difference of `now` against the
    /// stored sample, then store `now`.
    pub fn step(&mut self, now: V) -> V {
        let out = (now - self.last) / self.period;
        self.last = now;
        out
    }

    /// Overwrite the stored sample without touching the period.
    pub fn reset(&mut self, last: V) {
        self.last = last;
    }

    /// Sampling period.
    pub fn period(&self) -> S {
        self.period
    }

    /// Most recently stored sample.
    pub fn last(&self) -> V {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backward_differences() {
        let mut d = Differentiator::new(1.0, 0.0).unwrap();
        assert_eq!(d.step(2.0), 2.0);
        assert_eq!(d.step(5.0), 3.0);
    }

    #[test]
    fn period_scales_output() {
        let mut d = Differentiator::new(0.5, 0.0).unwrap();
        assert_eq!(d.step(2.0), 4.0);
    }

    #[test]
    fn reset_replaces_last_only() {
        let mut d = Differentiator::new(1.0, 0.0).unwrap();
        d.step(3.0);
        d.reset(10.0);
        assert_eq!(d.period(), 1.0);
        assert_eq!(d.step(10.0), 0.0);
    }

    #[test]
    fn rejects_nonpositive_period() {
        assert!(Differentiator::new(0.0, 0.0).is_err());
        assert!(Differentiator::new(-1.0, 0.0).is_err());
    }
}
