//! Discrete integrator: rectangle-rule accumulation.

use std::ops::{Add, Mul};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Running-sum integrator over a fixed sampling period.
///
/// Each [`step`](Self::step) performs `sum += now * period` and returns the
/// updated sum. The accumulation is persistent: the returned value equals the
/// new internal state, not a per-tick delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integrator<S, V> {
    period: S,
    sum: V,
}

impl<S, V> Integrator<S, V>
where
    S: Copy + PartialOrd + Zero,
    V: Copy + Add<Output = V> + Mul<S, Output = V>,
{
    /// Create an integrator with sampling period `period` and initial
    /// accumulator `sum`.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is not positive.
    pub fn new(period: S, sum: V) -> ControlResult<Self> {
        if period <= S::zero() {
            return Err(ControlError::InvalidArg {
                what: "period must be positive",
            });
        }
        Ok(Self { period, sum })
    }

    /// Advance one tick: accumulate `now * period` and return the new total.
    pub fn step(&mut self, now: V) -> V {
        self.sum = self.sum + now * self.period;
        self.sum
    }

    /// Overwrite the accumulator without touching the period.
    pub fn reset(&mut self, sum: V) {
        self.sum = sum;
    }

    /// Sampling period.
    pub fn period(&self) -> S {
        self.period
    }

    /// Current accumulated total.
    pub fn sum(&self) -> V {
        self.sum
    }
}
