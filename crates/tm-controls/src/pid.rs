//! PID controller with the raw-sample update law.

use std::ops::{Add, Mul, Sub};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Proportional-integral-derivative controller.
///
/// Each [`step`](Self::step) computes
///
/// ```text
/// sum += now
/// out  = kp*now + ki*sum + kd*(now - last)
/// last = now
/// ```
///
/// Note the update law: the integral term accumulates **raw samples** (not
/// sample × period) and the derivative term is **not** divided by the period.
/// This differs from a textbook discrete PID, where the period scales both
/// terms; to recover textbook behavior fold the period into `ki` and `kd`.
/// The period is stored for that conversion and for symmetry with the other
/// primitives, but does not enter the update itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pid<S, V> {
    period: S,
    kp: S,
    ki: S,
    kd: S,
    sum: V,
    last: V,
}

impl<S, V> Pid<S, V>
where
    S: Copy + PartialOrd + Zero + Mul<V, Output = V>,
    V: Copy + Zero + Add<Output = V> + Sub<Output = V>,
{
    /// Create a controller with the given period and gains, with zeroed
    /// integral and derivative state.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is not positive.
    pub fn new(period: S, kp: S, ki: S, kd: S) -> ControlResult<Self> {
        if period <= S::zero() {
            return Err(ControlError::InvalidArg {
                what: "period must be positive",
            });
        }
        Ok(Self {
            period,
            kp,
            ki,
            kd,
            sum: V::zero(),
            last: V::zero(),
        })
    }

    /// Seed the running state (integral accumulator and previous sample).
    pub fn with_state(mut self, sum: V, last: V) -> Self {
        self.sum = sum;
        self.last = last;
        self
    }

    /// Advance one tick and return the controller output for `now`.
    pub fn step(&mut self, now: V) -> V {
        self.sum = self.sum + now;
        let out = self.kp * now + self.ki * self.sum + self.kd * (now - self.last);
        self.last = now;
        out
    }

    /// Reinitialize both state variables; gains and period are immutable.
    pub fn reset(&mut self, sum: V, last: V) {
        self.sum = sum;
        self.last = last;
    }

    /// Sampling period. Informational only; see the type-level note.
    pub fn period(&self) -> S {
        self.period
    }

    /// Proportional gain.
    pub fn kp(&self) -> S {
        self.kp
    }

    /// Integral gain.
    pub fn ki(&self) -> S {
        self.ki
    }

    /// Derivative gain.
    pub fn kd(&self) -> S {
        self.kd
    }

    /// Integral accumulator.
    pub fn sum(&self) -> V {
        self.sum
    }

    /// Previous sample.
    pub fn last(&self) -> V {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_from_zero_state() {
        let mut pid = Pid::<f64, f64>::new(1.0, 1.0, 0.1, 0.1).unwrap();
        let out = pid.step(2.0);
        // p*2 + i*(0+2) + d*(2-0)
        assert!((out - 2.4).abs() < 1e-12);
        assert_eq!(pid.sum(), 2.0);
        assert_eq!(pid.last(), 2.0);
    }

    #[test]
    fn integral_accumulates_raw_samples() {
        let mut pid = Pid::<f64, f64>::new(0.5, 0.0, 1.0, 0.0).unwrap();
        // Output is ki * sum; the period must not scale it.
        assert_eq!(pid.step(2.0), 2.0);
        assert_eq!(pid.step(2.0), 4.0);
    }

    #[test]
    fn derivative_uses_previous_sample() {
        let mut pid = Pid::<f64, f64>::new(1.0, 0.0, 0.0, 2.0).unwrap();
        assert_eq!(pid.step(1.0), 2.0);
        assert_eq!(pid.step(4.0), 6.0);
        assert_eq!(pid.step(4.0), 0.0);
    }

    #[test]
    fn with_state_seeds_running_state() {
        let mut pid = Pid::<f64, f64>::new(1.0, 0.0, 1.0, 1.0).unwrap().with_state(10.0, 5.0);
        // sum becomes 16, derivative sees now - 5.
        assert_eq!(pid.step(6.0), 16.0 + 1.0);
    }

    #[test]
    fn reset_reinitializes_state_independently() {
        let mut pid = Pid::<f64, f64>::new(1.0, 1.0, 1.0, 1.0).unwrap();
        pid.step(3.0);
        pid.reset(0.0, 0.0);
        assert_eq!(pid.sum(), 0.0);
        assert_eq!(pid.last(), 0.0);
        assert_eq!(pid.kp(), 1.0);
    }

    #[test]
    fn rejects_nonpositive_period() {
        assert!(Pid::<f64, f64>::new(0.0, 1.0, 1.0, 1.0).is_err());
    }
}
