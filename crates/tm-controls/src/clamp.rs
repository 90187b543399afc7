//! Saturation to a closed interval.

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Stateless clamp to `[min, max]`.
///
/// A pure function of its input given fixed bounds; unlike the other control
/// primitives it carries no running state, so `apply` takes `&self`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clamp<V> {
    min: V,
    max: V,
}

impl<V> Clamp<V>
where
    V: Copy + PartialOrd,
{
    /// Create a clamp with the given bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `min > max` (or the bounds are unordered, as with
    /// a NaN bound).
    pub fn new(min: V, max: V) -> ControlResult<Self> {
        if !(min <= max) {
            return Err(ControlError::InvalidArg {
                what: "clamp bounds must satisfy min <= max",
            });
        }
        Ok(Self { min, max })
    }

    /// Saturate `x` to the bounds: `max` if above, `min` if below, else `x`.
    pub fn apply(&self, x: V) -> V {
        if x > self.max {
            return self.max;
        }
        if x < self.min {
            return self.min;
        }
        x
    }

    /// Lower bound.
    pub fn min(&self) -> V {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> V {
        self.max
    }
}
