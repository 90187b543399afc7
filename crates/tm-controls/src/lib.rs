//! tm-controls: stateful scalar control primitives for tickmath.
//!
//! Four independent single-step state machines, each parametrized over a
//! period/scalar type `S` and a value type `V`:
//!
//! - [`Differentiator`]: backward difference per tick
//! - [`Integrator`]: persistent rectangle-rule accumulation
//! - [`Clamp`]: stateless saturation to a closed interval
//! - [`Pid`]: proportional-integral-derivative controller (raw-sample law;
//!   see its docs for how it differs from a textbook PID)
//!
//! # Design Principles
//!
//! - **One transition per call**: running state advances only in `step`,
//!   or explicitly via `reset`
//! - **Immutable configuration**: periods and gains are fixed at
//!   construction and validated there
//! - **Value-type genericity**: `V` may be any type with the required
//!   arithmetic — in particular a `tm_vec` vector, driven by a scalar
//!   period and gains

pub mod clamp;
pub mod differentiator;
pub mod error;
pub mod integrator;
pub mod pid;

pub use clamp::Clamp;
pub use differentiator::Differentiator;
pub use error::{ControlError, ControlResult};
pub use integrator::Integrator;
pub use pid::Pid;

use tm_core::Real;

/// Differentiator over [`Real`] samples.
pub type Differentiator64 = Differentiator<Real, Real>;
/// Integrator over [`Real`] samples.
pub type Integrator64 = Integrator<Real, Real>;
/// Clamp over [`Real`] values.
pub type Clamp64 = Clamp<Real>;
/// PID controller over [`Real`] samples.
pub type Pid64 = Pid<Real, Real>;
