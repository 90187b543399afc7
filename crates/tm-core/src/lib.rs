//! tm-core: stable foundation for tickmath.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TmError, TmResult};
pub use numeric::*;
