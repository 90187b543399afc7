//! tm-vec: fixed-size vector algebra for tickmath.
//!
//! Provides [`Vector<T, N>`], a value-semantics vector whose dimension is
//! part of its type, together with:
//! - named-field accessors (`x`/`y`/`z`/`w`) for dimensions 1 through 4,
//!   aliasing the same backing storage as indexed access
//! - the full elementwise operator set between equal-dimension vectors
//!   (`+ - * / % & | ^`), with mixed element types where the element
//!   operation allows it
//! - scalar broadcast operators (`*` on either side; `/`, `<<`, `>>` with
//!   the vector on the left only)
//! - compound assignment in vector-vector and vector-scalar forms
//! - reductions (`sum`, `min`, `max`, `dot`, `distance`, `cross_2d`) plus
//!   generic `map` and `fold`
//! - elementwise math functions over [`num_traits::Float`] elements
//!
//! # Design Principles
//!
//! - **Value semantics**: no vector aliases another; copies are independent
//! - **Dimension safety**: mismatched dimensions are a compile error
//! - **Two views, one storage**: named accessors index into the same array
//!   that `v[i]` reads, with no layout tricks

mod math;
mod ops;
mod reduce;
mod vector;

pub use vector::{Vec1, Vec2, Vec3, Vec4, Vector, vec1, vec2, vec3, vec4};
