//! Elementwise math functions for float-element vectors.
//!
//! Every function maps the matching [`num_traits::Float`] scalar function
//! over the elements. Domain errors are not intercepted: `sqrt` of a
//! negative element or `ln` of zero produce exactly what the scalar function
//! produces (NaN, infinities), in that element only.

use num_traits::Float;

use crate::vector::Vector;

macro_rules! elementwise_float_fn {
    ($($name:ident),+ $(,)?) => {$(
        #[doc = concat!("Elementwise `", stringify!($name), "`.")]
        pub fn $name(self) -> Self {
            self.map(T::$name)
        }
    )+};
}

impl<T: Float, const N: usize> Vector<T, N> {
    // Trigonometric
    elementwise_float_fn!(sin, cos, tan, asin, acos, atan);

    // Hyperbolic
    elementwise_float_fn!(sinh, cosh, tanh, asinh, acosh, atanh);

    // Exponential and logarithmic. `ln` is the natural logarithm the source
    // algebra spells `log`.
    elementwise_float_fn!(exp, exp2, ln, log2, log10);

    // Miscellaneous
    elementwise_float_fn!(abs, sqrt);

    /// Elementwise power with a shared scalar exponent.
    pub fn powf(self, exponent: T) -> Self {
        self.map(|e| e.powf(exponent))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::vector::{Vec3, vec2, vec3, vec4};

    fn close(a: Vec3<f64>, b: Vec3<f64>) -> bool {
        (a - b).abs().max() < 1e-12
    }

    #[test]
    fn trig_matches_scalar() {
        let v = vec3(0.0, FRAC_PI_2, PI);
        assert!(close(v.sin(), vec3(0.0f64.sin(), FRAC_PI_2.sin(), PI.sin())));
        assert!(close(v.cos(), vec3(0.0f64.cos(), FRAC_PI_2.cos(), PI.cos())));
    }

    #[test]
    fn exp_log_roundtrip() {
        let v = vec3(0.5, 1.0, 2.0);
        assert!(close(v.ln().exp(), v));
        assert!(close(v.log2(), vec3(0.5f64.log2(), 0.0, 1.0)));
    }

    #[test]
    fn abs_sqrt_pow() {
        assert_eq!(vec2(-2.0, 3.0).abs(), vec2(2.0, 3.0));
        assert_eq!(vec2(4.0, 9.0).sqrt(), vec2(2.0, 3.0));
        assert_eq!(vec2(2.0, 3.0).powf(2.0), vec2(4.0, 9.0));
    }

    #[test]
    fn domain_errors_propagate_per_element() {
        let v = vec4(-1.0f64, 0.0, 4.0, 9.0).sqrt();
        assert!(v.x().is_nan());
        assert_eq!(v.y(), 0.0);
        assert_eq!(v.z(), 2.0);
        assert_eq!(v.w(), 3.0);
    }
}
