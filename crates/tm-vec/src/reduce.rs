//! Reductions over the elements of a vector.

use std::ops::{Add, Mul, Sub};

use num_traits::Float;

use crate::vector::Vector;

impl<T, const N: usize> Vector<T, N> {
    /// Fold by addition.
    pub fn sum(self) -> T
    where
        T: Add<Output = T>,
    {
        self.fold(T::add)
    }

    /// Fold by pairwise maximum. For float elements a NaN operand propagates
    /// whatever the `>` comparison yields, exactly as the scalar fold would.
    pub fn max(self) -> T
    where
        T: PartialOrd,
    {
        self.fold(|a, b| if b > a { b } else { a })
    }

    /// Fold by pairwise minimum.
    pub fn min(self) -> T
    where
        T: PartialOrd,
    {
        self.fold(|a, b| if b < a { b } else { a })
    }

    /// Inner product: `sum(self * rhs)`. Mixed element types promote per the
    /// element multiplication.
    pub fn dot<U>(self, rhs: Vector<U, N>) -> <T as Mul<U>>::Output
    where
        T: Mul<U>,
        <T as Mul<U>>::Output: Add<Output = <T as Mul<U>>::Output>,
    {
        (self * rhs).sum()
    }

    /// Squared Euclidean length, `dot(v, v)`.
    pub fn distance2(self) -> T
    where
        T: Copy + Mul<Output = T> + Add<Output = T>,
    {
        self.dot(self)
    }

    /// Euclidean length, `sqrt(dot(v, v))`.
    pub fn distance(self) -> T
    where
        T: Float,
    {
        self.distance2().sqrt()
    }

    /// Scale to unit length. Zero-length input divides by zero and yields
    /// non-finite elements, exactly as the scalar division would.
    pub fn normalize(self) -> Self
    where
        T: Float,
    {
        let len = self.distance();
        self.map(|e| e / len)
    }
}

impl<T> Vector<T, 2> {
    /// Signed magnitude of the 2D cross product, `x1*y2 - y1*x2`.
    pub fn cross_2d<U>(self, rhs: Vector<U, 2>) -> <<T as Mul<U>>::Output as Sub>::Output
    where
        T: Mul<U>,
        <T as Mul<U>>::Output: Sub,
    {
        let [lx, ly] = self.into_array();
        let [rx, ry] = rhs.into_array();
        lx * ry - ly * rx
    }
}

#[cfg(test)]
mod tests {
    use crate::vector::{vec2, vec3, vec4};

    #[test]
    fn sum_min_max() {
        let v = vec4(3.0, -1.0, 7.0, 2.0);
        assert_eq!(v.sum(), 11.0);
        assert_eq!(v.max(), 7.0);
        assert_eq!(v.min(), -1.0);
    }

    #[test]
    fn dot_and_distances() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, -5.0, 6.0);
        assert_eq!(a.dot(b), 4.0 - 10.0 + 18.0);
        assert_eq!(a.distance2(), 14.0);
        assert_eq!(a.distance(), 14.0f64.sqrt());
    }

    #[test]
    fn cross_2d_signed_area() {
        let a = vec2(1.0, 0.0);
        let b = vec2(0.0, 1.0);
        assert_eq!(a.cross_2d(b), 1.0);
        assert_eq!(b.cross_2d(a), -1.0);
    }

    #[test]
    fn normalize_unit_length() {
        let v = vec2(3.0f64, 4.0).normalize();
        assert!((v.distance() - 1.0).abs() < 1e-12);
        assert_eq!(v, vec2(0.6, 0.8));
    }

    #[test]
    fn integer_reductions() {
        let v = vec3(1u32, 2, 3);
        assert_eq!(v.sum(), 6);
        assert_eq!(v.dot(vec3(1u32, 10, 100)), 321);
    }
}
