//! Operator algebra: unary, elementwise, scalar broadcast, and compound
//! assignment.
//!
//! Elementwise operators are fully generic over both element types, so mixed
//! operands promote to whatever the per-element operation produces. Scalar
//! broadcast cannot be generic in the scalar type without colliding with the
//! elementwise impls, so those operators are instantiated per primitive
//! numeric type. Broadcast `*` is symmetric; `/`, `<<` and `>>` accept the
//! vector on the left only, since the flipped forms have no unambiguous
//! meaning.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::vector::Vector;

impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(|e| -e)
    }
}

/// Elementwise complement (the `~v` of C-family notation). The boolean
/// "no element is truthy" reduction is [`Vector::none`], not this operator.
impl<T: Not, const N: usize> Not for Vector<T, N> {
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(|e| !e)
    }
}

macro_rules! vector_binop {
    ($($tr:ident :: $m:ident),+ $(,)?) => {$(
        impl<T, U, const N: usize> $tr<Vector<U, N>> for Vector<T, N>
        where
            T: $tr<U>,
        {
            type Output = Vector<<T as $tr<U>>::Output, N>;

            fn $m(self, rhs: Vector<U, N>) -> Self::Output {
                self.zip_with(rhs, <T as $tr<U>>::$m)
            }
        }
    )+};
}

vector_binop!(
    Add::add,
    Sub::sub,
    Mul::mul,
    Div::div,
    Rem::rem,
    BitAnd::bitand,
    BitOr::bitor,
    BitXor::bitxor,
);

macro_rules! vector_binop_assign {
    ($($tr:ident :: $m:ident),+ $(,)?) => {$(
        impl<T, U, const N: usize> $tr<Vector<U, N>> for Vector<T, N>
        where
            T: $tr<U>,
        {
            fn $m(&mut self, rhs: Vector<U, N>) {
                for (l, r) in self.0.iter_mut().zip(rhs.0) {
                    l.$m(r);
                }
            }
        }
    )+};
}

vector_binop_assign!(
    AddAssign::add_assign,
    SubAssign::sub_assign,
    MulAssign::mul_assign,
    DivAssign::div_assign,
    RemAssign::rem_assign,
    BitAndAssign::bitand_assign,
    BitOrAssign::bitor_assign,
    BitXorAssign::bitxor_assign,
);

/// Broadcast operators shared by every primitive numeric scalar type.
macro_rules! scalar_arith {
    ($($s:ty),+ $(,)?) => {$(
        impl<T: Mul<$s>, const N: usize> Mul<$s> for Vector<T, N> {
            type Output = Vector<<T as Mul<$s>>::Output, N>;

            fn mul(self, rhs: $s) -> Self::Output {
                self.map(|e| e * rhs)
            }
        }

        impl<T, const N: usize> Mul<Vector<T, N>> for $s
        where
            $s: Mul<T>,
        {
            type Output = Vector<<$s as Mul<T>>::Output, N>;

            fn mul(self, rhs: Vector<T, N>) -> Self::Output {
                rhs.map(|e| self * e)
            }
        }

        impl<T: Div<$s>, const N: usize> Div<$s> for Vector<T, N> {
            type Output = Vector<<T as Div<$s>>::Output, N>;

            fn div(self, rhs: $s) -> Self::Output {
                self.map(|e| e / rhs)
            }
        }

        impl<T: AddAssign<$s>, const N: usize> AddAssign<$s> for Vector<T, N> {
            fn add_assign(&mut self, rhs: $s) {
                for l in self.0.iter_mut() {
                    l.add_assign(rhs);
                }
            }
        }

        impl<T: SubAssign<$s>, const N: usize> SubAssign<$s> for Vector<T, N> {
            fn sub_assign(&mut self, rhs: $s) {
                for l in self.0.iter_mut() {
                    l.sub_assign(rhs);
                }
            }
        }

        impl<T: MulAssign<$s>, const N: usize> MulAssign<$s> for Vector<T, N> {
            fn mul_assign(&mut self, rhs: $s) {
                for l in self.0.iter_mut() {
                    l.mul_assign(rhs);
                }
            }
        }

        impl<T: DivAssign<$s>, const N: usize> DivAssign<$s> for Vector<T, N> {
            fn div_assign(&mut self, rhs: $s) {
                for l in self.0.iter_mut() {
                    l.div_assign(rhs);
                }
            }
        }

        impl<T: RemAssign<$s>, const N: usize> RemAssign<$s> for Vector<T, N> {
            fn rem_assign(&mut self, rhs: $s) {
                for l in self.0.iter_mut() {
                    l.rem_assign(rhs);
                }
            }
        }
    )+};
}

/// Broadcast operators that only make sense for integral scalars.
macro_rules! scalar_bitwise {
    ($($s:ty),+ $(,)?) => {$(
        impl<T: Shl<$s>, const N: usize> Shl<$s> for Vector<T, N> {
            type Output = Vector<<T as Shl<$s>>::Output, N>;

            fn shl(self, rhs: $s) -> Self::Output {
                self.map(|e| e << rhs)
            }
        }

        impl<T: Shr<$s>, const N: usize> Shr<$s> for Vector<T, N> {
            type Output = Vector<<T as Shr<$s>>::Output, N>;

            fn shr(self, rhs: $s) -> Self::Output {
                self.map(|e| e >> rhs)
            }
        }

        impl<T: ShlAssign<$s>, const N: usize> ShlAssign<$s> for Vector<T, N> {
            fn shl_assign(&mut self, rhs: $s) {
                for l in self.0.iter_mut() {
                    l.shl_assign(rhs);
                }
            }
        }

        impl<T: ShrAssign<$s>, const N: usize> ShrAssign<$s> for Vector<T, N> {
            fn shr_assign(&mut self, rhs: $s) {
                for l in self.0.iter_mut() {
                    l.shr_assign(rhs);
                }
            }
        }

        impl<T: BitAndAssign<$s>, const N: usize> BitAndAssign<$s> for Vector<T, N> {
            fn bitand_assign(&mut self, rhs: $s) {
                for l in self.0.iter_mut() {
                    l.bitand_assign(rhs);
                }
            }
        }

        impl<T: BitOrAssign<$s>, const N: usize> BitOrAssign<$s> for Vector<T, N> {
            fn bitor_assign(&mut self, rhs: $s) {
                for l in self.0.iter_mut() {
                    l.bitor_assign(rhs);
                }
            }
        }

        impl<T: BitXorAssign<$s>, const N: usize> BitXorAssign<$s> for Vector<T, N> {
            fn bitxor_assign(&mut self, rhs: $s) {
                for l in self.0.iter_mut() {
                    l.bitxor_assign(rhs);
                }
            }
        }
    )+};
}

scalar_arith!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
scalar_bitwise!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use crate::vector::{vec2, vec3, vec4};

    #[test]
    fn elementwise_arithmetic() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
        assert_eq!(b - a, vec3(3.0, 3.0, 3.0));
        assert_eq!(a * b, vec3(4.0, 10.0, 18.0));
        assert_eq!(b / a, vec3(4.0, 2.5, 2.0));
    }

    #[test]
    fn elementwise_mixed_element_types() {
        use std::time::Duration;

        // The result element type is whatever the per-element operation
        // produces: Duration * u32 yields Duration.
        let a = vec2(Duration::from_secs(1), Duration::from_secs(2));
        let b = vec2(3u32, 4u32);
        assert_eq!(
            a * b,
            vec2(Duration::from_secs(3), Duration::from_secs(8))
        );
    }

    #[test]
    fn elementwise_bitwise_and_rem() {
        let a = vec3(0b1100u8, 0b1010, 0b0110);
        let b = vec3(0b1010u8, 0b0110, 0b0011);
        assert_eq!(a & b, vec3(0b1000, 0b0010, 0b0010));
        assert_eq!(a | b, vec3(0b1110, 0b1110, 0b0111));
        assert_eq!(a ^ b, vec3(0b0110, 0b1100, 0b0101));
        assert_eq!(vec2(7, 9) % vec2(4, 5), vec2(3, 4));
    }

    #[test]
    fn unary_operators() {
        assert_eq!(-vec2(1.5, -2.0), vec2(-1.5, 2.0));
        assert_eq!(!vec2(0b0101u8, 0b1111), vec2(0b1111_1010, 0b1111_0000));
    }

    #[test]
    fn scalar_mul_is_symmetric() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v * 2.0, vec4(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * v, vec4(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn scalar_div_and_shifts_are_left_only() {
        assert_eq!(vec2(4.0, 8.0) / 2.0, vec2(2.0, 4.0));
        assert_eq!(vec2(1u32, 2) << 2u32, vec2(4, 8));
        assert_eq!(vec2(8u32, 4) >> 1u32, vec2(4, 2));
    }

    #[test]
    fn compound_assignment_vector_and_scalar() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v += vec3(1.0, 1.0, 1.0);
        assert_eq!(v, vec3(2.0, 3.0, 4.0));
        v *= 2.0;
        assert_eq!(v, vec3(4.0, 6.0, 8.0));
        v -= 1.0;
        assert_eq!(v, vec3(3.0, 5.0, 7.0));
        v /= vec3(3.0, 5.0, 7.0);
        assert_eq!(v, vec3(1.0, 1.0, 1.0));

        let mut w = vec2(0b0110u8, 0b1010);
        w <<= 1u8;
        assert_eq!(w, vec2(0b1100, 0b0001_0100));
        w >>= 2u8;
        assert_eq!(w, vec2(0b0011, 0b0000_0101));
        w &= 0b0001u8;
        assert_eq!(w, vec2(0b0001, 0b0001));
    }
}
