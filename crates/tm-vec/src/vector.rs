//! The fixed-size vector type, its constructors, and its storage views.

use std::ops::{Index, IndexMut};

use num_traits::Zero;
use tm_core::{TmError, TmResult};

/// Fixed-size vector of `N` elements of type `T`.
///
/// The dimension is a compile-time property: operations between vectors of
/// different lengths do not compile, and there is no resize. Storage is a
/// plain `[T; N]`; the named accessors provided for dimensions 1 through 4
/// (`x()`, `y_mut()`, ...) index into that same array, so a write through
/// either view is observable through the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

/// 1-dimensional vector (field `x`).
pub type Vec1<T> = Vector<T, 1>;
/// 2-dimensional vector (fields `x`, `y`).
pub type Vec2<T> = Vector<T, 2>;
/// 3-dimensional vector (fields `x`, `y`, `z`).
pub type Vec3<T> = Vector<T, 3>;
/// 4-dimensional vector (fields `x`, `y`, `z`, `w`).
pub type Vec4<T> = Vector<T, 4>;

impl<T, const N: usize> Vector<T, N> {
    /// Wrap an array as a vector. The array *is* the vector's storage.
    pub const fn from_array(elems: [T; N]) -> Self {
        Self(elems)
    }

    /// Unwrap into the backing array.
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Borrow the backing array.
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Number of elements (the compile-time dimension `N`).
    pub const fn len(&self) -> usize {
        N
    }

    /// Companion to [`len`](Self::len); true only for the degenerate `N = 0`
    /// instantiation, which none of the dimension aliases produce.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Vector with every element set to `value`.
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// Elementwise lossless conversion to another element type.
    pub fn convert<U: From<T>>(self) -> Vector<U, N> {
        self.map(U::from)
    }

    /// Apply `f` to every element, producing a vector of `f`'s return type.
    /// The dimension never changes; the element type may.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Left-to-right reduction seeded from element 0.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    pub fn fold(self, f: impl FnMut(T, T) -> T) -> T {
        match self.0.into_iter().reduce(f) {
            Some(acc) => acc,
            None => panic!("fold on zero-length vector"),
        }
    }

    /// Combine two equal-length vectors elementwise.
    pub(crate) fn zip_with<U, R>(
        self,
        rhs: Vector<U, N>,
        mut f: impl FnMut(T, U) -> R,
    ) -> Vector<R, N> {
        let mut rhs = rhs.0.into_iter();
        // Both iterators yield exactly N items.
        self.map(|l| match rhs.next() {
            Some(r) => f(l, r),
            None => unreachable!(),
        })
    }

    /// Bounds-checked element access.
    pub fn try_get(&self, index: usize) -> TmResult<&T> {
        self.0.get(index).ok_or(TmError::IndexOob {
            what: "vector element",
            index,
            len: N,
        })
    }

    /// Bounds-checked mutable element access.
    pub fn try_get_mut(&mut self, index: usize) -> TmResult<&mut T> {
        self.0.get_mut(index).ok_or(TmError::IndexOob {
            what: "vector element",
            index,
            len: N,
        })
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// True iff at least one element is nonzero.
    pub fn any(&self) -> bool
    where
        T: Zero,
    {
        self.0.iter().any(|e| !e.is_zero())
    }

    /// True iff every element is zero. This is the boolean reduction the
    /// source algebra spells `!v`.
    pub fn none(&self) -> bool
    where
        T: Zero,
    {
        !self.any()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T: Zero + Copy, const N: usize> Zero for Vector<T, N> {
    fn zero() -> Self {
        Self::splat(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.none()
    }
}

/// Unchecked indexed access into the backing storage.
///
/// Out-of-range indices panic; in-range access is a caller precondition, not
/// a recoverable error. Use [`Vector::try_get`] for the checked variant.
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

macro_rules! lane_accessors {
    ($($get:ident / $get_mut:ident => $idx:literal),+ $(,)?) => {
        $(
            #[doc = concat!("Element ", stringify!($idx), " of the backing array, by value.")]
            pub fn $get(&self) -> T
            where
                T: Copy,
            {
                self.0[$idx]
            }

            #[doc = concat!("Mutable reference into element ", stringify!($idx), " of the backing array.")]
            pub fn $get_mut(&mut self) -> &mut T {
                &mut self.0[$idx]
            }
        )+
    };
}

impl<T> Vector<T, 1> {
    pub const fn new(x: T) -> Self {
        Self([x])
    }

    lane_accessors!(x / x_mut => 0);
}

impl<T> Vector<T, 2> {
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    lane_accessors!(x / x_mut => 0, y / y_mut => 1);
}

impl<T> Vector<T, 3> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }

    lane_accessors!(x / x_mut => 0, y / y_mut => 1, z / z_mut => 2);
}

impl<T> Vector<T, 4> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    lane_accessors!(x / x_mut => 0, y / y_mut => 1, z / z_mut => 2, w / w_mut => 3);
}

/// Shorthand for [`Vec1::new`].
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Shorthand for [`Vec2::new`].
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Shorthand for [`Vec3::new`].
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Shorthand for [`Vec4::new`].
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

// Serde has no array impls for a generic `N`, so the vector serializes by
// hand as a fixed-length sequence.
#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
    use serde::ser::{Serialize, SerializeTuple, Serializer};

    use super::Vector;

    impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tup = serializer.serialize_tuple(N)?;
            for elem in self.0.iter() {
                tup.serialize_element(elem)?;
            }
            tup.end()
        }
    }

    struct VectorVisitor<T, const N: usize>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for VectorVisitor<T, N> {
        type Value = Vector<T, N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a sequence of {N} elements")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut elems = Vec::with_capacity(N);
            while let Some(elem) = seq.next_element()? {
                if elems.len() == N {
                    return Err(de::Error::invalid_length(N + 1, &self));
                }
                elems.push(elem);
            }
            match <[T; N]>::try_from(elems) {
                Ok(arr) => Ok(Vector(arr)),
                Err(partial) => Err(de::Error::invalid_length(partial.len(), &self)),
            }
        }
    }

    impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, VectorVisitor(PhantomData))
        }
    }
}
