use crate::error::{Result, VectorError};
use arrayvec::ArrayVec;
use num_traits::{AsPrimitive, Zero};
use std::{
    array, fmt,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign,
        Sub, SubAssign,
    },
    slice,
};

/// Fixed-length numeric vector. `N` is part of the type, so binary operations between
/// vectors of different lengths are rejected at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    pub const SIZE: usize = N;

    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrows the underlying array without copying it.
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    pub fn into_array(self) -> [T; N] {
        self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns a reference to element `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`. Calling this with an out-of-range index is
    /// undefined behavior even if the returned reference is never read.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.data.get_unchecked(index)
    }

    /// Mutable counterpart of [`Vector::get_unchecked`].
    ///
    /// # Safety
    /// `index` must be less than `N`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.data.get_unchecked_mut(index)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector {
            data: self.data.map(f),
        }
    }

    /// Collects exactly `N` items into a vector. Shorter or longer input is rejected.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let buf: ArrayVec<T, N> = iter.by_ref().take(N).collect();
        // the rest of the input may be unbounded, so stop at the first surplus item
        if iter.next().is_some() {
            return Err(VectorError::TooLong { expected: N });
        }
        buf.into_inner()
            .map(Self::new)
            .map_err(|buf| VectorError::LengthMismatch {
                expected: N,
                found: buf.len(),
            })
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Copy,
{
    pub fn splat(x: T) -> Self {
        Self { data: [x; N] }
    }

    /// Bounds-checked read.
    pub fn at(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or(VectorError::OutOfRange { index, len: N })
    }

    /// Elementwise `as` conversion, e.g. `f64 -> i32` truncates toward zero.
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|x| x.as_())
    }

    /// Returns the elements in the opposite order: `[x, y, z]` => `[z, y, x]`.
    pub fn reverse(&self) -> Self {
        Self {
            data: array::from_fn(|i| self.data[N - 1 - i]),
        }
    }

    fn zip_with(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self {
            data: array::from_fn(|i| f(self.data[i], other.data[i])),
        }
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Copy + Zero,
{
    pub fn zeroed() -> Self {
        Self {
            data: [T::zero(); N],
        }
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Copy + Zero + Mul<Output = T>,
{
    pub fn dot(&self, other: &Self) -> T {
        self.iter()
            .zip(other)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }
}

// The norms are computed in T and only then widened, so integer vectors overflow the
// same way their dot product does.
impl<T, const N: usize> Vector<T, N>
where
    T: Copy + Zero + Mul<Output = T> + AsPrimitive<f64>,
{
    pub fn squared_norm(&self) -> f64 {
        self.dot(self).as_()
    }

    /// Euclidean norm. `Vector::norm(&v)` is the same call written as an associated function.
    pub fn norm(&self) -> f64 {
        self.squared_norm().sqrt()
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Copy + Zero + Sub<Output = T> + Mul<Output = T> + AsPrimitive<f64>,
{
    pub fn squared_dist(&self, other: &Self) -> f64 {
        (*self - *other).squared_norm()
    }

    pub fn dist(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Copy + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    /// Mathematical modulo per element: the result takes the sign of the modulus, so
    /// `[-17, 2].modulo(&[5, 2]) == [3, 0]`. Computed in `f64` and cast back to `T`.
    pub fn modulo(&self, modulus: &Self) -> Self {
        self.zip_with(*modulus, floored_mod)
    }

    pub fn modulo_scalar(&self, modulus: T) -> Self {
        self.map(|x| floored_mod(x, modulus))
    }
}

fn floored_mod<T>(a: T, m: T) -> T
where
    T: Copy + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    let (a, m): (f64, f64) = (a.as_(), m.as_());
    let r: T = ((a % m + m) % m).as_();
    // a residue just short of `m` can round up to `m` when narrowed to T (e.g. f32)
    let narrowed: f64 = r.as_();
    if narrowed == m {
        0f64.as_()
    } else {
        r
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + AsPrimitive<f64>,
{
    /// `self - other` under periodic boundaries of extent `domain` along each axis.
    ///
    /// Components beyond half the extent are shifted by one period. Only a single
    /// wrap is corrected, so `|self[i] - other[i]|` must be below `domain[i]`. A
    /// component equal to exactly half the extent is left as is.
    pub fn periodic_diff(&self, other: &Self, domain: &Self) -> Self {
        let mut diff = *self - *other;
        for (d, &extent) in diff.iter_mut().zip(domain) {
            let extent_f: f64 = extent.as_();
            let half = extent_f / 2.;
            let x: f64 = (*d).as_();
            if x > half {
                *d = *d - extent;
            } else if x < -half {
                *d = *d + extent;
            }
        }
        diff
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Copy + Zero,
{
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;

    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self { data: value }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T, const N: usize> TryFrom<&[T]> for Vector<T, N>
where
    T: Copy,
{
    type Error = VectorError;

    fn try_from(value: &[T]) -> Result<Self> {
        if value.len() != N {
            return Err(VectorError::LengthMismatch {
                expected: N,
                found: value.len(),
            });
        }
        Self::try_from_iter(value.iter().copied())
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

/// Renders as `[1, 2, 3]`. Formatting flags such as precision apply to every element.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        f.write_str("]")
    }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

/// Vector-vector operator and its in-place form, both elementwise.
macro_rules! elementwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T, const N: usize> $Op for Vector<T, N>
        where
            T: Copy + $Op<Output = T>,
        {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self::Output {
                self.zip_with(rhs, $Op::$op)
            }
        }

        impl<T, const N: usize> $OpAssign for Vector<T, N>
        where
            T: $OpAssign,
        {
            fn $op_assign(&mut self, rhs: Self) {
                self.data
                    .iter_mut()
                    .zip(rhs)
                    .for_each(|(x, y)| $OpAssign::$op_assign(x, y));
            }
        }
    };
}

/// Vector-scalar operator and its in-place form: the scalar is applied to every element.
macro_rules! scalar_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T, const N: usize> $Op<T> for Vector<T, N>
        where
            T: Copy + $Op<Output = T>,
        {
            type Output = Self;

            fn $op(self, rhs: T) -> Self::Output {
                self.map(|x| $Op::$op(x, rhs))
            }
        }

        impl<T, const N: usize> $OpAssign<T> for Vector<T, N>
        where
            T: Copy + $OpAssign,
        {
            fn $op_assign(&mut self, rhs: T) {
                self.data
                    .iter_mut()
                    .for_each(|x| $OpAssign::$op_assign(x, rhs));
            }
        }
    };
}

elementwise_op!(Add, add, AddAssign, add_assign);
elementwise_op!(Sub, sub, SubAssign, sub_assign);
elementwise_op!(Mul, mul, MulAssign, mul_assign);
elementwise_op!(Div, div, DivAssign, div_assign);
elementwise_op!(Rem, rem, RemAssign, rem_assign);
scalar_op!(Mul, mul, MulAssign, mul_assign);
scalar_op!(Div, div, DivAssign, div_assign);
scalar_op!(Rem, rem, RemAssign, rem_assign);

// Coherence rules out a blanket `impl<T> Mul<Vector<T, N>> for T`, so scalar-on-the-left
// forms are spelled out per primitive.
macro_rules! scalar_lhs_ops {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                rhs.map(|x| self * x)
            }
        }

        impl<const N: usize> Div<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            fn div(self, rhs: Vector<$t, N>) -> Self::Output {
                rhs.map(|x| self / x)
            }
        }
    )*};
}

scalar_lhs_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::Vector;
    use crate::error::VectorError;

    #[test]
    fn test_construction() {
        let zeroed: Vector<f64, 3> = Vector::default();
        assert_eq!(zeroed, [0., 0., 0.].into());
        assert_eq!(Vector::<i32, 4>::zeroed(), Vector::splat(0));

        let v: Vector<i32, 3> = [1, 2, 3].into();
        assert_eq!((v[0], v[1], v[2]), (1, 2, 3));
        assert_eq!(Vector::<i32, 3>::SIZE, 3);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());

        let mut copy = v;
        copy[0] = 10;
        assert_eq!(v[0], 1);
        assert_eq!(copy[0], 10);
    }

    #[test]
    fn test_cast() {
        let vi: Vector<i32, 3> = [1, 2, 3].into();
        assert_eq!(vi.cast::<f64>(), [1., 2., 3.].into());

        let vf: Vector<f64, 4> = [1.1, 2.0, 3.9, -1.9].into();
        assert_eq!(vf.cast::<i32>(), [1, 2, 3, -1].into());
    }

    #[test]
    fn test_equality_and_access() {
        let vf1: Vector<f64, 3> = [1., 2., 4.].into();
        let mut vf2: Vector<f64, 3> = [1., 2., 3.].into();
        let vf3 = vf2;
        assert_eq!(vf3, vf2);
        assert_ne!(vf1, vf2);

        vf2[2] = 4.;
        assert_eq!(vf1, vf2);

        assert_eq!(vf1.at(0), Ok(1.));
        assert_eq!(vf1.at(2), Ok(4.));
        assert_eq!(vf1.at(3), Err(VectorError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(unsafe { *vf1.get_unchecked(1) }, 2.);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let v: Vector<i32, 2> = [1, 2].into();
        let _x = v[2];
    }

    #[test]
    fn test_addition_subtraction() {
        let mut vf1: Vector<f64, 3> = [1., 2., 4.].into();
        let vf2: Vector<f64, 3> = [1., 2., 3.].into();
        let sum = vf1 + vf2;
        assert_eq!(sum, [2., 4., 7.].into());
        assert_eq!(sum - vf2, vf1);
        assert_eq!(sum - vf1, vf2);

        let vi1: Vector<i32, 3> = [1, 2, 4].into();
        assert_eq!(vi1 + -vi1, Vector::zeroed());

        vf1 += vf2;
        assert_eq!(vf1, sum);
        vf1 -= vf2;
        assert_eq!(vf1, [1., 2., 4.].into());
    }

    #[test]
    fn test_multiplication() {
        let mut vf1: Vector<f64, 3> = [1., 2., 4.].into();
        let vf2: Vector<f64, 3> = [1., 2., 3.].into();
        assert_eq!(vf1 * vf2, [1., 4., 12.].into());
        assert_eq!(vf1 * 2., 2. * vf1);
        assert_eq!(vf1 * 2., [2., 4., 8.].into());

        let mut vi1: Vector<i32, 3> = [1, 2, 4].into();
        assert_eq!(vi1 * 2, 2 * vi1);

        vf1 *= 2.;
        assert_eq!(vf1, [2., 4., 8.].into());
        vi1 *= 3;
        assert_eq!(vi1, [3, 6, 12].into());
        vf1 *= Vector::from([3., 1., 2.]);
        assert_eq!(vf1, [6., 4., 16.].into());
        vi1 *= Vector::from([2, 3, 4]);
        assert_eq!(vi1, [6, 18, 48].into());
    }

    #[test]
    fn test_division() {
        let vi1: Vector<i32, 3> = [1, 2, 4].into();
        let mut vi2: Vector<i32, 3> = [2, 4, 8].into();
        assert_eq!(vi2 / vi1, Vector::splat(2));
        assert_eq!(vi2 / 2, vi1);
        assert_eq!(8 / Vector::<i32, 4>::from([2, 4, 8, 9]), [4, 2, 1, 0].into());

        let mut vi3: Vector<i32, 5> = [2, 4, 8, 9, 10].into();
        vi2 /= 2;
        vi3 /= 3;
        assert_eq!(vi2, vi1);
        assert_eq!(vi3, [0, 1, 2, 3, 3].into());
        let mut vi4: Vector<i32, 5> = [2, 4, 8, 9, 10].into();
        vi4 /= Vector::from([1, 2, 3, 4, 5]);
        assert_eq!(vi4, Vector::splat(2));

        let vf1: Vector<f64, 4> = [2., 4., 8., 9.].into();
        assert_eq!(8. / vf1, [8. / 2., 8. / 4., 8. / 8., 8. / 9.].into());
        let mut vf2 = vf1;
        vf2 /= 3.;
        assert_eq!(vf2, [2. / 3., 4. / 3., 8. / 3., 9. / 3.].into());
        vf2 /= Vector::from([1., 0., 1., 1.]);
        assert!(vf2[1].is_infinite());
    }

    #[test]
    fn test_native_remainder() {
        let v: Vector<i32, 4> = [-17, 2, 3, -3].into();
        assert_eq!(v % 2, [-1, 0, 1, -1].into());
        assert_eq!(v % Vector::from([5, 2, 2, 2]), [-2, 0, 1, -1].into());

        let mut w = v;
        w %= 5;
        assert_eq!(w, [-2, 2, 3, -3].into());
    }

    #[test]
    fn test_dot() {
        let vf1: Vector<f64, 3> = [1., 2., 4.].into();
        let vf2: Vector<f64, 3> = [3., 4., 5.].into();
        assert_eq!(vf1.dot(&vf2), 31.);

        let vi1: Vector<i32, 3> = [1, 2, 4].into();
        let vi2: Vector<i32, 3> = [-2, 4, 8].into();
        assert_eq!(vi1.dot(&vi2), 38);
    }

    #[test]
    fn test_modulo() {
        let vf1: Vector<f64, 5> = [-17., 2., 3., -3., 5.].into();
        let vf2: Vector<f64, 5> = [5., 2., 2., 2., 3.].into();
        assert_eq!(vf1.modulo(&vf2), [3., 0., 1., 1., 2.].into());
        assert_eq!(vf1.modulo_scalar(2.), [1., 0., 1., 1., 1.].into());

        let vi1: Vector<i32, 5> = [-17, 2, 3, -3, 5].into();
        let vi2: Vector<i32, 5> = [5, 2, 2, 2, 3].into();
        assert_eq!(vi1.modulo(&vi2), [3, 0, 1, 1, 2].into());
        assert_eq!(vi1.modulo_scalar(2), [1, 0, 1, 1, 1].into());

        let vs1: Vector<f32, 3> = [-17., 3., -3.].into();
        assert_eq!(vs1.modulo_scalar(5.), [3., 3., 2.].into());
    }

    #[test]
    fn test_f32_modulo_of_tiny_negative_stays_below_modulus() {
        let v: Vector<f32, 2> = [-1e-7, -3e-8].into();
        let r = v.modulo_scalar(10.);
        assert!(r.iter().all(|&x| (0.0..10.0).contains(&x)), "{r}");
        assert_eq!(r, Vector::zeroed());

        let r = v.modulo(&[10., 10.].into());
        assert_eq!(r, Vector::zeroed());
    }

    #[test]
    fn test_norm_and_dist() {
        let vf1: Vector<f64, 5> = [1., 2., 3., 4., 5.].into();
        let vi1: Vector<i32, 5> = [1, 2, 3, 4, 5].into();
        let squared = 1. + 4. + 9. + 16. + 25.;
        let norm = f64::sqrt(squared);

        assert_eq!(vf1.norm(), norm);
        assert_eq!(vi1.norm(), norm);
        assert_eq!(Vector::norm(&vf1), vf1.norm());
        assert_eq!(vf1.squared_norm(), squared);
        assert_eq!(Vector::squared_norm(&vi1), squared);
        assert_eq!(Vector::<f64, 5>::zeroed().norm(), 0.);

        let vf2 = -vf1;
        let vf3 = -2. * vf1;
        let vi2 = -vi1;
        let vi3 = -2 * vi1;
        assert_eq!(vf2.dist(&vf3), norm);
        assert_eq!(vf2.squared_dist(&vf3), squared);
        assert_eq!(vi2.dist(&vi3), norm);
        assert_eq!(Vector::squared_dist(&vi2, &vi3), squared);
        assert_eq!(Vector::dist(&vf2, &vf3), vf2.dist(&vf3));
    }

    #[test]
    fn test_periodic_diff() {
        let domain: Vector<f64, 2> = [10., 10.].into();
        let a: Vector<f64, 2> = [1., 1.].into();
        let b: Vector<f64, 2> = [9., 9.].into();
        assert_eq!(a.periodic_diff(&b, &domain), [2., 2.].into());

        let c: Vector<f64, 2> = [1., 4.].into();
        let d: Vector<f64, 2> = [9., 5.].into();
        assert_eq!(c.periodic_diff(&d, &domain), [2., -1.].into());
        assert_eq!(d.periodic_diff(&c, &domain), [-2., 1.].into());

        let domain: Vector<i32, 2> = [10, 10].into();
        let c: Vector<i32, 2> = [1, 4].into();
        let d: Vector<i32, 2> = [9, 5].into();
        assert_eq!(c.periodic_diff(&d, &domain), [2, -1].into());
        assert_eq!(d.periodic_diff(&c, &domain), [-2, 1].into());
    }

    #[test]
    fn test_periodic_diff_half_domain_is_not_wrapped() {
        let domain: Vector<f64, 2> = [10., 5.].into();
        let a: Vector<f64, 2> = [6., 0.].into();
        let b: Vector<f64, 2> = [1., 2.5].into();
        assert_eq!(a.periodic_diff(&b, &domain), [5., -2.5].into());

        let domain: Vector<i32, 1> = [5].into();
        let origin: Vector<i32, 1> = [0].into();
        let above: Vector<i32, 1> = [3].into();
        let below: Vector<i32, 1> = [2].into();
        assert_eq!(above.periodic_diff(&origin, &domain), [-2].into());
        assert_eq!(below.periodic_diff(&origin, &domain), [2].into());
    }

    #[test]
    fn test_reverse() {
        let vf1: Vector<f64, 5> = [1., 2., 3., 4., 5.].into();
        assert_eq!(vf1.reverse(), [5., 4., 3., 2., 1.].into());
        assert_eq!(vf1.reverse().reverse(), vf1);
        assert_eq!(vf1[0], 1.);
    }

    #[test]
    fn test_iteration() {
        let mut v: Vector<i32, 5> = [1, 2, 3, 4, 5].into();
        let expected = [1, 2, 3, 4, 5];
        assert!(v.iter().eq(expected.iter()));
        // each traversal starts from the first element again
        assert!(v.iter().eq(expected.iter()));

        for x in &mut v {
            *x *= 10;
        }
        assert_eq!(v.into_iter().sum::<i32>(), 150);
        assert_eq!(v.as_array(), &[10, 20, 30, 40, 50]);
        assert_eq!(v.as_ref().len(), 5);
        assert_eq!(<[i32; 5]>::from(v), v.into_array());
    }

    #[test]
    fn test_try_from() {
        let v: Vector<i32, 3> = Vector::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v, [1, 2, 3].into());

        let short = Vector::<i32, 3>::try_from(&[1, 2][..]);
        assert_eq!(short, Err(VectorError::LengthMismatch { expected: 3, found: 2 }));

        let long = Vector::<i32, 3>::try_from_iter(0..7);
        assert_eq!(long, Err(VectorError::TooLong { expected: 3 }));

        let long = Vector::<i32, 3>::try_from(&[1, 2, 3, 4][..]);
        assert_eq!(long, Err(VectorError::LengthMismatch { expected: 3, found: 4 }));
    }

    #[test]
    fn test_try_from_unbounded_iter() {
        let v = Vector::<u64, 3>::try_from_iter(0..);
        assert_eq!(v, Err(VectorError::TooLong { expected: 3 }));

        let v = Vector::<i32, 2>::try_from_iter(std::iter::repeat(7));
        assert_eq!(v, Err(VectorError::TooLong { expected: 2 }));
    }

    #[test]
    fn test_display() {
        let vi: Vector<i32, 3> = [1, 2, 3].into();
        assert_eq!(vi.to_string(), "[1, 2, 3]");

        let vf: Vector<f64, 2> = [1.5, -2.].into();
        assert_eq!(vf.to_string(), "[1.5, -2]");
        assert_eq!(format!("{vf:.2}"), "[1.50, -2.00]");

        assert_eq!(Vector::<i32, 0>::new([]).to_string(), "[]");
    }
}
