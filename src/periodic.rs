use crate::{
    error::{Result, VectorError},
    vector::Vector,
};
use num_traits::{AsPrimitive, Zero};
use std::ops::{Mul, Sub};

/// Axis-aligned domain with periodic boundaries along every axis, spanning `[0, size[i])`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodicBox<T, const N: usize> {
    size: Vector<T, N>,
}

impl<T, const N: usize> PeriodicBox<T, N>
where
    T: Copy + Zero + PartialOrd,
{
    pub fn new(size: Vector<T, N>) -> Result<Self> {
        // NaN extents fail the comparison as well
        if let Some(axis) = size.iter().position(|&extent| !(extent > T::zero())) {
            return Err(VectorError::InvalidConfig(format!(
                "box extent along axis {axis} must be positive"
            )));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> &Vector<T, N> {
        &self.size
    }

    pub fn contains(&self, position: &Vector<T, N>) -> bool {
        position
            .iter()
            .zip(&self.size)
            .all(|(&x, &extent)| x >= T::zero() && x < extent)
    }
}

impl<T, const N: usize> PeriodicBox<T, N>
where
    T: Copy + Zero + PartialOrd + Sub<Output = T> + Mul<Output = T> + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    /// Folds `position` back into the box.
    pub fn wrap(&self, position: Vector<T, N>) -> Vector<T, N> {
        position.modulo(&self.size)
    }

    /// Minimum-image displacement from `b` to `a`. Both points are expected inside the box.
    pub fn displacement(&self, a: &Vector<T, N>, b: &Vector<T, N>) -> Vector<T, N> {
        a.periodic_diff(b, &self.size)
    }

    pub fn squared_distance(&self, a: &Vector<T, N>, b: &Vector<T, N>) -> f64 {
        self.displacement(a, b).squared_norm()
    }

    pub fn distance(&self, a: &Vector<T, N>, b: &Vector<T, N>) -> f64 {
        self.displacement(a, b).norm()
    }
}
