//! 3D Vector type

use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use rand::Rng;
use serde::{Serialize, Deserialize};

/// 3D Vector with x, y, z components
///
/// Values are immutable by operation: every method and operator returns a new
/// vector. NaN and infinite components are accepted and propagate.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vec3
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The all-ones vector (1, 1, 1)
    #[inline]
    pub const fn unit() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// A point sampled uniformly from the unit cube [0, 1)^3
    ///
    /// Uses the thread-local generator, so results are not reproducible.
    /// Use [`Vec3::random_with`] with a seeded generator when they must be.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// A point sampled uniformly from [0, 1)^3 using the given generator
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length
    ///
    /// A vector of exactly zero length is returned unchanged. Lengths that are
    /// merely tiny are still divided by, and so is a NaN length: a vector with
    /// any NaN component normalizes to all-NaN.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            self / len
        }
    }

    /// Clamp every component into `[low, high]`
    ///
    /// Each component is computed as `min(max(c, low), high)`. If `low > high`
    /// that composition gives `high` for every component. NaN components are
    /// left as NaN.
    #[inline]
    pub fn clamp(self, low: f64, high: f64) -> Self {
        Self::new(
            clamp_component(self.x, low, high),
            clamp_component(self.y, low, high),
            clamp_component(self.z, low, high),
        )
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

#[inline]
fn clamp_component(value: f64, low: f64, high: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.max(low).min(high)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

// Operator overloads

impl std::ops::Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Mul<Vec3> for f64 {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

/// Component-wise multiplication (Hadamard product)
impl std::ops::Mul for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

/// Divides every component, z included, by `scalar`.
impl std::ops::Div<f64> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Div for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }
}

impl std::ops::Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", index),
        }
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vec3::default(), Vec3::ZERO);
    }

    #[test]
    fn test_unit() {
        assert_eq!(Vec3::unit(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_random_in_unit_cube() {
        for _ in 0..100 {
            let v = Vec3::random();
            for i in 0..3 {
                assert!((0.0..1.0).contains(&v[i]), "component {} out of range: {}", i, v);
            }
        }
    }

    #[test]
    fn test_random_with_seed_is_reproducible() {
        let a = Vec3::random_with(&mut StdRng::seed_from_u64(7));
        let b = Vec3::random_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::new(1.0, 2.0, 2.0).length_squared(), 9.0);
    }

    #[test]
    fn test_length_special_values() {
        assert!(Vec3::new(f64::NAN, 0.0, 0.0).length().is_nan());
        assert_eq!(Vec3::new(0.0, f64::NEG_INFINITY, 1.0).length(), f64::INFINITY);
    }

    #[test]
    fn test_normalized() {
        let n = Vec3::new(3.0, 0.0, 4.0).normalized();
        assert_abs_diff_eq!(n, Vec3::new(0.6, 0.0, 0.8), epsilon = 1e-12);
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized_zero_is_unchanged() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn test_normalized_nan_spreads_to_all_components() {
        let n = Vec3::new(f64::NAN, 1.0, 0.0).normalized();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan(), "got {}", n);
    }

    #[test]
    fn test_normalized_tiny_is_not_guarded() {
        let n = Vec3::new(1e-150, 0.0, 0.0).normalized();
        assert_abs_diff_eq!(n.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_add_sub() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 8.0);
        assert_eq!(a + b, Vec3::new(5.0, 8.0, 11.0));
        assert_eq!(b - a, Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_mul_scalar_both_sides() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(v * 2.0, Vec3::new(2.0, -4.0, 6.0));
        assert_eq!(2.0 * v, v * 2.0);
    }

    #[test]
    fn test_div_scalar_uses_z() {
        let v = Vec3::new(2.0, 4.0, 9.0);
        assert_eq!(v / 2.0, Vec3::new(1.0, 2.0, 4.5));
    }

    #[test]
    fn test_div_by_zero_propagates() {
        let v = Vec3::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn test_component_mul_div() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(2.0, 4.0, 6.0);
        assert_eq!(a * b, Vec3::new(2.0, 8.0, 18.0));
        assert_eq!(b / a, Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-Vec3::new(1.0, -2.0, 0.5), Vec3::new(-1.0, 2.0, -0.5));
    }

    #[test]
    fn test_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        // 4 + 10 + 18
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_cross_basis() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_clone_is_independent() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        #[allow(clippy::clone_on_copy)]
        let b = a.clone();
        let c = b + Vec3::unit();
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b, a);
        assert_ne!(c, a);
    }

    #[test]
    fn test_clamp() {
        let v = Vec3::new(5.0, -5.0, 2.0);
        assert_eq!(v.clamp(0.0, 1.0), Vec3::new(1.0, 0.0, 1.0));

        let inside = Vec3::new(0.25, 0.5, 0.75);
        assert_eq!(inside.clamp(0.0, 1.0), inside);
    }

    #[test]
    fn test_clamp_inverted_bounds_yields_high() {
        let v = Vec3::new(-3.0, 0.5, 10.0);
        assert_eq!(v.clamp(1.0, 0.0), Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_clamp_keeps_nan() {
        let v = Vec3::new(f64::NAN, 2.0, -2.0).clamp(-1.0, 1.0);
        assert!(v.x.is_nan());
        assert_eq!(v.y, 1.0);
        assert_eq!(v.z, -1.0);
    }

    #[test]
    fn test_lerp() {
        let a = Vec3::ZERO;
        let b = Vec3::new(10.0, 20.0, 30.0);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(5.0, 10.0, 15.0));
    }

    #[test]
    fn test_index() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!([v[0], v[1], v[2]], [1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let _ = Vec3::ZERO[3];
    }

    #[test]
    fn test_array_conversions() {
        let v: Vec3 = [1.0, 2.0, 3.0].into();
        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec3::new(1.0, -2.5, 0.0).to_string(), "(1.0, -2.5, 0.0)");
    }

    #[test]
    fn test_pod_layout() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let floats: &[f64] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0]);
    }
}
