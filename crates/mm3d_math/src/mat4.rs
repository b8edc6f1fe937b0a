//! 4x4 Matrix for homogeneous 3D transformations
//!
//! Matrices are stored row-major and act on column vectors: `m * v` applies
//! `m` to `v`, and `a * b` applies `b` first, then `a`. Translation lives in
//! the last column of the first three rows.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec3;

/// 4x4 matrix (row-major, column-vector convention)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4 {
    /// Rows of the matrix, `m[row][col]`
    pub m: [[f64; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a matrix from its four rows
    #[inline]
    pub const fn from_rows(a: [f64; 4], b: [f64; 4], c: [f64; 4], d: [f64; 4]) -> Self {
        Self { m: [a, b, c, d] }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Rotation about the X axis (right-handed, radians)
    ///
    /// Y rotates towards Z.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Rotation about the Y axis (right-handed, radians)
    ///
    /// Z rotates towards X.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows(
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Rotation about the Z axis (right-handed, radians)
    ///
    /// X rotates towards Y.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows(
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Composed rotation `rotation_x(x) * rotation_y(y) * rotation_z(z)`
    ///
    /// Applied to a vector, Z acts first, then Y, then X. The order matters.
    pub fn rotation(x: f64, y: f64, z: f64) -> Self {
        Self::rotation_x(x) * Self::rotation_y(y) * Self::rotation_z(z)
    }

    /// Rotation by `angle` radians about an arbitrary axis
    ///
    /// The axis does not need to be normalized. A zero axis gives the identity.
    pub fn rotation_axis(angle: f64, axis: Vec3) -> Self {
        if axis.length() == 0.0 {
            return Self::IDENTITY;
        }
        let a = axis.normalized();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Self::from_rows(
            [
                t * a.x * a.x + c,
                t * a.x * a.y - s * a.z,
                t * a.x * a.z + s * a.y,
                0.0,
            ],
            [
                t * a.x * a.y + s * a.z,
                t * a.y * a.y + c,
                t * a.y * a.z - s * a.x,
                0.0,
            ],
            [
                t * a.x * a.z - s * a.y,
                t * a.y * a.z + s * a.x,
                t * a.z * a.z + c,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Non-uniform scale: diag(x, y, z, 1)
    pub fn scale(x: f64, y: f64, z: f64) -> Self {
        Self::from_rows(
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Translation by (x, y, z)
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::from_rows(
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Right-handed perspective projection with OpenGL clip depth [-1, 1]
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect` - Width / height
    /// * `near`, `far` - Clip plane distances
    pub fn perspective(fov_y: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        Self::from_rows(
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [
                0.0,
                0.0,
                (far + near) / (near - far),
                (2.0 * far * near) / (near - far),
            ],
            [0.0, 0.0, -1.0, 0.0],
        )
    }

    /// Orthographic projection mapping the given box onto [-1, 1]^3
    pub fn orthographic(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Self {
        Self::from_rows(
            [2.0 / (right - left), 0.0, 0.0, (left + right) / (left - right)],
            [0.0, 2.0 / (top - bottom), 0.0, (bottom + top) / (bottom - top)],
            [0.0, 0.0, 2.0 / (near - far), (near + far) / (near - far)],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Right-handed view matrix looking from `eye` towards `target`
    ///
    /// The camera looks down its local -Z with `up` roughly along +Y.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalized();
        let s = f.cross(up).normalized();
        let u = s.cross(f);
        Self::from_rows(
            [s.x, s.y, s.z, -s.dot(eye)],
            [u.x, u.y, u.z, -u.dot(eye)],
            [-f.x, -f.y, -f.z, f.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Get a row
    #[inline]
    pub fn row(&self, row: usize) -> [f64; 4] {
        self.m[row]
    }

    /// Get a column
    #[inline]
    pub fn column(&self, col: usize) -> [f64; 4] {
        [self.m[0][col], self.m[1][col], self.m[2][col], self.m[3][col]]
    }

    /// Transpose the matrix
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::from_rows(
            [m[0][0], m[1][0], m[2][0], m[3][0]],
            [m[0][1], m[1][1], m[2][1], m[3][1]],
            [m[0][2], m[1][2], m[2][2], m[3][2]],
            [m[0][3], m[1][3], m[2][3], m[3][3]],
        )
    }

    /// Apply the matrix to a point with an implicit w of 1
    ///
    /// Only the first three rows are evaluated; there is no perspective divide.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3],
            m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3],
            m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3],
        )
    }

    /// Apply the full projective transform to a point and divide by w
    ///
    /// If the resulting w is exactly zero the undivided xyz is returned.
    pub fn project_point(&self, p: Vec3) -> Vec3 {
        let xyz = self.transform_point(p);
        let m = &self.m;
        let w = m[3][0] * p.x + m[3][1] * p.y + m[3][2] * p.z + m[3][3];
        if w == 0.0 {
            xyz
        } else {
            xyz / w
        }
    }

    #[inline]
    pub fn to_array(&self) -> [[f64; 4]; 4] {
        self.m
    }

    /// Row-major flattening of the 16 entries
    pub fn to_vec(&self) -> Vec<f64> {
        bytemuck::cast::<[[f64; 4]; 4], [f64; 16]>(self.m).to_vec()
    }
}

impl From<[[f64; 4]; 4]> for Mat4 {
    fn from(m: [[f64; 4]; 4]) -> Self {
        Self { m }
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{:?}, {:?}, {:?}, {:?}]", row[0], row[1], row[2], row[3])?;
        }
        write!(f, "]")
    }
}

/// Matrix product: `(a * b)[i][j] = sum_k a[i][k] * b[k][j]`
impl std::ops::Mul for Mat4 {
    type Output = Self;

    #[allow(clippy::needless_range_loop)]
    fn mul(self, rhs: Self) -> Self {
        let mut result = [[0.0f64; 4]; 4];

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result[i][j] += self.m[i][k] * rhs.m[k][j];
                }
            }
        }

        Self { m: result }
    }
}

/// Affine point transform, see [`Mat4::transform_point`]
impl std::ops::Mul<Vec3> for Mat4 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform_point(rhs)
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
