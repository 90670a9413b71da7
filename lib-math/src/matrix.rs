use core::ops::{Add, Mul, Sub};
use crate::*;

/// Inputs whose unit vectors point this close to opposite directions are treated as
/// antiparallel when deriving a rotation between them.
///
const ANTIPARALLEL_EPSILON: f64 = 1e-12;

/// Row-major 3x3 matrix of doubles.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3
{
    pub rows: [Vector; 3],
}

impl From<[[f64; 3]; 3]> for Matrix3 {
    fn from(values: [[f64; 3]; 3]) -> Self {
        Matrix3 {
            rows: [
                Vector::from(values[0]),
                Vector::from(values[1]),
                Vector::from(values[2]),
            ],
        }
    }
}

impl Matrix3
{
    pub const fn from_rows(x: Vector, y: Vector, z: Vector) -> Self {
        Matrix3 { rows: [x, y, z] }
    }

    /// Returns the identity matrix (no rotation).
    ///
    pub const fn identity() -> Self {
        Matrix3::from_rows(Vector::unit_x(), Vector::unit_y(), Vector::unit_z())
    }

    /// Outer product `a * b^T`.
    ///
    pub fn outer(a: &Vector, b: &Vector) -> Self {
        Matrix3::from_rows(*b * a.x, *b * a.y, *b * a.z)
    }

    /// Skew-symmetric cross product matrix, i.e. `skew(v) * w == v x w`.
    ///
    pub fn skew(v: &Vector) -> Self {
        Matrix3::from_rows(
            Vector::new(0.0, -v.z, v.y),
            Vector::new(v.z, 0.0, -v.x),
            Vector::new(-v.y, v.x, 0.0),
        )
    }

    /// Builds the matrix that maps `from` onto `to`.
    ///
    /// The direction of `from` is turned onto the direction of `to` with Rodrigues' rotation
    /// formula, and the result is scaled by `|to| / |from|` so that `m * from == to` holds for
    /// vectors of different lengths as well. The result is therefore only orthonormal when both
    /// vectors have the same magnitude.
    ///
    /// Returns `None` when either vector has zero length (or is not finite), there is no
    /// meaningful direction to rotate in that case.
    ///
    pub fn rotation_between(from: &Vector, to: &Vector) -> Option<Self> {
        let from_len = from.magnitude();
        let to_len = to.magnitude();
        if from_len == 0.0 || to_len == 0.0 || !from_len.is_finite() || !to_len.is_finite() {
            return None;
        }

        let u = from / from_len;
        let w = to / to_len;
        let scale = to_len / from_len;

        let axis = u.cross(&w);
        let cos_theta = u.dot(&w);

        let rotation = if 1.0 + cos_theta <= ANTIPARALLEL_EPSILON {
            // Half turn about any axis perpendicular to `u`: 2kk^T - I
            let k = u.cross(&least_aligned_axis(&u)).normalize();
            Matrix3::outer(&k, &k) * 2.0 - Matrix3::identity()
        } else {
            // I + [v]x + [v]x^2 / (1 + cos)
            let vx = Matrix3::skew(&axis);
            Matrix3::identity() + vx + (vx * vx) * (1.0 / (1.0 + cos_theta))
        };

        Some(rotation * scale)
    }

    pub fn transpose(&self) -> Self {
        let [a, b, c] = self.rows;
        Matrix3::from_rows(
            Vector::new(a.x, b.x, c.x),
            Vector::new(a.y, b.y, c.y),
            Vector::new(a.z, b.z, c.z),
        )
    }

    pub fn determinant(&self) -> f64 {
        self.rows[0].dot(&self.rows[1].cross(&self.rows[2]))
    }

    /// Approximate equality check with a given tolerance, element wise.
    pub fn approx_eq(&self, other: &Matrix3, tol: f64) -> bool {
        self.rows.iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.approx_eq(b, tol))
    }

    pub fn is_finite(&self) -> bool {
        self.rows.iter().all(Vector::is_finite)
    }
}

/// Picks the basis axis on which `v` has the smallest projection, crossing `v` with it is
/// guaranteed to produce a well conditioned perpendicular vector.
///
fn least_aligned_axis(v: &Vector) -> Vector {
    let (x, y, z) = (libm::fabs(v.x), libm::fabs(v.y), libm::fabs(v.z));
    if x <= y && x <= z {
        Vector::unit_x()
    } else if y <= z {
        Vector::unit_y()
    } else {
        Vector::unit_z()
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Matrix3::identity()
    }
}

impl Mul<Vector> for Matrix3
{
    type Output = Vector;

    fn mul(self, v: Vector) -> Self::Output {
        Vector {
            x: self.rows[0].dot(&v),
            y: self.rows[1].dot(&v),
            z: self.rows[2].dot(&v),
        }
    }
}

impl Mul<Vector> for &Matrix3
{
    type Output = Vector;

    fn mul(self, v: Vector) -> Self::Output {
        (*self) * v
    }
}

impl Mul for Matrix3
{
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        let columns = other.transpose();
        Matrix3::from_rows(columns * self.rows[0], columns * self.rows[1], columns * self.rows[2])
    }
}

impl Mul<f64> for Matrix3
{
    type Output = Self;

    fn mul(self, scale: f64) -> Self::Output {
        Matrix3::from_rows(self.rows[0] * scale, self.rows[1] * scale, self.rows[2] * scale)
    }
}

impl Add for Matrix3
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Matrix3::from_rows(
            self.rows[0] + other.rows[0],
            self.rows[1] + other.rows[1],
            self.rows[2] + other.rows[2],
        )
    }
}

impl Sub for Matrix3
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Matrix3::from_rows(
            self.rows[0] - other.rows[0],
            self.rows[1] - other.rows[1],
            self.rows[2] - other.rows[2],
        )
    }
}
