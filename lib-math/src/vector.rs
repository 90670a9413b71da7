use core::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector
{
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<[f64; 3]> for Vector {
    fn from(values: [f64; 3]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            z: values[2],
        }
    }
}

impl Vector
{
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// Returns a zero vector.
    ///
    pub const fn zero() -> Self {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Unit vectors along the X, Y and Z axes.
    ///
    pub const fn unit_x() -> Self {
        Vector { x: 1.0, y: 0.0, z: 0.0 }
    }

    pub const fn unit_y() -> Self {
        Vector { x: 0.0, y: 1.0, z: 0.0 }
    }

    pub const fn unit_z() -> Self {
        Vector { x: 0.0, y: 0.0, z: 1.0 }
    }

    /// Calculate the length/magnitude of the vector
    ///
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize the vector
    ///
    pub fn normalize(&self) -> Vector {
        let len = self.magnitude();
        if len == 0.0 || len.is_nan() {
            // Avoid division by zero; return a zero vector
            return Vector::zero();
        }
        self / len
    }

    /// Take the dot product of two vectors.
    ///
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors.
    ///
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f64) -> bool {
        libm::fabs(self.x - other.x) <= tol
            && libm::fabs(self.y - other.y) <= tol
            && libm::fabs(self.z - other.z) <= tol
    }

    /// True when none of the components are NaN or infinite.
    ///
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vector
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Div<f64> for Vector
{
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Vector {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl Div<f64> for &Vector
{
    type Output = Vector;

    fn div(self, other: f64) -> Self::Output {
        Vector {
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}

impl Mul<f64> for Vector
{
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Vector {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
