use math::Vector;

use crate::registers::*;

/// Accelerometer axis, each is read from its own low/high output register pair.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis
{
    X,
    Y,
    Z,
}

impl Axis {

    /// Read order of a full vector.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Output registers of this axis as `(low, high)`.
    ///
    pub const fn registers(self) -> (u8, u8) {
        match self {
            Axis::X => (ACCEL_XOUT_L, ACCEL_XOUT_H),
            Axis::Y => (ACCEL_YOUT_L, ACCEL_YOUT_H),
            Axis::Z => (ACCEL_ZOUT_L, ACCEL_ZOUT_H),
        }
    }
}

/// Uncalibrated accelerometer sample, in LSB of the configured scale range.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawVector
{
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawVector {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        RawVector { x, y, z }
    }
}

impl From<RawVector> for Vector {
    fn from(raw: RawVector) -> Self {
        Vector::new(raw.x as f64, raw.y as f64, raw.z as f64)
    }
}
