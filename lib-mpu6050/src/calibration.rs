use core::time::Duration;
use math::{Matrix3, Vector};

use crate::RawVector;

/// Running sums of an at-rest calibration pass. Only lives while the pass is in progress.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationState
{
    sums: [i64; 3],

    /// Samples accumulated so far.
    collected: u32,

    /// Samples the pass is made of, never zero.
    sample_count: u32,

    slot: Duration,
}

impl CalibrationState
{
    /// Starts a new pass. A `sample_count` of zero is clamped to a single sample so the average
    /// is always defined.
    ///
    pub fn new(sample_count: u32, slot: Duration) -> Self {
        if sample_count == 0 {
            log::warn!("Calibration sample count of 0 requested, using 1 sample instead");
        }
        CalibrationState {
            sums: [0; 3],
            collected: 0,
            sample_count: sample_count.max(1),
            slot,
        }
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn slot(&self) -> Duration {
        self.slot
    }

    pub fn collected(&self) -> u32 {
        self.collected
    }

    pub fn accumulate(&mut self, sample: &RawVector) {
        self.sums[0] += sample.x as i64;
        self.sums[1] += sample.y as i64;
        self.sums[2] += sample.z as i64;
        self.collected += 1;
    }

    /// Average at-rest vector. Each sum is divided by the requested sample count with integer
    /// division (truncating towards zero) before it is converted to a float.
    ///
    pub fn misalignment(&self) -> Vector {
        let divisor = self.sample_count as i64;
        Vector::new(
            (self.sums[0] / divisor) as f64,
            (self.sums[1] / divisor) as f64,
            (self.sums[2] / divisor) as f64,
        )
    }
}

/// Matrix that maps the measured at-rest vector onto the reference vector, `None` when either
/// has zero length.
///
pub fn derive_rotation(misalignment: &Vector, reference: &Vector) -> Option<Matrix3> {
    Matrix3::rotation_between(misalignment, reference)
}
