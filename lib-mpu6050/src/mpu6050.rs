use core::time::Duration;
use math::{apply_threshold, Matrix3, Vector};

use crate::{registers::*, AlignmentPolicy, Axis, ConfigStep, Mpu6050Config, RawVector, MPU6050_DEVICE_ID};
use crate::bus::RegisterBus;
use crate::calibration::*;
use crate::error::*;
use crate::timing::SlotTimer;
use crate::utils::*;

/// Lifecycle of a [`Mpu6050`] session. States only ever move forward, a new session has to be
/// created to redo the bring-up or the calibration.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState
{
    /// Bus is open, nothing has been written to the device yet.
    BusOpen,

    /// Every configuration register was written and verified.
    Configured,

    /// A rotation matrix is available, the session is ready for aligned reads.
    Calibrated,
}

/// A session with one MPU-6050, owns the bus and the most recent calibration result.
///
/// Every operation is a sequence of blocking single register transactions, a session must not
/// be shared between tasks without external locking.
///
pub struct Mpu6050<B: RegisterBus>
{
    bus: B,
    config: Mpu6050Config,
    state: SessionState,
    rotation: Option<Matrix3>,
}

impl<B: RegisterBus> Mpu6050<B>
{
    /// Create a new MPU 6050 session on the given bus, the device itself is not touched yet.
    ///
    pub fn new(bus: B, config: Mpu6050Config) -> Self {
        Mpu6050 {
            bus,
            config,
            state: SessionState::BusOpen,
            rotation: None,
        }
    }

    pub fn with_defaults(bus: B) -> Self {
        Self::new(bus, Mpu6050Config::default())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &Mpu6050Config {
        &self.config
    }

    /// Rotation matrix of the last successful calibration.
    ///
    pub fn rotation(&self) -> Option<&Matrix3> {
        self.rotation.as_ref()
    }

    /// Direct access to the bus, e.g. for registers this driver does not cover. Writing the
    /// configuration registers this way bypasses their verification.
    ///
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Ends the session and hands the bus back.
    ///
    pub fn release(self) -> B {
        self.bus
    }

    /// Gets the device ID of this MPU6050 chip, practically speaking this just gets the contents
    /// of the `WHO_AM_I` register.
    ///
    pub fn device_id(&mut self) -> Result<u8, B::Error> {
        let value = self.bus.read_register(WHO_AM_I)?;
        Ok((value & 0b0111_1110) >> 1)
    }

    /// Checks if the connection with the MPU6050 chip is working as expected, i.e. if it can
    /// read the device ID and if the device ID is the expected value.
    ///
    pub fn connection_okay(&mut self) -> bool {
        self.device_id().map(|id| id == MPU6050_DEVICE_ID).unwrap_or(false)
    }

    /// Brings the device out of sleep and writes the configuration registers in order, each one
    /// is read back and compared before moving on to the next.
    ///
    /// The first bus error or mismatch aborts the sequence and leaves the device in an undefined
    /// configuration; the session stays in [`SessionState::BusOpen`] so the whole sequence can
    /// be retried.
    ///
    pub fn configure(&mut self) -> Result<(), ConfigError<B::Error>> {
        if self.state != SessionState::BusOpen {
            return Err(ConfigError::AlreadyConfigured);
        }

        log::info!("Configuring MPU6050 ({} Hz sample rate)", self.config.sample_rate());
        for step in self.config.config_steps() {
            self.write_and_validate(&step)?;
        }

        self.state = SessionState::Configured;
        Ok(())
    }

    fn write_and_validate(&mut self, step: &ConfigStep) -> Result<(), ConfigError<B::Error>> {
        log::info!("{}", step.description);
        self.bus.write_register(step.register, step.value).map_err(ConfigError::Io)?;

        let actual = self.bus.read_register(step.register).map_err(ConfigError::Io)?;
        if actual != step.value {
            let err = ConfigValidationError {
                register: step.register,
                expected: step.value,
                actual,
            };
            log::error!("{}", err);
            return Err(err.into());
        }

        log::info!("{}: {:#010b}", step.success_message, actual);
        Ok(())
    }

    /// Reads one accelerometer axis from its output register pair, the low byte register is
    /// read first. The two reads are separate transactions, the device may update the pair in
    /// between them.
    ///
    pub fn read_axis(&mut self, low_register: u8, high_register: u8) -> Result<i16, ReadError<B::Error>> {
        self.ensure_configured()?;
        self.fetch_axis(low_register, high_register).map_err(ReadError::Io)
    }

    /// Reads the X, Y and Z axis after one another. There is no snapshot across axes.
    ///
    pub fn read_raw_vector(&mut self) -> Result<RawVector, ReadError<B::Error>> {
        self.ensure_configured()?;
        self.fetch_raw_vector().map_err(ReadError::Io)
    }

    fn ensure_configured(&self) -> Result<(), ReadError<B::Error>> {
        match self.state {
            SessionState::BusOpen => Err(ReadError::NotConfigured),
            SessionState::Configured | SessionState::Calibrated => Ok(()),
        }
    }

    fn fetch_axis(&mut self, low_register: u8, high_register: u8) -> Result<i16, B::Error> {
        let low = self.bus.read_register(low_register)?;
        let high = self.bus.read_register(high_register)?;
        Ok(bytes_to_i16(low, high))
    }

    fn fetch_raw_vector(&mut self) -> Result<RawVector, B::Error> {
        let mut values = [ 0i16; 3 ];
        for (value, axis) in values.iter_mut().zip(Axis::ALL) {
            let (low, high) = axis.registers();
            *value = self.fetch_axis(low, high)?;
        }
        Ok(RawVector::new(values[0], values[1], values[2]))
    }

    /// Calibrates using the sample count and slot duration from the session's configuration.
    ///
    pub fn calibrate<T: SlotTimer>(&mut self, timer: &mut T) -> Result<Matrix3, CalibrationError<B::Error>> {
        let calibration = self.config.calibration;
        self.calibrate_with(timer, calibration.sample_count, calibration.slot)
    }

    /// Averages `sample_count` at-rest samples taken one `slot` apart and derives the matrix
    /// rotating that average onto the configured reference, scaled to the accelerometer range.
    ///
    /// A `sample_count` of zero takes a single sample. The matrix is only stored when the whole
    /// pass succeeds, on failure the previous matrix (if any) is kept.
    ///
    pub fn calibrate_with<T: SlotTimer>(
        &mut self,
        timer: &mut T,
        sample_count: u32,
        slot: Duration,
    ) -> Result<Matrix3, CalibrationError<B::Error>> {
        match self.state {
            SessionState::BusOpen => return Err(CalibrationError::NotConfigured),
            SessionState::Calibrated => return Err(CalibrationError::AlreadyCalibrated),
            SessionState::Configured => {}
        }

        log::info!("Calibrating rotation matrix...");
        let mut calibration = CalibrationState::new(sample_count, slot);
        for i in 1..=calibration.sample_count() {
            // Taken before the bus reads so the wait below absorbs their duration.
            let reference = timer.now();
            let sample = self.fetch_raw_vector().map_err(CalibrationError::Io)?;
            log::debug!("Calibration sample {}/{}: {:?}", i, calibration.sample_count(), sample);
            calibration.accumulate(&sample);
            timer.wait_for_slot(calibration.slot(), reference);
        }

        let misalignment = calibration.misalignment();
        let rotation = derive_rotation(&misalignment, &self.config.calibration_reference())
            .ok_or(CalibrationError::DegenerateMeasurement)?;
        log::info!(
            "Calculated rotation matrix for vector {:?} is {:?}",
            misalignment, rotation.rows
        );

        self.rotation = Some(rotation);
        self.state = SessionState::Calibrated;
        Ok(rotation)
    }

    /// Configures and calibrates the device in one go.
    ///
    pub fn initialize<T: SlotTimer>(&mut self, timer: &mut T) -> Result<(), InitError<B::Error>> {
        self.configure()?;
        self.calibrate(timer)?;
        Ok(())
    }

    /// Reads an acceleration sample (in raw LSB) and aligns it according to the configured
    /// [`AlignmentPolicy`]. Rotation is skipped while the session has not been calibrated.
    ///
    pub fn read_aligned_acceleration(&mut self) -> Result<Vector, ReadError<B::Error>> {
        let accel = Vector::from(self.read_raw_vector()?);

        Ok(match self.config.alignment {
            AlignmentPolicy::Raw => accel,
            AlignmentPolicy::Rotated => self.rotate(accel),
            AlignmentPolicy::RotatedAndThresholded => {
                remove_noise(self.rotate(accel), self.config.noise_threshold)
            }
        })
    }

    /// Same as [`Self::read_aligned_acceleration`] but converted to g using the configured
    /// accelerometer scale range.
    ///
    pub fn read_acceleration_g(&mut self) -> Result<Vector, ReadError<B::Error>> {
        let accel = self.read_aligned_acceleration()?;
        Ok(accel / self.config.accel_scale.as_scale_factor())
    }

    fn rotate(&self, accel: Vector) -> Vector {
        match &self.rotation {
            Some(rotation) => rotation * accel,
            None => accel,
        }
    }
}

/// Snaps X and Y to zero when they are within the noise threshold. Z is left alone since it
/// carries gravity while at rest.
///
pub fn remove_noise(mut vector: Vector, threshold: f64) -> Vector {
    vector.x = apply_threshold(vector.x, threshold);
    vector.y = apply_threshold(vector.y, threshold);
    vector
}
