use core::time::Duration;
use math::Vector;

use crate::{registers::*, AccelScaleRange, ClockSource, DLPFMode, GyroScaleRange};

/// A single register write of the bring-up sequence together with the value the register must
/// hold afterwards.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigStep
{
    /// Logged before the register is written.
    pub description: &'static str,

    /// Logged (followed by the read-back value) once the write has been verified.
    pub success_message: &'static str,

    pub register: u8,
    pub value: u8,
}

/// Decides what `read_aligned_acceleration` does to the raw sample before returning it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentPolicy
{
    /// Return the raw sample as is, the calibration matrix is computed but not applied.
    #[default]
    Raw,

    /// Apply the calibration rotation matrix.
    Rotated,

    /// Apply the calibration rotation matrix, then snap small X and Y values to zero using the
    /// configured noise threshold. Z carries gravity and is never thresholded.
    RotatedAndThresholded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationConfig
{
    /// Number of at-rest samples averaged, zero is treated as one.
    pub sample_count: u32,

    /// Pacing interval between two samples.
    pub slot: Duration,

    /// Expected at-rest acceleration (in g) the measured vector gets rotated onto. It is
    /// scaled to raw LSB with the configured accelerometer range when calibrating.
    pub reference: Vector,
}

impl CalibrationConfig {
    pub const fn new() -> Self {
        CalibrationConfig {
            sample_count: 100,
            slot: Duration::from_millis(10),
            reference: Vector::unit_z(),
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        CalibrationConfig::new()
    }
}

/// Everything needed to bring up and calibrate a MPU-6050.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mpu6050Config
{
    pub clock_source: ClockSource,

    /// `sample_rate = gyro_output_rate / (1 + divider)`
    pub sample_rate_divider: u8,

    pub dlpf_mode: DLPFMode,
    pub gyro_scale: GyroScaleRange,
    pub accel_scale: AccelScaleRange,

    /// Raw `INT_ENABLE` value.
    pub interrupt_enable: u8,

    /// Raw `PWR_MGMT_2` value (wake-up frequency and per-axis standby bits).
    pub power_management_2: u8,

    pub calibration: CalibrationConfig,
    pub alignment: AlignmentPolicy,

    /// Threshold (in raw LSB) at or below which aligned X/Y values are considered noise.
    pub noise_threshold: f64,
}

impl Mpu6050Config {

    pub const fn new() -> Self {
        Mpu6050Config {
            clock_source: ClockSource::GyroX,
            sample_rate_divider: 7,
            dlpf_mode: DLPFMode::Bw10Hz,
            gyro_scale: GyroScaleRange::D1000,
            accel_scale: AccelScaleRange::G2,
            interrupt_enable: INT_ENABLE_DATA_RDY,
            power_management_2: 0x00,
            calibration: CalibrationConfig::new(),
            alignment: AlignmentPolicy::Raw,
            noise_threshold: 50.0,
        }
    }

    /// At-rest reference in raw LSB for the configured accelerometer range.
    ///
    pub fn calibration_reference(&self) -> Vector {
        self.calibration.reference * self.accel_scale.as_scale_factor()
    }

    /// Sample rate (in Hz) resulting from the DLPF mode and the sample rate divider.
    ///
    pub const fn sample_rate(&self) -> u32 {
        self.dlpf_mode.gyro_output_rate() / (1 + self.sample_rate_divider as u32)
    }

    /// The bring-up sequence for this configuration. Waking the device up comes first because
    /// most registers ignore writes while the chip sleeps.
    ///
    pub const fn config_steps(&self) -> [ConfigStep; 7] {
        [
            ConfigStep {
                description: "Waking up device",
                success_message: "Wake-up config successfully written",
                register: PWR_MGMT_1,
                value: self.clock_source.as_wake_register(),
            },
            ConfigStep {
                description: "Configuring sample rate",
                success_message: "Sample rate successfully written",
                register: SMPLRT_DIV,
                value: self.sample_rate_divider,
            },
            ConfigStep {
                description: "Setting global config (digital low pass filter)",
                success_message: "Global config successfully written",
                register: CONFIG,
                value: self.dlpf_mode.as_register(),
            },
            ConfigStep {
                description: "Configuring gyroscope",
                success_message: "Gyroscope config successfully written",
                register: GYRO_CONFIG,
                value: self.gyro_scale.as_register(),
            },
            ConfigStep {
                description: "Configuring accelerometer",
                success_message: "Accelerometer config successfully written",
                register: ACCEL_CONFIG,
                value: self.accel_scale.as_register(),
            },
            ConfigStep {
                description: "Configuring interrupts",
                success_message: "Interrupt config successfully written",
                register: INT_ENABLE,
                value: self.interrupt_enable,
            },
            ConfigStep {
                description: "Configuring low power operations",
                success_message: "Low power operation config successfully written",
                register: PWR_MGMT_2,
                value: self.power_management_2,
            },
        ]
    }
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Mpu6050Config::new()
    }
}

/// Bring-up sequence of the default configuration.
///
pub const DEFAULT_CONFIG_STEPS: [ConfigStep; 7] = Mpu6050Config::new().config_steps();
