#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub use math::{Matrix3, Vector};

pub mod accel_scale_range;
pub use accel_scale_range::*;

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod clock_source;
pub use clock_source::*;

pub mod dlpf_mode;
pub use dlpf_mode::*;

pub mod data;
pub use data::*;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod bus;
pub use bus::*;

pub mod timing;
pub use timing::*;

pub mod calibration;
pub use calibration::*;

pub mod mpu6050;
pub use mpu6050::*;

pub mod registers;

mod utils;
pub use utils::bytes_to_i16;

#[cfg(test)]
mod tests;

/// Default i2c address of the MPU 6050 chip.
///
pub const MPU6050_DEFAULT_I2C_ADDR: u8 = 0x68;

/// The default device ID of a MPU6050 chip.
///
pub const MPU6050_DEVICE_ID: u8 = 0x34;
