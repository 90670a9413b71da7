//! Register addresses of the MPU-6050, as listed in the "MPU-6000 and MPU-6050 Register Map and
//! Descriptions" document (revision 4.2).
//!

pub const SMPLRT_DIV: u8 = 0x19;

pub const CONFIG: u8 = 0x1A; //[5:3] EXT_SYNC_SET, [2:0] DLPF_CFG
pub const GYRO_CONFIG: u8 = 0x1B; //[4:3] FS_SEL
pub const ACCEL_CONFIG: u8 = 0x1C; //[4:3] AFS_SEL

pub const INT_ENABLE: u8 = 0x38;

pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const ACCEL_XOUT_L: u8 = 0x3C;
pub const ACCEL_YOUT_H: u8 = 0x3D;
pub const ACCEL_YOUT_L: u8 = 0x3E;
pub const ACCEL_ZOUT_H: u8 = 0x3F;
pub const ACCEL_ZOUT_L: u8 = 0x40;

pub const PWR_MGMT_1: u8 = 0x6B; //[7] DEVICE_RESET, [6] SLEEP, [5] CYCLE, [3] TEMP_DIS, [2:0] CLKSEL
pub const PWR_MGMT_2: u8 = 0x6C; //[7:6] LP_WAKE_CTRL, [5:0] STBY_*

pub const WHO_AM_I: u8 = 0x75; //[6:1] WHO_AM_I

/// `INT_ENABLE` bit that raises an interrupt each time a new sample is available.
///
pub const INT_ENABLE_DATA_RDY: u8 = 0b0000_0001;
