use math::Vector;
use mpu6050::{registers::*, RegisterBus};

/// Stand-in for a MPU-6050 mounted at a slight tilt, it keeps a register file and produces a
/// noisy at-rest reading in the accelerometer output registers.
///
pub struct SimulatedMpu6050
{
    registers: [u8; 128],

    /// At-rest acceleration in raw LSB.
    gravity: Vector,

    /// Peak noise added to each axis, in raw LSB.
    noise: f64,

    seed: u32,
}

impl SimulatedMpu6050
{
    pub fn new(gravity: Vector, noise: f64) -> Self {
        let mut registers = [0u8; 128];
        // Device comes out of reset sleeping, reporting its default ID.
        registers[PWR_MGMT_1 as usize] = 0x40;
        registers[WHO_AM_I as usize] = 0x68;
        SimulatedMpu6050 { registers, gravity, noise, seed: 0x2545_F491 }
    }

    /// Cheap deterministic noise in `[-1, 1]`.
    ///
    fn next_noise(&mut self) -> f64 {
        self.seed ^= self.seed << 13;
        self.seed ^= self.seed >> 17;
        self.seed ^= self.seed << 5;
        (self.seed as f64 / u32::MAX as f64) * 2.0 - 1.0
    }

    /// Latches a new sample into the output registers, the real chip does this at its sample
    /// rate, we do it each time the X high byte is read.
    ///
    fn latch_sample(&mut self) {
        let components = [self.gravity.x, self.gravity.y, self.gravity.z];
        for (high, component) in [ACCEL_XOUT_H, ACCEL_YOUT_H, ACCEL_ZOUT_H].into_iter().zip(components) {
            let value = (component + self.noise * self.next_noise()) as i16;
            let [h, l] = value.to_be_bytes();
            self.registers[high as usize] = h;
            self.registers[high as usize + 1] = l;
        }
    }
}

impl RegisterBus for SimulatedMpu6050
{
    type Error = core::convert::Infallible;

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        if register == ACCEL_XOUT_L {
            self.latch_sample();
        }
        Ok(self.registers[(register & 0x7F) as usize])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.registers[(register & 0x7F) as usize] = value;
        Ok(())
    }
}
