
/// Clock source selected by the `CLKSEL` bits of `PWR_MGMT_1`.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource
{
    InternalOscillator = 0,

    GyroX = 1,
    GyroY = 2,
    GyroZ = 3,

    External32kHz = 4,
    External19MHz = 5,

    /// Stops the clock and keeps the timing generator in reset
    Stop = 7,
}

impl ClockSource {

    /// The `PWR_MGMT_1` value that selects this clock source with the `SLEEP`, `CYCLE` and
    /// `DEVICE_RESET` bits all cleared, i.e. the value that wakes the device up.
    ///
    pub const fn as_wake_register(self) -> u8 {
        self as u8
    }
}

impl Default for ClockSource {
    fn default() -> Self {
        ClockSource::GyroX
    }
}
