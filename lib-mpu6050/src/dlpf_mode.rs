/// DLPF (Digital Low Pass Filter) mode, this determines the highest frequency that is not filtered
/// out.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DLPFMode {
    Bw256Hz = 0x00,
    Bw188Hz = 0x01,
    Bw98Hz = 0x02,
    Bw42Hz = 0x03,
    Bw20Hz = 0x04,
    Bw10Hz = 0x05,
    Bw5Hz = 0x06,
}

impl DLPFMode {

    /// `CONFIG` register value for this mode, external frame sync stays disabled.
    ///
    pub const fn as_register(self) -> u8 {
        self as u8
    }

    /// Rate (in Hz) the sample rate divider is applied to, the gyroscope output runs at 8kHz
    /// only when the filter is effectively off.
    ///
    pub const fn gyro_output_rate(self) -> u32 {
        match self {
            Self::Bw256Hz => 8000,
            _ => 1000,
        }
    }
}

impl Default for DLPFMode {
    fn default() -> Self {
        DLPFMode::Bw10Hz
    }
}
