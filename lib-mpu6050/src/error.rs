use core::{error::Error, fmt};

/// A configuration register did not hold the written value when it was read back.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigValidationError
{
    pub register: u8,
    pub expected: u8,
    pub actual: u8,
}

impl Error for ConfigValidationError {}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Tried to write {:#010b} to register {:#04x}, but validating value returned {:#010b}",
            self.expected, self.register, self.actual
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError<E>
{
    Io(E),
    Validation(ConfigValidationError),
    AlreadyConfigured,
}

impl<E: fmt::Debug> Error for ConfigError<E> {}

impl<E: fmt::Debug> fmt::Display for ConfigError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Bus error while configuring: {:?}", err),
            Self::Validation(err) => write!(f, "Configuration not accepted: {}", err),
            Self::AlreadyConfigured => write!(f, "Device has already been configured"),
        }
    }
}

impl<E> From<ConfigValidationError> for ConfigError<E>
{
    fn from(err: ConfigValidationError) -> Self {
        ConfigError::Validation(err)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CalibrationError<E>
{
    Io(E),
    NotConfigured,
    AlreadyCalibrated,

    /// The averaged at-rest vector or the reference vector has no length, so there is no
    /// rotation between them.
    DegenerateMeasurement,
}

impl<E: fmt::Debug> Error for CalibrationError<E> {}

impl<E: fmt::Debug> fmt::Display for CalibrationError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Bus error while calibrating: {:?}", err),
            Self::NotConfigured => write!(f, "Device must be configured before calibrating"),
            Self::AlreadyCalibrated => write!(f, "Device has already been calibrated"),
            Self::DegenerateMeasurement => write!(f, "Cannot derive a rotation from a zero length vector"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReadError<E>
{
    Io(E),
    NotConfigured,
}

impl<E: fmt::Debug> Error for ReadError<E> {}

impl<E: fmt::Debug> fmt::Display for ReadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Bus error while reading samples: {:?}", err),
            Self::NotConfigured => write!(f, "Device must be configured before reading samples"),
        }
    }
}

/// Error of the combined bring-up, tells which phase failed.
///
#[derive(Debug, PartialEq, Eq)]
pub enum InitError<E>
{
    Config(ConfigError<E>),
    Calibration(CalibrationError<E>),
}

impl<E: fmt::Debug> Error for InitError<E> {}

impl<E: fmt::Debug> fmt::Display for InitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{}", err),
            Self::Calibration(err) => write!(f, "{}", err),
        }
    }
}

impl<E> From<ConfigError<E>> for InitError<E>
{
    fn from(err: ConfigError<E>) -> Self {
        InitError::Config(err)
    }
}

impl<E> From<CalibrationError<E>> for InitError<E>
{
    fn from(err: CalibrationError<E>) -> Self {
        InitError::Calibration(err)
    }
}
