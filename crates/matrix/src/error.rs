use core::fmt;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    InvalidDigit(u8),
    InvalidRow(u8),
    OutOfRangeValue(f32),
    IntensityOutOfRange(u8),
    InvalidTime { hour: u32, minute: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDigit(d) => write!(f, "not a decimal digit: {d}"),
            Error::InvalidRow(r) => write!(f, "row out of range: {r}"),
            Error::OutOfRangeValue(x) => write!(f, "value cannot be displayed: {x}"),
            Error::IntensityOutOfRange(i) => {
                write!(f, "intensity out of range, expected <= 0x0f, actual: {i:#04x}")
            }
            Error::InvalidTime { hour, minute } => write!(f, "invalid time {hour:02}:{minute:02}"),
        }
    }
}

impl core::error::Error for Error {}
