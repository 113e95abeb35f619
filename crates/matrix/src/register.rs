/// MAX7219 register addresses.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    NoOp,
    /// Row data, 0..=7. Only the low three bits are used, so `Row(8)`
    /// addresses row 0.
    Row(u8),
    DecodeMode,
    Intensity,
    ScanLimit,
    Shutdown,
    DisplayTest,
}

impl Register {
    pub const fn addr(self) -> u8 {
        match self {
            Register::NoOp => 0x00,
            Register::Row(row) => 0x01 + (row & 0x07),
            Register::DecodeMode => 0x09,
            Register::Intensity => 0x0a,
            Register::ScanLimit => 0x0b,
            Register::Shutdown => 0x0c,
            Register::DisplayTest => 0x0f,
        }
    }
}

pub const DECODE_NONE: u8 = 0x00;
pub const SCAN_ALL_ROWS: u8 = 0x07;
pub const INTENSITY_MAX: u8 = 0x0f;

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::register::*;

    #[test]
    fn addresses() {
        assert_eq!(Register::NoOp.addr(), 0x00);
        assert_eq!(Register::DecodeMode.addr(), 0x09);
        assert_eq!(Register::Intensity.addr(), 0x0a);
        assert_eq!(Register::ScanLimit.addr(), 0x0b);
        assert_eq!(Register::Shutdown.addr(), 0x0c);
        assert_eq!(Register::DisplayTest.addr(), 0x0f);
    }

    #[test]
    fn row_addresses() {
        for row in 0..8 {
            assert_eq!(Register::Row(row).addr(), row + 1);
        }
    }

    #[test]
    fn row_uses_low_three_bits() {
        assert_eq!(Register::Row(8).addr(), 0x01);
        assert_eq!(Register::Row(15).addr(), 0x08);
        assert_ne!(Register::Row(9).addr(), Register::DecodeMode.addr());
    }
}
