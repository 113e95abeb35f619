use core::fmt;

use chrono::Timelike;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::error::Error as InputError;
use crate::glyph::{Glyph, ROWS};
use crate::register::{self, Register};
use crate::value::{ClockFields, Decimal, Suffix};

/// Number of daisy-chained MAX7219s.
pub const CHAIN_LEN: usize = 4;

/// Writes shifted in after a single-transfer command so that it reaches the
/// last chip of the chain.
const FLUSH_NOOPS: usize = CHAIN_LEN - 1;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq)]
pub enum Error<SpiE, PinE> {
    Input(InputError),
    Spi(SpiE),
    Pin(PinE),
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Error<SpiE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Input(e) => fmt::Display::fmt(e, f),
            Error::Spi(e) => write!(f, "spi error: {e:?}"),
            Error::Pin(e) => write!(f, "chip select error: {e:?}"),
        }
    }
}

impl<SpiE, PinE> From<InputError> for Error<SpiE, PinE> {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> core::error::Error for Error<SpiE, PinE> {}

/// Four chained 8x8 matrices driven as one 32 column display.
///
/// Chip 0 is wired to the MCU and shows the left-most glyph. Data for the
/// most distant chip goes out first in every select window; the whole chain
/// latches on the rising edge of chip select.
///
/// `spi` must be configured for mode 0, MSB first, at most 10 MHz.
pub struct Display<Spi, Cs> {
    spi: Spi,
    cs: Cs,
}

impl<Spi, Cs> Display<Spi, Cs>
where
    Spi: SpiBus,
    Cs: OutputPin,
{
    /// Takes the bus and chip select and brings every chip into a blank,
    /// powered, full-scan, no-decode state at minimum intensity.
    pub fn new(spi: Spi, cs: Cs) -> Result<Self, Error<Spi::Error, Cs::Error>> {
        let mut display = Self { spi, cs };
        display.cs.set_high().map_err(Error::Pin)?;
        display.reset()?;
        display.write_chain(Register::DisplayTest, 0x00)?;
        display.write_chain(Register::DecodeMode, register::DECODE_NONE)?;
        display.write_chain(Register::Intensity, 0x00)?;
        display.write_chain(Register::ScanLimit, register::SCAN_ALL_ROWS)?;
        display.write_chain(Register::Shutdown, 0x01)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("display initialized, {} chips", CHAIN_LEN);
        Ok(display)
    }

    /// Gives back the bus and chip select. Nothing is written.
    pub fn release(self) -> (Spi, Cs) {
        (self.spi, self.cs)
    }

    /// Blanks every row of every chip.
    ///
    /// Each write is latched on its own; the trailing no-ops shift the
    /// earlier writes down the chain until the last chip has seen all of
    /// them.
    pub fn reset(&mut self) -> Result<(), Error<Spi::Error, Cs::Error>> {
        self.transfer(Register::DecodeMode, register::DECODE_NONE, true, true)?;
        for row in 0..ROWS as u8 {
            self.transfer(Register::Row(row), 0x00, true, true)?;
        }
        for _ in 0..FLUSH_NOOPS {
            self.transfer(Register::NoOp, 0x00, true, true)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), Error<Spi::Error, Cs::Error>> {
        self.reset()
    }

    /// `level` is 0x00..=0x0f.
    pub fn intensity(&mut self, level: u8) -> Result<(), Error<Spi::Error, Cs::Error>> {
        if level > register::INTENSITY_MAX {
            return Err(InputError::IntensityOutOfRange(level).into());
        }
        self.write_chain(Register::Intensity, level)
    }

    pub fn shutdown(&mut self, off: bool) -> Result<(), Error<Spi::Error, Cs::Error>> {
        self.write_chain(Register::Shutdown, if off { 0x00 } else { 0x01 })
    }

    pub fn display_test(&mut self, on: bool) -> Result<(), Error<Spi::Error, Cs::Error>> {
        self.write_chain(Register::DisplayTest, if on { 0x01 } else { 0x00 })
    }

    /// Shows `HH:MM`.
    pub fn clock<T: Timelike>(&mut self, time: &T) -> Result<(), Error<Spi::Error, Cs::Error>> {
        self.render_clock(ClockFields::from_time(time))
    }

    pub fn clock_hm(&mut self, hour: u32, minute: u32) -> Result<(), Error<Spi::Error, Cs::Error>> {
        self.render_clock(ClockFields::from_hm(hour, minute)?)
    }

    pub fn render_clock(&mut self, fields: ClockFields) -> Result<(), Error<Spi::Error, Cs::Error>> {
        self.render(&fields.glyphs())
    }

    /// Shows `x` with as many decimals as fit, see [`Decimal`].
    pub fn value(&mut self, x: f32) -> Result<(), Error<Spi::Error, Cs::Error>> {
        self.render_value(x, Suffix::None)
    }

    pub fn value_degree(&mut self, x: f32) -> Result<(), Error<Spi::Error, Cs::Error>> {
        self.render_value(x, Suffix::Degree)
    }

    pub fn value_percent(&mut self, x: f32) -> Result<(), Error<Spi::Error, Cs::Error>> {
        self.render_value(x, Suffix::Percent)
    }

    fn render_value(&mut self, x: f32, suffix: Suffix) -> Result<(), Error<Spi::Error, Cs::Error>> {
        let decimal = Decimal::new(x)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("value {} -> {}", x, decimal);
        self.render(&decimal.glyphs(suffix))
    }

    /// Repaints all rows with `glyphs`, left-most matrix first.
    pub fn render(&mut self, glyphs: &[Glyph; CHAIN_LEN]) -> Result<(), Error<Spi::Error, Cs::Error>> {
        for row in 0..ROWS {
            let reg = Register::Row(row as u8);
            for (i, glyph) in glyphs.iter().rev().enumerate() {
                self.transfer(reg, glyph.row(row), i == 0, i == CHAIN_LEN - 1)?;
            }
        }
        Ok(())
    }

    /// Same command to every chip in one select window.
    fn write_chain(&mut self, reg: Register, data: u8) -> Result<(), Error<Spi::Error, Cs::Error>> {
        for i in 0..CHAIN_LEN {
            self.transfer(reg, data, i == 0, i == CHAIN_LEN - 1)?;
        }
        Ok(())
    }

    /// One register write. `assert` pulls chip select low before it,
    /// `release` lets it go high after it.
    fn transfer(
        &mut self,
        reg: Register,
        data: u8,
        assert: bool,
        release: bool,
    ) -> Result<(), Error<Spi::Error, Cs::Error>> {
        if assert {
            self.cs.set_low().map_err(Error::Pin)?;
        }
        self.spi.write(&[reg.addr(), data]).map_err(Error::Spi)?;
        if release {
            self.spi.flush().map_err(Error::Spi)?;
            self.cs.set_high().map_err(Error::Pin)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction};

    use crate::display::*;

    fn chain_write(reg: u8, data: u8) -> Vec<Transaction<u8>> {
        let mut t = vec![Transaction::write_vec(vec![reg, data]); CHAIN_LEN];
        t.push(Transaction::flush());
        t
    }

    fn single_write(reg: u8, data: u8) -> Vec<Transaction<u8>> {
        vec![Transaction::write_vec(vec![reg, data]), Transaction::flush()]
    }

    fn reset_writes() -> Vec<Transaction<u8>> {
        let mut t = single_write(0x09, 0x00);
        for reg in 0x01..=0x08 {
            t.extend(single_write(reg, 0x00));
        }
        for _ in 0..3 {
            t.extend(single_write(0x00, 0x00));
        }
        t
    }

    fn select_windows(n: usize) -> Vec<PinTransaction> {
        let mut t = Vec::new();
        for _ in 0..n {
            t.push(PinTransaction::set(State::Low));
            t.push(PinTransaction::set(State::High));
        }
        t
    }

    fn init_writes() -> Vec<Transaction<u8>> {
        let mut t = reset_writes();
        t.extend(chain_write(0x0f, 0x00));
        t.extend(chain_write(0x09, 0x00));
        t.extend(chain_write(0x0a, 0x00));
        t.extend(chain_write(0x0b, 0x07));
        t.extend(chain_write(0x0c, 0x01));
        t
    }

    fn init_pin() -> Vec<PinTransaction> {
        let mut t = vec![PinTransaction::set(State::High)];
        // 12 reset writes + 5 chain commands
        t.extend(select_windows(12 + 5));
        t
    }

    #[test]
    fn test_new() {
        let mut spi = SpiMock::new(&init_writes());
        let mut cs = PinMock::new(&init_pin());

        let display = Display::new(spi.clone(), cs.clone()).unwrap();
        let _ = display.release();

        spi.done();
        cs.done();
    }

    #[test]
    fn test_intensity() {
        let mut spi_t = init_writes();
        spi_t.extend(chain_write(0x0a, 0x0f));
        let mut cs_t = init_pin();
        cs_t.extend(select_windows(1));

        let mut spi = SpiMock::new(&spi_t);
        let mut cs = PinMock::new(&cs_t);

        let mut display = Display::new(spi.clone(), cs.clone()).unwrap();
        display.intensity(0x0f).unwrap();

        spi.done();
        cs.done();
    }

    #[test]
    fn test_intensity_out_of_range() {
        let mut spi = SpiMock::new(&init_writes());
        let mut cs = PinMock::new(&init_pin());

        let mut display = Display::new(spi.clone(), cs.clone()).unwrap();
        assert_eq!(
            display.intensity(0x10),
            Err(Error::Input(InputError::IntensityOutOfRange(0x10)))
        );

        spi.done();
        cs.done();
    }

    #[test]
    fn test_reset() {
        let mut spi_t = init_writes();
        spi_t.extend(reset_writes());
        let mut cs_t = init_pin();
        cs_t.extend(select_windows(12));

        let mut spi = SpiMock::new(&spi_t);
        let mut cs = PinMock::new(&cs_t);

        let mut display = Display::new(spi.clone(), cs.clone()).unwrap();
        display.clear().unwrap();

        spi.done();
        cs.done();
    }

    #[test]
    fn test_shutdown_and_display_test() {
        let mut spi_t = init_writes();
        spi_t.extend(chain_write(0x0c, 0x00));
        spi_t.extend(chain_write(0x0c, 0x01));
        spi_t.extend(chain_write(0x0f, 0x01));
        spi_t.extend(chain_write(0x0f, 0x00));
        let mut cs_t = init_pin();
        cs_t.extend(select_windows(4));

        let mut spi = SpiMock::new(&spi_t);
        let mut cs = PinMock::new(&cs_t);

        let mut display = Display::new(spi.clone(), cs.clone()).unwrap();
        display.shutdown(true).unwrap();
        display.shutdown(false).unwrap();
        display.display_test(true).unwrap();
        display.display_test(false).unwrap();

        spi.done();
        cs.done();
    }

    #[test]
    fn test_rejected_value_writes_nothing() {
        let mut spi = SpiMock::new(&init_writes());
        let mut cs = PinMock::new(&init_pin());

        let mut display = Display::new(spi.clone(), cs.clone()).unwrap();
        assert_eq!(
            display.value(10000.0),
            Err(Error::Input(InputError::OutOfRangeValue(10000.0)))
        );
        assert_eq!(
            display.value_degree(-1.0),
            Err(Error::Input(InputError::OutOfRangeValue(-1.0)))
        );
        assert_eq!(
            display.clock_hm(24, 0),
            Err(Error::Input(InputError::InvalidTime { hour: 24, minute: 0 }))
        );

        spi.done();
        cs.done();
    }
}
