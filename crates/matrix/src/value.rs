use chrono::Timelike;

use crate::error::Error;
use crate::glyph::{self, Glyph, Variant};

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub const fn new(value: u8) -> Result<Self, Error> {
        if value > 9 {
            Err(Error::InvalidDigit(value))
        } else {
            Ok(Self(value))
        }
    }

    const fn of(n: u32) -> Self {
        Self((n % 10) as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn glyph(self, variant: Variant) -> Glyph {
        glyph::digit(variant, self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// `HH:MM` split into its four digits.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockFields {
    pub tens_hour: Digit,
    pub hour: Digit,
    pub tens_minute: Digit,
    pub minute: Digit,
}

impl ClockFields {
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, Error> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime { hour, minute });
        }
        Ok(Self {
            tens_hour: Digit::of(hour / 10),
            hour: Digit::of(hour),
            tens_minute: Digit::of(minute / 10),
            minute: Digit::of(minute),
        })
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self {
            tens_hour: Digit::of(time.hour() / 10),
            hour: Digit::of(time.hour()),
            tens_minute: Digit::of(time.minute() / 10),
            minute: Digit::of(time.minute()),
        }
    }

    /// Glyphs left to right. The colon rides on the hour digit.
    pub const fn glyphs(&self) -> [Glyph; 4] {
        [
            self.tens_hour.glyph(Variant::Plain),
            self.hour.glyph(Variant::DotMarked),
            self.tens_minute.glyph(Variant::ShiftMarked),
            self.minute.glyph(Variant::Plain),
        ]
    }
}

/// Magnitude band of a displayed value. Decides where the decimal point goes.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// 1000 <= x < 10000, no fractional digit.
    Thousands,
    /// 100 <= x < 1000, one fractional digit.
    Hundreds,
    /// 10 <= x < 100, two fractional digits.
    Tens,
    /// 0 <= x < 10, three fractional digits.
    Units,
}

impl Band {
    pub fn of(x: f32) -> Result<Self, Error> {
        if !(0.0..10000.0).contains(&x) {
            return Err(Error::OutOfRangeValue(x));
        }
        Ok(if x >= 1000.0 {
            Band::Thousands
        } else if x >= 100.0 {
            Band::Hundreds
        } else if x >= 10.0 {
            Band::Tens
        } else {
            Band::Units
        })
    }

    /// Position of the units digit, counted from the left.
    pub const fn units_index(self) -> usize {
        match self {
            Band::Thousands => 3,
            Band::Hundreds => 2,
            Band::Tens => 1,
            Band::Units => 0,
        }
    }

    pub const fn fraction_digits(self) -> usize {
        3 - self.units_index()
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suffix {
    None,
    Degree,
    Percent,
}

/// Four decimal digits of a value, most significant first.
///
/// Fractional digits are truncated, never rounded: 9.96 in the units band is
/// shown as 9.960, and 99.96 with a suffix is shown as 99.9.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decimal {
    pub band: Band,
    pub digits: [Digit; 4],
}

impl Decimal {
    pub fn new(x: f32) -> Result<Self, Error> {
        let band = Band::of(x)?;
        let int = x as u32;
        let units = Digit::of(int);
        let tens = Digit::of(int / 10);
        let hundreds = Digit::of(int / 100);
        let tenths = Digit::of((x * 10.0) as u32);
        let hundredths = Digit::of((x * 100.0) as u32);
        let digits = match band {
            Band::Thousands => [Digit::of(int / 1000), hundreds, tens, units],
            Band::Hundreds => [hundreds, tens, units, tenths],
            Band::Tens => [tens, units, tenths, hundredths],
            Band::Units => [units, tenths, hundredths, Digit::of((x * 1000.0) as u32)],
        };
        Ok(Self { band, digits })
    }

    /// Glyphs left to right.
    ///
    /// A suffix takes the right-most matrix, dropping the last fractional
    /// digit. The thousands band has no fractional digit to give up and is
    /// shown without the suffix.
    pub fn glyphs(&self, suffix: Suffix) -> [Glyph; 4] {
        let point = self.band.units_index();
        let mut glyphs = [Glyph::BLANK; 4];
        for (i, (digit, glyph)) in self.digits.iter().zip(glyphs.iter_mut()).enumerate() {
            let variant = if i == point && self.band != Band::Thousands {
                Variant::CommaMarked
            } else {
                Variant::Plain
            };
            *glyph = digit.glyph(variant);
        }
        if self.band != Band::Thousands {
            match suffix {
                Suffix::None => (),
                Suffix::Degree => glyphs[3] = glyph::DEGREE,
                Suffix::Percent => glyphs[3] = glyph::PERCENT,
            }
        }
        glyphs
    }
}
