//! Row patterns for one 8x8 matrix.
//!
//! Row 0 is the top row. Bit 7 of a row is the left-most column.
//!
//! ```text
//! col  0 1 2 3 4 5 6 7
//! bit  7 6 5 4 3 2 1 0
//! ```
//!
//! Plain digits are 5x7 and sit in columns 2..=6, rows 0..=6. Column 7 is
//! left free for the colon and the decimal point.

use crate::error::Error;

pub const ROWS: usize = 8;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph(pub [u8; ROWS]);

impl Glyph {
    pub const BLANK: Glyph = Glyph([0; ROWS]);

    /// Pattern of `row`, which must be below [`ROWS`]. Use [`lookup`] for an
    /// unchecked row number.
    ///
    /// # Panics
    ///
    /// If `row` is 8 or more.
    pub const fn row(&self, row: usize) -> u8 {
        self.0[row]
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Plain,
    /// Colon on the right edge, for the hour digit of a clock.
    DotMarked,
    /// Moved one column to the left, for the digit right of the colon.
    ShiftMarked,
    /// Decimal point on the right edge.
    CommaMarked,
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Digit(Variant),
    Degree,
    Percent,
}

const PLAIN: [Glyph; 10] = [
    // '0'
    Glyph([
        0b00011100_u8,
        0b00100010_u8,
        0b00100110_u8,
        0b00101010_u8,
        0b00110010_u8,
        0b00100010_u8,
        0b00011100_u8,
        0b00000000_u8,
    ]),
    // '1'
    Glyph([
        0b00001000_u8,
        0b00011000_u8,
        0b00001000_u8,
        0b00001000_u8,
        0b00001000_u8,
        0b00001000_u8,
        0b00011100_u8,
        0b00000000_u8,
    ]),
    // '2'
    Glyph([
        0b00011100_u8,
        0b00100010_u8,
        0b00000010_u8,
        0b00000100_u8,
        0b00001000_u8,
        0b00010000_u8,
        0b00111110_u8,
        0b00000000_u8,
    ]),
    // '3'
    Glyph([
        0b00111110_u8,
        0b00000100_u8,
        0b00001000_u8,
        0b00000100_u8,
        0b00000010_u8,
        0b00100010_u8,
        0b00011100_u8,
        0b00000000_u8,
    ]),
    // '4'
    Glyph([
        0b00000100_u8,
        0b00001100_u8,
        0b00010100_u8,
        0b00100100_u8,
        0b00111110_u8,
        0b00000100_u8,
        0b00000100_u8,
        0b00000000_u8,
    ]),
    // '5'
    Glyph([
        0b00111110_u8,
        0b00100000_u8,
        0b00111100_u8,
        0b00000010_u8,
        0b00000010_u8,
        0b00100010_u8,
        0b00011100_u8,
        0b00000000_u8,
    ]),
    // '6'
    Glyph([
        0b00001100_u8,
        0b00010000_u8,
        0b00100000_u8,
        0b00111100_u8,
        0b00100010_u8,
        0b00100010_u8,
        0b00011100_u8,
        0b00000000_u8,
    ]),
    // '7'
    Glyph([
        0b00111110_u8,
        0b00000010_u8,
        0b00000100_u8,
        0b00001000_u8,
        0b00010000_u8,
        0b00010000_u8,
        0b00010000_u8,
        0b00000000_u8,
    ]),
    // '8'
    Glyph([
        0b00011100_u8,
        0b00100010_u8,
        0b00100010_u8,
        0b00011100_u8,
        0b00100010_u8,
        0b00100010_u8,
        0b00011100_u8,
        0b00000000_u8,
    ]),
    // '9'
    Glyph([
        0b00011100_u8,
        0b00100010_u8,
        0b00100010_u8,
        0b00011110_u8,
        0b00000010_u8,
        0b00000100_u8,
        0b00011000_u8,
        0b00000000_u8,
    ]),
];

pub(crate) const DEGREE: Glyph = Glyph([
    0b01100000_u8,
    0b10010000_u8,
    0b10010000_u8,
    0b01100000_u8,
    0b00000000_u8,
    0b00000000_u8,
    0b00000000_u8,
    0b00000000_u8,
]);

pub(crate) const PERCENT: Glyph = Glyph([
    0b11000010_u8,
    0b11000100_u8,
    0b00001000_u8,
    0b00010000_u8,
    0b00100000_u8,
    0b01000110_u8,
    0b10000110_u8,
    0b00000000_u8,
]);

const MASK_COLON: Glyph = Glyph([0, 0, 0b00000001, 0, 0b00000001, 0, 0, 0]);
const MASK_DP: Glyph = Glyph([0, 0, 0, 0, 0, 0, 0b00000001, 0]);

const fn with_mask(table: [Glyph; 10], mask: Glyph) -> [Glyph; 10] {
    let mut out = table;
    let mut d = 0;
    while d < out.len() {
        let mut r = 0;
        while r < ROWS {
            out[d].0[r] |= mask.0[r];
            r += 1;
        }
        d += 1;
    }
    out
}

const fn shifted_left(table: [Glyph; 10]) -> [Glyph; 10] {
    let mut out = table;
    let mut d = 0;
    while d < out.len() {
        let mut r = 0;
        while r < ROWS {
            out[d].0[r] <<= 1;
            r += 1;
        }
        d += 1;
    }
    out
}

const DOT_MARKED: [Glyph; 10] = with_mask(PLAIN, MASK_COLON);
const SHIFT_MARKED: [Glyph; 10] = shifted_left(PLAIN);
const COMMA_MARKED: [Glyph; 10] = with_mask(PLAIN, MASK_DP);

/// Digit glyph for an already validated digit.
pub(crate) const fn digit(variant: Variant, value: u8) -> Glyph {
    let table = match variant {
        Variant::Plain => &PLAIN,
        Variant::DotMarked => &DOT_MARKED,
        Variant::ShiftMarked => &SHIFT_MARKED,
        Variant::CommaMarked => &COMMA_MARKED,
    };
    table[value as usize]
}

/// Looks up the glyph of `category`. `value` is only used for digits.
pub fn glyph(category: Category, value: u8) -> Result<Glyph, Error> {
    match category {
        Category::Digit(_) if value > 9 => Err(Error::InvalidDigit(value)),
        Category::Digit(variant) => Ok(digit(variant, value)),
        Category::Degree => Ok(DEGREE),
        Category::Percent => Ok(PERCENT),
    }
}

pub fn lookup(category: Category, value: u8, row: u8) -> Result<u8, Error> {
    if row as usize >= ROWS {
        return Err(Error::InvalidRow(row));
    }
    Ok(glyph(category, value)?.row(row as usize))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::glyph::*;

    const VARIANTS: [Variant; 4] = [
        Variant::Plain,
        Variant::DotMarked,
        Variant::ShiftMarked,
        Variant::CommaMarked,
    ];

    #[test]
    fn lookup_is_stable() {
        for variant in VARIANTS {
            for value in 0..10 {
                let first = glyph(Category::Digit(variant), value).unwrap();
                assert_eq!(first.0.len(), ROWS);
                assert_eq!(glyph(Category::Digit(variant), value), Ok(first));
                for row in 0..ROWS as u8 {
                    assert_eq!(
                        lookup(Category::Digit(variant), value, row),
                        Ok(first.row(row as usize))
                    );
                }
            }
        }
    }

    #[test]
    fn digits_are_distinct() {
        for variant in VARIANTS {
            for a in 0..10 {
                for b in a + 1..10 {
                    assert_ne!(
                        glyph(Category::Digit(variant), a),
                        glyph(Category::Digit(variant), b)
                    );
                }
            }
        }
    }

    #[test]
    fn variants_derive_from_plain() {
        for value in 0..10 {
            let plain = glyph(Category::Digit(Variant::Plain), value).unwrap();
            let dot = glyph(Category::Digit(Variant::DotMarked), value).unwrap();
            let shift = glyph(Category::Digit(Variant::ShiftMarked), value).unwrap();
            let comma = glyph(Category::Digit(Variant::CommaMarked), value).unwrap();
            for row in 0..ROWS {
                // right-most column is never used by a plain digit
                assert_eq!(plain.row(row) & 0b1000_0001, 0);
                assert_eq!(dot.row(row) & !0b0000_0001, plain.row(row));
                assert_eq!(comma.row(row) & !0b0000_0001, plain.row(row));
                assert_eq!(shift.row(row), plain.row(row) << 1);
            }
            assert_eq!(dot.row(2) & 1, 1);
            assert_eq!(dot.row(4) & 1, 1);
            assert_eq!(comma.row(6) & 1, 1);
            assert_eq!(comma.row(7), 0);
        }
    }

    #[test]
    fn symbols_ignore_value() {
        assert_eq!(glyph(Category::Degree, 0), glyph(Category::Degree, 200));
        assert_eq!(glyph(Category::Percent, 3), glyph(Category::Percent, 99));
        assert_eq!(lookup(Category::Percent, 42, 0), Ok(0b11000010));
        assert_eq!(lookup(Category::Degree, 0, 7), Ok(0));
    }

    #[test]
    fn invalid_digit() {
        for variant in VARIANTS {
            assert_eq!(
                glyph(Category::Digit(variant), 10),
                Err(Error::InvalidDigit(10))
            );
            assert_eq!(
                lookup(Category::Digit(variant), 255, 0),
                Err(Error::InvalidDigit(255))
            );
        }
    }

    #[test]
    fn invalid_row() {
        assert_eq!(
            lookup(Category::Digit(Variant::Plain), 1, 8),
            Err(Error::InvalidRow(8))
        );
        assert_eq!(lookup(Category::Degree, 0, 200), Err(Error::InvalidRow(200)));
    }

    #[test]
    fn row_reads_each_row() {
        let g = glyph(Category::Digit(Variant::CommaMarked), 0).unwrap();
        for row in 0..ROWS {
            assert_eq!(g.row(row), g.0[row]);
        }
    }

    #[test]
    #[should_panic]
    fn row_past_the_bottom_panics() {
        let _ = Glyph::BLANK.row(ROWS);
    }
}
