#![no_std]

//! Clock and number rendering on four daisy-chained MAX7219 8x8 matrices.

pub mod display;
pub mod error;
pub mod glyph;
pub mod register;
pub mod value;

pub use display::{CHAIN_LEN, Display};
pub use error::Error;
pub use glyph::{Category, Glyph, Variant};
pub use value::{ClockFields, Decimal, Digit};
