#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::gpio;
use embassy_rp::spi;
use embassy_time::Timer;

use matrix::glyph::{Category, Glyph, Variant, glyph};
use matrix::{CHAIN_LEN, Display};

use {defmt_rtt as _, panic_probe as _};

const VARIANTS: [Variant; 4] = [
    Variant::Plain,
    Variant::DotMarked,
    Variant::ShiftMarked,
    Variant::CommaMarked,
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let display_spi_config = {
        let mut c = spi::Config::default();
        c.frequency = 1_000_000;
        c.phase = spi::Phase::CaptureOnFirstTransition;
        c.polarity = spi::Polarity::IdleLow;
        c
    };
    let display_spi = spi::Spi::new_blocking_txonly(p.SPI1, p.PIN_14, p.PIN_15, display_spi_config);
    let display_cs = gpio::Output::new(p.PIN_13, gpio::Level::High);

    let mut display = defmt::unwrap!(Display::new(display_spi, display_cs));

    defmt::unwrap!(display.display_test(true));
    Timer::after_millis(1000).await;
    defmt::unwrap!(display.display_test(false));

    loop {
        for variant in VARIANTS {
            defmt::info!("{}", variant);
            for i in 0..10_u8 {
                let mut glyphs = [Glyph::BLANK; CHAIN_LEN];
                for (n, g) in glyphs.iter_mut().enumerate() {
                    *g = defmt::unwrap!(glyph(Category::Digit(variant), (i + n as u8) % 10));
                }
                defmt::unwrap!(display.render(&glyphs));
                Timer::after_millis(500).await;
            }
        }

        let degree = defmt::unwrap!(glyph(Category::Degree, 0));
        let percent = defmt::unwrap!(glyph(Category::Percent, 0));
        defmt::unwrap!(display.render(&[degree, percent, degree, percent]));

        for level in (0..=0x0f).chain((0..0x0f).rev()) {
            defmt::unwrap!(display.intensity(level));
            Timer::after_millis(100).await;
        }
        defmt::unwrap!(display.intensity(0x02));
        defmt::unwrap!(display.clear());
        Timer::after_millis(500).await;
    }
}
