#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::adc;
use embassy_rp::gpio;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi;
use embassy_time::Ticker;

use chrono::TimeDelta;

use matrix::Display;

use matrix_clock::{
    clock::SoftClock,
    config::Config,
    events::{Event, EventSources},
    sensors::Sensors,
};

use {defmt_rtt as _, panic_probe as _};

embassy_rp::bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

type MatrixDisplay = Display<spi::Spi<'static, SPI1, spi::Blocking>, gpio::Output<'static>>;

#[derive(Copy, Clone, PartialEq, defmt::Format)]
enum DisplayMode {
    Time,
    Temperature,
    Level,
}

impl DisplayMode {
    fn next_state(&self) -> DisplayMode {
        match self {
            DisplayMode::Time => DisplayMode::Temperature,
            DisplayMode::Temperature => DisplayMode::Level,
            DisplayMode::Level => DisplayMode::Time,
        }
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let cfg = Config::default();

    defmt::info!("{}", cfg);

    let sw_mode = gpio::Input::new(p.PIN_0, gpio::Pull::Up);
    let sw_minute = gpio::Input::new(p.PIN_6, gpio::Pull::Up);
    let sw_hour = gpio::Input::new(p.PIN_7, gpio::Pull::Up);

    let display_spi_config = {
        let mut c = spi::Config::default();
        c.frequency = cfg.spi_frequency;
        c.phase = spi::Phase::CaptureOnFirstTransition;
        c.polarity = spi::Polarity::IdleLow;
        c
    };
    let display_spi = spi::Spi::new_blocking_txonly(p.SPI1, p.PIN_14, p.PIN_15, display_spi_config);
    let display_cs = gpio::Output::new(p.PIN_13, gpio::Level::High);

    let mut display = defmt::unwrap!(Display::new(display_spi, display_cs));
    defmt::unwrap!(display.intensity(cfg.intensity));

    let mut sensors = Sensors::new(
        adc::Adc::new(p.ADC, Irqs, adc::Config::default()),
        adc::Channel::new_temp_sensor(p.ADC_TEMP_SENSOR),
        adc::Channel::new_pin(p.PIN_26, gpio::Pull::None),
    );

    let mut clock = SoftClock::new(cfg.start_time());
    let mut es = EventSources::new(
        Ticker::every(cfg.refresh_period()),
        sw_mode,
        sw_minute,
        sw_hour,
    );

    let mut mode = DisplayMode::Time;
    defmt::info!("mode: {}", mode);

    loop {
        refresh(&mut display, mode, &clock, &mut sensors).await;

        match es.wait().await {
            Event::Refresh => (),
            Event::ModePressed => {
                mode = mode.next_state();
                defmt::info!("mode: {}", mode);
            }
            Event::MinutePressed if mode == DisplayMode::Time => {
                clock.adjust(TimeDelta::minutes(1));
            }
            Event::HourPressed if mode == DisplayMode::Time => {
                clock.adjust(TimeDelta::hours(1));
            }
            _ => (),
        }
    }
}

async fn refresh(
    display: &mut MatrixDisplay,
    mode: DisplayMode,
    clock: &SoftClock,
    sensors: &mut Sensors<'_>,
) {
    let result = match mode {
        DisplayMode::Time => display.clock(&clock.now()),
        DisplayMode::Temperature => match sensors.temperature().await {
            Ok(t) => display.value_degree(t),
            Err(e) => {
                defmt::warn!("temperature read failed: {}", e);
                return;
            }
        },
        DisplayMode::Level => match sensors.level().await {
            Ok(l) => display.value_percent(l),
            Err(e) => {
                defmt::warn!("level read failed: {}", e);
                return;
            }
        },
    };
    if let Err(e) = result {
        defmt::warn!("refresh skipped: {}", e);
    }
}
