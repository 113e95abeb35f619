use embassy_futures::select::*;
use embassy_rp::gpio;
use embassy_time::{Ticker, Timer};

#[derive(Copy, Clone, PartialEq, defmt::Format)]
pub enum Event {
    Refresh,
    ModePressed,
    MinutePressed,
    HourPressed,
}

pub struct EventSources<'d> {
    ticker: Ticker,
    gpio_mode: DebouncedInput<'d>,
    gpio_minute: DebouncedInput<'d>,
    gpio_hour: DebouncedInput<'d>,
}

impl<'d> EventSources<'d> {
    pub fn new(
        ticker: Ticker,
        gpio_mode: gpio::Input<'d>,
        gpio_minute: gpio::Input<'d>,
        gpio_hour: gpio::Input<'d>,
    ) -> Self {
        Self {
            ticker,
            gpio_mode: DebouncedInput(gpio_mode),
            gpio_minute: DebouncedInput(gpio_minute),
            gpio_hour: DebouncedInput(gpio_hour),
        }
    }

    pub async fn wait(&mut self) -> Event {
        match select4(
            self.ticker.next(),
            self.gpio_mode.wait_for_falling_edge(),
            self.gpio_minute.wait_for_falling_edge(),
            self.gpio_hour.wait_for_falling_edge(),
        )
        .await
        {
            Either4::First(..) => Event::Refresh,
            Either4::Second(..) => Event::ModePressed,
            Either4::Third(..) => Event::MinutePressed,
            Either4::Fourth(..) => Event::HourPressed,
        }
    }
}

struct DebouncedInput<'d>(gpio::Input<'d>);

impl DebouncedInput<'_> {
    async fn wait_for_falling_edge(&mut self) {
        loop {
            self.0.wait_for_falling_edge().await;
            Timer::after_millis(20).await;
            if self.0.get_level() == gpio::Level::Low {
                break;
            }
        }
    }
}
