use chrono::NaiveTime;
use embassy_time::Duration;

/// Build-time settings. Nothing here is persisted or changed at run time.
#[derive(Copy, Clone, PartialEq, defmt::Format)]
pub struct Config {
    pub start_hour: u32,
    pub start_minute: u32,
    /// 0x00..=0x0f
    pub intensity: u8,
    pub refresh_millis: u64,
    pub spi_frequency: u32,
}

impl Config {
    pub const DEFAULT: Config = Config {
        start_hour: 12,
        start_minute: 0,
        intensity: 0x02,
        refresh_millis: 1000,
        // MAX7219 allows up to 10 MHz
        spi_frequency: 1_000_000,
    };

    pub fn start_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.start_hour, self.start_minute, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_millis(self.refresh_millis)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
