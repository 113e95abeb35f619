use embassy_rp::adc::{self, Adc, Async, Channel};

const ADC_FULL_SCALE: f32 = 4095.0;
const ADC_VREF: f32 = 3.3;

/// Die temperature from the RP2040 sensor reading, see datasheet 4.9.5.
pub fn celsius(raw: u16) -> f32 {
    let volts = raw as f32 * ADC_VREF / (ADC_FULL_SCALE + 1.0);
    27.0 - (volts - 0.706) / 0.001721
}

pub fn percent(raw: u16) -> f32 {
    raw.min(ADC_FULL_SCALE as u16) as f32 * 100.0 / ADC_FULL_SCALE
}

pub struct Sensors<'d> {
    adc: Adc<'d, Async>,
    temperature: Channel<'d>,
    level: Channel<'d>,
}

impl<'d> Sensors<'d> {
    pub fn new(adc: Adc<'d, Async>, temperature: Channel<'d>, level: Channel<'d>) -> Self {
        Self {
            adc,
            temperature,
            level,
        }
    }

    pub async fn temperature(&mut self) -> Result<f32, adc::Error> {
        Ok(celsius(self.adc.read(&mut self.temperature).await?))
    }

    /// Potentiometer position as percent of full scale.
    pub async fn level(&mut self) -> Result<f32, adc::Error> {
        Ok(percent(self.adc.read(&mut self.level).await?))
    }
}
