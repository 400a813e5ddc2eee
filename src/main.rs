//! Periodically samples an ADC channel, averages the samples, converts the
//! average to millivolts with the factory calibration and prints the result.

use adc_monitor::adc_monitor_error::AdcMonitorError;
use adc_monitor::delay::FreeRtosDelay;
use adc_monitor::{
    AdcConverter, AdcUnit, Attenuation, BitWidth, CalibrationStatus, Channel, EspAdc, Sampler,
    VoltageMonitor,
};

// Channel 6 of unit 1 is wired to GPIO34.
const UNIT: AdcUnit = AdcUnit::Adc1;
const CHANNEL: Channel = Channel::Channel6;
const ATTENUATION: Attenuation = Attenuation::Db6;
const WIDTH: BitWidth = BitWidth::Bit12;

// Use adc2_vref_to_gpio() to obtain a better estimate.
const DEFAULT_VREF_MV: u16 = 1100;
const SAMPLES_PER_READING: u16 = 64;
const REPORT_INTERVAL_MS: u32 = 1000;

fn report_calibration_status(status: &CalibrationStatus) {
    if status.two_point {
        log::info!("eFuse Two Point: Supported");
    } else {
        log::info!("eFuse Two Point: NOT supported");
    }
    if status.efuse_vref {
        log::info!("eFuse Vref: Supported");
    } else {
        log::info!("eFuse Vref: NOT supported");
    }
}

fn main() -> Result<(), AdcMonitorError> {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let mut adc = EspAdc::new(UNIT, CHANNEL, ATTENUATION);

    report_calibration_status(&adc.calibration_status());

    // An invalid unit/channel/attenuation combination aborts startup here.
    adc.configure(WIDTH)?;
    let source = adc.characterize(DEFAULT_VREF_MV)?;
    log::info!("Characterized using {}", source.description());

    let sampler = Sampler::new(adc, SAMPLES_PER_READING);
    let mut monitor = VoltageMonitor::new(sampler, FreeRtosDelay, REPORT_INTERVAL_MS);
    monitor.run(|outcome| match outcome {
        Ok(reading) => {
            if reading.dropped_samples > 0 {
                log::warn!(
                    "{} of {} samples dropped this pass",
                    reading.dropped_samples,
                    SAMPLES_PER_READING
                );
            }
            println!(
                "Raw: {}\tVoltage: {}mV",
                reading.average_raw, reading.millivolts
            );
        }
        Err(error) => log::error!("Sampling pass produced no reading: {:?}", error),
    })
}
