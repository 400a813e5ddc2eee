mod utils;

pub mod adc;
pub mod monitor;
pub mod sampler;

pub use adc::{AdcConverter, AdcError, AdcUnit, Attenuation, BitWidth, Channel};
pub use adc::{CalibrationSource, CalibrationStatus, EspAdc};
pub use monitor::VoltageMonitor;
pub use sampler::{Reading, Sampler, SamplerError};
pub use utils::adc_monitor_error;
pub use utils::delay;
