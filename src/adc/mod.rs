mod calibration;
mod converter;
mod esp;

#[cfg(test)]
pub(crate) mod sim;

pub use calibration::{CalibrationSource, CalibrationStatus};
pub use converter::{AdcConverter, AdcError, AdcUnit, Attenuation, BitWidth, Channel};
pub use esp::EspAdc;
