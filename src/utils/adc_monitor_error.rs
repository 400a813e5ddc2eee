use crate::{adc::AdcError, sampler::SamplerError};

#[derive(Debug)]
pub enum AdcMonitorError {
    Adc(AdcError),
    Sampler(SamplerError),
}

impl From<AdcError> for AdcMonitorError {
    fn from(value: AdcError) -> Self {
        AdcMonitorError::Adc(value)
    }
}

impl From<SamplerError> for AdcMonitorError {
    fn from(value: SamplerError) -> Self {
        AdcMonitorError::Sampler(value)
    }
}
