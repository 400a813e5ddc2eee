use crate::adc::{AdcConverter, AdcError};

/// Enums the different errors possible when taking a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerError {
    /// Every raw read in the pass failed, so there is nothing to average.
    NoValidSamples,
    Conversion(AdcError),
}

/// One averaged measurement.
///
/// - `average_raw`: Integer-truncated mean of the valid raw samples
/// - `millivolts`: The average converted through the calibration record
/// - `dropped_samples`: How many reads failed and were left out of the mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub average_raw: u16,
    pub millivolts: u32,
    pub dropped_samples: u16,
}

/// Takes multisampled readings from a configured and characterized
/// converter. Owns the converter for the lifetime of the process.
pub struct Sampler<C: AdcConverter> {
    converter: C,
    samples_per_reading: u16,
}

impl<C: AdcConverter> Sampler<C> {
    /// Creates a new Sampler.
    ///
    /// # Arguments
    ///
    /// - `converter`: A configured and characterized converter
    /// - `samples_per_reading`: How many raw samples are averaged per reading
    pub fn new(converter: C, samples_per_reading: u16) -> Sampler<C> {
        Sampler {
            converter,
            samples_per_reading,
        }
    }

    /// Acquires one multisampled reading: reads the channel
    /// `samples_per_reading` times sequentially, averages the valid samples
    /// with integer truncation and converts the result to millivolts.
    ///
    /// A failed read is skipped, not folded into the sum; the mean divides
    /// by the number of valid samples and `dropped_samples` accounts for the
    /// rest.
    ///
    /// # Returns
    ///
    /// A `Result` with the `Reading`, or a `SamplerError` if it fails.
    ///
    /// # Errors
    ///
    /// - `SamplerError::NoValidSamples`: If every read in the pass failed
    /// - `SamplerError::Conversion`: If the converter could not convert the
    ///   average to a voltage
    pub fn read(&mut self) -> Result<Reading, SamplerError> {
        let mut sum: u32 = 0;
        let mut valid: u16 = 0;
        let mut dropped: u16 = 0;
        for _ in 0..self.samples_per_reading {
            match self.converter.read_raw() {
                Ok(raw) => {
                    sum += raw as u32;
                    valid += 1;
                }
                Err(_) => dropped += 1,
            }
        }
        if valid == 0 {
            return Err(SamplerError::NoValidSamples);
        }
        let average_raw = (sum / valid as u32) as u16;
        let millivolts = self
            .converter
            .raw_to_voltage(average_raw)
            .map_err(SamplerError::Conversion)?;
        Ok(Reading {
            average_raw,
            millivolts,
            dropped_samples: dropped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adc::sim::SimConverter;
    use crate::adc::{BitWidth, CalibrationStatus};

    const SAMPLES: u16 = 64;

    fn ready_converter() -> SimConverter {
        let mut converter = SimConverter::new(CalibrationStatus::default());
        converter.configure(BitWidth::Bit12).unwrap();
        converter.characterize(1100).unwrap();
        converter
    }

    #[test]
    fn constant_samples_average_to_themselves() {
        let mut converter = ready_converter();
        converter.queue_constant(100, SAMPLES as usize);
        let mut sampler = Sampler::new(converter, SAMPLES);

        let reading = sampler.read().unwrap();
        assert_eq!(reading.average_raw, 100);
        assert_eq!(reading.dropped_samples, 0);
    }

    #[test]
    fn average_truncates_toward_zero() {
        let mut converter = ready_converter();
        // 10 + 11 + 11 + 11 = 43, 43 / 4 = 10 truncated
        converter.queue_reads([Ok(10), Ok(11), Ok(11), Ok(11)]);
        let mut sampler = Sampler::new(converter, 4);

        assert_eq!(sampler.read().unwrap().average_raw, 10);
    }

    #[test]
    fn failed_reads_are_skipped_not_summed() {
        let mut converter = ready_converter();
        converter.queue_reads([
            Ok(200),
            Err(crate::adc::AdcError::ReadFailed),
            Ok(100),
            Err(crate::adc::AdcError::ReadFailed),
        ]);
        let mut sampler = Sampler::new(converter, 4);

        let reading = sampler.read().unwrap();
        // Mean of the two valid samples only.
        assert_eq!(reading.average_raw, 150);
        assert_eq!(reading.dropped_samples, 2);
    }

    #[test]
    fn all_reads_failing_is_an_error_not_a_reading() {
        let converter = ready_converter();
        // Nothing queued: every read reports the driver failure.
        let mut sampler = Sampler::new(converter, SAMPLES);

        assert_eq!(sampler.read(), Err(SamplerError::NoValidSamples));
    }

    #[test]
    fn voltage_is_monotonic_in_the_averaged_raw_value() {
        let mut previous = 0;
        for raw in [0u16, 1, 100, 1000, 2048, 4095] {
            let mut converter =
                SimConverter::new(CalibrationStatus::default()).with_linear_model(3, 142);
            converter.configure(BitWidth::Bit12).unwrap();
            converter.characterize(1100).unwrap();
            converter.queue_constant(raw, 8);
            let mut sampler = Sampler::new(converter, 8);

            let millivolts = sampler.read().unwrap().millivolts;
            assert!(millivolts >= previous);
            previous = millivolts;
        }
    }

    #[test]
    fn sum_does_not_overflow_at_full_scale() {
        let mut converter = ready_converter();
        converter.queue_constant(4095, SAMPLES as usize);
        let mut sampler = Sampler::new(converter, SAMPLES);

        assert_eq!(sampler.read().unwrap().average_raw, 4095);
    }
}
