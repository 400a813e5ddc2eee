//! Simulated converter used by the unit tests in place of the hardware.

use std::collections::VecDeque;

use crate::adc::calibration::{CalibrationSource, CalibrationStatus};
use crate::adc::converter::{AdcConverter, AdcError, BitWidth};

/// Scripted converter: reads pop outcomes off a queue and conversion follows
/// a linear model `offset + raw * gain`, which keeps it monotonic like the
/// real characteristics.
pub(crate) struct SimConverter {
    status: CalibrationStatus,
    reads: VecDeque<Result<u16, AdcError>>,
    width: Option<BitWidth>,
    characterized: bool,
    gain_mv_per_tick: u32,
    offset_mv: u32,
}

impl SimConverter {
    pub(crate) fn new(status: CalibrationStatus) -> SimConverter {
        SimConverter {
            status,
            reads: VecDeque::new(),
            width: None,
            characterized: false,
            gain_mv_per_tick: 1,
            offset_mv: 0,
        }
    }

    pub(crate) fn with_linear_model(mut self, gain_mv_per_tick: u32, offset_mv: u32) -> Self {
        self.gain_mv_per_tick = gain_mv_per_tick;
        self.offset_mv = offset_mv;
        self
    }

    /// Queues one outcome per upcoming `read_raw` call. When the queue runs
    /// dry reads fail, so a test never consumes more than it scripted.
    pub(crate) fn queue_reads<I>(&mut self, outcomes: I)
    where
        I: IntoIterator<Item = Result<u16, AdcError>>,
    {
        self.reads.extend(outcomes);
    }

    pub(crate) fn queue_constant(&mut self, value: u16, count: usize) {
        self.queue_reads(std::iter::repeat(Ok(value)).take(count));
    }
}

impl AdcConverter for SimConverter {
    fn calibration_status(&self) -> CalibrationStatus {
        self.status
    }

    fn configure(&mut self, width: BitWidth) -> Result<(), AdcError> {
        self.width = Some(width);
        Ok(())
    }

    fn characterize(&mut self, _default_vref_mv: u16) -> Result<CalibrationSource, AdcError> {
        if self.width.is_none() {
            return Err(AdcError::NotConfigured);
        }
        self.characterized = true;
        Ok(CalibrationSource::preferred(self.status))
    }

    fn read_raw(&mut self) -> Result<u16, AdcError> {
        if self.width.is_none() {
            return Err(AdcError::NotConfigured);
        }
        self.reads.pop_front().unwrap_or(Err(AdcError::ReadFailed))
    }

    fn raw_to_voltage(&self, average_raw: u16) -> Result<u32, AdcError> {
        if !self.characterized {
            return Err(AdcError::NotCharacterized);
        }
        Ok(self.offset_mv + average_raw as u32 * self.gain_mv_per_tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adc::converter::{Attenuation, BitWidth};

    const ALL_WIDTHS: [BitWidth; 4] = [
        BitWidth::Bit9,
        BitWidth::Bit10,
        BitWidth::Bit11,
        BitWidth::Bit12,
    ];
    const ALL_ATTENUATIONS: [Attenuation; 4] = [
        Attenuation::None,
        Attenuation::Db2_5,
        Attenuation::Db6,
        Attenuation::Db11,
    ];
    const ALL_STATUSES: [CalibrationStatus; 4] = [
        CalibrationStatus {
            two_point: true,
            efuse_vref: true,
        },
        CalibrationStatus {
            two_point: true,
            efuse_vref: false,
        },
        CalibrationStatus {
            two_point: false,
            efuse_vref: true,
        },
        CalibrationStatus {
            two_point: false,
            efuse_vref: false,
        },
    ];

    #[test]
    fn every_valid_combination_configures_and_characterizes() {
        for width in ALL_WIDTHS {
            for _attenuation in ALL_ATTENUATIONS {
                for status in ALL_STATUSES {
                    let mut converter = SimConverter::new(status);
                    converter.configure(width).unwrap();
                    let source = converter.characterize(1100).unwrap();
                    assert!(matches!(
                        source,
                        CalibrationSource::TwoPoint
                            | CalibrationSource::EfuseVref
                            | CalibrationSource::DefaultVref
                    ));
                }
            }
        }
    }

    #[test]
    fn characterize_requires_configuration_first() {
        let mut converter = SimConverter::new(CalibrationStatus::default());
        assert_eq!(converter.characterize(1100), Err(AdcError::NotConfigured));
    }

    #[test]
    fn conversion_requires_characterization_first() {
        let mut converter = SimConverter::new(CalibrationStatus::default());
        converter.configure(BitWidth::Bit12).unwrap();
        assert_eq!(converter.raw_to_voltage(100), Err(AdcError::NotCharacterized));
    }
}
