use esp_idf_svc::sys::{
    adc1_channel_t, adc1_channel_t_ADC1_CHANNEL_0, adc1_channel_t_ADC1_CHANNEL_1,
    adc1_channel_t_ADC1_CHANNEL_2, adc1_channel_t_ADC1_CHANNEL_3, adc1_channel_t_ADC1_CHANNEL_4,
    adc1_channel_t_ADC1_CHANNEL_5, adc1_channel_t_ADC1_CHANNEL_6, adc1_channel_t_ADC1_CHANNEL_7,
    adc2_channel_t, adc2_channel_t_ADC2_CHANNEL_0, adc2_channel_t_ADC2_CHANNEL_1,
    adc2_channel_t_ADC2_CHANNEL_2, adc2_channel_t_ADC2_CHANNEL_3, adc2_channel_t_ADC2_CHANNEL_4,
    adc2_channel_t_ADC2_CHANNEL_5, adc2_channel_t_ADC2_CHANNEL_6, adc2_channel_t_ADC2_CHANNEL_7,
    adc_atten_t, adc_atten_t_ADC_ATTEN_DB_0, adc_atten_t_ADC_ATTEN_DB_11,
    adc_atten_t_ADC_ATTEN_DB_2_5, adc_atten_t_ADC_ATTEN_DB_6, adc_bits_width_t,
    adc_bits_width_t_ADC_WIDTH_BIT_10, adc_bits_width_t_ADC_WIDTH_BIT_11,
    adc_bits_width_t_ADC_WIDTH_BIT_12, adc_bits_width_t_ADC_WIDTH_BIT_9, adc_unit_t,
    adc_unit_t_ADC_UNIT_1, adc_unit_t_ADC_UNIT_2,
};

use crate::adc::calibration::{CalibrationSource, CalibrationStatus};

/// Enums the different errors possible when working with the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcError {
    InvalidConfiguration,
    NotCharacterized,
    NotConfigured,
    ReadFailed,
}

/// Enums the two converter units of the ESP32. Unit 2 is shared with the
/// Wi-Fi driver and should only be sampled while Wi-Fi is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcUnit {
    Adc1,
    Adc2,
}

/// Enums the possible channels of a converter unit. On unit 1 channel 6
/// is wired to GPIO34, on unit 2 to GPIO14.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Channel0,
    Channel1,
    Channel2,
    Channel3,
    Channel4,
    Channel5,
    Channel6,
    Channel7,
}

/// Enums the input attenuation settings. The attenuation selects the input
/// voltage range the converter can measure, from roughly 0-800mV with no
/// attenuation up to roughly 0-3.1V at 11dB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attenuation {
    None,
    Db2_5,
    Db6,
    Db11,
}

/// Enums the capture resolutions supported by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitWidth {
    Bit9,
    Bit10,
    Bit11,
    Bit12,
}

impl AdcUnit {
    pub(crate) fn raw(self) -> adc_unit_t {
        match self {
            AdcUnit::Adc1 => adc_unit_t_ADC_UNIT_1,
            AdcUnit::Adc2 => adc_unit_t_ADC_UNIT_2,
        }
    }
}

impl Channel {
    pub(crate) fn raw_adc1(self) -> adc1_channel_t {
        match self {
            Channel::Channel0 => adc1_channel_t_ADC1_CHANNEL_0,
            Channel::Channel1 => adc1_channel_t_ADC1_CHANNEL_1,
            Channel::Channel2 => adc1_channel_t_ADC1_CHANNEL_2,
            Channel::Channel3 => adc1_channel_t_ADC1_CHANNEL_3,
            Channel::Channel4 => adc1_channel_t_ADC1_CHANNEL_4,
            Channel::Channel5 => adc1_channel_t_ADC1_CHANNEL_5,
            Channel::Channel6 => adc1_channel_t_ADC1_CHANNEL_6,
            Channel::Channel7 => adc1_channel_t_ADC1_CHANNEL_7,
        }
    }

    pub(crate) fn raw_adc2(self) -> adc2_channel_t {
        match self {
            Channel::Channel0 => adc2_channel_t_ADC2_CHANNEL_0,
            Channel::Channel1 => adc2_channel_t_ADC2_CHANNEL_1,
            Channel::Channel2 => adc2_channel_t_ADC2_CHANNEL_2,
            Channel::Channel3 => adc2_channel_t_ADC2_CHANNEL_3,
            Channel::Channel4 => adc2_channel_t_ADC2_CHANNEL_4,
            Channel::Channel5 => adc2_channel_t_ADC2_CHANNEL_5,
            Channel::Channel6 => adc2_channel_t_ADC2_CHANNEL_6,
            Channel::Channel7 => adc2_channel_t_ADC2_CHANNEL_7,
        }
    }
}

impl Attenuation {
    pub(crate) fn raw(self) -> adc_atten_t {
        match self {
            Attenuation::None => adc_atten_t_ADC_ATTEN_DB_0,
            Attenuation::Db2_5 => adc_atten_t_ADC_ATTEN_DB_2_5,
            Attenuation::Db6 => adc_atten_t_ADC_ATTEN_DB_6,
            Attenuation::Db11 => adc_atten_t_ADC_ATTEN_DB_11,
        }
    }
}

impl BitWidth {
    pub(crate) fn raw(self) -> adc_bits_width_t {
        match self {
            BitWidth::Bit9 => adc_bits_width_t_ADC_WIDTH_BIT_9,
            BitWidth::Bit10 => adc_bits_width_t_ADC_WIDTH_BIT_10,
            BitWidth::Bit11 => adc_bits_width_t_ADC_WIDTH_BIT_11,
            BitWidth::Bit12 => adc_bits_width_t_ADC_WIDTH_BIT_12,
        }
    }

    /// Returns the largest raw tick value the converter can produce at this
    /// resolution (4095 for 12 bits).
    pub fn max_reading(self) -> u16 {
        match self {
            BitWidth::Bit9 => (1 << 9) - 1,
            BitWidth::Bit10 => (1 << 10) - 1,
            BitWidth::Bit11 => (1 << 11) - 1,
            BitWidth::Bit12 => (1 << 12) - 1,
        }
    }
}

/// Capability interface over a converter unit. The sampling logic only talks
/// to this trait, so it can run against the ESP-IDF driver on the chip or a
/// simulated converter in tests.
///
/// Expected call order: `calibration_status` may be queried at any time,
/// `configure` must run once before `characterize`, and `characterize` must
/// run before `raw_to_voltage` can convert.
pub trait AdcConverter {
    /// Reports which factory calibration values are burned into the eFuse.
    /// Absence of calibration data is a normal condition, not an error.
    fn calibration_status(&self) -> CalibrationStatus;

    /// Configures capture width and channel attenuation on the unit.
    ///
    /// # Arguments
    ///
    /// - `width`: A BitWidth representing the desired capture resolution
    ///
    /// # Errors
    ///
    /// - `AdcError::InvalidConfiguration`: If the unit/channel/attenuation
    ///   combination is rejected by the driver
    fn configure(&mut self, width: BitWidth) -> Result<(), AdcError>;

    /// Builds the calibration characteristics from the best available
    /// source, in priority order: two-point factory calibration, then the
    /// eFuse reference voltage, then the supplied default.
    ///
    /// # Arguments
    ///
    /// - `default_vref_mv`: Reference voltage in millivolts to fall back on
    ///   when no calibration is burned into the eFuse
    ///
    /// # Returns
    ///
    /// A `Result` with the `CalibrationSource` that was selected, or an
    /// `AdcError` if the converter was not configured first.
    fn characterize(&mut self, default_vref_mv: u16) -> Result<CalibrationSource, AdcError>;

    /// Performs one blocking raw read on the configured channel.
    ///
    /// # Returns
    ///
    /// A `Result` with Ok having a u16 tick count bounded by the configured
    /// width, or an `AdcError` if the read failed.
    ///
    /// # Errors
    ///
    /// - `AdcError::NotConfigured`: If `configure` was never called
    /// - `AdcError::ReadFailed`: If the driver reported its error sentinel
    fn read_raw(&mut self) -> Result<u16, AdcError>;

    /// Converts an averaged raw reading to millivolts using the calibration
    /// characteristics.
    ///
    /// # Errors
    ///
    /// - `AdcError::NotCharacterized`: If `characterize` was never called
    fn raw_to_voltage(&self, average_raw: u16) -> Result<u32, AdcError>;
}
