use std::mem;

use esp_idf_svc::sys::{
    adc1_config_channel_atten, adc1_config_width, adc1_get_raw, adc2_config_channel_atten,
    adc2_get_raw, esp_adc_cal_characteristics_t, esp_adc_cal_characterize,
    esp_adc_cal_check_efuse, esp_adc_cal_raw_to_voltage,
    esp_adc_cal_value_t_ESP_ADC_CAL_VAL_EFUSE_TP, esp_adc_cal_value_t_ESP_ADC_CAL_VAL_EFUSE_VREF,
    ESP_OK,
};

use crate::adc::calibration::{CalibrationSource, CalibrationStatus};
use crate::adc::converter::{AdcConverter, AdcError, AdcUnit, Attenuation, BitWidth, Channel};

/// Converter implementation over the ESP-IDF oneshot ADC driver and the
/// `esp_adc_cal` calibration component.
///
/// The calibration characteristics are owned by the instance, written once
/// by [`AdcConverter::characterize`] and read on every conversion.
///
/// - `unit`: The converter unit the instance samples from
/// - `channel`: The channel being sampled; all reads go through it
/// - `attenuation`: Input range setting, applied to the channel on configure
/// - `width`: Capture resolution, set once by configure
/// - `characteristics`: Calibration record built by characterize
pub struct EspAdc {
    unit: AdcUnit,
    channel: Channel,
    attenuation: Attenuation,
    width: Option<BitWidth>,
    characteristics: Option<esp_adc_cal_characteristics_t>,
}

impl EspAdc {
    /// Creates a new EspAdc for a unit/channel/attenuation selection.
    /// Nothing is written to the hardware until `configure` is called.
    pub fn new(unit: AdcUnit, channel: Channel, attenuation: Attenuation) -> EspAdc {
        EspAdc {
            unit,
            channel,
            attenuation,
            width: None,
            characteristics: None,
        }
    }

    fn read_raw_adc1(&mut self) -> Result<u16, AdcError> {
        // adc1_get_raw returns -1 on parameter error. Surface it instead of
        // letting the sentinel reach the running sum.
        let raw = unsafe { adc1_get_raw(self.channel.raw_adc1()) };
        if raw < 0 {
            return Err(AdcError::ReadFailed);
        }
        Ok(raw as u16)
    }

    fn read_raw_adc2(&mut self, width: BitWidth) -> Result<u16, AdcError> {
        let mut raw: i32 = 0;
        let err = unsafe { adc2_get_raw(self.channel.raw_adc2(), width.raw(), &mut raw) };
        if err != ESP_OK || raw < 0 {
            return Err(AdcError::ReadFailed);
        }
        Ok(raw as u16)
    }
}

impl AdcConverter for EspAdc {
    fn calibration_status(&self) -> CalibrationStatus {
        // Anything other than ESP_OK (not supported, invalid arg) means the
        // value cannot be used, which is reported as absent.
        let two_point = unsafe {
            esp_adc_cal_check_efuse(esp_adc_cal_value_t_ESP_ADC_CAL_VAL_EFUSE_TP) == ESP_OK
        };
        let efuse_vref = unsafe {
            esp_adc_cal_check_efuse(esp_adc_cal_value_t_ESP_ADC_CAL_VAL_EFUSE_VREF) == ESP_OK
        };
        CalibrationStatus {
            two_point,
            efuse_vref,
        }
    }

    fn configure(&mut self, width: BitWidth) -> Result<(), AdcError> {
        match self.unit {
            AdcUnit::Adc1 => {
                // Width applies to all channels of unit 1 at once.
                let err = unsafe { adc1_config_width(width.raw()) };
                if err != ESP_OK {
                    return Err(AdcError::InvalidConfiguration);
                }
                let err = unsafe {
                    adc1_config_channel_atten(self.channel.raw_adc1(), self.attenuation.raw())
                };
                if err != ESP_OK {
                    return Err(AdcError::InvalidConfiguration);
                }
            }
            AdcUnit::Adc2 => {
                // Unit 2 takes the width on every read instead.
                let err = unsafe {
                    adc2_config_channel_atten(self.channel.raw_adc2(), self.attenuation.raw())
                };
                if err != ESP_OK {
                    return Err(AdcError::InvalidConfiguration);
                }
            }
        }
        self.width = Some(width);
        Ok(())
    }

    fn characterize(&mut self, default_vref_mv: u16) -> Result<CalibrationSource, AdcError> {
        let width = self.width.ok_or(AdcError::NotConfigured)?;
        let mut characteristics: esp_adc_cal_characteristics_t = unsafe { mem::zeroed() };
        let value_type = unsafe {
            esp_adc_cal_characterize(
                self.unit.raw(),
                self.attenuation.raw(),
                width.raw(),
                default_vref_mv as u32,
                &mut characteristics,
            )
        };
        self.characteristics = Some(characteristics);
        Ok(CalibrationSource::from_raw(value_type))
    }

    fn read_raw(&mut self) -> Result<u16, AdcError> {
        let width = self.width.ok_or(AdcError::NotConfigured)?;
        let raw = match self.unit {
            AdcUnit::Adc1 => self.read_raw_adc1()?,
            AdcUnit::Adc2 => self.read_raw_adc2(width)?,
        };
        Ok(raw.min(width.max_reading()))
    }

    fn raw_to_voltage(&self, average_raw: u16) -> Result<u32, AdcError> {
        let characteristics = self.characteristics.as_ref().ok_or(AdcError::NotCharacterized)?;
        let millivolts =
            unsafe { esp_adc_cal_raw_to_voltage(average_raw as u32, characteristics) };
        Ok(millivolts)
    }
}
