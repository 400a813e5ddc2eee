use esp_idf_svc::sys::{
    esp_adc_cal_value_t, esp_adc_cal_value_t_ESP_ADC_CAL_VAL_EFUSE_TP,
    esp_adc_cal_value_t_ESP_ADC_CAL_VAL_EFUSE_VREF,
};

/// Availability of the two factory calibration values that may be burned
/// into the eFuse. Produced once at startup, informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalibrationStatus {
    pub two_point: bool,
    pub efuse_vref: bool,
}

/// Enums the sources the characterization can be derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationSource {
    TwoPoint,
    EfuseVref,
    DefaultVref,
}

impl CalibrationSource {
    /// Selects the best source available in `status`, in priority order:
    /// two-point calibration, then the eFuse reference voltage, then the
    /// default reference voltage constant.
    pub fn preferred(status: CalibrationStatus) -> CalibrationSource {
        if status.two_point {
            CalibrationSource::TwoPoint
        } else if status.efuse_vref {
            CalibrationSource::EfuseVref
        } else {
            CalibrationSource::DefaultVref
        }
    }

    /// Operator-facing name of the source, as printed on startup.
    pub fn description(&self) -> &'static str {
        match self {
            CalibrationSource::TwoPoint => "Two Point Value",
            CalibrationSource::EfuseVref => "eFuse Vref",
            CalibrationSource::DefaultVref => "Default Vref",
        }
    }

    pub(crate) fn from_raw(value: esp_adc_cal_value_t) -> CalibrationSource {
        match value {
            v if v == esp_adc_cal_value_t_ESP_ADC_CAL_VAL_EFUSE_TP => CalibrationSource::TwoPoint,
            v if v == esp_adc_cal_value_t_ESP_ADC_CAL_VAL_EFUSE_VREF => {
                CalibrationSource::EfuseVref
            }
            _ => CalibrationSource::DefaultVref,
        }
    }
}
