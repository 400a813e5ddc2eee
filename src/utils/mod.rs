pub mod adc_monitor_error;
pub mod delay;
