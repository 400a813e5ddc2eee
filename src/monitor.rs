use crate::adc::AdcConverter;
use crate::sampler::{Reading, Sampler, SamplerError};
use crate::utils::delay::Delay;

/// Periodic sampling loop: one reading, one report, one fixed-interval
/// suspension per iteration. The delay is the only suspension point and
/// cooperatively yields the processor while waiting.
pub struct VoltageMonitor<C: AdcConverter, D: Delay> {
    sampler: Sampler<C>,
    delay: D,
    interval_ms: u32,
}

impl<C: AdcConverter, D: Delay> VoltageMonitor<C, D> {
    pub fn new(sampler: Sampler<C>, delay: D, interval_ms: u32) -> VoltageMonitor<C, D> {
        VoltageMonitor {
            sampler,
            delay,
            interval_ms,
        }
    }

    /// Runs the loop forever. Every iteration produces exactly one call to
    /// `report`; a failed pass is reported too and the loop keeps going.
    pub fn run<F>(&mut self, mut report: F) -> !
    where
        F: FnMut(&Result<Reading, SamplerError>),
    {
        loop {
            self.iterate(&mut report);
        }
    }

    /// Runs a bounded number of iterations. Same per-iteration behaviour as
    /// `run`.
    pub fn run_for<F>(&mut self, iterations: usize, mut report: F)
    where
        F: FnMut(&Result<Reading, SamplerError>),
    {
        for _ in 0..iterations {
            self.iterate(&mut report);
        }
    }

    fn iterate<F>(&mut self, report: &mut F)
    where
        F: FnMut(&Result<Reading, SamplerError>),
    {
        let outcome = self.sampler.read();
        report(&outcome);
        self.delay.delay_ms(self.interval_ms);
    }
}
