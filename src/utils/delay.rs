use esp_idf_svc::hal::delay::FreeRtos;

/// Suspension point between monitor iterations. On the chip this is a timed
/// FreeRTOS block, in tests a simulated clock.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

/// Delay backed by the FreeRTOS scheduler, yielding the processor to other
/// tasks while waiting.
pub struct FreeRtosDelay;

impl Delay for FreeRtosDelay {
    fn delay_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms)
    }
}
