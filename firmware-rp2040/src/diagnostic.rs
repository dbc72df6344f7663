//! Diagnostic-mode status output over UART and the on-board LED.

use arcade_core::config::HEARTBEAT_INTERVAL_MS;
use arcade_core::diagnostic::BANNER;
use arcade_core::Heartbeat;
use defmt::{info, trace, warn};
use embassy_rp::gpio::Output;
use embassy_rp::uart::{Blocking, UartTx};
use embassy_time::Timer;

/// Liveness output for diagnostic mode.
///
/// Uses UART0 (GPIO 0 TX) and the on-board LED on GPIO 25. USB is never
/// brought up in this mode.
pub struct DiagnosticOutput<'d> {
    uart: UartTx<'d, Blocking>,
    led: Output<'d>,
    heartbeat: Heartbeat,
}

impl<'d> DiagnosticOutput<'d> {
    /// Create a new diagnostic output from a UART transmitter and LED pin.
    #[must_use]
    pub fn new(uart: UartTx<'d, Blocking>, led: Output<'d>) -> Self {
        Self {
            uart,
            led,
            heartbeat: Heartbeat::new(),
        }
    }

    /// Print the banner, then tick forever.
    pub async fn run(&mut self) -> ! {
        info!("Diagnostic mode, heartbeat every {} ms", HEARTBEAT_INTERVAL_MS);
        self.write(BANNER);

        loop {
            let beat = self.heartbeat.tick();
            trace!("Heartbeat {}", self.heartbeat.beats());
            self.write(beat.text);
            if beat.led_on {
                self.led.set_high();
            } else {
                self.led.set_low();
            }
            Timer::after_millis(HEARTBEAT_INTERVAL_MS).await;
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        // Nothing useful to do with a UART fault here; keep ticking.
        if self.uart.blocking_write(bytes).is_err() {
            warn!("UART write failed");
        }
    }
}
