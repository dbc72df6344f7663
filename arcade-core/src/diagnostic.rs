//! Diagnostic-mode heartbeat.
//!
//! Diagnostic mode does not touch USB. It prints a banner once, then a dot
//! and an LED toggle on every tick, so a serial monitor and the on-board
//! LED both show the device is alive.

/// Printed once when diagnostic mode starts.
pub const BANNER: &[u8] = b"Hello from Game Mode!\r\n";

/// Printed on every tick.
pub const TICK: &[u8] = b".";

/// Output of one heartbeat tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Beat {
    /// Bytes to write to the serial line.
    pub text: &'static [u8],
    /// Level to drive the status LED to.
    pub led_on: bool,
}

/// Heartbeat state: LED level and tick count.
#[derive(Debug, Default)]
pub struct Heartbeat {
    led_on: bool,
    beats: u32,
}

impl Heartbeat {
    /// Create a heartbeat with the LED off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            led_on: false,
            beats: 0,
        }
    }

    /// Advance one tick. The LED is on after odd ticks.
    pub fn tick(&mut self) -> Beat {
        self.led_on = !self.led_on;
        self.beats = self.beats.wrapping_add(1);
        Beat {
            text: TICK,
            led_on: self.led_on,
        }
    }

    /// Ticks so far.
    #[must_use]
    pub const fn beats(&self) -> u32 {
        self.beats
    }
}
