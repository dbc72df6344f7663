//! Input source trait and the GPIO button sampler.

use embedded_hal::digital::InputPin;

use crate::keymap::KEY_COUNT;
use crate::types::PressedSet;

/// Source of per-cycle button state.
///
/// Called once per poll cycle. Implementations read live state and keep
/// nothing between calls.
pub trait InputSource {
    /// Sample every button once.
    fn sample(&mut self) -> PressedSet;
}

/// Samples one GPIO per button, index-aligned with
/// [`PIN_MAP`](crate::keymap::PIN_MAP).
///
/// Pins are expected to be inputs with pull-ups and buttons to short them
/// to ground, so a low level means pressed. There is no edge detection or
/// filtering: the poll interval is the only debounce.
pub struct GpioSampler<P> {
    pins: [P; KEY_COUNT],
}

impl<P: InputPin> GpioSampler<P> {
    /// Create a sampler over pins ordered like `PIN_MAP`.
    #[must_use]
    pub fn new(pins: [P; KEY_COUNT]) -> Self {
        Self { pins }
    }

    /// Release the pins.
    pub fn into_pins(self) -> [P; KEY_COUNT] {
        self.pins
    }
}

impl<P: InputPin> InputSource for GpioSampler<P> {
    fn sample(&mut self) -> PressedSet {
        let mut pressed = PressedSet::NONE;
        for (index, pin) in self.pins.iter_mut().enumerate() {
            // An unreadable pin counts as released.
            pressed.set(index, pin.is_low().unwrap_or(false));
        }
        pressed
    }
}
