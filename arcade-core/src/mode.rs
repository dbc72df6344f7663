//! Boot-time mode selection.

use embedded_hal::digital::InputPin;

/// Run mode for the whole power cycle.
///
/// Chosen once by [`Mode::select`] and consumed by [`Mode::dispatch`]; it
/// is neither `Copy` nor `Clone`, so nothing can hold on to it and re-read
/// it after dispatch.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// USB HID keyboard.
    Keyboard,
    /// Serial heartbeat, USB left uninitialised.
    Diagnostic,
}

impl Mode {
    /// Decide the mode from a single read of the mode-select pin.
    ///
    /// The pin is pulled up, so low means the button is held and selects
    /// [`Mode::Diagnostic`]. The read is not debounced: a button bouncing
    /// at exactly this instant can be misread. A failed read counts as
    /// the released (pulled-up) level.
    pub fn select<P: InputPin>(pin: &mut P) -> Self {
        let held = pin.is_low().unwrap_or(false);
        debug!("Mode-select pin held: {}", held);
        if held {
            Mode::Diagnostic
        } else {
            Mode::Keyboard
        }
    }

    /// Decide the boot mode for this build.
    ///
    /// Without `dual_boot` the pin is never read and the stick is always a
    /// keyboard; otherwise this is [`Mode::select`].
    pub fn boot<P: InputPin>(dual_boot: bool, pin: &mut P) -> Self {
        if dual_boot {
            Self::select(pin)
        } else {
            Mode::Keyboard
        }
    }

    /// Run exactly one of the two mode entry points.
    pub fn dispatch<R>(
        self,
        keyboard: impl FnOnce() -> R,
        diagnostic: impl FnOnce() -> R,
    ) -> R {
        match self {
            Mode::Keyboard => keyboard(),
            Mode::Diagnostic => diagnostic(),
        }
    }
}
