//! USB HID boot-keyboard report and its report descriptor.
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0:   Modifier bitfield (always 0x00, no modifier keys are mapped)
//! Byte 1:   Reserved (always 0x00)
//! Byte 2-7: Up to 6 key codes, left-packed, zero-padded
//! ```

/// Maximum number of simultaneously reported keys (boot-keyboard rollover limit).
pub const MAX_KEYS: usize = 6;

/// Size of the input report in bytes.
pub const REPORT_SIZE: usize = 8;

/// Highest key usage the descriptor declares (Logical/Usage Maximum).
pub const MAX_USAGE: u8 = 0x65;

/// One keyboard input report.
///
/// The modifier and reserved bytes are not stored: this device never
/// reports modifiers, so both are emitted as zero. Unused key slots are
/// always zero, so a report never carries stale keys.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyReport {
    keys: [u8; MAX_KEYS],
}

impl KeyReport {
    /// The all-keys-released report.
    pub const RELEASED: Self = Self {
        keys: [0; MAX_KEYS],
    };

    /// Build a report from up to six key codes.
    ///
    /// Zero codes are skipped and anything past the sixth non-zero code is
    /// dropped, so the slots stay left-packed.
    #[must_use]
    pub fn from_keys(codes: &[u8]) -> Self {
        let mut keys = [0; MAX_KEYS];
        for (slot, &code) in keys
            .iter_mut()
            .zip(codes.iter().filter(|&&code| code != 0))
        {
            *slot = code;
        }
        Self { keys }
    }

    /// Modifier byte (always zero).
    #[inline]
    #[must_use]
    pub const fn modifier(&self) -> u8 {
        0
    }

    /// The six key slots.
    #[inline]
    #[must_use]
    pub const fn keys(&self) -> &[u8; MAX_KEYS] {
        &self.keys
    }

    /// Iterate over the non-zero key codes in slot order.
    pub fn pressed_keys(&self) -> impl Iterator<Item = u8> + '_ {
        self.keys.iter().copied().take_while(|&code| code != 0)
    }

    /// Returns `true` if this is the all-keys-released report.
    #[inline]
    #[must_use]
    pub fn is_released(&self) -> bool {
        *self == Self::RELEASED
    }

    /// Serialise into the 8-byte wire format.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; REPORT_SIZE] {
        let mut bytes = [0; REPORT_SIZE];
        bytes[0] = self.modifier();
        // bytes[1] is the reserved byte
        bytes[2..].copy_from_slice(&self.keys);
        bytes
    }
}

/// USB HID report descriptor for a boot-protocol keyboard.
///
/// Input-only: one modifier byte, one constant reserved byte and a
/// six-entry key array with usages 0..=101. No LED output report is
/// declared. Consoles that only speak the boot protocol depend on this
/// exact byte sequence.
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    //
    // --- Modifier keys (8 bits) ---
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Reserved byte ---
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x03, //   Input (Constant)
    //
    // --- Key codes (6 bytes) ---
    0x95, 0x06, //   Report Count (6)
    0x75, 0x08, //   Report Size (8)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, MAX_USAGE, //   Logical Maximum (101)
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0x00, //   Usage Minimum (0)
    0x29, MAX_USAGE, //   Usage Maximum (101)
    0x81, 0x00, //   Input (Data, Array)
    //
    0xC0, // End Collection
];
