//! Build-time configuration: mode selection, timing, and USB identity.
//!
//! Nothing here can change at runtime. Button pins and their key codes
//! live in [`keymap`](crate::keymap).

use crate::keymap::pin_index;

/// GPIO sampled once at boot to choose the run mode.
///
/// Shares the button at index 4 (Space): holding it while plugging in
/// boots into diagnostic mode.
pub const MODE_SELECT_PIN: u8 = 6;

/// Index of [`MODE_SELECT_PIN`] in [`PIN_MAP`](crate::keymap::PIN_MAP).
pub const MODE_SELECT_INDEX: usize = match pin_index(MODE_SELECT_PIN) {
    Some(index) => index,
    None => panic!("MODE_SELECT_PIN must be one of the button pins"),
};

/// Delay between keyboard poll cycles (ms). Also the whole debounce.
pub const POLL_INTERVAL_MS: u32 = 10;

/// Time for the input pull-ups to settle before the boot sample (us).
pub const PULL_UP_SETTLE_US: u64 = 10;

// Diagnostic mode

/// UART baud rate for diagnostic status output (8N1).
pub const DIAGNOSTIC_BAUD_RATE: u32 = 115_200;

/// Interval between heartbeat ticks (ms).
pub const HEARTBEAT_INTERVAL_MS: u64 = 500;

// USB

/// USB VID/PID - the "pid.codes" open-source test VID.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0001;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "Arcade Stick";
pub const USB_PRODUCT: &str = "Dual-Boot Arcade Stick";
pub const USB_SERIAL_NUMBER: &str = "001";

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 1;

/// Maximum bus power draw (mA).
pub const USB_MAX_POWER_MA: u16 = 100;
