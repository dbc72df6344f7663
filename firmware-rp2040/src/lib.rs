//! Dual-boot USB keyboard arcade stick firmware for RP2040.
//!
//! This crate provides the embedded glue around [`arcade_core`]: USB HID
//! output, button pin setup, and the diagnostic serial output.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040). At power-on it
//! samples the mode-select button once and then runs one of two modes
//! until reset:
//! 1. **Keyboard** (button released): enumerates as a USB boot keyboard
//!    and reports held buttons as keys, polling every 10 ms
//! 2. **Diagnostic** (button held): leaves USB off and prints a heartbeat
//!    on UART0 while blinking the on-board LED
//!
//! # Hardware Configuration
//!
//! | Function     | GPIO | Description |
//! |--------------|------|-------------|
//! | Buttons      | 2-9  | W, S, A, D, Space, Enter, Left, Right (active low, pull-up) |
//! | Mode select  | 6    | Space button, sampled once at boot |
//! | UART0 TX     | 0    | Diagnostic output, 115200 8N1 |
//! | UART0 RX     | 1    | Unused |
//! | LED          | 25   | On-board LED (diagnostic heartbeat) |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime. Keyboard mode runs two tasks:
//!
//! - **USB Task**: Manages the USB device stack
//! - **Keyboard Task**: Samples buttons, maps them to keys and sends the
//!   report, then sleeps for the poll interval
//!
//! Diagnostic mode runs a single heartbeat task.
//!
//! # Modules
//!
//! - [`buttons`]: Button pin setup ([`ButtonPins`], [`button_pins!`])
//! - [`usb_output`]: USB HID output ([`UsbHidOutput`], [`configure_usb_hid`])
//! - [`diagnostic`]: Diagnostic heartbeat output ([`DiagnosticOutput`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`dual-boot`** (default): Sample the mode-select button at boot. Without it the
//!   button is never read and the firmware always boots as a keyboard
//!
//! # Re-exports
//!
//! This crate re-exports the core types used by the binary for convenience.

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they install conflicting panic handlers");

// Re-export core types for convenience
pub use arcade_core::{
    config, GpioSampler, Heartbeat, KeyReport, KeyboardBridge, Mode, OutputError, ReportSink,
};

pub mod buttons;
pub mod diagnostic;
pub mod usb_output;

pub use buttons::ButtonPins;
pub use diagnostic::DiagnosticOutput;
pub use usb_output::{configure_usb_hid, KeyboardRequestHandler, KeyboardWriter, UsbHidOutput};
