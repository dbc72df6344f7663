//! Platform-agnostic core of the dual-boot arcade stick firmware.
//!
//! The stick presents itself as a USB boot keyboard: eight buttons wired
//! to GPIO inputs become key presses. Holding the mode-select button at
//! power-on instead boots a diagnostic mode that only prints a serial
//! heartbeat. All decision logic lives here, without any chip-specific
//! dependencies, so it builds for the RP2040 and runs on the host for
//! testing.
//!
//! # Overview
//!
//! - [`mode`]: Boot-time mode selection ([`Mode`])
//! - [`input`]: Button sampling ([`InputSource`], [`GpioSampler`])
//! - [`keymap`]: Pin/key tables and the keycode mapper ([`map_pressed`])
//! - [`report`]: Boot-keyboard report and descriptor ([`KeyReport`], [`REPORT_DESCRIPTOR`])
//! - [`output`]: Report transport trait and emitter ([`ReportSink`], [`ReportEmitter`])
//! - [`bridge`]: The keyboard poll cycle ([`KeyboardBridge`])
//! - [`diagnostic`]: Diagnostic-mode heartbeat ([`Heartbeat`])
//! - [`config`]: Build-time constants
//!
//! # Example
//!
//! ```rust
//! use arcade_core::{map_pressed, PressedSet};
//!
//! // W and Right held
//! let report = map_pressed(PressedSet::NONE.with(0).with(7));
//! assert_eq!(report.as_bytes(), [0, 0, 0x1A, 0x4F, 0, 0, 0, 0]);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and logging (for embedded builds)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

// Must come first so the logging macros are visible to the other modules.
mod fmt;

pub mod bridge;
pub mod config;
pub mod diagnostic;
pub mod input;
pub mod keymap;
pub mod mode;
pub mod output;
pub mod report;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use bridge::{CyclePhase, KeyboardBridge};
pub use diagnostic::{Beat, Heartbeat};
pub use input::{GpioSampler, InputSource};
pub use keymap::{map_pressed, KEY_COUNT, KEY_MAP, PIN_MAP};
pub use mode::Mode;
pub use output::{OutputError, ReportEmitter, ReportSink};
pub use report::{KeyReport, MAX_KEYS, REPORT_DESCRIPTOR, REPORT_SIZE};
pub use types::PressedSet;
