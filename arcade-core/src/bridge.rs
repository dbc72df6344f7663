//! KeyboardBridge: the keyboard-mode poll cycle.

use embedded_hal_async::delay::DelayNs;

use crate::config::POLL_INTERVAL_MS;
use crate::input::InputSource;
use crate::keymap::map_pressed;
use crate::output::{ReportEmitter, ReportSink};
use crate::report::KeyReport;

/// Step of the poll cycle currently executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CyclePhase {
    /// Between cycles, waiting out the poll interval.
    Idle,
    /// Reading the buttons.
    Sampling,
    /// Converting pressed buttons to key codes.
    Mapping,
    /// Handing the report to the transport.
    Emitting,
}

/// Connects a button source to a report sink.
///
/// Each cycle is sample, map, emit, in that order, with no overlap between
/// cycles. The pressed set and report are rebuilt every cycle.
pub struct KeyboardBridge<I, O> {
    input: I,
    emitter: ReportEmitter<O>,
    phase: CyclePhase,
}

impl<I: InputSource, O: ReportSink> KeyboardBridge<I, O> {
    /// Create a new bridge from an input source and report sink.
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            emitter: ReportEmitter::new(output),
            phase: CyclePhase::Idle,
        }
    }

    /// Send one release report, then poll forever, waiting
    /// [`POLL_INTERVAL_MS`] after every cycle.
    ///
    /// Call once the host has configured the device, so it starts from a
    /// clean slate. The next sample is never taken before the delay has
    /// elapsed.
    pub async fn run<D: DelayNs>(&mut self, mut delay: D) -> ! {
        self.release().await;
        loop {
            self.poll_once().await;
            delay.delay_ms(POLL_INTERVAL_MS).await;
        }
    }

    /// Run one sample, map, emit cycle and return the report sent.
    pub async fn poll_once(&mut self) -> KeyReport {
        self.phase = CyclePhase::Sampling;
        let pressed = self.input.sample();

        self.phase = CyclePhase::Mapping;
        let report = map_pressed(pressed);

        self.phase = CyclePhase::Emitting;
        trace!("Report: {:?}", report);
        self.emitter.emit(&report).await;

        self.phase = CyclePhase::Idle;
        report
    }

    /// Send the all-keys-released report outside the regular cycle.
    pub async fn release(&mut self) {
        self.emitter.release().await;
    }

    /// Current step of the cycle.
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Get a reference to the input source.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Get a reference to the report sink.
    pub fn output(&self) -> &O {
        self.emitter.sink()
    }

    /// Decompose the bridge into its input and output components.
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.emitter.into_inner())
    }
}
