//! Report sink trait, error types, and the HID report emitter.

use core::future::Future;

use crate::report::KeyReport;

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// USB/communication I/O error.
    Io,
    /// Device not ready (e.g., USB not enumerated).
    NotReady,
}

/// Async trait for keyboard report transports.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait ReportSink {
    /// Send one input report to the host.
    ///
    /// May block until the previous report has been taken.
    fn send(&mut self, report: &KeyReport) -> impl Future<Output = Result<(), OutputError>>;
}

/// Hands reports to a [`ReportSink`].
///
/// Delivery failures are logged and dropped; the caller never sees them.
/// The next cycle sends a fresh report anyway.
pub struct ReportEmitter<O> {
    sink: O,
}

impl<O: ReportSink> ReportEmitter<O> {
    /// Create an emitter over the given sink.
    pub fn new(sink: O) -> Self {
        Self { sink }
    }

    /// Send `report`.
    ///
    /// Must be called every cycle, including when nothing is pressed: the
    /// host only learns that keys went up from a report without them.
    pub async fn emit(&mut self, report: &KeyReport) {
        if let Err(e) = self.sink.send(report).await {
            warn!("HID report not delivered: {:?}", e);
        }
    }

    /// Send the all-keys-released report.
    pub async fn release(&mut self) {
        self.emit(&KeyReport::RELEASED).await;
    }

    /// Get a reference to the sink.
    pub fn sink(&self) -> &O {
        &self.sink
    }

    /// Decompose the emitter into its sink.
    pub fn into_inner(self) -> O {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{block_on, RecordingSink};

    #[test]
    fn test_emit_forwards_report() {
        let report = KeyReport::from_keys(&[0x1A]);
        let mut emitter = ReportEmitter::new(RecordingSink::new());

        block_on(emitter.emit(&report));

        assert_eq!(emitter.sink().sent(), &[report]);
    }

    #[test]
    fn test_release_sends_zero_report() {
        let mut emitter = ReportEmitter::new(RecordingSink::new());

        block_on(emitter.emit(&KeyReport::from_keys(&[0x04, 0x07])));
        block_on(emitter.release());

        let sink = emitter.into_inner();
        assert_eq!(sink.sent().len(), 2);
        assert_eq!(sink.sent()[1].as_bytes(), [0; 8]);
    }

    #[test]
    fn test_transport_error_is_swallowed() {
        let mut emitter = ReportEmitter::new(RecordingSink::failing(OutputError::NotReady));

        block_on(emitter.emit(&KeyReport::from_keys(&[0x2C])));
        block_on(emitter.release());

        // Both attempts reached the transport; neither panicked or returned an error.
        assert_eq!(emitter.sink().attempts(), 2);
    }

    #[test]
    fn test_every_error_kind_is_swallowed() {
        // Exhaustive so a new variant has to be added here.
        fn all_errors() -> [OutputError; 2] {
            match OutputError::Io {
                OutputError::Io | OutputError::NotReady => {}
            }
            [OutputError::Io, OutputError::NotReady]
        }

        for error in all_errors() {
            let mut emitter = ReportEmitter::new(RecordingSink::failing(error));
            block_on(emitter.emit(&KeyReport::from_keys(&[0x50])));
            assert_eq!(emitter.sink().attempts(), 1);
            assert!(emitter.sink().sent().is_empty());
        }
    }
}
