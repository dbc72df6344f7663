//! Test doubles shared by the unit tests.

extern crate std;

use core::convert::Infallible;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin};
use std::vec::Vec;

use crate::output::{OutputError, ReportSink};
use crate::report::KeyReport;

/// Pulled-up button input: low while held.
pub struct MockPin {
    held: bool,
    reads: usize,
}

impl MockPin {
    pub fn new(held: bool) -> Self {
        Self { held, reads: 0 }
    }

    pub fn set_held(&mut self, held: bool) {
        self.held = held;
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads += 1;
        Ok(!self.held)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.reads += 1;
        Ok(self.held)
    }
}

#[derive(Debug)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Input whose every read fails.
pub struct FaultyPin;

impl ErrorType for FaultyPin {
    type Error = PinFault;
}

impl InputPin for FaultyPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

/// Sink that records delivered reports, or fails every send.
pub struct RecordingSink {
    sent: Vec<KeyReport>,
    attempts: usize,
    fail_with: Option<OutputError>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            attempts: 0,
            fail_with: None,
        }
    }

    pub fn failing(error: OutputError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::new()
        }
    }

    pub fn sent(&self) -> &[KeyReport] {
        &self.sent
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl ReportSink for RecordingSink {
    fn send(&mut self, report: &KeyReport) -> impl Future<Output = Result<(), OutputError>> {
        self.attempts += 1;
        let result = match self.fail_with {
            Some(error) => Err(error),
            None => {
                self.sent.push(*report);
                Ok(())
            }
        };
        core::future::ready(result)
    }
}

/// Waker that does nothing; the mocks never need to be woken.
pub fn noop_waker() -> Waker {
    fn noop_raw_waker() -> RawWaker {
        fn noop(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            noop_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        RawWaker::new(core::ptr::null(), &VTABLE)
    }

    unsafe { Waker::from_raw(noop_raw_waker()) }
}

/// Run a future that never pends to completion.
pub fn block_on<F: Future>(mut f: F) -> F::Output {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);

    // SAFETY: We don't move f after pinning
    let mut f = unsafe { Pin::new_unchecked(&mut f) };

    match f.as_mut().poll(&mut cx) {
        Poll::Ready(result) => result,
        Poll::Pending => panic!("Mock future returned Pending unexpectedly"),
    }
}
