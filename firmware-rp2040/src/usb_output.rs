//! USB HID boot-keyboard output implementation.

use arcade_core::config;
use arcade_core::{KeyReport, OutputError, ReportSink, REPORT_DESCRIPTOR, REPORT_SIZE};
use defmt::debug;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{
    Config as HidConfig, HidBootProtocol, HidSubclass, HidWriter, ReportId, RequestHandler, State,
};
use embassy_usb::control::OutResponse;
use embassy_usb::driver::EndpointError;
use embassy_usb::Builder;

/// HID writer carrying 8-byte keyboard input reports.
pub type KeyboardWriter<'d> = HidWriter<'d, Driver<'d, USB>, REPORT_SIZE>;

/// Convert endpoint errors to [`OutputError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule issues
/// (both `EndpointError` and `OutputError` are defined in external crates).
#[inline]
fn endpoint_error_to_output_error(e: EndpointError) -> OutputError {
    match e {
        EndpointError::Disabled => OutputError::NotReady,
        _ => OutputError::Io,
    }
}

/// USB HID keyboard output.
///
/// Wraps an embassy-usb HID writer to send keyboard reports.
pub struct UsbHidOutput<'d> {
    writer: KeyboardWriter<'d>,
}

impl<'d> UsbHidOutput<'d> {
    /// Create a new USB HID output from the given HID writer.
    #[must_use]
    pub fn new(writer: KeyboardWriter<'d>) -> Self {
        Self { writer }
    }

    /// Wait until the host has configured the device.
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
    }
}

impl ReportSink for UsbHidOutput<'_> {
    async fn send(&mut self, report: &KeyReport) -> Result<(), OutputError> {
        self.writer
            .write(&report.as_bytes())
            .await
            .map_err(endpoint_error_to_output_error)
    }
}

/// HID request handler (handles SET_REPORT, etc.).
///
/// The descriptor declares no feature or output reports, so GET_REPORT has
/// nothing to return and SET_REPORT (host LED state) is accepted and dropped.
pub struct KeyboardRequestHandler;

impl RequestHandler for KeyboardRequestHandler {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, _id: ReportId, data: &[u8]) -> OutResponse {
        debug!("Ignoring SET_REPORT ({} bytes)", data.len());
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, _duration_ms: u32) {}

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        None
    }
}

/// Configure the USB HID keyboard class in the USB builder.
///
/// The interface is declared as boot subclass with the keyboard protocol,
/// so hosts that only implement the boot protocol accept it.
///
/// Returns the HID writer for use by the application.
pub fn configure_usb_hid<'d>(
    builder: &mut Builder<'d, Driver<'d, USB>>,
    state: &'d mut State<'d>,
    request_handler: &'d mut KeyboardRequestHandler,
) -> KeyboardWriter<'d> {
    let hid_config = HidConfig {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: Some(request_handler),
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: REPORT_SIZE as _,
        hid_subclass: HidSubclass::Boot,
        hid_boot_protocol: HidBootProtocol::Keyboard,
    };

    HidWriter::new(builder, state, hid_config)
}
