//! USB HID joystick output and host control requests.

use embassy_usb::class::hid::{
    Config, HidBootProtocol, HidSubclass, HidWriter, ReportId, RequestHandler, State,
};
use embassy_usb::control::OutResponse;
use embassy_usb::Builder;
use joystick_core::{HidSharedState, JoystickReport, OutputError, ReportSink, REPORT_DESCRIPTOR};

/// USB HID joystick output.
///
/// Wraps an embassy-usb HID writer to send joystick reports. Every
/// outgoing report is also stored in the shared snapshot so GET_REPORT
/// answers with the newest state.
pub struct UsbHidOutput<'d> {
    writer: HidWriter<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>, 4>,
    shared: &'d HidSharedState,
    ready: bool,
}

impl<'d> UsbHidOutput<'d> {
    /// Create a new USB HID output from the given HID writer.
    pub fn new(
        writer: HidWriter<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>, 4>,
        shared: &'d HidSharedState,
    ) -> Self {
        Self {
            writer,
            shared,
            ready: false,
        }
    }

    /// Wait until the device is ready (USB enumerated).
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
        self.ready = true;
    }
}

impl<'d> ReportSink for UsbHidOutput<'d> {
    async fn send(&mut self, report: &JoystickReport) -> Result<(), OutputError> {
        self.shared.report.store(*report);
        self.writer
            .write(&report.as_bytes())
            .await
            .map_err(|_| OutputError::Io)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// HID request handler answering class control requests from shared
/// state: GET_REPORT serves the latest snapshot, GET_IDLE / SET_IDLE
/// round-trip the idle rate. Everything else stays with the stack's
/// default handling.
pub struct JoystickRequestHandler {
    shared: &'static HidSharedState,
}

impl JoystickRequestHandler {
    /// Create a handler over the shared control state.
    pub fn new(shared: &'static HidSharedState) -> Self {
        Self { shared }
    }
}

impl RequestHandler for JoystickRequestHandler {
    fn get_report(&mut self, id: ReportId, buf: &mut [u8]) -> Option<usize> {
        // Single report type, no report IDs declared
        match id {
            ReportId::In(0) => {
                let bytes = self.shared.report.load().as_bytes();
                buf[..bytes.len()].copy_from_slice(&bytes);
                Some(bytes.len())
            }
            _ => None,
        }
    }

    fn set_report(&mut self, _id: ReportId, _data: &[u8]) -> OutResponse {
        // No output reports in the descriptor
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, duration_ms: u32) {
        self.shared.idle.set_millis(duration_ms);
    }

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        Some(self.shared.idle.millis())
    }
}

/// Configure the USB HID class in the USB builder.
///
/// Returns the HID writer for use by the application.
pub fn configure_usb_hid<'d>(
    builder: &mut Builder<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>>,
    state: &'d mut State<'d>,
    request_handler: &'d mut JoystickRequestHandler,
) -> HidWriter<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>, 4> {
    let config = Config {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: Some(request_handler),
        poll_ms: 10,
        max_packet_size: 8,
        hid_subclass: HidSubclass::No,
        hid_boot_protocol: HidBootProtocol::None,
    };

    HidWriter::new(builder, state, config)
}
