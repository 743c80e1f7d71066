//! Output sink trait and error types.

use core::future::Future;

use crate::report::JoystickReport;

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// USB/communication I/O error.
    Io,
    /// Device not ready (e.g., USB not enumerated).
    NotReady,
}

/// Async trait for report sinks.
///
/// This trait abstracts the destination for joystick reports, enabling
/// different transports (USB HID, serial debug, test mocks).
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap
/// allocation.
pub trait ReportSink {
    /// Send a report to the output.
    ///
    /// May block until the previous report has been sent.
    fn send(&mut self, report: &JoystickReport) -> impl Future<Output = Result<(), OutputError>>;

    /// Check if the output is ready to accept data.
    fn is_ready(&self) -> bool;
}
