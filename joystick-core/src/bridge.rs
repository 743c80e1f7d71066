//! JoystickBridge: connects the sampler to a report sink.

use crate::input::{InputError, InputSource};
use crate::output::{OutputError, ReportSink};
use crate::report::JoystickReport;

/// The device main loop: forwards report snapshots from an input source
/// to an output sink, one cycle at a time.
///
/// This abstraction decouples the sampling pipeline from the USB
/// transport, making the loop testable on host with mocks.
///
/// # Error Handling
///
/// On input errors, the bridge sends a neutral report to prevent stale
/// axis values from persisting.
pub struct JoystickBridge<I, O> {
    input: I,
    output: O,
}

impl<I: InputSource, O: ReportSink> JoystickBridge<I, O> {
    /// Create a new bridge from an input source and output sink.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Run the bridge, forwarding report snapshots indefinitely.
    ///
    /// This method never returns under normal operation.
    pub async fn run(&mut self) -> ! {
        loop {
            let _ = self.process_one().await;
        }
    }

    /// Run a single cycle: sample, assemble, send.
    ///
    /// Returns the result of the cycle for callers that want to react
    /// to errors (logging, LED indication).
    pub async fn process_one(&mut self) -> Result<(), BridgeError> {
        match self.input.receive().await {
            Ok(report) => {
                self.output
                    .send(&report)
                    .await
                    .map_err(BridgeError::Output)?;
                Ok(())
            }
            Err(e) => {
                // Send a neutral report to prevent stale axis values
                let _ = self.output.send(&JoystickReport::neutral()).await;
                Err(BridgeError::Input(e))
            }
        }
    }

    /// Get a mutable reference to the input source.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Get a mutable reference to the output sink.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Decompose the bridge into its input and output components.
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}

/// Error type for bridge cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// Error from the input source.
    Input(InputError),
    /// Error from the output sink.
    Output(OutputError),
}
