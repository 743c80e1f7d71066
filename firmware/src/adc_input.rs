//! RP2040 implementations of the hardware input traits.
//!
//! # Pins
//!
//! - GPIO 26/27/28: ADC channels for the three axes
//! - GPIO 2..=6: button lines 1-5, internal pull-ups
//! - GPIO 7: button line 6, internal pull-up, relocated to bit 5

use embassy_rp::adc::{Adc, Async, Channel, Error as AdcError};
use embassy_rp::gpio::Input;
use joystick_core::{AdcSource, AxisChannel, ButtonSource, InputError};

/// Number of button lines.
pub const BUTTON_COUNT: usize = 6;

/// Bits dropped to reduce the 12-bit RP2040 conversion to the 10-bit
/// magnitude the calibration expects.
const SAMPLE_SHIFT: u8 = 2;

/// Convert ADC errors to [`InputError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan
/// rule issues (both error types are defined in external crates).
#[inline]
fn adc_error_to_input_error(_e: AdcError) -> InputError {
    InputError::Adc
}

/// Analog axis source backed by the RP2040 ADC.
pub struct StickAdc<'d> {
    adc: Adc<'d, Async>,
    x: Channel<'d>,
    y: Channel<'d>,
    z: Channel<'d>,
}

impl<'d> StickAdc<'d> {
    /// Create a new axis source from the ADC and its three channels.
    pub fn new(adc: Adc<'d, Async>, x: Channel<'d>, y: Channel<'d>, z: Channel<'d>) -> Self {
        Self { adc, x, y, z }
    }
}

impl<'d> AdcSource for StickAdc<'d> {
    async fn read(&mut self, channel: AxisChannel) -> Result<u16, InputError> {
        let pin = match channel {
            AxisChannel::X => &mut self.x,
            AxisChannel::Y => &mut self.y,
            AxisChannel::Z => &mut self.z,
        };
        let raw = self
            .adc
            .read(pin)
            .await
            .map_err(adc_error_to_input_error)?;
        Ok(raw >> SAMPLE_SHIFT)
    }
}

/// Button source backed by six pulled-up GPIO lines, active low.
pub struct ButtonPins<'d> {
    lines: [Input<'d>; BUTTON_COUNT],
}

impl<'d> ButtonPins<'d> {
    /// Create a button source. Lines map to mask bits 0..=5 in order.
    pub fn new(lines: [Input<'d>; BUTTON_COUNT]) -> Self {
        Self { lines }
    }
}

impl<'d> ButtonSource for ButtonPins<'d> {
    fn read_lines(&mut self) -> u8 {
        let mut mask = 0u8;
        for (bit, line) in self.lines.iter().enumerate() {
            // Active low: a high line means released
            if line.is_high() {
                mask |= 1 << bit;
            }
        }
        mask
    }
}
