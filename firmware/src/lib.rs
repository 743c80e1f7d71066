//! Analog stick to USB HID joystick firmware for RP2040.
//!
//! This crate provides the embedded implementation of a 3-axis,
//! 6-button joystick: async ADC sampling, pulled-up button lines, and
//! a USB HID interrupt endpoint carrying the 4-byte report.

#![no_std]

// Re-export core types for convenience
pub use joystick_core::{
    rescale, AdcSource, AxisChannel, AxisConfig, BridgeError, ButtonSource, HidSharedState,
    InputError, InputSource, JoystickBridge, JoystickReport, OutputError, ReportSink, StickConfig,
    StickSampler, REPORT_DESCRIPTOR,
};

pub mod adc_input;
pub mod usb_output;

pub use adc_input::{ButtonPins, StickAdc};
pub use usb_output::{configure_usb_hid, JoystickRequestHandler, UsbHidOutput};
