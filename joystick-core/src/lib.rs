//! Platform-agnostic joystick core: axis rescaling, report assembly,
//! and the USB HID contract.
//!
//! This crate holds everything about the joystick that does not touch
//! hardware. It can be used both in embedded `no_std` environments and
//! on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`axis`]: dead-zone-aware rescaling of raw samples ([`rescale`], [`AxisConfig`])
//! - [`report`]: the 4-byte HID report ([`JoystickReport`])
//! - [`descriptor`]: the byte-exact HID report descriptor ([`REPORT_DESCRIPTOR`])
//! - [`control`]: host-control bookkeeping ([`ReportCell`], [`IdleRate`])
//! - [`input`]: hardware-facing input traits ([`AdcSource`], [`ButtonSource`], [`InputSource`])
//! - [`output`]: output sink trait ([`ReportSink`])
//! - [`sampler`]: the per-cycle sampling pipeline ([`StickSampler`])
//! - [`bridge`]: orchestrates sampling-to-output flow ([`JoystickBridge`])
//!
//! # Report Format
//!
//! Each cycle produces a fresh 4-byte snapshot, overwriting the previous
//! one:
//!
//! ```text
//! byte 0: X axis, signed, -127..=127
//! byte 1: Y axis, signed, -127..=127
//! byte 2: Z axis, signed, -127..=127
//! byte 3: button states, pressed = 1, bits 6-7 constant padding
//! ```
//!
//! # Example
//!
//! ```rust
//! use joystick_core::{rescale, JoystickReport};
//!
//! // Center rest position falls in the dead zone
//! assert_eq!(rescale(512, 220, 0), 0);
//!
//! // Pack axes and the active-low button snapshot into a report
//! let report = JoystickReport::assemble(10, -3, 0, 0b0011_1110);
//! assert_eq!(report.as_bytes(), [10, 0xFD, 0, 0b1100_0001]);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod axis;
pub mod bridge;
pub mod control;
pub mod descriptor;
pub mod input;
pub mod output;
pub mod report;
pub mod sampler;

#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use axis::{rescale, AxisConfig};
pub use bridge::{BridgeError, JoystickBridge};
pub use control::{HidSharedState, IdleRate, ReportCell, IDLE_UNIT_MS};
pub use descriptor::REPORT_DESCRIPTOR;
pub use input::{AdcSource, AxisChannel, ButtonSource, InputError, InputSource};
pub use output::{OutputError, ReportSink};
pub use report::JoystickReport;
pub use sampler::{StickConfig, StickSampler};
