//! Host-control bookkeeping: latest-report snapshot and idle rate.
//!
//! The sampling loop produces reports; the USB control pipe answers
//! GET_REPORT / GET_IDLE / SET_IDLE from another task. Both sides share
//! this state lock-free: the 4-byte report packs into one atomic word,
//! the idle rate is a single atomic byte.

use portable_atomic::{AtomicU32, AtomicU8, Ordering};

use crate::report::JoystickReport;

/// Milliseconds per idle-rate unit, per the HID class specification.
pub const IDLE_UNIT_MS: u32 = 4;

/// Lock-free cell holding the most recent report.
///
/// `const`-constructible so it can back a `static`; starts out neutral.
pub struct ReportCell(AtomicU32);

impl ReportCell {
    /// Create a cell holding the neutral report.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU32::new(pack(JoystickReport::neutral())))
    }

    /// Overwrite the snapshot with a fresh report.
    #[inline]
    pub fn store(&self, report: JoystickReport) {
        self.0.store(pack(report), Ordering::Relaxed);
    }

    /// Read the most recent report.
    #[inline]
    #[must_use]
    pub fn load(&self) -> JoystickReport {
        unpack(self.0.load(Ordering::Relaxed))
    }
}

impl Default for ReportCell {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
const fn pack(report: JoystickReport) -> u32 {
    u32::from_le_bytes(report.as_bytes())
}

#[inline]
const fn unpack(word: u32) -> JoystickReport {
    JoystickReport::from_bytes(word.to_le_bytes())
}

/// The idle-rate byte requested by the host via SET_IDLE.
///
/// Stored in 4 ms wire units; 0 means indefinite (the default for
/// joysticks). This is protocol bookkeeping only; report retransmission
/// stays with the USB stack.
pub struct IdleRate(AtomicU8);

impl IdleRate {
    /// Create an idle rate of 0 (indefinite).
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU8::new(0))
    }

    /// Raw idle-rate byte in 4 ms units.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> u8 {
        self.0.load(Ordering::Relaxed)
    }

    /// Store a raw idle-rate byte.
    #[inline]
    pub fn set_raw(&self, value: u8) {
        self.0.store(value, Ordering::Relaxed);
    }

    /// Idle rate in milliseconds.
    #[inline]
    #[must_use]
    pub fn millis(&self) -> u32 {
        u32::from(self.raw()) * IDLE_UNIT_MS
    }

    /// Store an idle rate given in milliseconds, saturating at the
    /// largest representable value (1020 ms).
    #[inline]
    pub fn set_millis(&self, millis: u32) {
        let units = (millis / IDLE_UNIT_MS).min(u32::from(u8::MAX));
        self.set_raw(units as u8);
    }
}

impl Default for IdleRate {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the USB control pipe needs to answer class requests.
pub struct HidSharedState {
    /// Latest report snapshot, served on GET_REPORT.
    pub report: ReportCell,
    /// Idle rate, round-tripped by SET_IDLE / GET_IDLE.
    pub idle: IdleRate,
}

impl HidSharedState {
    /// Create the startup state: neutral report, indefinite idle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            report: ReportCell::new(),
            idle: IdleRate::new(),
        }
    }
}

impl Default for HidSharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_cell_starts_neutral() {
        assert_eq!(ReportCell::new().load(), JoystickReport::neutral());
    }

    #[test]
    fn test_report_cell_round_trip() {
        let cell = ReportCell::new();
        let report = JoystickReport::assemble(-64, 127, 3, 0b0010_1010);
        cell.store(report);
        assert_eq!(cell.load(), report);
    }

    #[test]
    fn test_idle_rate_defaults_to_indefinite() {
        let idle = IdleRate::new();
        assert_eq!(idle.raw(), 0);
        assert_eq!(idle.millis(), 0);
    }

    #[test]
    fn test_idle_rate_millis_round_trip() {
        let idle = IdleRate::new();
        idle.set_millis(500);
        assert_eq!(idle.raw(), 125);
        assert_eq!(idle.millis(), 500);
    }

    #[test]
    fn test_idle_rate_saturates() {
        let idle = IdleRate::new();
        idle.set_millis(5000);
        assert_eq!(idle.raw(), u8::MAX);
        assert_eq!(idle.millis(), 1020);
    }

    #[test]
    fn test_idle_rate_truncates_partial_units() {
        let idle = IdleRate::new();
        idle.set_millis(7);
        assert_eq!(idle.raw(), 1);
    }
}
