//! The per-cycle sampling pipeline.
//!
//! One call to [`StickSampler::snapshot`] reads the three analog
//! channels sequentially, rescales each through its calibration, takes
//! one digital snapshot of the button lines, and assembles the report.
//! Nothing persists between cycles; every snapshot overwrites the last.

use crate::axis::AxisConfig;
use crate::input::{AdcSource, AxisChannel, ButtonSource, InputError, InputSource};
use crate::report::JoystickReport;

/// Calibration for all three axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StickConfig {
    pub x: AxisConfig,
    pub y: AxisConfig,
    pub z: AxisConfig,
}

impl StickConfig {
    /// Shipped calibration. X and Z are mounted upside down and read
    /// sign-inverted.
    pub const DEFAULT: Self = Self {
        x: AxisConfig::new(210, 23, true),
        y: AxisConfig::new(220, 25, false),
        z: AxisConfig::new(230, 31, true),
    };
}

impl Default for StickConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Samples the analog axes and button lines into report snapshots.
pub struct StickSampler<A, B> {
    adc: A,
    buttons: B,
    config: StickConfig,
}

impl<A: AdcSource, B: ButtonSource> StickSampler<A, B> {
    /// Create a sampler with the shipped calibration.
    pub fn new(adc: A, buttons: B) -> Self {
        Self::with_config(adc, buttons, StickConfig::DEFAULT)
    }

    /// Create a sampler with an explicit calibration.
    pub fn with_config(adc: A, buttons: B, config: StickConfig) -> Self {
        Self {
            adc,
            buttons,
            config,
        }
    }

    /// The active calibration.
    pub fn config(&self) -> &StickConfig {
        &self.config
    }

    /// Produce one fresh report snapshot.
    pub async fn snapshot(&mut self) -> Result<JoystickReport, InputError> {
        let x = self.config.x.apply(self.adc.read(AxisChannel::X).await?);
        let y = self.config.y.apply(self.adc.read(AxisChannel::Y).await?);
        let z = self.config.z.apply(self.adc.read(AxisChannel::Z).await?);
        let lines = self.buttons.read_lines();
        Ok(JoystickReport::assemble(x, y, z, lines))
    }
}

impl<A: AdcSource, B: ButtonSource> InputSource for StickSampler<A, B> {
    async fn receive(&mut self) -> Result<JoystickReport, InputError> {
        self.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::rescale;
    use crate::testing::block_on;

    struct FakeAdc {
        x: u16,
        y: u16,
        z: u16,
        fail: bool,
    }

    impl AdcSource for FakeAdc {
        async fn read(&mut self, channel: AxisChannel) -> Result<u16, InputError> {
            if self.fail {
                return Err(InputError::Adc);
            }
            Ok(match channel {
                AxisChannel::X => self.x,
                AxisChannel::Y => self.y,
                AxisChannel::Z => self.z,
            })
        }
    }

    struct FakeButtons(u8);

    impl ButtonSource for FakeButtons {
        fn read_lines(&mut self) -> u8 {
            self.0
        }
    }

    #[test]
    fn test_snapshot_applies_calibration_and_inversion() {
        let adc = FakeAdc {
            x: 700,
            y: 700,
            z: 700,
            fail: false,
        };
        let mut sampler = StickSampler::new(adc, FakeButtons(0b0011_1111));
        let report = block_on(sampler.snapshot()).unwrap();

        assert_eq!(report.x, -rescale(700, 210, 23));
        assert_eq!(report.y, rescale(700, 220, 25));
        assert_eq!(report.z, -rescale(700, 230, 31));
        assert_eq!(report.buttons & 0x3F, 0);
    }

    #[test]
    fn test_snapshot_merges_button_lines() {
        let adc = FakeAdc {
            x: 535,
            y: 537,
            z: 543,
            fail: false,
        };
        // Buttons 1 and 6 held (lines low)
        let mut sampler = StickSampler::new(adc, FakeButtons(0b0001_1110));
        let report = block_on(sampler.snapshot()).unwrap();
        assert_eq!(report.as_bytes(), [0, 0, 0, 0b1110_0001]);
    }

    #[test]
    fn test_snapshot_propagates_adc_errors() {
        let adc = FakeAdc {
            x: 0,
            y: 0,
            z: 0,
            fail: true,
        };
        let mut sampler = StickSampler::new(adc, FakeButtons(0x3F));
        assert_eq!(block_on(sampler.snapshot()), Err(InputError::Adc));
    }
}
