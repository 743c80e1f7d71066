//! Axis rescaling: dead zone, notch correction, and saturation.

/// Nominal rest position of a raw 10-bit sample.
const CENTER: i32 = 512;
/// Dead-zone band edges around the center, both exclusive.
const DEAD_LOW: i32 = 500;
const DEAD_HIGH: i32 = 524;
/// Correction pushed toward zero just outside the dead zone, so the
/// output stays continuous at the band edges.
const NOTCH: i32 = 12;
/// Full output span before saturation (2 * AXIS_MAX).
const SPAN: i32 = 254;
/// Saturation limit; -128 is never produced.
const AXIS_MAX: i32 = 127;

/// Per-axis calibration, fixed at compile time.
///
/// `scale` sets the raw count range that maps onto the full output span,
/// `offset` shifts the electrical center, and `invert` flips the sign
/// for axes mounted upside down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisConfig {
    /// Raw counts mapped onto the full output span. Must be non-zero.
    pub scale: u16,
    /// Electrical center offset in raw counts.
    pub offset: i16,
    /// Flip the sign of the rescaled value.
    pub invert: bool,
}

impl AxisConfig {
    /// Create a new axis calibration.
    #[must_use]
    pub const fn new(scale: u16, offset: i16, invert: bool) -> Self {
        Self {
            scale,
            offset,
            invert,
        }
    }

    /// Rescale a raw sample through this calibration, including the
    /// sign inversion.
    #[must_use]
    pub fn apply(&self, raw: u16) -> i8 {
        let value = rescale(raw, self.scale, self.offset);
        if self.invert {
            -value
        } else {
            value
        }
    }
}

/// Convert one raw 10-bit sample into a signed axis value.
///
/// Samples inside the open band `(500+offset, 524+offset)` map to 0,
/// absorbing analog jitter at the rest position. Everything else is
/// centered on `512+offset`, corrected by 12 counts toward zero,
/// scaled so `scale` raw counts cover the full -127..=127 span, and
/// saturated.
///
/// Rounding is half away from zero. The result is always within
/// [-127, 127] for any `raw` in [0, 1023]; out-of-range products
/// saturate rather than wrap.
#[must_use]
pub fn rescale(raw: u16, scale: u16, offset: i16) -> i8 {
    debug_assert!(scale > 0);
    let raw = i32::from(raw);
    let offset = i32::from(offset);

    if raw > DEAD_LOW + offset && raw < DEAD_HIGH + offset {
        return 0;
    }

    let mut centered = raw - (CENTER + offset);
    centered += if centered > 0 { -NOTCH } else { NOTCH };

    let scaled = div_round_half_away(centered * SPAN, i32::from(scale));
    scaled.clamp(-AXIS_MAX, AXIS_MAX) as i8
}

/// Integer division rounding half away from zero. `den` must be positive.
#[inline]
const fn div_round_half_away(num: i32, den: i32) -> i32 {
    if num >= 0 {
        (2 * num + den) / (2 * den)
    } else {
        (2 * num - den) / (2 * den)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: [(u16, i16); 3] = [(210, 23), (220, 25), (230, 31)];

    #[test]
    fn test_output_in_range_for_all_raw_samples() {
        for (scale, offset) in SHIPPED {
            for raw in 0..=1023u16 {
                let value = rescale(raw, scale, offset);
                assert!((-127..=127).contains(&i32::from(value)));
            }
        }
    }

    #[test]
    fn test_dead_zone_maps_to_zero() {
        for (scale, offset) in SHIPPED {
            assert_eq!(rescale((512 + offset) as u16, scale, offset), 0);
            for raw in (500 + offset)..=(524 + offset) {
                // Band edges are outside the dead zone but the notch
                // correction still lands them on zero.
                assert_eq!(rescale(raw as u16, scale, offset), 0);
            }
        }
    }

    #[test]
    fn test_monotonic_over_full_domain() {
        for (scale, offset) in SHIPPED {
            let mut previous = rescale(0, scale, offset);
            for raw in 1..=1023u16 {
                let value = rescale(raw, scale, offset);
                assert!(value >= previous, "decreased at raw={raw}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_saturates_at_extremes() {
        assert_eq!(rescale(1023, 220, 25), 127);
        assert_eq!(rescale(0, 220, 25), -127);
    }

    #[test]
    fn test_documented_examples() {
        // 500 sits on the band edge; the notch correction yields 0.
        assert_eq!(rescale(500, 220, 0), 0);
        // centered 288, notched 276, scaled 319, clamped.
        assert_eq!(rescale(800, 220, 0), 127);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(div_round_half_away(5, 2), 3);
        assert_eq!(div_round_half_away(-5, 2), -3);
        assert_eq!(div_round_half_away(4, 2), 2);
        assert_eq!(div_round_half_away(3, 4), 1);
        assert_eq!(div_round_half_away(-3, 4), -1);
        assert_eq!(div_round_half_away(1, 4), 0);
    }

    #[test]
    fn test_apply_inversion() {
        let upright = AxisConfig::new(220, 0, false);
        let inverted = AxisConfig::new(220, 0, true);
        assert_eq!(upright.apply(600), -inverted.apply(600));
        assert!(upright.apply(600) > 0);
        // Saturated magnitudes invert without wrapping
        assert_eq!(inverted.apply(0), 127);
        assert_eq!(inverted.apply(1023), -127);
    }
}
