//! Limit enforcement for look-at navigation.
//!
//! Clamping here is normalization, not an error: it is applied after every
//! mutation and is idempotent.

use geonav_core::RangeLimits;

use crate::look_at::LookAtNavigator;
use crate::navigator::{CameraStrategy, MAX_TILT};

/// Largest tilt with 2D limits: the eye may not drop below the map's horizon.
pub const MAX_TILT_2D: f64 = 90.0;

/// Clamps look-at parameters into the range allowed by the active mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitPolicy {
    ranges: RangeLimits,
}

impl LimitPolicy {
    /// Creates a policy from range limits.
    pub fn new(ranges: RangeLimits) -> Self {
        Self { ranges }
    }

    /// The range limits this policy enforces.
    pub fn ranges(&self) -> &RangeLimits {
        &self.ranges
    }

    /// Maximum tilt for the mode.
    pub fn max_tilt(limits_2d: bool) -> f64 {
        if limits_2d {
            MAX_TILT_2D
        } else {
            MAX_TILT
        }
    }

    /// Clamps a (positive) range into the mode's bounds.
    ///
    /// Unvalidated, inverted bounds resolve to the maximum instead of panicking.
    pub fn clamp_range(&self, range: f64, limits_2d: bool) -> f64 {
        let (min, max) = self.ranges.bounds(limits_2d);
        range.max(min).min(max)
    }

    /// Brings every parameter of `navigator` into its allowed range.
    pub fn apply(&self, navigator: &mut LookAtNavigator) {
        let limits_2d = navigator.enable_2d_limits();
        let max_tilt = Self::max_tilt(limits_2d);
        let before = navigator.state().tilt();
        if navigator.state_mut().limit_tilt(max_tilt) {
            log::debug!("tilt {before} clamped to {max_tilt}");
        }

        let range = navigator.range();
        let clamped = self.clamp_range(range, limits_2d);
        if clamped != range {
            log::debug!("range {range} clamped to {clamped}");
            navigator.set_range_unchecked(clamped);
        }

        let location = navigator.look_at_location();
        navigator.set_look_at_location_unchecked(location.normalized());
    }
}

impl Default for LimitPolicy {
    fn default() -> Self {
        Self::new(RangeLimits::default())
    }
}
