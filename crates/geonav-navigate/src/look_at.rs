//! Look-at navigation: a target location, a range, and an orientation around it.

use geonav_core::error::{ensure_finite, GeonavError, Result};
use geonav_core::options::DEFAULT_RANGE;
use geonav_core::{Globe, Location, NavigatorOptions, Options, RangeLimits};

use crate::camera::CameraTransform;
use crate::limits::LimitPolicy;
use crate::navigator::{CameraStrategy, NavigatorState};

/// A navigator that orbits a geographic look-at location at a given range.
///
/// Every mutation is followed by limit enforcement, so readers always see a
/// state within the bounds of the current mode.
#[derive(Debug, Clone, PartialEq)]
pub struct LookAtNavigator {
    state: NavigatorState,
    look_at_location: Location,
    range: f64,
    enable_2d_limits: bool,
    limits: LimitPolicy,
    defaults: NavigatorOptions,
}

impl LookAtNavigator {
    /// Creates a navigator with default options and limits for the WGS 84 globe.
    pub fn new() -> Self {
        Self::with_limits(NavigatorOptions::default(), RangeLimits::default())
    }

    /// Creates a navigator from viewer options.
    ///
    /// Options are expected to be validated; an out-of-range field of view
    /// falls back to the default.
    pub fn from_options(options: &Options) -> Self {
        Self::with_limits(options.navigator, options.range_limits())
    }

    /// Creates a navigator with explicit defaults and range limits.
    pub fn with_limits(defaults: NavigatorOptions, ranges: RangeLimits) -> Self {
        let state = NavigatorState::with_field_of_view(defaults.field_of_view).unwrap_or_else(|err| {
            log::warn!("{err}; using default field of view");
            NavigatorState::new()
        });
        let range = if defaults.range.is_finite() && defaults.range > 0.0 {
            defaults.range
        } else {
            DEFAULT_RANGE
        };
        let look_at_location = if defaults.look_at_location.is_finite() {
            defaults.look_at_location
        } else {
            NavigatorOptions::default().look_at_location
        };
        let mut navigator = Self {
            state,
            look_at_location,
            range,
            enable_2d_limits: defaults.enable_2d_limits,
            limits: LimitPolicy::new(ranges),
            defaults,
        };
        navigator.enforce_limits();
        navigator
    }

    /// Restores the configured initial parameters.
    pub fn reset(&mut self) {
        let ranges = *self.limits.ranges();
        *self = Self::with_limits(self.defaults, ranges);
    }

    /// The location the camera looks at.
    pub fn look_at_location(&self) -> Location {
        self.look_at_location
    }

    /// Eye-to-target distance in meters.
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Whether flattened-globe limits are in effect.
    pub fn enable_2d_limits(&self) -> bool {
        self.enable_2d_limits
    }

    /// The limit policy in effect.
    pub fn limits(&self) -> &LimitPolicy {
        &self.limits
    }

    /// Sets the look-at location. Non-finite components are rejected.
    pub fn set_look_at_location(&mut self, location: Location) -> Result<()> {
        location.ensure_finite()?;
        self.look_at_location = location;
        self.enforce_limits();
        Ok(())
    }

    /// Sets the range. Values beyond the mode's bounds are clamped; zero,
    /// negative and non-finite values are rejected.
    pub fn set_range(&mut self, range: f64) -> Result<()> {
        let range = ensure_finite("range", range)?;
        if range <= 0.0 {
            return Err(GeonavError::invalid_parameter("range", range, "must be positive"));
        }
        self.range = range;
        self.enforce_limits();
        Ok(())
    }

    /// Sets the heading in degrees, wrapping into `[0, 360)`.
    pub fn set_heading(&mut self, heading: f64) -> Result<()> {
        self.state.set_heading(heading)?;
        self.enforce_limits();
        Ok(())
    }

    /// Sets the tilt in degrees, clamped to 90 with 2D limits and 180 otherwise.
    pub fn set_tilt(&mut self, tilt: f64) -> Result<()> {
        self.state.set_tilt(tilt)?;
        self.enforce_limits();
        Ok(())
    }

    /// Sets the roll in degrees, wrapping into `[0, 360)`.
    pub fn set_roll(&mut self, roll: f64) -> Result<()> {
        self.state.set_roll(roll)?;
        self.enforce_limits();
        Ok(())
    }

    /// Sets the field of view in degrees; must lie in `(0, 180)`.
    pub fn set_field_of_view(&mut self, field_of_view: f64) -> Result<()> {
        self.state.set_field_of_view(field_of_view)?;
        self.enforce_limits();
        Ok(())
    }

    /// Switches between flattened-globe and full 3D limits, re-clamping immediately.
    pub fn set_enable_2d_limits(&mut self, enable: bool) {
        self.enable_2d_limits = enable;
        self.enforce_limits();
    }

    /// Replaces the range limits, re-clamping immediately.
    pub fn set_range_limits(&mut self, ranges: RangeLimits) -> Result<()> {
        ranges.validate()?;
        self.limits = LimitPolicy::new(ranges);
        self.enforce_limits();
        Ok(())
    }

    fn enforce_limits(&mut self) {
        let limits = self.limits;
        limits.apply(self);
    }

    pub(crate) fn state_mut(&mut self) -> &mut NavigatorState {
        &mut self.state
    }

    pub(crate) fn set_range_unchecked(&mut self, range: f64) {
        self.range = range;
    }

    pub(crate) fn set_look_at_location_unchecked(&mut self, location: Location) {
        self.look_at_location = location;
    }
}

impl CameraStrategy for LookAtNavigator {
    fn state(&self) -> &NavigatorState {
        &self.state
    }

    fn compute_camera_transform(&self, globe: &Globe) -> CameraTransform {
        // Enforce on a copy; this call never mutates.
        let mut navigator = self.clone();
        navigator.enforce_limits();

        let look_at_point = globe.compute_point_from_location(&navigator.look_at_location);
        let frame = globe.surface_frame(&navigator.look_at_location);
        let (view_direction, up_vector) = navigator.state.orientation(&frame);

        CameraTransform {
            eye_position: look_at_point - view_direction * navigator.range,
            view_direction,
            up_vector,
        }
    }
}

impl Default for LookAtNavigator {
    fn default() -> Self {
        Self::new()
    }
}
