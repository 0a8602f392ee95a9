//! Shared navigator parameters and the camera strategy interface.

use geonav_core::angle::normalize_degrees_360;
use geonav_core::error::{ensure_finite, GeonavError, Result};
use geonav_core::options::DEFAULT_FIELD_OF_VIEW;
use geonav_core::{Globe, LocalFrame};
use glam::{DQuat, DVec3};

use crate::camera::CameraTransform;

/// Largest tilt any navigator accepts, in degrees.
pub const MAX_TILT: f64 = 180.0;

/// A navigation strategy that can produce a camera pose.
///
/// Concrete strategies own a [`NavigatorState`] by composition and add their
/// own parameters on top of it.
pub trait CameraStrategy {
    /// The shared heading/tilt/roll/field-of-view parameters.
    fn state(&self) -> &NavigatorState;

    /// Derives the camera pose from the current parameters.
    ///
    /// Must be deterministic and must not fail for any reachable state.
    fn compute_camera_transform(&self, globe: &Globe) -> CameraTransform;
}

/// Viewing parameters common to every navigator.
///
/// All angles are degrees. Every setter leaves the fields in canonical range
/// or returns an error without touching them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorState {
    heading: f64,
    tilt: f64,
    roll: f64,
    field_of_view: f64,
}

impl NavigatorState {
    /// Creates a state with zero heading, tilt and roll and the default field of view.
    pub fn new() -> Self {
        Self {
            heading: 0.0,
            tilt: 0.0,
            roll: 0.0,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
        }
    }

    /// Creates a state with the given field of view.
    pub fn with_field_of_view(field_of_view: f64) -> Result<Self> {
        let mut state = Self::new();
        state.set_field_of_view(field_of_view)?;
        Ok(state)
    }

    /// Heading in `[0, 360)`, clockwise from north.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Tilt in `[0, 180]`, measured from the nadir view.
    pub fn tilt(&self) -> f64 {
        self.tilt
    }

    /// Roll in `[0, 360)` about the view axis.
    pub fn roll(&self) -> f64 {
        self.roll
    }

    /// Field of view in `(0, 180)`.
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// Sets the heading, wrapping it into `[0, 360)`.
    pub fn set_heading(&mut self, heading: f64) -> Result<()> {
        self.heading = normalize_degrees_360(ensure_finite("heading", heading)?);
        Ok(())
    }

    /// Sets the tilt, clamping it into `[0, 180]`.
    pub fn set_tilt(&mut self, tilt: f64) -> Result<()> {
        self.tilt = ensure_finite("tilt", tilt)?.clamp(0.0, MAX_TILT);
        Ok(())
    }

    /// Sets the roll, wrapping it into `[0, 360)`.
    pub fn set_roll(&mut self, roll: f64) -> Result<()> {
        self.roll = normalize_degrees_360(ensure_finite("roll", roll)?);
        Ok(())
    }

    /// Sets the field of view. Values outside `(0, 180)` are rejected, not clamped.
    pub fn set_field_of_view(&mut self, field_of_view: f64) -> Result<()> {
        let fov = ensure_finite("field_of_view", field_of_view)?;
        if fov <= 0.0 || fov >= 180.0 {
            return Err(GeonavError::invalid_parameter(
                "field_of_view",
                fov,
                "must be within (0, 180)",
            ));
        }
        self.field_of_view = fov;
        Ok(())
    }

    /// Lowers the tilt to at most `max_tilt`. Returns true if it changed.
    pub(crate) fn limit_tilt(&mut self, max_tilt: f64) -> bool {
        let clamped = self.tilt.clamp(0.0, max_tilt);
        let changed = clamped != self.tilt;
        self.tilt = clamped;
        changed
    }

    /// View direction and up vector for this state's heading, tilt and roll in `frame`.
    ///
    /// Heading turns the nadir view about the local vertical, tilt then pitches
    /// it about the heading-rotated east axis toward the heading direction, and
    /// roll finally spins the up vector about the view direction. The order
    /// matters: renderers rely on exactly this composition.
    pub fn orientation(&self, frame: &LocalFrame) -> (DVec3, DVec3) {
        let heading_rotation = DQuat::from_axis_angle(frame.up, -self.heading.to_radians());
        let right = heading_rotation * frame.east;
        let tilt_rotation = DQuat::from_axis_angle(right, self.tilt.to_radians());
        let rotation = tilt_rotation * heading_rotation;

        let view_direction = (rotation * -frame.up).normalize();
        let up = rotation * frame.north;

        // Positive roll turns the up vector clockwise as seen from the eye.
        let roll_rotation = DQuat::from_axis_angle(view_direction, self.roll.to_radians());
        let up_vector = (roll_rotation * up).normalize();

        (view_direction, up_vector)
    }
}

impl Default for NavigatorState {
    fn default() -> Self {
        Self::new()
    }
}
