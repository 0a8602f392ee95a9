//! Free-eye navigation: the eye position is set directly.

use geonav_core::error::Result;
use geonav_core::{Globe, Position};

use crate::camera::CameraTransform;
use crate::navigator::{CameraStrategy, NavigatorState};

/// A navigator whose eye sits at a geographic position and looks around from there.
///
/// Heading, tilt and roll are interpreted in the local frame under the eye,
/// with the same composition as [`crate::LookAtNavigator`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FreeEyeNavigator {
    state: NavigatorState,
    eye_position: Position,
}

impl FreeEyeNavigator {
    /// Creates a navigator with its eye at `eye_position`.
    pub fn new(eye_position: Position) -> Result<Self> {
        let mut navigator = Self::default();
        navigator.set_eye_position(eye_position)?;
        Ok(navigator)
    }

    /// The eye position.
    pub fn eye_position(&self) -> Position {
        self.eye_position
    }

    /// Moves the eye. A non-finite altitude is rejected.
    pub fn set_eye_position(&mut self, position: Position) -> Result<()> {
        self.eye_position = Position::try_from_location(position.location.normalized(), position.altitude)?;
        Ok(())
    }

    /// Mutable access to the heading/tilt/roll/field-of-view parameters.
    ///
    /// This strategy imposes no limits beyond the shared ones.
    pub fn state_mut(&mut self) -> &mut NavigatorState {
        &mut self.state
    }
}

impl CameraStrategy for FreeEyeNavigator {
    fn state(&self) -> &NavigatorState {
        &self.state
    }

    fn compute_camera_transform(&self, globe: &Globe) -> CameraTransform {
        let frame = globe.surface_frame(&self.eye_position.location);
        let (view_direction, up_vector) = self.state.orientation(&frame);
        CameraTransform {
            eye_position: globe.compute_point(&self.eye_position),
            view_direction,
            up_vector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geonav_core::Location;

    #[test]
    fn test_rejects_non_finite_altitude() {
        let mut nav = FreeEyeNavigator::new(Position::new(10.0, 20.0, 500.0)).unwrap();
        let bad = Position {
            location: Location::new(0.0, 0.0),
            altitude: f64::NAN,
        };
        assert!(nav.set_eye_position(bad).is_err());
        assert_eq!(nav.eye_position(), Position::new(10.0, 20.0, 500.0));
        assert!(FreeEyeNavigator::new(bad).is_err());
    }

    #[test]
    fn test_eye_at_position_looking_down() {
        let globe = Globe::default();
        let position = Position::new(45.0, -75.0, 2000.0);
        let nav = FreeEyeNavigator::new(position).unwrap();
        let camera = nav.compute_camera_transform(&globe);
        let frame = globe.surface_frame(&position.location);
        assert!((camera.eye_position - globe.compute_point(&position)).length() < 1e-6);
        assert!((camera.view_direction + frame.up).length() < 1e-12);
    }

    #[test]
    fn test_matches_look_at_orientation() {
        // Same heading/tilt/roll over the same point gives the same orientation.
        let globe = Globe::default();
        let mut free = FreeEyeNavigator::new(Position::new(30.0, 30.0, 0.0)).unwrap();
        free.state_mut().set_heading(40.0).unwrap();
        free.state_mut().set_tilt(70.0).unwrap();
        free.state_mut().set_roll(15.0).unwrap();

        let mut look_at = crate::LookAtNavigator::new();
        look_at.set_heading(40.0).unwrap();
        look_at.set_tilt(70.0).unwrap();
        look_at.set_roll(15.0).unwrap();

        let a = free.compute_camera_transform(&globe);
        let b = look_at.compute_camera_transform(&globe);
        assert!(a.view_direction.abs_diff_eq(b.view_direction, 1e-12));
        assert!(a.up_vector.abs_diff_eq(b.up_vector, 1e-12));
    }
}
