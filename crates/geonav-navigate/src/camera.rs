//! Camera pose handed to the renderer.

use glam::{DMat4, DVec3, Vec3};

/// The camera pose for one frame: where the eye is and how it is oriented.
///
/// This is the whole contract with the renderer, which must use it as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// Eye position in globe Cartesian coordinates (meters).
    pub eye_position: DVec3,
    /// Unit vector from the eye toward what it looks at.
    pub view_direction: DVec3,
    /// Unit up vector, perpendicular to `view_direction`.
    pub up_vector: DVec3,
}

impl CameraTransform {
    /// Gets the right direction (view cross up).
    pub fn right(&self) -> DVec3 {
        self.view_direction.cross(self.up_vector).normalize()
    }

    /// Returns the view matrix (world to eye space, right-handed, looking down -Z).
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_to_rh(self.eye_position, self.view_direction, self.up_vector)
    }

    /// Returns true if every component is within `tolerance` of `other`.
    pub fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.eye_position.abs_diff_eq(other.eye_position, tolerance)
            && self.view_direction.abs_diff_eq(other.view_direction, tolerance)
            && self.up_vector.abs_diff_eq(other.up_vector, tolerance)
    }

    /// Packs the pose into GPU-friendly single precision.
    ///
    /// Globe coordinates overflow f32 precision, so the view matrix is
    /// relative to the eye and the eye is split into high and low parts.
    pub fn to_uniforms(&self) -> CameraUniforms {
        let view_rte = DMat4::look_to_rh(DVec3::ZERO, self.view_direction, self.up_vector).as_mat4();
        let eye_high = self.eye_position.as_vec3();
        let eye_low = (self.eye_position - eye_high.as_dvec3()).as_vec3();
        CameraUniforms {
            view_rte: view_rte.to_cols_array_2d(),
            eye_high: eye_high.extend(1.0).to_array(),
            eye_low: eye_low.extend(0.0).to_array(),
            view_direction: self.view_direction.as_vec3().extend(0.0).to_array(),
            up_vector: self.up_vector.as_vec3().extend(0.0).to_array(),
        }
    }
}

/// GPU uniforms for a [`CameraTransform`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view_rte: [[f32; 4]; 4],
    pub eye_high: [f32; 4],
    pub eye_low: [f32; 4],
    pub view_direction: [f32; 4],
    pub up_vector: [f32; 4],
}

impl CameraUniforms {
    /// Reassembles the double-precision eye position.
    pub fn eye_position(&self) -> DVec3 {
        let high = Vec3::new(self.eye_high[0], self.eye_high[1], self.eye_high[2]).as_dvec3();
        let low = Vec3::new(self.eye_low[0], self.eye_low[1], self.eye_low[2]).as_dvec3();
        high + low
    }
}
