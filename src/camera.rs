//! Orbit camera.
//!
//! Yaw/pitch/distance parameterization around a target point, combined with
//! a perspective projection. The projection aspect ratio comes from the
//! viewport at render time so resizes only have to touch one place.

use glam::{Mat4, Vec3};

/// Orbit camera with a perspective projection.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
}

impl OrbitCamera {
    /// Default framing: the eye starts near (1, 1, 2) looking at the origin,
    /// with a 75 degree vertical field of view.
    pub fn new() -> Self {
        Self {
            yaw: 0.4636,
            pitch: 0.4205,
            distance: 2.4495,
            target: Vec3::ZERO,
            fov_y: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Calculate the projection matrix for the given aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view_matrix()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_eye_near_expected_spot() {
        let camera = OrbitCamera::new();
        let pos = camera.position();
        assert!((pos - Vec3::new(1.0, 1.0, 2.0)).length() < 1e-3);
    }

    #[test]
    fn test_position_respects_distance() {
        let mut camera = OrbitCamera::new();
        camera.distance = 5.0;
        let d = (camera.position() - camera.target).length();
        assert!((d - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_view_proj_is_finite() {
        let camera = OrbitCamera::new();
        let vp = camera.view_proj(16.0 / 9.0);
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_yaw_orbits_around_target() {
        let mut camera = OrbitCamera::new();
        let before = camera.position();
        camera.yaw += std::f32::consts::PI;
        let after = camera.position();

        let drift = (before - camera.target).length() - (after - camera.target).length();
        assert!(drift.abs() < 1e-4);
        assert!((before - after).length() > 0.1);
    }
}
