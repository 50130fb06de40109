//! Orbit controls: drag to rotate, scroll to zoom, with inertial damping.
//!
//! Input events accumulate into pending deltas; `update` folds them into an
//! angular velocity that decays exponentially, so the camera keeps gliding
//! briefly after the mouse stops. All state lives here rather than in the
//! camera, which stays a plain set of orbit parameters.

use crate::camera::OrbitCamera;

/// Radians of rotation per pixel of drag.
const ROTATE_SENSITIVITY: f32 = 0.005;
/// Distance change per scroll line.
const ZOOM_SENSITIVITY: f32 = 0.3;
/// Exponential decay rate of the inertial velocity, per second.
const DAMPING: f32 = 8.0;
/// Keeps the camera from flipping over the poles.
const PITCH_LIMIT: f32 = 1.5;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 20.0;

/// Mouse-driven orbit controls with inertial damping.
#[derive(Debug, Default)]
pub struct OrbitControls {
    dragging: bool,
    last_cursor: Option<(f64, f64)>,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    zoom_velocity: f32,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a press or release of the rotate button.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
        if !dragging {
            self.last_cursor = None;
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Report the cursor position in window pixels.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        if self.dragging {
            if let Some((last_x, last_y)) = self.last_cursor {
                self.pending_yaw -= (x - last_x) as f32 * ROTATE_SENSITIVITY;
                self.pending_pitch += (y - last_y) as f32 * ROTATE_SENSITIVITY;
            }
            self.last_cursor = Some((x, y));
        }
    }

    /// Report scroll input, in lines (positive zooms in).
    pub fn scrolled(&mut self, lines: f32) {
        self.pending_zoom += lines * ZOOM_SENSITIVITY;
    }

    /// Advance the controls by `dt` seconds, applying pending input and
    /// decaying inertia onto `camera`.
    pub fn update(&mut self, camera: &mut OrbitCamera, dt: f32) {
        self.yaw_velocity += self.pending_yaw;
        self.pitch_velocity += self.pending_pitch;
        self.zoom_velocity += self.pending_zoom;
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_zoom = 0.0;

        camera.yaw += self.yaw_velocity;
        camera.pitch = (camera.pitch + self.pitch_velocity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        camera.distance = (camera.distance - self.zoom_velocity).clamp(MIN_DISTANCE, MAX_DISTANCE);

        let decay = (-DAMPING * dt.max(0.0)).exp();
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
        self.zoom_velocity *= decay;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_drag_rotates_camera() {
        let mut controls = OrbitControls::new();
        let mut camera = OrbitCamera::new();
        let yaw_before = camera.yaw;

        controls.set_dragging(true);
        controls.cursor_moved(100.0, 100.0);
        controls.cursor_moved(140.0, 100.0);
        controls.update(&mut camera, DT);

        assert!(camera.yaw < yaw_before);
    }

    #[test]
    fn test_motion_without_drag_is_ignored() {
        let mut controls = OrbitControls::new();
        let mut camera = OrbitCamera::new();
        let yaw_before = camera.yaw;

        controls.cursor_moved(100.0, 100.0);
        controls.cursor_moved(300.0, 300.0);
        controls.update(&mut camera, DT);

        assert_eq!(camera.yaw, yaw_before);
    }

    #[test]
    fn test_inertia_decays_after_release() {
        let mut controls = OrbitControls::new();
        let mut camera = OrbitCamera::new();

        controls.set_dragging(true);
        controls.cursor_moved(0.0, 0.0);
        controls.cursor_moved(50.0, 0.0);
        controls.update(&mut camera, DT);
        controls.set_dragging(false);

        // Camera keeps moving after release, each step smaller than the last.
        let mut last_step = f32::MAX;
        for _ in 0..5 {
            let before = camera.yaw;
            controls.update(&mut camera, DT);
            let step = (camera.yaw - before).abs();
            assert!(step < last_step);
            last_step = step;
        }
        assert!(last_step < ROTATE_SENSITIVITY * 50.0);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut controls = OrbitControls::new();
        let mut camera = OrbitCamera::new();

        controls.set_dragging(true);
        controls.cursor_moved(0.0, 0.0);
        controls.cursor_moved(0.0, 10_000.0);
        controls.update(&mut camera, DT);

        assert!(camera.pitch <= PITCH_LIMIT);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut controls = OrbitControls::new();
        let mut camera = OrbitCamera::new();

        controls.scrolled(1_000.0);
        controls.update(&mut camera, DT);
        assert_eq!(camera.distance, MIN_DISTANCE);

        controls.scrolled(-10_000.0);
        controls.update(&mut camera, DT);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }
}
