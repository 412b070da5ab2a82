use crate::constants::{
    CAMERA_DISTANCE, CAMERA_FOVY_DEGREES, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE,
    CAMERA_ROTATE_SPEED, CAMERA_ZOOM_STEP,
};
use crate::simulation::picking::Ray;
use glam::{Mat4, Vec2, Vec3};

pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: CAMERA_FOVY_DEGREES,
            znear: 0.1,
            zfar: 500.0,
        }
    }

    /// glam's `perspective_rh` already maps depth to wgpu's `[0, 1]` range.
    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fovy.to_radians(), self.aspect, self.znear, self.zfar);
        proj * view
    }

    /// World-space ray through a cursor position given in physical pixels.
    pub fn ray_through(&self, cursor: Vec2, viewport: Vec2) -> Ray {
        let ndc = Vec2::new(
            2.0 * cursor.x / viewport.x.max(1.0) - 1.0,
            1.0 - 2.0 * cursor.y / viewport.y.max(1.0),
        );
        let inverse = self.build_view_projection_matrix().inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));
        Ray::new(near, far - near)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
    // w unused; keeps the struct 16-byte aligned for WGSL
    eye: [f32; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 4],
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_view_projection_matrix().to_cols_array_2d();
        self.eye = camera.eye.extend(1.0).to_array();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Orbit-style camera rig: drag rotates around the target, wheel zooms.
#[derive(Clone, Debug)]
pub struct OrbitController {
    yaw: f32,
    pitch: f32,
    distance: f32,
    drag_anchor: Option<Vec2>,
}

impl OrbitController {
    const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.3,
            distance: CAMERA_DISTANCE,
            drag_anchor: None,
        }
    }

    pub fn begin_drag(&mut self, cursor: Vec2) {
        self.drag_anchor = Some(cursor);
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Rotates by the cursor delta since the last call. Returns whether a drag was active.
    pub fn drag_to(&mut self, cursor: Vec2) -> bool {
        let Some(anchor) = self.drag_anchor else {
            return false;
        };
        let delta = cursor - anchor;
        self.yaw -= delta.x * CAMERA_ROTATE_SPEED;
        self.pitch = (self.pitch + delta.y * CAMERA_ROTATE_SPEED)
            .clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
        self.drag_anchor = Some(cursor);
        true
    }

    /// Positive `steps` zoom in.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance * CAMERA_ZOOM_STEP.powf(steps))
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self, target: Vec3) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        target + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn apply(&self, camera: &mut Camera) {
        camera.eye = self.eye(camera.target);
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_points_at_target() {
        let mut camera = Camera::new(16.0 / 9.0);
        OrbitController::new().apply(&mut camera);
        let viewport = Vec2::new(1600.0, 900.0);
        let ray = camera.ray_through(viewport / 2.0, viewport);
        let expected = (camera.target - camera.eye).normalize();
        assert!((ray.direction - expected).length() < 1e-3);
        assert!(ray.intersect_sphere(Vec3::ZERO, 0.5).is_some());
    }

    #[test]
    fn corner_ray_misses_origin() {
        let camera = Camera::new(1.0);
        let viewport = Vec2::new(800.0, 800.0);
        let ray = camera.ray_through(Vec2::ZERO, viewport);
        assert!(ray.intersect_sphere(Vec3::ZERO, 0.5).is_none());
    }

    #[test]
    fn zoom_is_clamped() {
        let mut controller = OrbitController::new();
        controller.zoom(100.0);
        assert_eq!(controller.distance(), CAMERA_MIN_DISTANCE);
        controller.zoom(-100.0);
        assert_eq!(controller.distance(), CAMERA_MAX_DISTANCE);
    }

    #[test]
    fn drag_requires_anchor_and_clamps_pitch() {
        let mut controller = OrbitController::new();
        assert!(!controller.drag_to(Vec2::new(10.0, 10.0)));

        controller.begin_drag(Vec2::ZERO);
        assert!(controller.drag_to(Vec2::new(0.0, 100_000.0)));
        let eye = controller.eye(Vec3::ZERO);
        assert!((eye.length() - controller.distance()).abs() < 1e-3);
        assert!(eye.y < controller.distance());

        controller.end_drag();
        assert!(!controller.is_dragging());
    }
}
