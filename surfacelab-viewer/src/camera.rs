//! Camera utilities for 3D visualization

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};
use surfacelab_core::FrameResult;

/// Keeps orbiting away from the poles where `up` and the view direction align
const PITCH_LIMIT: f32 = 0.01;

/// A perspective camera looking at a target point
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(
        position: Point3<f32>,
        target: Point3<f32>,
        up: Vector3<f32>,
        fov: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            position,
            target,
            up,
            fov,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let perspective = Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far);
        perspective.into_inner()
    }

    /// Distance between the eye and the target
    pub fn distance(&self) -> f32 {
        (self.position - self.target).norm()
    }

    /// Place the camera at a framing result's pose.
    ///
    /// The clip planes are moved so the whole object stays between them and
    /// the target is always strictly beyond the near plane.
    pub fn frame(&mut self, frame: &FrameResult) {
        self.position = frame.camera_position;
        self.target = frame.camera_target;

        let radius = 0.5 * frame.size.norm();
        let distance = self.distance();
        self.near = (distance - radius).min(distance * 0.5).max(distance * 1e-3);
        self.far = (distance + radius) * 2.0;
    }

    /// Rotate the camera around the target, keeping its distance
    pub fn orbit(&mut self, horizontal: f32, vertical: f32) {
        let offset = self.position - self.target;
        let radius = offset.norm();
        if radius <= f32::EPSILON {
            return;
        }

        // Spherical coordinates around +Y
        let yaw = offset.z.atan2(offset.x) + horizontal;
        let pitch = ((offset.y / radius).clamp(-1.0, 1.0).acos() + vertical)
            .clamp(PITCH_LIMIT, std::f32::consts::PI - PITCH_LIMIT);

        let direction = Vector3::new(yaw.cos() * pitch.sin(), pitch.cos(), yaw.sin() * pitch.sin());
        self.position = self.target + direction * radius;
    }

    /// Scale the distance to the target; positive `amount` moves closer
    pub fn zoom(&mut self, amount: f32) {
        let offset = self.position - self.target;
        let factor = (1.0 - amount).max(0.05);
        self.position = self.target + offset * factor;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            std::f32::consts::FRAC_PI_4,
            16.0 / 9.0,
            0.1,
            100.0,
        )
    }
}
