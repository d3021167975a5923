use super::types::{Mat4, Vec3};
use std::f32::consts::PI;

const MIN_POLAR: f32 = 1e-4;
/// Remaining angular velocity below which the camera counts as settled
const REST_EPSILON: f32 = 1e-6;

/// Perspective camera orbiting a target point
///
/// Pointer drags feed an angular velocity; each `update` applies a fraction
/// of it (the damping factor) and decays the rest, so the orbit eases out.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
    pub damping: f32,
    pub rotate_speed: f32,
    radius: f32,
    /// Azimuth around +Y, measured from +Z
    theta: f32,
    /// Polar angle from +Y
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let (theta, phi) = if radius > 0.0 {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, PI / 2.0)
        };
        Self {
            target,
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            aspect: 1.0,
            damping: 0.05,
            rotate_speed: 1.0,
            radius,
            theta,
            phi,
            delta_theta: 0.0,
            delta_phi: 0.0,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Queue an orbit from a pointer drag of `(dx, dy)` pixels over a viewport `height` pixels tall
    pub fn drag(&mut self, dx: f32, dy: f32, height: f32) {
        if height <= 0.0 {
            return;
        }
        self.delta_theta -= 2.0 * PI * dx / height * self.rotate_speed;
        self.delta_phi -= 2.0 * PI * dy / height * self.rotate_speed;
    }

    /// Apply one damped step; returns whether the camera is still moving
    pub fn update(&mut self) -> bool {
        self.theta += self.delta_theta * self.damping;
        self.phi = (self.phi + self.delta_phi * self.damping).clamp(MIN_POLAR, PI - MIN_POLAR);
        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;
        self.is_moving()
    }

    pub fn is_moving(&self) -> bool {
        self.delta_theta.abs() > REST_EPSILON || self.delta_phi.abs() > REST_EPSILON
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
