use std::f32::consts::PI;

use glam::{Mat4, Vec3};
use vista_controls::light::{PHI_MAX, PHI_MIN};
use vista_controls::{CameraConfig, Motion, OrbitCamera};

/// Orbit radians per viewport height of drag.
const ORBIT_FACTOR: f32 = 2.0 * PI;
/// Distance kept per scroll step; values above zero move the camera closer.
const DOLLY_BASE: f32 = 0.95;
const MIN_DISTANCE: f32 = 1e-3;

/// Spherical offset of the camera relative to its target.
///
/// Uses the same convention as the light: `theta` around +Y starting at +Z,
/// `phi` measured from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Orbit {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Orbit {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length().max(MIN_DISTANCE);
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        self.radius * Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    aspect: f32,
    fov: f32,
    near: f32,
    far: f32,
}

impl Projection {
    /// `fov` is the vertical field of view in radians.
    pub fn new(aspect: f32, fov: f32, near: f32, far: f32) -> Self {
        Self {
            aspect,
            fov,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }
}

/// Orbit camera looking at a movable target.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    projection: Projection,
}

impl Camera {
    /// Creates a camera at `position` looking at `target`.
    pub fn new(position: Vec3, target: Vec3, projection: Projection) -> Self {
        Self {
            position,
            target,
            projection,
        }
    }

    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let projection = Projection::new(
            aspect,
            config.fov_degrees.to_radians(),
            config.near,
            config.far,
        );
        Self::new(config.position, config.target, projection)
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Camera-space basis as (right, up, forward).
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = self.forward();
        let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// World-space translation for a pan drag, scaled so the scene tracks the cursor.
    fn pan_offset(&self, motion: &Motion) -> Vec3 {
        let (right, up, _) = self.basis();
        let factor = self.distance() * (self.projection.fov * 0.5).tan() * 2.0;
        (-motion.pan.x * factor) * right + (motion.pan.y * factor) * up
    }

    fn orbit_offset(&self, motion: &Motion) -> Vec3 {
        let mut orbit = Orbit::from_offset(self.position - self.target);
        orbit.radius = (orbit.radius * DOLLY_BASE.powf(motion.dolly)).max(MIN_DISTANCE);
        orbit.theta -= motion.orbit.x * ORBIT_FACTOR;
        orbit.phi = (orbit.phi - motion.orbit.y * ORBIT_FACTOR).clamp(PHI_MIN, PHI_MAX);
        orbit.to_offset()
    }
}

impl OrbitCamera for Camera {
    fn orbit_update(&mut self, motion: &Motion) {
        if motion.is_zero() {
            return;
        }
        let pan = self.pan_offset(motion);
        let offset = self.orbit_offset(motion);
        self.target += pan;
        self.position = self.target + offset;
    }

    fn set_transform(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn camera() -> Camera {
        Camera::from_config(&CameraConfig::default(), 4.0 / 3.0)
    }

    #[test]
    fn test_orbit_keeps_distance_and_target() {
        let mut cam = camera();
        cam.orbit_update(&Motion {
            orbit: Vec2::new(0.125, 0.05),
            ..Motion::default()
        });
        assert!((cam.distance() - 2.0).abs() < 1e-4);
        assert_eq!(cam.target(), Vec3::ZERO);
        assert!(cam.position().x < 0.0);
        assert!(cam.position().y > 0.0);
    }

    #[test]
    fn test_quarter_turn_orbit() {
        let mut cam = camera();
        cam.orbit_update(&Motion {
            orbit: Vec2::new(-0.25, 0.0),
            ..Motion::default()
        });
        assert!((cam.position() - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_orbit_never_flips_over_pole() {
        let mut cam = camera();
        cam.orbit_update(&Motion {
            orbit: Vec2::new(0.0, 10.0),
            ..Motion::default()
        });
        let (right, up, _) = cam.basis();
        assert!(right.is_finite() && up.is_finite());
        assert!(cam.position().y > 1.99);
    }

    #[test]
    fn test_dolly_scales_distance() {
        let mut cam = camera();
        cam.orbit_update(&Motion {
            dolly: 2.0,
            ..Motion::default()
        });
        assert!((cam.distance() - 2.0 * 0.95 * 0.95).abs() < 1e-5);

        cam.orbit_update(&Motion {
            dolly: -2.0,
            ..Motion::default()
        });
        assert!((cam.distance() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_pan_moves_camera_and_target_together() {
        let mut cam = camera();
        let before = cam.position() - cam.target();
        cam.orbit_update(&Motion {
            pan: Vec2::new(0.5, 0.0),
            ..Motion::default()
        });
        assert!(cam.target().x < 0.0);
        assert!(((cam.position() - cam.target()) - before).length() < 1e-4);
    }

    #[test]
    fn test_projection_matches_config() {
        let cam = camera();
        assert!((cam.projection().fov() - 60f32.to_radians()).abs() < 1e-6);
        assert!((cam.projection().aspect() - 4.0 / 3.0).abs() < 1e-6);
        let clip = cam.projection_matrix().project_point3(Vec3::new(0.0, 0.0, -1.0));
        assert!(clip.x.abs() < 1e-6 && clip.y.abs() < 1e-6);
    }

    #[test]
    fn test_set_transform_snaps() {
        let mut cam = camera();
        cam.orbit_update(&Motion {
            orbit: Vec2::ONE,
            pan: Vec2::ONE,
            dolly: 3.0,
        });
        cam.set_transform(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO);
        assert_eq!(cam.position(), Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(cam.target(), Vec3::ZERO);
        assert!((cam.view_matrix().transform_point3(Vec3::ZERO) - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
    }
}
