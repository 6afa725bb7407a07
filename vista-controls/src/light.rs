//! Directional light steered with held keys.

use std::f32::consts::PI;

use glam::Vec3;

use crate::input::HeldKeys;

/// Margin that keeps the polar angle away from the poles.
pub const EPSILON: f32 = 1e-5;

/// Smallest polar angle the light may take.
pub const PHI_MIN: f32 = EPSILON;
/// Largest polar angle the light may take.
pub const PHI_MAX: f32 = PI - EPSILON;

/// Spherical angles of the light, in radians.
///
/// `theta` is the azimuth around +Y and is left unbounded. `phi` is measured
/// from +Y and stays inside [`PHI_MIN`, `PHI_MAX`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightAngles {
    theta: f32,
    phi: f32,
}

impl LightAngles {
    pub fn new(theta: f32, phi: f32) -> Self {
        Self {
            theta,
            phi: phi.clamp(PHI_MIN, PHI_MAX),
        }
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Unit vector from the light toward the scene.
    pub fn direction(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        -Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }
}

impl Default for LightAngles {
    fn default() -> Self {
        Self::new(45f32.to_radians(), 45f32.to_radians())
    }
}

/// Rate-based light controller, updated once per frame.
#[derive(Debug, Clone)]
pub struct LightController {
    angles: LightAngles,
    defaults: LightAngles,
    /// Radians per second.
    speed: f32,
}

impl LightController {
    pub fn new(defaults: LightAngles, speed: f32) -> Self {
        Self {
            angles: defaults,
            defaults,
            speed,
        }
    }

    pub fn angles(&self) -> LightAngles {
        self.angles
    }

    pub fn direction(&self) -> Vec3 {
        self.angles.direction()
    }

    /// Advance the angles by `delta_time` seconds of held keys.
    ///
    /// Reset wins over every directional key.
    pub fn update(&mut self, delta_time: f32, held: HeldKeys) {
        if held.reset {
            self.angles = self.defaults;
            return;
        }

        let angle = self.speed * delta_time;
        if held.theta_decrease {
            self.angles.theta -= angle;
        }
        if held.theta_increase {
            self.angles.theta += angle;
        }
        if held.phi_increase {
            self.angles.phi = (self.angles.phi + angle).min(PHI_MAX);
        }
        if held.phi_decrease {
            self.angles.phi = (self.angles.phi - angle).max(PHI_MIN);
        }
    }
}

impl Default for LightController {
    fn default() -> Self {
        Self::new(LightAngles::default(), PI)
    }
}
