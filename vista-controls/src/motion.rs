use glam::Vec2;

use crate::camera::{CameraHome, OrbitCamera};

/// Camera motion accumulated since the last frame.
///
/// Orbit and pan are in viewport-height units, dolly in scroll units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    pub orbit: Vec2,
    pub pan: Vec2,
    pub dolly: f32,
}

impl Motion {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Hand the accumulated motion to `camera` and clear it.
    ///
    /// With `reset` set the camera snaps to the home pose instead and the
    /// pending motion is dropped. Either way nothing carries into the next frame.
    pub fn apply_and_reset<C>(&mut self, camera: &mut C, reset: Option<&CameraHome>)
    where
        C: OrbitCamera + ?Sized,
    {
        match reset {
            Some(home) => camera.set_transform(home.position, home.target),
            None => camera.orbit_update(self),
        }
        *self = Self::default();
    }
}
