use glam::{Mat4, Vec3};

use crate::motion::Motion;

/// Camera collaborator driven by the control loop.
///
/// The loop only hands over motion deltas or a snap transform; turning those
/// into a view transform is entirely the implementation's business.
pub trait OrbitCamera {
    /// Apply one frame worth of normalized orbit/pan/dolly deltas.
    fn orbit_update(&mut self, motion: &Motion);

    /// Place the camera at `position` looking at `target`.
    fn set_transform(&mut self, position: Vec3, target: Vec3);

    fn position(&self) -> Vec3;

    fn target(&self) -> Vec3;

    /// Right-handed perspective projection with a `[0, 1]` depth range.
    fn projection_matrix(&self) -> Mat4;

    /// Right-handed view matrix with +Y up.
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target(), Vec3::Y)
    }
}

/// Canonical pose the camera snaps back to while the reset key is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraHome {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraHome {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 2.0),
            target: Vec3::ZERO,
        }
    }
}
