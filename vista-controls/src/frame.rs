use glam::Vec3;

use crate::camera::OrbitCamera;
use crate::framebuffer::Framebuffer;

/// Everything the application gets to see for one frame.
///
/// Built fresh every iteration and only borrowed for the duration of
/// [`FrameHandler::tick`].
pub struct FrameContext<'a> {
    /// Unit vector from the light toward the scene.
    pub light_direction: Vec3,
    /// Seconds since the previous frame.
    pub delta_time: f32,
    pub framebuffer: &'a mut Framebuffer,
    pub camera: &'a dyn OrbitCamera,
}

/// Per-frame application callback. The implementor carries its own state.
pub trait FrameHandler {
    fn tick(&mut self, ctx: &mut FrameContext<'_>);
}

impl<F> FrameHandler for F
where
    F: FnMut(&mut FrameContext<'_>),
{
    fn tick(&mut self, ctx: &mut FrameContext<'_>) {
        self(ctx)
    }
}
