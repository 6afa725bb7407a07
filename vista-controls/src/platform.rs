use glam::{UVec2, Vec2};

use crate::dispatch::InputHandler;
use crate::framebuffer::Framebuffer;
use crate::input::Key;

/// Window-system collaborator driven by the [`Viewer`](crate::Viewer) loop.
///
/// Creating the window is the implementor's constructor and destroying it is
/// its `Drop`. Everything here is called from the loop thread only.
pub trait Platform {
    /// Drawable size in physical pixels.
    fn viewport(&self) -> UVec2;

    /// Last known cursor position in physical pixels, origin top left.
    fn cursor_position(&self) -> Vec2;

    fn key_held(&self, key: Key) -> bool;

    /// Process pending window events, forwarding buttons and scrolling to `handler`.
    fn poll_events(&mut self, handler: &mut dyn InputHandler);

    /// True once the user asked the window to close.
    fn should_close(&self) -> bool;

    /// Show `framebuffer` in the window.
    fn present(&mut self, framebuffer: &Framebuffer);

    /// Monotonic time in seconds.
    fn time(&self) -> f64;
}
