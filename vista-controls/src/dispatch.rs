use glam::Vec2;
use tracing::trace;

use crate::drag::DragState;
use crate::input::MouseButton;
use crate::motion::Motion;

/// Receiver for discrete window events.
///
/// Platforms call into this synchronously from
/// [`Platform::poll_events`](crate::Platform::poll_events), on the loop thread.
pub trait InputHandler {
    /// A mouse button changed state while the cursor was at `cursor`.
    fn on_button(&mut self, button: MouseButton, pressed: bool, cursor: Vec2);

    /// Vertical scroll, positive away from the user.
    fn on_scroll(&mut self, offset: f32);
}

/// Motion and drag state shared by event dispatch and the per-frame update.
#[derive(Debug, Clone, Default)]
pub struct ControlState {
    pub motion: Motion,
    pub drag: DragState,
    /// Pixel height used to normalize pointer deltas.
    pub viewport_height: f32,
}

impl ControlState {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            motion: Motion::default(),
            drag: DragState::default(),
            viewport_height,
        }
    }

    /// Fold active drags at the freshly sampled cursor position.
    pub fn sample_cursor(&mut self, cursor: Vec2) {
        self.drag.fold(cursor, self.viewport_height, &mut self.motion);
    }
}

impl InputHandler for ControlState {
    fn on_button(&mut self, button: MouseButton, pressed: bool, cursor: Vec2) {
        trace!(?button, pressed, x = cursor.x, y = cursor.y, "button");
        if pressed {
            self.drag.press(button, cursor);
        } else {
            self.drag
                .release(button, cursor, self.viewport_height, &mut self.motion);
        }
    }

    fn on_scroll(&mut self, offset: f32) {
        self.motion.dolly += offset;
    }
}
