use glam::Vec2;

use crate::input::MouseButton;
use crate::motion::Motion;

/// Convert a pixel delta into viewport-height units.
pub fn normalized_delta(from: Vec2, to: Vec2, viewport_height: f32) -> Vec2 {
    (to - from) / viewport_height
}

/// Active mouse drags.
///
/// Each field holds the last sampled cursor position of a drag in progress.
/// Orbit (primary button) and pan (secondary button) are tracked
/// independently so both can run at once.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    orbit: Option<Vec2>,
    pan: Option<Vec2>,
}

impl DragState {
    pub fn is_orbiting(&self) -> bool {
        self.orbit.is_some()
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    pub fn orbit_anchor(&self) -> Option<Vec2> {
        self.orbit
    }

    pub fn pan_anchor(&self) -> Option<Vec2> {
        self.pan
    }

    /// Start a drag at `cursor`. Buttons other than primary/secondary are ignored.
    pub fn press(&mut self, button: MouseButton, cursor: Vec2) {
        if let Some(anchor) = self.anchor_mut(button) {
            *anchor = Some(cursor);
        }
    }

    /// End a drag, folding whatever moved since the last sample into `motion`.
    pub fn release(
        &mut self,
        button: MouseButton,
        cursor: Vec2,
        viewport_height: f32,
        motion: &mut Motion,
    ) {
        let Some(slot) = self.anchor_mut(button) else {
            return;
        };
        let Some(anchor) = slot.take() else {
            return;
        };
        let delta = normalized_delta(anchor, cursor, viewport_height);
        match button {
            MouseButton::Primary => motion.orbit += delta,
            MouseButton::Secondary => motion.pan += delta,
            _ => {}
        }
    }

    /// Fold the movement of every active drag into `motion` and advance the anchors.
    pub fn fold(&mut self, cursor: Vec2, viewport_height: f32, motion: &mut Motion) {
        if let Some(anchor) = self.orbit.as_mut() {
            motion.orbit += normalized_delta(*anchor, cursor, viewport_height);
            *anchor = cursor;
        }
        if let Some(anchor) = self.pan.as_mut() {
            motion.pan += normalized_delta(*anchor, cursor, viewport_height);
            *anchor = cursor;
        }
    }

    fn anchor_mut(&mut self, button: MouseButton) -> Option<&mut Option<Vec2>> {
        match button {
            MouseButton::Primary => Some(&mut self.orbit),
            MouseButton::Secondary => Some(&mut self.pan),
            _ => None,
        }
    }
}
