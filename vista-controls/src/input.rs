//! Window-system independent button and key identifiers.

use serde::{Deserialize, Serialize};

/// Mouse buttons the control loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Usually the left button. Drives orbiting.
    Primary,
    /// Usually the right button. Drives panning.
    Secondary,
    Middle,
    Other(u16),
}

/// Keys that can be bound to viewer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Space,
    Escape,
    Enter,
    Tab,
    A,
    D,
    E,
    Q,
    R,
    S,
    W,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Keys sampled once per frame for the light controller.
///
/// Built from live key state through [`KeyBindings::sample`](crate::KeyBindings::sample),
/// never buffered across frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub reset: bool,
    pub theta_decrease: bool,
    pub theta_increase: bool,
    pub phi_increase: bool,
    pub phi_decrease: bool,
}
