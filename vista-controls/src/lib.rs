//! Vista Controls Crate
//!
//! Turns pointer, button, scroll and key input into per-frame camera motion
//! and a steerable light direction, and drives the frame loop around an
//! application callback. Window system, camera math and presentation are
//! reached through the [`Platform`] and [`OrbitCamera`] traits, so this crate
//! has no windowing or GPU dependencies.

pub mod camera;
pub mod config;
pub mod dispatch;
pub mod drag;
pub mod driver;
pub mod error;
pub mod frame;
pub mod framebuffer;
pub mod input;
pub mod light;
pub mod motion;
pub mod pacer;
pub mod platform;

#[cfg(test)]
mod testing;

pub use camera::{CameraHome, OrbitCamera};
pub use config::{CameraConfig, KeyBindings, LightConfig, ViewerConfig, WindowConfig};
pub use dispatch::{ControlState, InputHandler};
pub use drag::DragState;
pub use driver::{FPS_TARGET, Viewer};
pub use error::ConfigError;
pub use frame::{FrameContext, FrameHandler};
pub use framebuffer::Framebuffer;
pub use input::{HeldKeys, Key, MouseButton};
pub use light::{LightAngles, LightController};
pub use motion::Motion;
pub use pacer::{FpsReport, FramePacer};
pub use platform::Platform;
