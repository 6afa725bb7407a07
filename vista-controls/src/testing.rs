//! Scripted collaborators for driving the loop in tests.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use glam::{Mat4, UVec2, Vec2, Vec3};

use crate::camera::OrbitCamera;
use crate::dispatch::InputHandler;
use crate::framebuffer::Framebuffer;
use crate::input::{Key, MouseButton};
use crate::motion::Motion;
use crate::platform::Platform;

/// Shared record of which collaborators were dropped, in order.
pub type DropLog = Rc<RefCell<Vec<&'static str>>>;

#[derive(Debug, Clone, PartialEq)]
pub enum CameraCall {
    Orbit(Motion),
    Transform(Vec3, Vec3),
}

/// Camera that records every call made to it.
#[derive(Debug, Default)]
pub struct RecordingCamera {
    pub calls: Vec<CameraCall>,
    position: Vec3,
    target: Vec3,
    drops: Option<DropLog>,
}

impl RecordingCamera {
    pub fn with_drop_log(log: &DropLog) -> Self {
        Self {
            calls: Vec::new(),
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            drops: Some(Rc::clone(log)),
        }
    }
}

impl Drop for RecordingCamera {
    fn drop(&mut self) {
        if let Some(log) = &self.drops {
            log.borrow_mut().push("camera");
        }
    }
}

impl OrbitCamera for RecordingCamera {
    fn orbit_update(&mut self, motion: &Motion) {
        self.calls.push(CameraCall::Orbit(*motion));
    }

    fn set_transform(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
        self.calls.push(CameraCall::Transform(position, target));
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(60f32.to_radians(), 4.0 / 3.0, 0.1, 100.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Scripted {
    Cursor(Vec2),
    Button(MouseButton, bool),
    Scroll(f32),
    KeyDown(Key),
    KeyUp(Key),
    Close,
}

/// Platform replaying one batch of events per poll.
///
/// The clock advances by `frame_time` on every poll. Once the batches run
/// out the window reports a close request.
#[derive(Debug)]
pub struct ScriptedPlatform {
    batches: VecDeque<Vec<Scripted>>,
    now: f64,
    frame_time: f64,
    cursor: Vec2,
    held: HashSet<Key>,
    closed: bool,
    drops: Option<DropLog>,
    pub presented: usize,
}

impl ScriptedPlatform {
    pub fn new(batches: Vec<Vec<Scripted>>) -> Self {
        Self {
            batches: batches.into(),
            now: 0.0,
            frame_time: 1.0 / 64.0,
            cursor: Vec2::ZERO,
            held: HashSet::new(),
            closed: false,
            drops: None,
            presented: 0,
        }
    }

    pub fn with_frame_time(mut self, seconds: f64) -> Self {
        self.frame_time = seconds;
        self
    }

    pub fn with_drop_log(mut self, log: &DropLog) -> Self {
        self.drops = Some(Rc::clone(log));
        self
    }
}

impl Drop for ScriptedPlatform {
    fn drop(&mut self) {
        if let Some(log) = &self.drops {
            log.borrow_mut().push("platform");
        }
    }
}

impl Platform for ScriptedPlatform {
    fn viewport(&self) -> UVec2 {
        UVec2::new(800, 600)
    }

    fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    fn key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn poll_events(&mut self, handler: &mut dyn InputHandler) {
        self.now += self.frame_time;
        let Some(batch) = self.batches.pop_front() else {
            self.closed = true;
            return;
        };
        for event in batch {
            match event {
                Scripted::Cursor(pos) => self.cursor = pos,
                Scripted::Button(button, pressed) => handler.on_button(button, pressed, self.cursor),
                Scripted::Scroll(offset) => handler.on_scroll(offset),
                Scripted::KeyDown(key) => {
                    self.held.insert(key);
                }
                Scripted::KeyUp(key) => {
                    self.held.remove(&key);
                }
                Scripted::Close => self.closed = true,
            }
        }
    }

    fn should_close(&self) -> bool {
        self.closed
    }

    fn present(&mut self, _framebuffer: &Framebuffer) {
        self.presented += 1;
    }

    fn time(&self) -> f64 {
        self.now
    }
}
