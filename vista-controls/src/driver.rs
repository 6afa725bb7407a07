//! The per-frame loop tying input, camera, light and the application together.

use tracing::{debug, info};

use crate::camera::{CameraHome, OrbitCamera};
use crate::config::{KeyBindings, ViewerConfig};
use crate::dispatch::ControlState;
use crate::frame::{FrameContext, FrameHandler};
use crate::framebuffer::Framebuffer;
use crate::light::LightController;
use crate::pacer::{FpsReport, FramePacer};
use crate::platform::Platform;

/// Log target of the `fps: N` report lines, so they can be filtered apart
/// from the rest of the viewer's output.
pub const FPS_TARGET: &str = "vista::fps";

/// Owns the window, framebuffer and camera for the lifetime of the loop.
///
/// Input events reach [`ControlState`] synchronously from inside
/// [`Platform::poll_events`], so no state here is ever shared across threads.
pub struct Viewer<P: Platform, C: OrbitCamera> {
    // Field order is drop order: camera, framebuffer, then the window.
    camera: C,
    framebuffer: Framebuffer,
    platform: P,
    controls: ControlState,
    light: LightController,
    pacer: FramePacer,
    keys: KeyBindings,
    home: CameraHome,
    frames: u64,
}

impl<P: Platform, C: OrbitCamera> Viewer<P, C> {
    pub fn new(platform: P, framebuffer: Framebuffer, camera: C, config: &ViewerConfig) -> Self {
        let viewport = platform.viewport();
        let pacer = FramePacer::new(platform.time(), config.report_interval);
        Self {
            camera,
            framebuffer,
            platform,
            controls: ControlState::new(viewport.y.max(1) as f32),
            light: LightController::new(config.light.angles(), config.light.speed),
            pacer,
            keys: config.keys,
            home: config.camera.home(),
            frames: 0,
        }
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn light(&self) -> &LightController {
        &self.light
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one loop iteration. Returns the throughput report if one was due.
    pub fn step<H>(&mut self, handler: &mut H) -> Option<FpsReport>
    where
        H: FrameHandler + ?Sized,
    {
        let _frame_span = tracing::info_span!("frame", index = self.frames).entered();

        let now = self.platform.time();
        let delta_time = self.pacer.begin_frame(now);

        self.controls.viewport_height = self.platform.viewport().y.max(1) as f32;
        self.controls.sample_cursor(self.platform.cursor_position());

        let held = self.keys.sample(|key| self.platform.key_held(key));
        let reset = held.reset.then_some(&self.home);
        self.controls
            .motion
            .apply_and_reset(&mut self.camera, reset);
        self.light.update(delta_time, held);

        let mut ctx = FrameContext {
            light_direction: self.light.direction(),
            delta_time,
            framebuffer: &mut self.framebuffer,
            camera: &self.camera,
        };
        handler.tick(&mut ctx);

        self.platform.present(&self.framebuffer);
        self.frames += 1;

        let report = self.pacer.end_frame(now);
        if let Some(report) = report {
            info!(target: FPS_TARGET, "fps: {}", report.frames);
        }

        self.platform.poll_events(&mut self.controls);
        report
    }

    /// Loop until the platform reports a close request, then release resources.
    ///
    /// Returns the number of frames rendered.
    pub fn run<H>(mut self, handler: &mut H) -> u64
    where
        H: FrameHandler + ?Sized,
    {
        info!("Entering render loop");
        while !self.platform.should_close() {
            self.step(handler);
        }
        let frames = self.frames;
        self.shutdown();
        frames
    }

    fn shutdown(self) {
        let Self {
            camera,
            framebuffer,
            platform,
            ..
        } = self;
        drop(camera);
        drop(framebuffer);
        drop(platform);
        debug!("Viewer resources released");
    }
}
