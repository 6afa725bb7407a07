//! winit-backed [`Platform`] that pumps events from inside the frame loop.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::{UVec2, Vec2};
use tracing::{debug, error, info, warn};
use vista_controls::{Framebuffer, InputHandler, Key, MouseButton, Platform, WindowConfig};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::error::OsError;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::error::ViewerError;
use crate::presenter::Presenter;

/// Upper bound on startup pumps while waiting for `resumed`.
const STARTUP_PUMPS: usize = 100;
const STARTUP_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Scale applied to pixel-based scroll deltas (touchpads).
const PIXEL_SCROLL_SCALE: f32 = 0.1;

/// Window-side input state, updated while events are pumped.
#[derive(Debug, Default)]
struct WindowInput {
    cursor: Vec2,
    held: HashSet<Key>,
    close_requested: bool,
    resized: Option<PhysicalSize<u32>>,
}

impl WindowInput {
    fn record_event<H>(&mut self, event: &WindowEvent, handler: &mut H)
    where
        H: InputHandler + ?Sized,
    {
        match event {
            WindowEvent::CloseRequested => self.close_requested = true,
            WindowEvent::Resized(size) => self.resized = Some(*size),
            WindowEvent::Focused(false) => self.held.clear(),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * PIXEL_SCROLL_SCALE,
                };
                handler.on_scroll(amount);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                handler.on_button(map_button(*button), state.is_pressed(), self.cursor);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if code == KeyCode::Escape && event.state == ElementState::Pressed {
                    self.close_requested = true;
                }
                let Some(key) = map_key(code) else {
                    return;
                };
                match event.state {
                    ElementState::Pressed => {
                        self.held.insert(key);
                    }
                    ElementState::Released => {
                        self.held.remove(&key);
                    }
                }
            }
            _ => {}
        }
    }
}

fn map_button(button: winit::event::MouseButton) -> MouseButton {
    use winit::event::MouseButton as Winit;
    match button {
        Winit::Left => MouseButton::Primary,
        Winit::Right => MouseButton::Secondary,
        Winit::Middle => MouseButton::Middle,
        Winit::Back => MouseButton::Other(3),
        Winit::Forward => MouseButton::Other(4),
        Winit::Other(id) => MouseButton::Other(id),
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Space => Key::Space,
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyW => Key::W,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        _ => return None,
    };
    Some(key)
}

/// Creates the window on the first `resumed`.
struct Startup {
    attributes: Option<WindowAttributes>,
    window: Option<Window>,
    error: Option<OsError>,
}

impl ApplicationHandler for Startup {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.attributes.take() else {
            return;
        };
        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(window),
            Err(err) => self.error = Some(err),
        }
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, _: WindowEvent) {}
}

/// Forwards one pump worth of events into the input state and handler.
struct EventPump<'a, H: ?Sized> {
    window_id: WindowId,
    input: &'a mut WindowInput,
    handler: &'a mut H,
}

impl<H: InputHandler + ?Sized> ApplicationHandler for EventPump<'_, H> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if window_id == self.window_id {
            self.input.record_event(&event, &mut *self.handler);
        }
    }
}

/// Desktop window driven by polling instead of winit's callback loop.
pub struct WinitPlatform {
    // Surface goes before the window it was created from.
    presenter: Presenter,
    window: Arc<Window>,
    event_loop: EventLoop<()>,
    input: WindowInput,
    start: Instant,
}

impl WinitPlatform {
    pub fn new(config: &WindowConfig) -> Result<Self, ViewerError> {
        let mut event_loop = EventLoop::new()?;
        let attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        let mut startup = Startup {
            attributes: Some(attributes),
            window: None,
            error: None,
        };
        let mut pumps = 0;
        let window = loop {
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(STARTUP_PUMP_TIMEOUT), &mut startup)
            {
                return Err(ViewerError::ExitedDuringStartup(code));
            }
            if let Some(err) = startup.error.take() {
                return Err(err.into());
            }
            if let Some(window) = startup.window.take() {
                break Arc::new(window);
            }
            pumps += 1;
            if pumps >= STARTUP_PUMPS {
                return Err(ViewerError::WindowTimeout(pumps));
            }
        };

        let size = window.inner_size();
        info!("Created window '{}' ({}x{})", config.title, size.width, size.height);
        let presenter = Presenter::new(window.clone(), config.vsync)?;

        Ok(Self {
            presenter,
            window,
            event_loop,
            input: WindowInput::default(),
            start: Instant::now(),
        })
    }
}

impl Platform for WinitPlatform {
    fn viewport(&self) -> UVec2 {
        let size = self.window.inner_size();
        UVec2::new(size.width, size.height)
    }

    fn cursor_position(&self) -> Vec2 {
        self.input.cursor
    }

    fn key_held(&self, key: Key) -> bool {
        self.input.held.contains(&key)
    }

    fn poll_events(&mut self, handler: &mut dyn InputHandler) {
        let mut pump = EventPump {
            window_id: self.window.id(),
            input: &mut self.input,
            handler,
        };
        if let PumpStatus::Exit(code) = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut pump)
        {
            debug!("Event loop exited with code {code}");
            self.input.close_requested = true;
        }
        if let Some(size) = self.input.resized.take() {
            debug!("Window resized to {}x{}", size.width, size.height);
            self.presenter.resize(size.width, size.height);
        }
    }

    fn should_close(&self) -> bool {
        self.input.close_requested
    }

    fn present(&mut self, framebuffer: &Framebuffer) {
        match self.presenter.present(framebuffer) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.window.inner_size();
                self.presenter.resize(size.width, size.height);
                self.presenter.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU Out of Memory - exiting");
                self.input.close_requested = true;
            }
            Err(wgpu::SurfaceError::Timeout) => warn!("Surface texture timed out"),
            Err(e) => error!("Present error: {:?}", e),
        }
    }

    fn time(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
