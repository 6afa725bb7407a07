use thiserror::Error;
use vista_controls::ConfigError;

/// Failures while bringing up the GPU presentation path.
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("Create surface error: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("Request Adapter Error: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("Request Device Error: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("Unsupported surface: {0}")]
    UnsupportedSurface(String),
}

/// Errors that can occur while setting up the viewer.
///
/// Once the loop is running it only ends through the window closing.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Event loop exited with code {0} before the window was created")]
    ExitedDuringStartup(i32),

    #[error("Window was not created after {0} event pumps")]
    WindowTimeout(usize),

    #[error(transparent)]
    Present(#[from] PresentError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
