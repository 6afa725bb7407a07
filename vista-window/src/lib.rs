mod camera;
mod error;
mod platform;
mod presenter;

pub use camera::{Camera, Projection};
pub use error::{PresentError, ViewerError};
pub use platform::WinitPlatform;

pub use vista_controls::{
    FrameContext, FrameHandler, Framebuffer, Key, KeyBindings, OrbitCamera, Viewer, ViewerConfig,
};

use tracing::info;
use tracing_subscriber::EnvFilter;
use vista_controls::FPS_TARGET;

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. The `fps: N` lines logged under
/// [`FPS_TARGET`] stay enabled at `info` unless `RUST_LOG` names that target
/// itself, so `RUST_LOG=warn` still prints them and `RUST_LOG=vista::fps=off`
/// silences them. With the `tracy` feature the events are also streamed to
/// Tracy. Calling this more than once is harmless.
pub fn init_tracing() {
    #[cfg(feature = "tracy")]
    {
        use tracing_subscriber::Layer;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;
        let _ = tracing_subscriber::registry()
            .with(tracing_tracy::TracyLayer::default())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_filter(env_filter()),
            )
            .try_init();
    }

    #[cfg(not(feature = "tracy"))]
    {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(false)
            .try_init();
    }
}

fn env_filter() -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    EnvFilter::try_new(filter_directives(env.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(None)))
}

/// Filter directives for `env`, with the FPS target enabled unless `env` configures it.
fn filter_directives(env: Option<&str>) -> String {
    let base = match env.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives,
        _ => "info",
    };
    if base.contains(FPS_TARGET) {
        base.to_string()
    } else {
        format!("{base},{FPS_TARGET}=info")
    }
}

/// Open a window described by `config` and run `handler` once per frame until it closes.
///
/// Returns the number of frames rendered.
pub fn run<H>(config: &ViewerConfig, handler: &mut H) -> Result<u64, ViewerError>
where
    H: FrameHandler + ?Sized,
{
    config.validate()?;

    let platform = WinitPlatform::new(&config.window)?;
    let framebuffer = Framebuffer::new(config.window.width, config.window.height);
    let camera = Camera::from_config(&config.camera, framebuffer.aspect());

    let viewer = Viewer::new(platform, framebuffer, camera, config);
    let frames = viewer.run(handler);
    info!("Viewer closed after {frames} frames");
    Ok(frames)
}
