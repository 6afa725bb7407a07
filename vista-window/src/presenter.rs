//! Copies CPU framebuffers onto the window surface.

use std::sync::Arc;

use tracing::{debug, info};
use vista_controls::Framebuffer;
use wgpu::{Surface, SurfaceConfiguration, SurfaceTexture, TextureFormat};
use winit::window::Window;

use crate::error::PresentError;

/// GPU device plus a configured window surface.
///
/// The surface is created with `COPY_DST` so a frame is a single texture
/// upload followed by `present`, with no pipeline involved.
pub struct Presenter {
    surface: Surface<'static>,
    config: SurfaceConfiguration,
    device: wgpu::Device,
    queue: wgpu::Queue,
    staging: Vec<[u8; 4]>,
}

impl Presenter {
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, PresentError> {
        pollster::block_on(Self::new_async(window, vsync))
    }

    async fn new_async(window: Arc<Window>, vsync: bool) -> Result<Self, PresentError> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::from_env_or_default());
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await?;
        info!("Using adapter {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Presenter"),
                ..Default::default()
            })
            .await?;

        let caps = surface.get_capabilities(&adapter);
        if !caps.usages.contains(wgpu::TextureUsages::COPY_DST) {
            return Err(PresentError::UnsupportedSurface(
                "surface textures cannot be copy destinations".into(),
            ));
        }
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|format| is_rgba8(*format) || is_bgra8(*format))
            .ok_or_else(|| {
                PresentError::UnsupportedSurface(format!(
                    "no 8-bit RGBA/BGRA format among {:?}",
                    caps.formats
                ))
            })?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_DST,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        debug!(?format, width = config.width, height = config.height, "Surface configured");

        Ok(Self {
            surface,
            config,
            device,
            queue,
            staging: Vec::new(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Reapply the current configuration after the surface was lost or outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn current_texture(&self) -> Result<SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Upload `framebuffer` to the next surface texture and present it.
    ///
    /// The copy is clipped to whichever of the framebuffer and surface is smaller.
    pub fn present(&mut self, framebuffer: &Framebuffer) -> Result<(), wgpu::SurfaceError> {
        let frame = self.current_texture()?;

        let bytes: &[u8] = if is_bgra8(self.config.format) {
            self.staging.clear();
            self.staging
                .extend(framebuffer.pixels().iter().map(|[r, g, b, a]| [*b, *g, *r, *a]));
            bytemuck::cast_slice(&self.staging)
        } else {
            framebuffer.as_bytes()
        };

        let width = framebuffer.width().min(self.config.width);
        let height = framebuffer.height().min(self.config.height);
        if width > 0 && height > 0 {
            self.queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &frame.texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                bytes,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * framebuffer.width()),
                    rows_per_image: Some(framebuffer.height()),
                },
                wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
            );
        }
        self.queue.submit(std::iter::empty());
        frame.present();
        Ok(())
    }
}

fn is_rgba8(format: TextureFormat) -> bool {
    matches!(
        format,
        TextureFormat::Rgba8Unorm | TextureFormat::Rgba8UnormSrgb
    )
}

fn is_bgra8(format: TextureFormat) -> bool {
    matches!(
        format,
        TextureFormat::Bgra8Unorm | TextureFormat::Bgra8UnormSrgb
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_classification() {
        assert!(is_rgba8(TextureFormat::Rgba8UnormSrgb));
        assert!(is_bgra8(TextureFormat::Bgra8Unorm));
        assert!(!is_rgba8(TextureFormat::Bgra8Unorm));
        assert!(!is_bgra8(TextureFormat::Rgba16Float));
    }
}
