//! Demo scene: a unit sphere at the origin, ray cast on the CPU and lit by
//! the viewer's directional light.

use glam::Vec3;
use vista_window::{FrameContext, FrameHandler};

const BACKGROUND_TOP: Vec3 = Vec3::new(0.12, 0.14, 0.18);
const BACKGROUND_BOTTOM: Vec3 = Vec3::new(0.03, 0.03, 0.04);

/// Camera ray through one pixel.
#[derive(Debug, Clone, Copy)]
struct Ray {
    origin: Vec3,
    dir: Vec3,
}

impl Ray {
    /// Distance to the nearest hit with the unit sphere, if any.
    fn hit_unit_sphere(&self) -> Option<f32> {
        let b = self.origin.dot(self.dir);
        let c = self.origin.length_squared() - 1.0;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        [-b - sqrt_disc, -b + sqrt_disc]
            .into_iter()
            .find(|t| *t > 1e-4)
    }
}

/// Rays are generated from the camera's own view and projection, so the
/// image always matches what the orbit controls think the camera sees.
pub struct SphereScene {
    albedo: Vec3,
    ambient: f32,
}

impl SphereScene {
    pub fn new() -> Self {
        Self {
            albedo: Vec3::new(0.85, 0.55, 0.35),
            ambient: 0.08,
        }
    }

    fn shade(&self, ray: Ray, light_direction: Vec3, v: f32) -> Vec3 {
        match ray.hit_unit_sphere() {
            Some(t) => {
                let normal = (ray.origin + ray.dir * t).normalize();
                let diffuse = normal.dot(-light_direction).max(0.0);
                self.albedo * (self.ambient + (1.0 - self.ambient) * diffuse)
            }
            None => BACKGROUND_TOP.lerp(BACKGROUND_BOTTOM, v),
        }
    }
}

impl Default for SphereScene {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameHandler for SphereScene {
    fn tick(&mut self, ctx: &mut FrameContext<'_>) {
        let origin = ctx.camera.position();
        let clip_to_world = (ctx.camera.projection_matrix() * ctx.camera.view_matrix()).inverse();

        let width = ctx.framebuffer.width();
        let height = ctx.framebuffer.height();

        for y in 0..height {
            let v = (y as f32 + 0.5) / height as f32;
            for x in 0..width {
                let u = (x as f32 + 0.5) / width as f32;
                let ndc = Vec3::new(2.0 * u - 1.0, 1.0 - 2.0 * v, 1.0);
                let dir = (clip_to_world.project_point3(ndc) - origin).normalize();
                let color = self.shade(Ray { origin, dir }, ctx.light_direction, v);
                ctx.framebuffer.set_pixel(x, y, to_rgba8(color));
            }
        }
    }
}

fn to_rgba8(color: Vec3) -> [u8; 4] {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8, 255]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec2};
    use vista_controls::{Framebuffer, Motion, OrbitCamera};

    const WIDTH: u32 = 41;
    const HEIGHT: u32 = 31;

    struct Fixed {
        position: Vec3,
        fov: f32,
    }

    impl OrbitCamera for Fixed {
        fn orbit_update(&mut self, _motion: &Motion) {}
        fn set_transform(&mut self, position: Vec3, _target: Vec3) {
            self.position = position;
        }
        fn position(&self) -> Vec3 {
            self.position
        }
        fn target(&self) -> Vec3 {
            Vec3::ZERO
        }
        fn projection_matrix(&self) -> Mat4 {
            Mat4::perspective_rh(self.fov, WIDTH as f32 / HEIGHT as f32, 0.1, 100.0)
        }
    }

    fn render(light_direction: Vec3) -> Framebuffer {
        render_with_fov(60f32.to_radians(), light_direction)
    }

    fn render_with_fov(fov: f32, light_direction: Vec3) -> Framebuffer {
        let mut framebuffer = Framebuffer::new(WIDTH, HEIGHT);
        let camera = Fixed {
            position: Vec3::new(0.0, 0.0, 3.0),
            fov,
        };
        let mut ctx = FrameContext {
            light_direction,
            delta_time: 0.0,
            framebuffer: &mut framebuffer,
            camera: &camera,
        };
        SphereScene::new().tick(&mut ctx);
        framebuffer
    }

    fn brightness(fb: &Framebuffer, at: Vec2) -> u32 {
        let [r, g, b, _] = fb.pixel(at.x as u32, at.y as u32).unwrap();
        r as u32 + g as u32 + b as u32
    }

    #[test]
    fn test_ray_sphere_hit() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 3.0),
            dir: Vec3::NEG_Z,
        };
        assert!((ray.hit_unit_sphere().unwrap() - 2.0).abs() < 1e-5);
        let miss = Ray {
            origin: Vec3::new(0.0, 2.0, 3.0),
            dir: Vec3::NEG_Z,
        };
        assert!(miss.hit_unit_sphere().is_none());
    }

    #[test]
    fn test_front_light_brighter_than_back_light() {
        let center = Vec2::new(20.0, 15.0);
        let front = render(Vec3::NEG_Z);
        let back = render(Vec3::Z);
        assert!(brightness(&front, center) > brightness(&back, center));
        assert_ne!(front.pixel(0, 0), front.pixel(20, 15));
    }

    #[test]
    fn test_rays_follow_camera_projection() {
        let corner_background = to_rgba8(BACKGROUND_TOP.lerp(BACKGROUND_BOTTOM, 0.5 / HEIGHT as f32));

        // The sphere subtends about 19.5 degrees from z = 3, so a narrow lens is filled by it.
        let narrow = render_with_fov(10f32.to_radians(), Vec3::NEG_Z);
        let wide = render_with_fov(90f32.to_radians(), Vec3::NEG_Z);

        assert_eq!(wide.pixel(0, 0), Some(corner_background));
        assert_ne!(narrow.pixel(0, 0), Some(corner_background));
    }
}
