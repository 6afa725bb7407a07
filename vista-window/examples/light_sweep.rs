//! Minimal viewer: paints the whole window with the current light direction.
//!
//! Hold W/A/S/D to steer the light, Space to reset, Escape to quit.

use vista_window::{FrameContext, ViewerConfig};

fn main() {
    vista_window::init_tracing();

    let config = ViewerConfig::default().with_title("Light sweep");
    let mut paint = |ctx: &mut FrameContext<'_>| {
        let rgb = (ctx.light_direction * 0.5 + 0.5) * 255.0;
        ctx.framebuffer
            .clear([rgb.x as u8, rgb.y as u8, rgb.z as u8, 255]);
    };

    if let Err(err) = vista_window::run(&config, &mut paint) {
        eprintln!("light_sweep failed: {err}");
        std::process::exit(1);
    }
}
