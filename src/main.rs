mod algebra;
mod optics;
mod renderer;
mod scene;
mod sphere;
mod tonemap;

use crate::scene::Settings;
use log::{debug, info, LevelFilter};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = Settings::default();

    // ── dump debug info ────────────────────────────────────────────────────
    info!("camera   : {:?} looking down -Z (fov {:.1}°, not applied to rays)",
          settings.camera_pos(), settings.fov_deg);
    info!("sphere   : center {:?}, radius {:.3}",
          settings.sphere.center, settings.sphere.radius);
    info!("rotation : {:.1}° about +Y", settings.angle_deg);
    debug!("settings : {}", serde_json::to_string(&settings)?);

    info!("rendering {}x{} reflection view", settings.width, settings.height);
    let started = Instant::now();
    let img = renderer::render(&settings);
    info!("rendered in {:.2?}", started.elapsed());

    renderer::save(&img, &settings.output)?;
    println!("Saved {}", settings.output);
    Ok(())
}
