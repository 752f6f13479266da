//! Render a demo scene to an image file.

mod cli;
mod scenes;

use anyhow::Result;
use clap::Parser;
use lux_render::{render_parallel, save_png, save_ppm, RenderConfig};
use std::time::Instant;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    let scene = scenes::build(args.scene, args.seed);

    let mut camera = scene
        .camera
        .with_aspect_ratio(args.width, args.aspect_ratio);
    camera.initialize();

    let config = RenderConfig {
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        background: scene.background,
        use_sky_gradient: scene.use_sky_gradient,
        seed: args.seed,
    };

    log::info!(
        "scene {:?}, {}x{} at {} spp, depth {}",
        args.scene,
        camera.image_width,
        camera.image_height,
        config.samples_per_pixel,
        config.max_depth
    );

    let start = Instant::now();
    let image = render_parallel(&camera, &scene.world, &config);
    log::info!("rendered in {:.2?}", start.elapsed());

    if args.output.ends_with(".ppm") {
        save_ppm(&image, &args.output)?;
    } else {
        save_png(&image, &args.output)?;
    }
    log::info!("saved {}", args.output);

    Ok(())
}
