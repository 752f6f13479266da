use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in demo scenes.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScenePreset {
    /// Three spheres on a ground plane: diffuse, glass, metal
    ThreeSpheres,
    /// Field of small bouncing spheres with depth of field and motion blur
    Bouncing,
    /// Emissive sphere over a dark scene, with transformed geometry
    Lights,
}

/// Command line arguments.
#[derive(Parser)]
#[command(name = "lux")]
#[command(about = "A Monte Carlo path tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image aspect ratio (width over height)
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect_ratio: f32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples_per_pixel: u32,

    /// Maximum ray bounce depth
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Base seed for the render's random streams
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Scene to render
    #[arg(long, value_enum, default_value = "three-spheres")]
    pub scene: ScenePreset,

    /// Output file path (.ppm writes plain text, other extensions go
    /// through the image crate)
    #[arg(short, long, default_value = "render.png")]
    pub output: String,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
