//! Recursive radiance resolution and full-frame rendering.

use crate::camera::Camera;
use crate::hittable::{HitRecord, Hittable};
use crate::material::{Color, Material};
use lux_math::{Interval, Ray};
use rand::RngCore;

/// Minimum ray parameter for secondary rays, suppressing self-intersection
/// ("shadow acne") at scattered ray origins.
const RAY_T_MIN: f32 = 0.001;

/// Sampling and termination policy for a render.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Jittered samples averaged per pixel
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Background radiance when a ray escapes the scene
    pub background: Color,
    /// Replace the constant background with the blue-white sky gradient
    pub use_sky_gradient: bool,
    /// Base seed for the per-bucket generators; a fixed seed reproduces a
    /// render exactly, independent of thread count
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            background: Color::ZERO,
            use_sky_gradient: false,
            seed: 0,
        }
    }
}

/// Radiance arriving along `ray`, resolved recursively.
///
/// Depth exhaustion and escaping the scene terminate the recursion; on a hit
/// the emitted and scattered contributions are additive, and absorption
/// leaves the emitted term alone.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();
    if !world.hit(ray, Interval::new(RAY_T_MIN, f32::INFINITY), &mut rec) {
        if config.use_sky_gradient {
            return sky_gradient(ray);
        }
        return config.background;
    }

    let emission = rec.material.emitted(rec.u, rec.v, rec.p);

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            emission + result.attenuation * ray_color(&result.scattered, world, depth - 1, config, rng)
        }
        None => emission,
    }
}

/// Blue-to-white gradient keyed on the ray's vertical direction.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::ONE;
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Gamma-2 transfer for display encoding.
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Encode a linear color as 8-bit RGBA with gamma correction.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let intensity = Interval::new(0.0, 1.0);
    let r = (255.0 * intensity.clamp(linear_to_gamma(color.x))) as u8;
    let g = (255.0 * intensity.clamp(linear_to_gamma(color.y))) as u8;
    let b = (255.0 * intensity.clamp(linear_to_gamma(color.z))) as u8;
    [r, g, b, 255]
}

/// Average `samples_per_pixel` jittered radiance samples for pixel (x, y).
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, config, rng);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Linear-light frame in row-major order, top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// The frame as gamma-corrected 8-bit RGBA bytes.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Render the full frame single-threaded.
///
/// The bucket renderer is the parallel entry point; this one exists for
/// small frames and tests, driven by one caller-owned generator.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        log::debug!("scanline {}/{}", y + 1, camera.image_height);
        for x in 0..camera.image_width {
            let color = render_pixel(camera, world, x, y, config, rng);
            image.set(x, y, color);
        }
    }

    image
}
