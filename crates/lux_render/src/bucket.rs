//! Bucket (tile) rendering.
//!
//! The frame is split into square tiles rendered independently. Each bucket
//! owns a generator seeded from the config seed and the bucket index, so a
//! render is reproducible regardless of how rayon schedules the tiles.

use crate::camera::Camera;
use crate::hittable::Hittable;
use crate::material::Color;
use crate::renderer::{render_pixel, ImageBuffer, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Default bucket edge length in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// A rectangular region of the image.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// Top-left corner
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Split an image into buckets, ordered center-outward.
///
/// Production renderers process tiles from the center out so the subject
/// appears first; the order also fixes each bucket's index, which seeds its
/// random stream.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, 0));
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_center_out(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by squared distance of their center from the image center.
fn sort_center_out(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    buckets.sort_by(|a, b| {
        let dist = |bucket: &Bucket| {
            let bx = bucket.x as f32 + bucket.width as f32 / 2.0;
            let by = bucket.y as f32 + bucket.height as f32 / 2.0;
            (bx - center_x).powi(2) + (by - center_y).powi(2)
        };
        dist(a)
            .partial_cmp(&dist(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Render one bucket with its own deterministically seeded generator.
///
/// Pixels are returned in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> Vec<Color> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(bucket.index as u64));
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(
                camera,
                world,
                bucket.x + local_x,
                bucket.y + local_y,
                config,
                &mut rng,
            );
            pixels.push(color);
        }
    }

    pixels
}

/// Render the full frame with buckets fanned out over rayon.
pub fn render_parallel(camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> ImageBuffer {
    let width = camera.image_width;
    let height = camera.image_height;
    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);

    log::info!(
        "rendering {}x{} at {} spp across {} buckets",
        width,
        height,
        config.samples_per_pixel,
        buckets.len()
    );

    let results: Vec<(Bucket, Vec<Color>)> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, camera, world, config);
            log::debug!("bucket {} done", bucket.index);
            (*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for (bucket, pixels) in results {
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = pixels[(local_y * bucket.width + local_x) as usize];
                image.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::HittableList;
    use crate::material::Lambertian;
    use crate::sphere::Sphere;
    use lux_math::Vec3;
    use std::sync::Arc;

    #[test]
    fn buckets_cover_exact_grid() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4);
        let total: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total, 128 * 128);
    }

    #[test]
    fn buckets_cover_partial_grid() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(buckets.len(), 4);
        let total: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total, 100 * 70);
    }

    #[test]
    fn center_bucket_renders_first() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9);
        assert_eq!(buckets[0].x, 64);
        assert_eq!(buckets[0].y, 64);
    }

    #[test]
    fn parallel_render_is_reproducible() {
        let mut world = HittableList::new();
        world.add(Arc::new(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Color::splat(0.5))),
        )));

        let mut camera = Camera::new().with_resolution(16, 16);
        camera.initialize();
        let config = RenderConfig {
            samples_per_pixel: 4,
            max_depth: 4,
            use_sky_gradient: true,
            seed: 42,
            ..Default::default()
        };

        let a = render_parallel(&camera, &world, &config);
        let b = render_parallel(&camera, &world, &config);
        assert_eq!(a.pixels, b.pixels);
    }
}
