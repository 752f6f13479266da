//! lux — a CPU Monte Carlo path tracer.
//!
//! The engine intersects rays against a polymorphic scene-object tree,
//! resolves radiance recursively through a polymorphic material contract,
//! and averages jittered per-pixel samples into a linear-light frame.
//! Scene assembly and display are the caller's concern.

mod bucket;
mod camera;
mod hittable;
mod material;
mod output;
mod renderer;
mod sampling;
mod sphere;
mod transform;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, DEFAULT_BUCKET_SIZE,
};
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{
    Color, Dielectric, DiffuseLight, Lambertian, Material, Metal, ScatterResult,
};
pub use output::{save_png, save_ppm, write_ppm, OutputError};
pub use renderer::{
    color_to_rgba, linear_to_gamma, ray_color, render, render_pixel, ImageBuffer, RenderConfig,
};
pub use sampling::{gen_f32, gen_range, random_in_unit_disk, random_unit_vector, sample_square};
pub use sphere::Sphere;
pub use transform::{RotateY, Translate};

// Re-export the math value types alongside the engine.
pub use lux_math::{Aabb, Axis, Interval, Ray, Vec3};
