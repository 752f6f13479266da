//! Sphere primitive, static or moving.

use crate::hittable::{HitRecord, Hittable};
use crate::material::Material;
use lux_math::{Aabb, Interval, Ray, Vec3};
use std::f32::consts::PI;
use std::sync::Arc;

/// A sphere, optionally moving along a linear path over the shutter interval.
///
/// The center is stored as a ray: evaluating it at the incoming ray's time
/// gives the center at that instant. A static sphere is the degenerate case
/// with a zero motion vector.
pub struct Sphere {
    center: Ray,
    radius: f32,
    material: Arc<dyn Material>,
    bbox: Aabb,
}

impl Sphere {
    /// A stationary sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3::splat(radius);
        Self {
            center: Ray::new_simple(center, Vec3::ZERO),
            radius,
            material,
            bbox: Aabb::from_points(center - rvec, center + rvec),
        }
    }

    /// A sphere moving linearly from `center0` (time 0) to `center1` (time 1).
    ///
    /// The bounding box covers the whole path: the union of the boxes at the
    /// two endpoints.
    pub fn new_moving(
        center0: Vec3,
        center1: Vec3,
        radius: f32,
        material: Arc<dyn Material>,
    ) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3::splat(radius);
        let box0 = Aabb::from_points(center0 - rvec, center0 + rvec);
        let box1 = Aabb::from_points(center1 - rvec, center1 + rvec);
        Self {
            center: Ray::new_simple(center0, center1 - center0),
            radius,
            material,
            bbox: Aabb::surrounding(&box0, &box1),
        }
    }

    /// Spherical parametrization of a point on the unit sphere.
    ///
    /// `u` wraps around the Y axis from -X; `v` runs from the -Y pole to the
    /// +Y pole. The poles themselves are permitted singularities.
    fn sphere_uv(p: Vec3) -> (f32, f32) {
        let theta = (-p.y).acos();
        let phi = (-p.z).atan2(p.x) + PI;
        (phi / (2.0 * PI), theta / PI)
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let current_center = self.center.at(ray.time());
        let oc = current_center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Prefer the nearer root; fall back to the farther one if the
        // interval excludes it.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = ray.at(rec.t);
        let outward_normal = (rec.p - current_center) / self.radius;
        rec.set_face_normal(ray, outward_normal);
        (rec.u, rec.v) = Self::sphere_uv(outward_normal);
        rec.material = self.material.as_ref();

        true
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
