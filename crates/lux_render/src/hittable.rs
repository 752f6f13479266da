//! Hittable trait, HitRecord, and the list aggregate.

use crate::material::{Material, ScatterResult};
use lux_math::{Aabb, Interval, Ray, Vec3};
use rand::RngCore;
use std::sync::Arc;

/// Placeholder material backing `HitRecord::default()`. Absorbs everything.
struct Absorb;

impl Material for Absorb {
    fn scatter(
        &self,
        _ray_in: &Ray,
        _rec: &HitRecord,
        _rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        None
    }
}

static ABSORB: Absorb = Absorb;

/// Record of a ray-object intersection.
///
/// The material is a non-owning reference: materials are shared across many
/// objects and outlive any single hit test. A record is stack-allocated per
/// intersection query and overwritten as closer hits are found.
#[derive(Clone)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at the intersection, always pointing against the ray
    pub normal: Vec3,
    /// Material of the struck object
    pub material: &'a dyn Material,
    /// UV surface coordinates
    pub u: f32,
    pub v: f32,
    /// Ray parameter of the intersection
    pub t: f32,
    /// True when the ray struck the surface from outside
    pub front_face: bool,
}

impl<'a> Default for HitRecord<'a> {
    fn default() -> Self {
        Self {
            p: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: &ABSORB,
            u: 0.0,
            v: 0.0,
            t: 0.0,
            front_face: false,
        }
    }
}

impl<'a> HitRecord<'a> {
    /// Store the outward-corrected normal and whether the front face was hit.
    ///
    /// `outward_normal` must be unit length and point away from the surface.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction().dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Objects a ray can intersect.
///
/// Implementations must only write to `rec` on a confirmed hit, so callers
/// can thread one record through a sequence of tests and keep the closest.
pub trait Hittable: Send + Sync {
    /// Intersect `ray` with this object, restricted to `ray_t.surrounds(t)`.
    ///
    /// Returns true and fills `rec` on a hit.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool;

    /// Axis-aligned box bounding the object over all ray times.
    fn bounding_box(&self) -> Aabb;
}

/// An ordered collection of shared scene objects.
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
    bbox: Aabb,
}

impl HittableList {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            bbox: Aabb::EMPTY,
        }
    }

    /// Add an object, growing the aggregate bounding box incrementally.
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.bbox = Aabb::surrounding(&self.bbox, &object.bounding_box());
        self.objects.push(object);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.bbox = Aabb::EMPTY;
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        // Later members can only displace earlier ones by being strictly
        // closer, because the search interval shrinks after each hit.
        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if object.hit(ray, interval, rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
