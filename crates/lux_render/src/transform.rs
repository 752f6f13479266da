//! Affine wrappers: translation and rotation about the Y axis.
//!
//! Instead of moving geometry, these wrappers move the ray into the child's
//! local frame, delegate the intersection, and map the result back to world
//! space.

use crate::hittable::{HitRecord, Hittable};
use lux_math::{Aabb, Interval, Ray, Vec3};
use std::sync::Arc;

/// Offsets a child object by a fixed vector.
pub struct Translate {
    object: Arc<dyn Hittable>,
    offset: Vec3,
    bbox: Aabb,
}

impl Translate {
    pub fn new(object: Arc<dyn Hittable>, offset: Vec3) -> Self {
        let bbox = object.bounding_box().translate(offset);
        Self {
            object,
            offset,
            bbox,
        }
    }
}

impl Hittable for Translate {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        // Test the child with the ray shifted into its frame; direction and
        // time are unchanged by a pure translation.
        let local_ray = Ray::new(ray.origin() - self.offset, ray.direction(), ray.time());

        if !self.object.hit(&local_ray, ray_t, rec) {
            return false;
        }

        // Shift the hit point back to world space. The normal is unaffected.
        rec.p += self.offset;
        true
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

/// Rotates a child object about the Y axis.
///
/// The world-space bounding box is the axis-aligned union of the child box's
/// 8 rotated corners, which is looser than the rotated box itself.
pub struct RotateY {
    object: Arc<dyn Hittable>,
    sin_theta: f32,
    cos_theta: f32,
    bbox: Aabb,
}

impl RotateY {
    /// `angle` is in degrees, counter-clockwise looking down the +Y axis.
    pub fn new(object: Arc<dyn Hittable>, angle: f32) -> Self {
        let radians = angle.to_radians();
        let sin_theta = radians.sin();
        let cos_theta = radians.cos();

        let child_box = object.bounding_box();
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);

        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    let x = if i == 0 { child_box.x.min } else { child_box.x.max };
                    let y = if j == 0 { child_box.y.min } else { child_box.y.max };
                    let z = if k == 0 { child_box.z.min } else { child_box.z.max };

                    let corner = Vec3::new(
                        cos_theta * x + sin_theta * z,
                        y,
                        -sin_theta * x + cos_theta * z,
                    );
                    min = min.min(corner);
                    max = max.max(corner);
                }
            }
        }

        Self {
            object,
            sin_theta,
            cos_theta,
            bbox: Aabb::from_points(min, max),
        }
    }

    /// World space to object space: rotate by the negated angle.
    fn world_to_object(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.cos_theta * v.x - self.sin_theta * v.z,
            v.y,
            self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }

    /// Object space back to world space: the forward rotation.
    fn object_to_world(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.cos_theta * v.x + self.sin_theta * v.z,
            v.y,
            -self.sin_theta * v.x + self.cos_theta * v.z,
        )
    }
}

impl Hittable for RotateY {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let local_ray = Ray::new(
            self.world_to_object(ray.origin()),
            self.world_to_object(ray.direction()),
            ray.time(),
        );

        if !self.object.hit(&local_ray, ray_t, rec) {
            return false;
        }

        rec.p = self.object_to_world(rec.p);
        rec.normal = self.object_to_world(rec.normal);
        true
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Color, Lambertian};
    use crate::sphere::Sphere;

    fn unit_sphere_at(center: Vec3) -> Arc<Sphere> {
        Arc::new(Sphere::new(
            center,
            1.0,
            Arc::new(Lambertian::new(Color::splat(0.5))),
        ))
    }

    #[test]
    fn translate_matches_shifted_ray() {
        let offset = Vec3::new(2.0, 1.0, 0.0);
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));
        let translated = Translate::new(sphere.clone(), offset);

        // Hitting the translated sphere with a ray...
        let ray = Ray::new_simple(Vec3::new(2.0, 1.0, 0.0), Vec3::NEG_Z);
        let mut rec = HitRecord::default();
        assert!(translated.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));

        // ...gives the same t as hitting the original with the ray shifted
        // the other way, and the hit point moves by the offset.
        let shifted = Ray::new_simple(ray.origin() - offset, ray.direction());
        let mut base = HitRecord::default();
        assert!(sphere.hit(&shifted, Interval::new(0.001, f32::INFINITY), &mut base));

        assert!((rec.t - base.t).abs() < 1e-5);
        assert!((rec.p - (base.p + offset)).length() < 1e-5);
        assert!((rec.normal - base.normal).length() < 1e-5);
    }

    #[test]
    fn translate_shifts_bbox() {
        let translated = Translate::new(
            unit_sphere_at(Vec3::ZERO),
            Vec3::new(10.0, 0.0, 0.0),
        );
        let bbox = translated.bounding_box();
        assert_eq!(bbox.x.min, 9.0);
        assert_eq!(bbox.x.max, 11.0);
    }

    #[test]
    fn rotate_zero_degrees_is_identity() {
        let sphere = unit_sphere_at(Vec3::new(2.0, 0.0, -5.0));
        let rotated = RotateY::new(sphere.clone(), 0.0);

        let ray = Ray::new_simple(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z);
        let mut rec = HitRecord::default();
        let mut base = HitRecord::default();
        assert!(rotated.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut base));

        assert!((rec.t - base.t).abs() < 1e-5);
        assert!((rec.p - base.p).length() < 1e-5);
        assert!((rec.normal - base.normal).length() < 1e-5);
    }

    #[test]
    fn rotate_then_unrotate_restores_geometry() {
        let sphere = unit_sphere_at(Vec3::new(2.0, 0.0, -5.0));
        let round_trip = RotateY::new(Arc::new(RotateY::new(sphere.clone(), 37.0)), -37.0);

        let ray = Ray::new_simple(Vec3::new(2.0, 0.3, 0.0), Vec3::NEG_Z);
        let mut rec = HitRecord::default();
        let mut base = HitRecord::default();
        assert!(round_trip.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
        assert!(sphere.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut base));

        assert!((rec.t - base.t).abs() < 1e-4);
        assert!((rec.p - base.p).length() < 1e-4);
        assert!((rec.normal - base.normal).length() < 1e-4);
    }

    #[test]
    fn rotate_90_degrees_moves_hit() {
        // A sphere on the +X axis rotated 90 degrees lands on the -Z axis.
        let sphere = unit_sphere_at(Vec3::new(5.0, 0.0, 0.0));
        let rotated = RotateY::new(sphere, 90.0);

        let ray = Ray::new_simple(Vec3::ZERO, Vec3::NEG_Z);
        let mut rec = HitRecord::default();
        assert!(rotated.hit(&ray, Interval::new(0.001, f32::INFINITY), &mut rec));
        assert!((rec.t - 4.0).abs() < 1e-4);

        let bbox = rotated.bounding_box();
        assert!((bbox.z.min + 6.0).abs() < 1e-3);
        assert!((bbox.z.max + 4.0).abs() < 1e-3);
    }
}
