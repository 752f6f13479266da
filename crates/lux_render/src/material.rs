//! Surface materials: scattering, absorption, and emission.

use crate::hittable::HitRecord;
use crate::sampling::{gen_f32, random_unit_vector};
use lux_math::{Ray, Vec3};
use rand::RngCore;

/// Linear-light RGB color. Components are usually in [0, 1] but may exceed 1
/// for emitters.
pub type Color = Vec3;

/// Outcome of a successful scatter: the surviving ray and its attenuation.
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// How light interacts with a surface.
///
/// Materials are stateless across calls and shared between objects, so they
/// must be thread-safe. Scattering draws from the caller's generator; a
/// `None` result means the ray was absorbed, which is a normal outcome, not
/// an error.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray at a hit point, or absorb it.
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;

    /// Radiance emitted at the hit point. Non-emissive materials return
    /// black; the radiance loop calls this unconditionally.
    fn emitted(&self, _u: f32, _v: f32, _p: Vec3) -> Color {
        Color::ZERO
    }
}

/// Diffuse material scattering into the cosine-weighted hemisphere.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // The random vector can nearly cancel the normal; fall back to the
        // normal itself rather than emit a degenerate ray.
        if scatter_direction.length_squared() < 1e-8 {
            scatter_direction = rec.normal;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction, ray_in.time()),
        })
    }
}

/// Specular metal with an optional fuzzed reflection lobe.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    /// `fuzz` is the perturbation magnitude: 0 is a perfect mirror, 1 a very
    /// rough one. Values outside [0, 1] are clamped.
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let direction = reflected + self.fuzz * random_unit_vector(rng);

        // A grazing reflection whose perturbed lobe dips below the surface
        // is absorbed.
        if direction.dot(rec.normal) <= 0.0 {
            return None;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, direction, ray_in.time()),
        })
    }
}

/// Clear refractive material (glass, water, diamond).
#[derive(Debug, Clone)]
pub struct Dielectric {
    /// Index of refraction relative to the surrounding medium.
    refraction_index: f32,
}

impl Dielectric {
    pub fn new(refraction_index: f32) -> Self {
        Self { refraction_index }
    }

    /// Schlick's approximation of Fresnel reflectance.
    fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
        let r0 = ((1.0 - refraction_index) / (1.0 + refraction_index)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        // Glass absorbs nothing.
        let attenuation = Color::ONE;
        let ri = if rec.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = ray_in.direction().normalize();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = ri * sin_theta > 1.0;
        let direction = if cannot_refract || Self::reflectance(cos_theta, ri) > gen_f32(rng) {
            reflect(unit_direction, rec.normal)
        } else {
            refract(unit_direction, rec.normal, ri)
        };

        Some(ScatterResult {
            attenuation,
            scattered: Ray::new(rec.p, direction, ray_in.time()),
        })
    }
}

/// Emissive material. Never scatters; contributes radiance directly.
#[derive(Debug, Clone)]
pub struct DiffuseLight {
    emit: Color,
}

impl DiffuseLight {
    pub fn new(emit: Color) -> Self {
        Self { emit }
    }
}

impl Material for DiffuseLight {
    fn scatter(
        &self,
        _ray_in: &Ray,
        _rec: &HitRecord,
        _rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        None
    }

    fn emitted(&self, _u: f32, _v: f32, _p: Vec3) -> Color {
        self.emit
    }
}

/// Mirror-reflect `v` about the unit normal `n`.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through a surface with normal `n` and
/// relative index ratio `etai_over_etat` (Snell's law).
#[inline]
fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hit_at_origin(material: &dyn Material, normal: Vec3) -> HitRecord<'_> {
        HitRecord {
            p: Vec3::ZERO,
            normal,
            material,
            u: 0.0,
            v: 0.0,
            t: 1.0,
            front_face: true,
        }
    }

    #[test]
    fn lambertian_always_scatters_non_degenerate() {
        let mat = Lambertian::new(Color::splat(0.8));
        let rec = hit_at_origin(&mat, Vec3::Y);
        let ray = Ray::new_simple(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let result = mat.scatter(&ray, &rec, &mut rng).expect("always scatters");
            assert!(result.scattered.direction().length_squared() >= 1e-8);
            assert_eq!(result.attenuation, Color::splat(0.8));
        }
    }

    #[test]
    fn metal_with_zero_fuzz_is_exact_mirror() {
        let mat = Metal::new(Color::ONE, 0.0);
        let rec = hit_at_origin(&mat, Vec3::Y);
        // 45 degrees in, 45 degrees out.
        let ray = Ray::new_simple(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(11);

        let result = mat.scatter(&ray, &rec, &mut rng).expect("reflects");
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((result.scattered.direction().normalize() - expected).length() < 1e-5);
    }

    #[test]
    fn metal_absorbs_reflection_into_surface() {
        // Fuzz is clamped to 1; a huge perturbation on a grazing reflection
        // can push the lobe below the surface, which must absorb, never
        // return a ray into the interior.
        let mat = Metal::new(Color::ONE, 25.0);
        let rec = hit_at_origin(&mat, Vec3::Y);
        let ray = Ray::new_simple(Vec3::new(-1.0, 0.01, 0.0), Vec3::new(1.0, -0.01, 0.0));
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            if let Some(result) = mat.scatter(&ray, &rec, &mut rng) {
                assert!(result.scattered.direction().dot(rec.normal) > 0.0);
            }
        }
    }

    #[test]
    fn dielectric_with_unit_index_passes_straight_through() {
        let mat = Dielectric::new(1.0);
        let rec = hit_at_origin(&mat, Vec3::Y);
        // Head-on: cos = 1, reflectance 0, so the refract branch always runs
        // and with a ratio of 1 the direction is unchanged.
        let ray = Ray::new_simple(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(11);

        let result = mat.scatter(&ray, &rec, &mut rng).expect("always scatters");
        let out = result.scattered.direction().normalize();
        assert!((out - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-5);
        assert_eq!(result.attenuation, Color::ONE);
    }

    #[test]
    fn dielectric_total_internal_reflection() {
        let mat = Dielectric::new(1.5);
        let mut rec = hit_at_origin(&mat, Vec3::Y);
        // Exiting the dense medium at a grazing angle: eta * sin > 1.
        rec.front_face = false;
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(1.0, -0.2, 0.0));
        let mut rng = StdRng::seed_from_u64(11);

        let result = mat.scatter(&ray, &rec, &mut rng).expect("always scatters");
        // Reflected, so the direction stays on the normal's side.
        assert!(result.scattered.direction().dot(rec.normal) > 0.0);
    }

    #[test]
    fn diffuse_light_emits_and_absorbs() {
        let mat = DiffuseLight::new(Color::new(4.0, 4.0, 4.0));
        let rec = hit_at_origin(&mat, Vec3::Y);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::NEG_Y);
        let mut rng = StdRng::seed_from_u64(11);

        assert!(mat.scatter(&ray, &rec, &mut rng).is_none());
        assert_eq!(mat.emitted(0.0, 0.0, Vec3::ZERO), Color::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn default_emission_is_black() {
        let mat = Metal::new(Color::ONE, 0.0);
        assert_eq!(mat.emitted(0.5, 0.5, Vec3::ONE), Color::ZERO);
    }
}
