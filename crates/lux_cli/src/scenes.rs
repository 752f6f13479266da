//! Built-in demo scenes.

use crate::cli::ScenePreset;
use lux_math::Vec3;
use lux_render::{
    Camera, Color, Dielectric, DiffuseLight, HittableList, Lambertian, Metal, RotateY, Sphere,
    Translate,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// A scene plus the camera and background it was designed for.
///
/// The camera carries position and lens settings only; the caller picks the
/// resolution and sampling quality.
pub struct Scene {
    pub world: HittableList,
    pub camera: Camera,
    pub background: Color,
    pub use_sky_gradient: bool,
}

pub fn build(preset: ScenePreset, seed: u64) -> Scene {
    match preset {
        ScenePreset::ThreeSpheres => three_spheres(),
        ScenePreset::Bouncing => bouncing(seed),
        ScenePreset::Lights => lights(),
    }
}

/// Diffuse, glass, and metal spheres on a diffuse ground.
fn three_spheres() -> Scene {
    let mut world = HittableList::new();

    let ground = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let glass = Arc::new(Dielectric::new(1.5));
    let metal = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.1));

    world.add(Arc::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )));
    world.add(Arc::new(Sphere::new(Vec3::new(0.0, 0.0, -1.2), 0.5, center)));
    world.add(Arc::new(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        glass.clone(),
    )));
    // Hollow glass: a second surface with negated-looking inner radius is
    // approximated here by nesting a smaller sphere of the same material.
    world.add(Arc::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.4, glass)));
    world.add(Arc::new(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, metal)));

    let camera = Camera::new()
        .with_position(Vec3::new(-2.0, 2.0, 1.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(20.0, 0.0, 3.4);

    Scene {
        world,
        camera,
        background: Color::ZERO,
        use_sky_gradient: true,
    }
}

/// A field of small spheres, the diffuse ones bouncing, under three large
/// feature spheres. Exercises motion blur, depth of field, and material
/// sharing across many objects.
fn bouncing(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = HittableList::new();

    let ground = Arc::new(Lambertian::new(Color::splat(0.5)));
    world.add(Arc::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )));

    // One glass material shared by every glass sphere in the field.
    let glass = Arc::new(Dielectric::new(1.5));

    for a in -7..7 {
        for b in -7..7 {
            let center = Vec3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let choose_mat: f32 = rng.gen();
            if choose_mat < 0.8 {
                let albedo = Color::new(
                    rng.gen::<f32>() * rng.gen::<f32>(),
                    rng.gen::<f32>() * rng.gen::<f32>(),
                    rng.gen::<f32>() * rng.gen::<f32>(),
                );
                let material = Arc::new(Lambertian::new(albedo));
                let center1 = center + Vec3::new(0.0, 0.5 * rng.gen::<f32>(), 0.0);
                world.add(Arc::new(Sphere::new_moving(center, center1, 0.2, material)));
            } else if choose_mat < 0.95 {
                let albedo = Color::new(
                    0.5 + 0.5 * rng.gen::<f32>(),
                    0.5 + 0.5 * rng.gen::<f32>(),
                    0.5 + 0.5 * rng.gen::<f32>(),
                );
                let fuzz = 0.5 * rng.gen::<f32>();
                let material = Arc::new(Metal::new(albedo, fuzz));
                world.add(Arc::new(Sphere::new(center, 0.2, material)));
            } else {
                world.add(Arc::new(Sphere::new(center, 0.2, glass.clone())));
            }
        }
    }

    world.add(Arc::new(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        glass.clone(),
    )));
    world.add(Arc::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Arc::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    let camera = Camera::new()
        .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.6, 10.0);

    Scene {
        world,
        camera,
        background: Color::ZERO,
        use_sky_gradient: true,
    }
}

/// An emissive sphere lighting an otherwise dark scene, with a metal sphere
/// placed via rotate-then-translate wrappers.
fn lights() -> Scene {
    let mut world = HittableList::new();

    let ground = Arc::new(Lambertian::new(Color::splat(0.4)));
    world.add(Arc::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )));

    world.add(Arc::new(Sphere::new(
        Vec3::new(0.0, 2.0, 0.0),
        2.0,
        Arc::new(Lambertian::new(Color::new(0.6, 0.3, 0.2))),
    )));

    // The lamp: well above white so it carries the whole scene.
    world.add(Arc::new(Sphere::new(
        Vec3::new(0.0, 7.0, 0.0),
        2.0,
        Arc::new(DiffuseLight::new(Color::splat(4.0))),
    )));

    // A mirrored sphere swung around the Y axis into place: rotate the
    // translated sphere so the same wrapper chain works for any child.
    let mirror = Arc::new(Sphere::new(
        Vec3::ZERO,
        1.0,
        Arc::new(Metal::new(Color::new(0.9, 0.9, 0.9), 0.0)),
    ));
    let placed = Translate::new(mirror, Vec3::new(5.0, 1.0, 0.0));
    world.add(Arc::new(RotateY::new(Arc::new(placed), 30.0)));

    let camera = Camera::new()
        .with_position(Vec3::new(26.0, 3.0, 6.0), Vec3::new(0.0, 2.0, 0.0), Vec3::Y)
        .with_lens(20.0, 0.0, 26.0);

    Scene {
        world,
        camera,
        background: Color::ZERO,
        use_sky_gradient: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bouncing_scene_is_deterministic_per_seed() {
        let a = bouncing(9);
        let b = bouncing(9);
        assert_eq!(a.world.len(), b.world.len());
    }

    #[test]
    fn presets_build_non_empty_worlds() {
        assert!(!three_spheres().world.is_empty());
        assert!(!bouncing(1).world.is_empty());
        assert!(!lights().world.is_empty());
    }
}
