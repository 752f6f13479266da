use crate::Vec3;

/// A ray with origin, direction, and a time sample.
///
/// The ray is parametrized as `origin + t * direction`. The direction is not
/// required to be normalized. `time` is drawn uniformly from `[0, 1)` by the
/// camera and evaluates moving geometry at the instant the ray was "taken".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    time: f32,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3, time: f32) -> Self {
        Self {
            origin,
            direction,
            time,
        }
    }

    /// A ray at time 0.
    #[inline]
    pub fn new_simple(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, direction, 0.0)
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// The point along the ray at parameter `t`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::Z,
            time: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_direction() {
        let ray = Ray::new_simple(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(ray.at(0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(0.5), Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(1.0, -2.0, 0.0));
    }

    #[test]
    fn accessors_match_construction() {
        let ray = Ray::new(Vec3::ONE, Vec3::NEG_Z, 0.25);
        assert_eq!(ray.origin(), Vec3::ONE);
        assert_eq!(ray.direction(), Vec3::NEG_Z);
        assert_eq!(ray.time(), 0.25);
    }
}
