use crate::{Interval, Ray, Vec3};

/// One of the three coordinate axes.
///
/// Using an enumeration instead of a raw index makes an out-of-range axis
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The component of `v` along this axis.
    #[inline]
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// Axis-aligned bounding box, one interval of extent per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// The box containing nothing.
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    /// The box containing everything.
    pub const UNIVERSE: Aabb = Aabb {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };

    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// The box spanning two corner points, in either order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self::new(
            Interval::new(a.x.min(b.x), a.x.max(b.x)),
            Interval::new(a.y.min(b.y), a.y.max(b.y)),
            Interval::new(a.z.min(b.z), a.z.max(b.z)),
        )
    }

    /// The smallest box containing both `box0` and `box1`.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// The extent of the box along `axis`.
    pub fn axis_interval(&self, axis: Axis) -> Interval {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Slab intersection test: does `ray` pass through the box within `ray_t`?
    ///
    /// Each axis narrows `ray_t` to the slab entry/exit parameters; the swap
    /// is decided by the relative order of t0/t1, which also handles negative
    /// direction components. A zero direction component produces infinite
    /// slab parameters, which narrow the interval correctly when the origin
    /// lies inside the slab and empty it otherwise.
    pub fn hit(&self, ray: &Ray, mut ray_t: Interval) -> bool {
        let origin = ray.origin();
        let direction = ray.direction();

        for axis in Axis::ALL {
            let extent = self.axis_interval(axis);
            let adinv = 1.0 / axis.component(direction);
            let orig = axis.component(origin);

            let t0 = (extent.min - orig) * adinv;
            let t1 = (extent.max - orig) * adinv;

            let (t_enter, t_exit) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
            ray_t.min = ray_t.min.max(t_enter);
            ray_t.max = ray_t.max.min(t_exit);

            if ray_t.max <= ray_t.min {
                return false;
            }
        }

        true
    }

    /// The axis of greatest extent. Ties resolve to Z, then Y.
    pub fn longest_axis(&self) -> Axis {
        let x_size = self.x.size();
        let y_size = self.y.size();
        let z_size = self.z.size();

        if x_size > y_size && x_size > z_size {
            Axis::X
        } else if y_size > z_size {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Shift the box by `offset`.
    pub fn translate(&self, offset: Vec3) -> Aabb {
        Aabb {
            x: self.x.add_scalar(offset.x),
            y: self.y.add_scalar(offset.y),
            z: self.z.add_scalar(offset.z),
        }
    }

    /// Widen degenerate extents so no side of the box is effectively flat.
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn from_points_orders_corners() {
        let a = Aabb::from_points(Vec3::new(3.0, -1.0, 2.0), Vec3::new(1.0, 4.0, -2.0));
        assert_eq!(a.x.min, 1.0);
        assert_eq!(a.x.max, 3.0);
        assert_eq!(a.y.min, -1.0);
        assert_eq!(a.y.max, 4.0);
        assert_eq!(a.z.min, -2.0);
        assert_eq!(a.z.max, 2.0);
    }

    #[test]
    fn surrounding_is_commutative_and_associative() {
        let a = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_points(Vec3::new(-2.0, 0.5, 0.0), Vec3::new(0.5, 3.0, 1.0));
        let c = Aabb::from_points(Vec3::new(0.0, -5.0, 2.0), Vec3::new(1.0, 0.0, 4.0));

        assert_eq!(Aabb::surrounding(&a, &b), Aabb::surrounding(&b, &a));

        let left = Aabb::surrounding(&Aabb::surrounding(&a, &b), &c);
        let right = Aabb::surrounding(&a, &Aabb::surrounding(&b, &c));
        assert_eq!(left, right);
    }

    #[test]
    fn hit_through_center() {
        let ray = Ray::new_simple(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(unit_box().hit(&ray, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn hit_rejects_ray_pointing_away() {
        let ray = Ray::new_simple(Vec3::new(0.0, 0.0, -5.0), Vec3::NEG_Z);
        assert!(!unit_box().hit(&ray, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn hit_rejects_offset_ray() {
        let ray = Ray::new_simple(Vec3::new(5.0, 0.0, -5.0), Vec3::Z);
        assert!(!unit_box().hit(&ray, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn hit_with_negative_direction_component() {
        let ray = Ray::new_simple(Vec3::new(0.5, 0.5, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(unit_box().hit(&ray, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn hit_tolerates_zero_direction_component() {
        // Direction has no X component; the ray stays at x = 0, inside the slab.
        let inside = Ray::new_simple(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(unit_box().hit(&inside, Interval::new(0.0, 100.0)));

        // Same direction, but the origin sits outside the X slab.
        let outside = Ray::new_simple(Vec3::new(5.0, 0.0, -5.0), Vec3::Z);
        assert!(!unit_box().hit(&outside, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn longest_axis_with_ties() {
        let x_long = Aabb::from_points(Vec3::ZERO, Vec3::new(10.0, 1.0, 1.0));
        assert_eq!(x_long.longest_axis(), Axis::X);

        let y_long = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 10.0, 1.0));
        assert_eq!(y_long.longest_axis(), Axis::Y);

        let z_long = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 1.0, 10.0));
        assert_eq!(z_long.longest_axis(), Axis::Z);

        // All equal resolves to Z; X/Y tie resolves to Y.
        let cube = Aabb::from_points(Vec3::ZERO, Vec3::ONE);
        assert_eq!(cube.longest_axis(), Axis::Z);
        let xy = Aabb::from_points(Vec3::ZERO, Vec3::new(2.0, 2.0, 1.0));
        assert_eq!(xy.longest_axis(), Axis::Y);
    }

    #[test]
    fn translate_shifts_extents() {
        let moved = unit_box().translate(Vec3::new(3.0, 0.0, -1.0));
        assert_eq!(moved.x.min, 2.0);
        assert_eq!(moved.x.max, 4.0);
        assert_eq!(moved.z.min, -2.0);
        assert_eq!(moved.z.max, 0.0);
    }

    #[test]
    fn degenerate_box_is_padded() {
        let flat = Aabb::from_points(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));
        assert!(flat.y.size() > 0.0);
    }
}
