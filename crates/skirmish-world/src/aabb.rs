//! Axis-aligned boxes and ray intersection.

use glam::Vec3;

/// An axis-aligned box, the only solid primitive in the static world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    /// Box centered at `center` with the given full extents.
    pub fn centered(center: Vec3, extents: Vec3) -> Self {
        let half = extents * 0.5;
        Self::new(center - half, center + half)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Distance along the ray to this box (slab method), or `None` on a
    /// miss. A ray starting inside the box hits at distance zero.
    pub fn ray_hit(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            let lo = self.min[axis];
            let hi = self.max[axis];

            if d.abs() < 1e-12 {
                // Parallel to this slab: misses unless inside it
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let (t0, t1) = {
                let a = (lo - o) * inv;
                let b = (hi - o) * inv;
                if a <= b {
                    (a, b)
                } else {
                    (b, a)
                }
            };
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            return None; // Entirely behind the ray
        }
        Some(t_near.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_front_face() {
        let solid = Aabb::new(Vec3::new(-1.0, -1.0, 5.0), Vec3::new(1.0, 1.0, 7.0));
        let hit = solid.ray_hit(Vec3::ZERO, Vec3::Z);
        assert!((hit.unwrap() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_misses_to_the_side() {
        let solid = Aabb::new(Vec3::new(-1.0, -1.0, 5.0), Vec3::new(1.0, 1.0, 7.0));
        assert!(solid.ray_hit(Vec3::new(3.0, 0.0, 0.0), Vec3::Z).is_none());
    }

    #[test]
    fn test_ray_behind_misses() {
        let solid = Aabb::new(Vec3::new(-1.0, -1.0, 5.0), Vec3::new(1.0, 1.0, 7.0));
        assert!(solid.ray_hit(Vec3::ZERO, Vec3::NEG_Z).is_none());
    }

    #[test]
    fn test_ray_from_inside_hits_at_zero() {
        let solid = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let hit = solid.ray_hit(Vec3::ZERO, Vec3::X);
        assert_eq!(hit, Some(0.0));
    }

    #[test]
    fn test_contains() {
        let solid = Aabb::centered(Vec3::ZERO, Vec3::splat(2.0));
        assert!(solid.contains(Vec3::ZERO));
        assert!(solid.contains(Vec3::splat(1.0)));
        assert!(!solid.contains(Vec3::splat(1.1)));
    }
}
