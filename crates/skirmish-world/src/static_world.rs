//! Static level geometry: a flat collection of solid boxes.

use glam::Vec3;

use crate::aabb::Aabb;
use crate::query::SpatialQuery;

/// The level's solid geometry. Ground is modeled as box slabs like any
/// other solid, so a missing slab reads as an unbounded drop (a cliff).
#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
    solids: Vec<Aabb>,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_solid(&mut self, solid: Aabb) -> &mut Self {
        self.solids.push(solid);
        self
    }

    /// Ground slab of the given top height spanning the rectangle
    /// `[min_x, max_x] × [min_z, max_z]`.
    pub fn add_ground_slab(&mut self, min_x: f32, max_x: f32, min_z: f32, max_z: f32, top_y: f32) {
        self.add_solid(Aabb::new(
            Vec3::new(min_x, top_y - 1.0, min_z),
            Vec3::new(max_x, top_y, max_z),
        ));
    }

    pub fn solids(&self) -> &[Aabb] {
        &self.solids
    }
}

impl SpatialQuery for StaticWorld {
    fn ray_cast(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }
        self.solids
            .iter()
            .filter_map(|solid| solid.ray_hit(origin, direction))
            .min_by(|a, b| a.total_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 200×200 m floor at y=0 with a wall 5 m north of the origin.
    fn walled_arena() -> StaticWorld {
        let mut world = StaticWorld::new();
        world.add_ground_slab(-100.0, 100.0, -100.0, 100.0, 0.0);
        world.add_solid(Aabb::new(
            Vec3::new(-10.0, 0.0, 5.0),
            Vec3::new(10.0, 10.0, 6.0),
        ));
        world
    }

    #[test]
    fn test_ray_cast_finds_nearest_wall() {
        let world = walled_arena();
        let hit = world.ray_cast(Vec3::new(0.0, 2.0, 0.0), Vec3::Z);
        assert!((hit.unwrap() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_cast_open_direction_misses() {
        let world = walled_arena();
        // Looking south from above the floor: nothing but open air
        assert!(world
            .ray_cast(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Z)
            .is_none());
    }

    #[test]
    fn test_ground_distance_over_floor() {
        let world = walled_arena();
        let dist = world.ground_distance(Vec3::new(0.0, 3.0, -20.0));
        assert!((dist.unwrap() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_ground_distance_past_edge_is_none() {
        let world = walled_arena();
        // Beyond the floor slab there is nothing below
        assert!(world.ground_distance(Vec3::new(150.0, 3.0, 0.0)).is_none());
    }

    #[test]
    fn test_zero_direction_is_a_miss() {
        let world = walled_arena();
        assert!(world.ray_cast(Vec3::ZERO, Vec3::ZERO).is_none());
    }
}
