//! The spatial query interface movement safety checks are written against.

use glam::Vec3;

/// Read-only ray queries against world geometry. Calls are synchronous and
/// never mutate AI state; an empty result is a valid answer, not a failure.
pub trait SpatialQuery {
    /// Distance to the nearest geometry hit along `direction` from
    /// `origin`, or `None` when the ray hits nothing.
    fn ray_cast(&self, origin: Vec3, direction: Vec3) -> Option<f32>;

    /// Distance straight down from `origin` to the ground, or `None` when
    /// there is no ground below (an unbounded drop).
    fn ground_distance(&self, origin: Vec3) -> Option<f32> {
        self.ray_cast(origin, Vec3::NEG_Y)
    }
}
