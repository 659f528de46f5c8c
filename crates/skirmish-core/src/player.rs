//! Player pose snapshot and threat geometry.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The player's position and aim for one tick. Rebuilt by the host every
/// frame from the live camera; read-only to all AI and never cached across
/// ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub position: Vec3,
    /// Normalized look direction. The aim ray extends from `position`
    /// along this direction.
    pub aim: Vec3,
}

impl PlayerSnapshot {
    pub fn new(position: Vec3, aim: Vec3) -> Self {
        Self {
            position,
            aim: aim.normalize_or_zero(),
        }
    }

    /// Euclidean distance from `point` to the player's position.
    pub fn distance_to(&self, point: Vec3) -> f32 {
        point.distance(self.position)
    }

    /// Perpendicular distance from `point` to the player's aim ray: project
    /// `point` onto the infinite ray through `position` along `aim`, then
    /// measure to the projected point.
    ///
    /// The projection carries a small floating-point residue in the axis it
    /// should cancel; callers treat that as noise, not a contract violation.
    pub fn distance_to_aim(&self, point: Vec3) -> f32 {
        let aim = self.aim.normalize_or_zero();
        let to_point = point - self.position;
        let along = to_point.dot(aim);
        let projected = self.position + aim * along;
        (point - projected).length()
    }
}

/// Whether a body at `distance` from the player can be hit at all.
pub fn within_shoot_range(distance: f32, max_range: f32) -> bool {
    distance <= max_range
}
