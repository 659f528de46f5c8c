//! Fundamental geometric and simulation types.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::DT;

/// Position and orientation of one body.
///
/// World axes: the X/Z plane is horizontal, +Y is up. A body's facing
/// direction is the local +Z axis of its rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// The body's facing direction (local +Z).
    pub fn facing(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Rotate the body so its facing points at `target`, keeping +Y as the
    /// up reference. A degenerate direction (zero-length, or straight
    /// up/down where no yaw is defined) leaves the rotation unchanged.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = target - self.position;
        if dir.length_squared() < 1e-12 {
            return;
        }
        let forward = dir.normalize();
        let right = Vec3::Y.cross(forward);
        if right.length_squared() < 1e-12 {
            return;
        }
        let right = right.normalize();
        let up = forward.cross(right);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, forward));
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        DT
    }

    /// Elapsed simulation time in whole milliseconds. All AI deadlines are
    /// expressed against this clock, which is monotonic and deterministic.
    pub fn now_ms(&self) -> u64 {
        (self.elapsed_secs * 1000.0) as u64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
