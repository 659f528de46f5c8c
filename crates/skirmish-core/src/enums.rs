//! Enumeration types used throughout the AI layer.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A directional move intent. Moves translate along world axes; not every
/// direction is legal for every body kind (ground bodies cannot fly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Left,
    Right,
    Forward,
    Backward,
    Up,
    Down,
}

impl MoveDirection {
    /// All directions, in the fixed order candidate sets are built in.
    pub const ALL: [MoveDirection; 6] = [
        MoveDirection::Left,
        MoveDirection::Right,
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Up,
        MoveDirection::Down,
    ];

    /// Unit world-axis offset for this direction.
    pub fn axis_offset(self) -> Vec3 {
        match self {
            MoveDirection::Left => Vec3::X,
            MoveDirection::Right => Vec3::NEG_X,
            MoveDirection::Forward => Vec3::Z,
            MoveDirection::Backward => Vec3::NEG_Z,
            MoveDirection::Up => Vec3::Y,
            MoveDirection::Down => Vec3::NEG_Y,
        }
    }

    /// Whether this is a horizontal (walkable) direction.
    pub fn is_horizontal(self) -> bool {
        !matches!(self, MoveDirection::Up | MoveDirection::Down)
    }
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
