//! Events and requests emitted by the AI layer toward the host world.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::AlertLevel;

/// Request for the host world to create and track a physical projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSpawn {
    /// Spawn position of the projectile body.
    pub origin: Vec3,
    /// Initial linear velocity.
    pub velocity: Vec3,
}

/// Events emitted by the simulation for frontend feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// An NPC lobbed a projectile at the player.
    LobFired { npc_id: u32 },
    /// An NPC took a hit and has this much health left.
    NpcHit { npc_id: u32, remaining_hp: i32 },
    /// An NPC ran out of health and was removed.
    NpcDown { npc_id: u32 },
}

/// Operator diagnostic for the alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
