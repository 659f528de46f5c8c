//! ECS components for hecs entities.
//!
//! Components are plain data; game logic lives in systems.

use glam::Vec3;

/// Marks an entity as an NPC body and links it to its AI agent.
#[derive(Debug, Clone, Copy)]
pub struct NpcBody {
    pub npc_id: u32,
}

/// Remaining hit points.
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub hp: i32,
}

/// Marks an entity as a lobbed projectile.
#[derive(Debug, Clone, Copy)]
pub struct Projectile;

/// World-space position. NPC entities mirror their agent's pose here so
/// the world can be queried uniformly.
#[derive(Debug, Clone, Copy)]
pub struct Translation(pub Vec3);

/// Linear velocity, integrated each tick for projectiles.
#[derive(Debug, Clone, Copy)]
pub struct LinearVelocity(pub Vec3);
