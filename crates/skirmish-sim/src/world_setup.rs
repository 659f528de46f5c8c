//! Arena geometry and NPC spawning.

use std::collections::BTreeMap;

use glam::Vec3;
use hecs::World;

use skirmish_core::constants::NPC_HIT_POINTS;
use skirmish_core::types::Pose;
use skirmish_enemy_ai::animation::AnimationChannel;
use skirmish_enemy_ai::composite::DodgeShooter;
use skirmish_enemy_ai::dodging::DodgeEngine;
use skirmish_enemy_ai::mover::{AerialMover, MoverKind, WalkingGroundMover};
use skirmish_enemy_ai::shooting::ShootEngine;
use skirmish_world::{Aabb, StaticWorld};

use crate::components::{Health, NpcBody, Translation};
use crate::engine::{NpcAgent, SimConfig};

/// The default mission arena: a 400 m square floor with a few solid cover
/// blocks. The floor simply ends at its edges, so the rim reads as a cliff
/// to ground NPCs.
pub fn default_arena() -> StaticWorld {
    let mut arena = StaticWorld::new();
    arena.add_ground_slab(-200.0, 200.0, -200.0, 200.0, 0.0);
    // Cover blocks
    arena.add_solid(Aabb::new(
        Vec3::new(-40.0, 0.0, 70.0),
        Vec3::new(-30.0, 6.0, 80.0),
    ));
    arena.add_solid(Aabb::new(
        Vec3::new(30.0, 0.0, 90.0),
        Vec3::new(42.0, 8.0, 98.0),
    ));
    arena
}

/// Spawn point for the `index`-th walking NPC: a line abreast at z = 40.
pub fn walker_spawn_position(index: usize) -> Vec3 {
    Vec3::new(-20.0 + 10.0 * index as f32, 2.0, 40.0)
}

/// Spawn point for the `index`-th aerial NPC: hovering further back.
pub fn flyer_spawn_position(index: usize) -> Vec3 {
    Vec3::new(-10.0 + 20.0 * index as f32, 10.0, 60.0)
}

/// Spawn a walking ground NPC: body entity plus its dodge+shoot agent.
pub fn spawn_walker(
    world: &mut World,
    agents: &mut BTreeMap<u32, NpcAgent>,
    npc_id: u32,
    position: Vec3,
    config: &SimConfig,
) {
    let mover = MoverKind::Walking(WalkingGroundMover::new(
        Pose::new(position),
        Some(AnimationChannel::new()),
    ));
    spawn_npc(world, agents, npc_id, position, mover, config);
}

/// Spawn an aerial NPC.
pub fn spawn_flyer(
    world: &mut World,
    agents: &mut BTreeMap<u32, NpcAgent>,
    npc_id: u32,
    position: Vec3,
    config: &SimConfig,
) {
    let mover = MoverKind::Aerial(AerialMover::new(Pose::new(position)));
    spawn_npc(world, agents, npc_id, position, mover, config);
}

fn spawn_npc(
    world: &mut World,
    agents: &mut BTreeMap<u32, NpcAgent>,
    npc_id: u32,
    position: Vec3,
    mover: MoverKind,
    config: &SimConfig,
) {
    let entity = world.spawn((
        NpcBody { npc_id },
        Health { hp: NPC_HIT_POINTS },
        Translation(position),
    ));
    let agent = DodgeShooter::new(
        DodgeEngine::new(mover, config.dodge),
        ShootEngine::new(config.shoot),
    );
    agents.insert(npc_id, NpcAgent { entity, agent });
}
