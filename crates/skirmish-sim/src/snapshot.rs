//! Tick snapshot — the complete visible state handed to the host after
//! each tick.

use std::collections::BTreeMap;

use glam::Vec3;
use hecs::World;
use serde::{Deserialize, Serialize};

use skirmish_core::events::{Alert, SimEvent};
use skirmish_core::types::SimTime;
use skirmish_enemy_ai::mover::Mover;

use crate::components::{Health, LinearVelocity, Projectile, Translation};
use crate::engine::NpcAgent;

/// Complete visible state after one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub npcs: Vec<NpcView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<SimEvent>,
    pub alerts: Vec<Alert>,
}

/// One live NPC as the host sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcView {
    pub npc_id: u32,
    pub position: Vec3,
    pub facing: Vec3,
    pub hp: i32,
    /// Whether a forced-dodge window is currently open.
    pub forced_dodging: bool,
    /// Current dodge move rate (m/s), boosted or not.
    pub dodge_rate: f32,
    /// Current animation clip, for bodies that carry one.
    pub animation: Option<String>,
    pub animation_speed: Option<f32>,
}

/// One in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Build the snapshot for the tick that just ran.
pub fn build(
    world: &World,
    agents: &BTreeMap<u32, NpcAgent>,
    time: &SimTime,
    events: Vec<SimEvent>,
    alerts: Vec<Alert>,
) -> SimSnapshot {
    let mut npcs = Vec::with_capacity(agents.len());
    for (&npc_id, npc) in agents {
        let Ok(health) = world.get::<&Health>(npc.entity) else {
            continue; // Down; not part of the visible state
        };
        let pose = npc.agent.dodge().mover().pose();
        let channel = npc.agent.dodge().mover().animation_channel();
        npcs.push(NpcView {
            npc_id,
            position: pose.position,
            facing: pose.facing(),
            hp: health.hp,
            forced_dodging: npc.agent.dodge().is_forced_dodging(),
            dodge_rate: npc.agent.dodge().dodge_rate(),
            animation: channel.and_then(|c| c.current()).map(str::to_owned),
            animation_speed: channel.map(|c| c.speed()),
        });
    }

    let mut projectiles = Vec::new();
    let mut query = world.query::<(&Projectile, &Translation, &LinearVelocity)>();
    for (_entity, (_projectile, translation, velocity)) in query.iter() {
        projectiles.push(ProjectileView {
            position: translation.0,
            velocity: velocity.0,
        });
    }

    SimSnapshot {
        time: *time,
        npcs,
        projectiles,
        events,
        alerts,
    }
}
