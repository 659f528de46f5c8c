//! Agent update system: ticks every live NPC's AI.
//!
//! Runs the dodge engine then the shooting engine for each NPC, mirrors
//! the resulting pose into the ECS, and spawns requested projectiles.

use std::collections::BTreeMap;

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skirmish_core::events::SimEvent;
use skirmish_core::player::PlayerSnapshot;
use skirmish_enemy_ai::mover::Mover;
use skirmish_world::StaticWorld;

use crate::components::{LinearVelocity, Projectile, Translation};
use crate::engine::NpcAgent;

/// Tick all agents whose bodies are still in the world.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    arena: &StaticWorld,
    agents: &mut BTreeMap<u32, NpcAgent>,
    player: &PlayerSnapshot,
    now_ms: u64,
    dt_secs: f32,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
) {
    for (&npc_id, npc) in agents.iter_mut() {
        // A despawned body means the NPC is down; its agent stays idle
        if !world.contains(npc.entity) {
            continue;
        }

        let outcome = npc.agent.tick(arena, player, now_ms, dt_secs, rng);

        // Mirror the agent-owned pose into the ECS
        let position = npc.agent.dodge().mover().pose().position;
        if let Ok(mut translation) = world.get::<&mut Translation>(npc.entity) {
            translation.0 = position;
        }

        if let Some(spawn) = outcome.projectile {
            world.spawn((
                Projectile,
                Translation(spawn.origin),
                LinearVelocity(spawn.velocity),
            ));
            events.push(SimEvent::LobFired { npc_id });
        }
    }
}
