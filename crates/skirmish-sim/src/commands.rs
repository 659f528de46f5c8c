//! Commands sent from the host game to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All inbound simulation commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Combat resolution reports the player's shot connected with an NPC.
    /// Costs the NPC one hit point and triggers a forced dodge.
    NotifyHit { npc_id: u32 },
    /// Retune one NPC's intentional dodge-failure probability. Values
    /// outside 0..=100 are rejected with an operator alert.
    SetDodgeFailProbability { npc_id: u32, percentage: i32 },
    /// Tear down and respawn the mission: all NPCs back at their spawn
    /// points with full health.
    Reset,
}
