//! The dodge+shoot composite agent.

use rand::Rng;

use skirmish_core::events::ProjectileSpawn;
use skirmish_core::player::PlayerSnapshot;
use skirmish_world::SpatialQuery;

use crate::dodging::DodgeEngine;
use crate::mover::Mover;
use crate::shooting::ShootEngine;

/// What one composite tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeOutcome {
    /// Whether a dodge move was made.
    pub dodged: bool,
    /// Projectile to hand to the host world, if the shot timer fired.
    pub projectile: Option<ProjectileSpawn>,
}

/// An NPC that both dodges the player's aim and returns fire. Each tick
/// runs the dodge engine first, then the shooting engine, off the same
/// frame time.
pub struct DodgeShooter<M: Mover> {
    dodge: DodgeEngine<M>,
    shoot: ShootEngine,
}

impl<M: Mover> DodgeShooter<M> {
    pub fn new(dodge: DodgeEngine<M>, shoot: ShootEngine) -> Self {
        Self { dodge, shoot }
    }

    pub fn dodge(&self) -> &DodgeEngine<M> {
        &self.dodge
    }

    pub fn dodge_mut(&mut self) -> &mut DodgeEngine<M> {
        &mut self.dodge
    }

    pub fn shoot(&self) -> &ShootEngine {
        &self.shoot
    }

    pub fn tick(
        &mut self,
        world: &dyn SpatialQuery,
        player: &PlayerSnapshot,
        now_ms: u64,
        dt_secs: f32,
        rng: &mut impl Rng,
    ) -> CompositeOutcome {
        let dodged = self.dodge.tick(world, player, now_ms, dt_secs, rng);

        let body_position = self.dodge.mover().pose().position;
        let projectile = if self.shoot.tick(body_position, player, now_ms) {
            Some(self.shoot.fire(body_position, player))
        } else {
            None
        };

        CompositeOutcome { dodged, projectile }
    }
}
