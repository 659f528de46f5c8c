//! Shooting decision engine: a delay-gated return-fire trigger.

use glam::Vec3;

use skirmish_core::config::ShootTuning;
use skirmish_core::events::ProjectileSpawn;
use skirmish_core::player::{within_shoot_range, PlayerSnapshot};

/// Decides when an NPC lobs a projectile back at the player: once it has
/// stayed continuously within shooting range for the configured delay.
pub struct ShootEngine {
    tuning: ShootTuning,
    /// When the NPC entered shooting range, or `None` while out of range.
    wait_start_ms: Option<u64>,
}

impl ShootEngine {
    pub fn new(tuning: ShootTuning) -> Self {
        Self {
            tuning,
            wait_start_ms: None,
        }
    }

    pub fn tuning(&self) -> &ShootTuning {
        &self.tuning
    }

    /// Per-tick check. Returns true when firing is appropriate, resetting
    /// the wait timer for the next volley. Leaving range at any point
    /// resets the timer; in-range time never accumulates across exits.
    pub fn tick(&mut self, body_position: Vec3, player: &PlayerSnapshot, now_ms: u64) -> bool {
        let distance = player.distance_to(body_position);
        if !within_shoot_range(distance, self.tuning.max_shoot_range_m) {
            self.wait_start_ms = None;
            return false;
        }

        let started = *self.wait_start_ms.get_or_insert(now_ms);
        if now_ms < started + self.tuning.attack_delay_ms {
            return false;
        }
        self.wait_start_ms = None;
        true
    }

    /// Build the projectile spawn request: the body drops the shot from
    /// below itself and lobs it at a fixed offset from the player's last
    /// known position. Not predictive aim.
    pub fn fire(&self, body_position: Vec3, player: &PlayerSnapshot) -> ProjectileSpawn {
        ProjectileSpawn {
            origin: body_position - Vec3::new(0.0, self.tuning.spawn_drop_m, 0.0),
            velocity: player.position + self.tuning.lob_offset,
        }
    }
}
