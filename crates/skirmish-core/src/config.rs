//! Tuning structures for the AI engines.
//!
//! Every radius, duration, multiplier, and probability the engines consume
//! lives here as an explicit struct passed to constructors, so each agent
//! is independently tunable and testable. Defaults come from `constants`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tuning for a dodge decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DodgeTuning {
    /// Dodging triggers when the player's aim ray is within this radius (m).
    pub aim_dodge_radius_m: f32,
    /// Dodging is forced when the player is within this radius (m).
    pub closeness_force_dodge_radius_m: f32,
    /// Base dodge move rate (m/s). Must be positive.
    pub dodge_move_rate: f32,
    /// Move-rate multiplier during boosted forced dodges. Must be positive.
    pub forced_rate_multiplier: f32,
    /// Far projection distance for candidate moves (m). Must be positive.
    pub far_probe_m: f32,
    /// Near projection distance for the immediate-safety probe (m).
    /// Must be positive.
    pub near_probe_m: f32,
    /// Chance (percent, 0..=100) of intentionally failing to dodge.
    pub fail_probability_pct: i32,
    /// Duration a rolled failure suppresses dodging (ms).
    pub fail_effect_duration_ms: u64,
    /// Cooldown between failure rolls (ms).
    pub fail_recovery_duration_ms: u64,
    /// Duration a chosen dodge direction is held before re-evaluation (ms).
    pub smoothing_duration_ms: u64,
    /// Duration of a forced-dodge window (ms).
    pub forced_duration_ms: u64,
    /// Maximum range of the player's weapon (m).
    pub max_shoot_range_m: f32,
}

impl Default for DodgeTuning {
    fn default() -> Self {
        Self {
            aim_dodge_radius_m: AIM_DODGE_RADIUS_M,
            closeness_force_dodge_radius_m: CLOSENESS_FORCE_DODGE_RADIUS_M,
            dodge_move_rate: DEFAULT_DODGE_MOVE_RATE,
            forced_rate_multiplier: FORCED_DODGE_RATE_MULTIPLIER,
            far_probe_m: FARTHEST_PROJECTED_PROBE_M,
            near_probe_m: CLOSEST_PROJECTED_PROBE_M,
            fail_probability_pct: DODGE_FAIL_PROBABILITY_PCT,
            fail_effect_duration_ms: DODGE_FAIL_EFFECT_DURATION_MS,
            fail_recovery_duration_ms: DODGE_FAIL_RECOVERY_DURATION_MS,
            smoothing_duration_ms: SMOOTH_CONSECUTIVE_DODGES_MS,
            forced_duration_ms: HIT_FORCED_DODGE_DURATION_MS,
            max_shoot_range_m: MAX_SHOOT_RANGE_M,
        }
    }
}

impl DodgeTuning {
    /// Assert the invariants the dodge math depends on. A zero or negative
    /// rate, multiplier, or probe distance would leave the NPC silently
    /// stuck, so construction fails fast instead.
    pub fn validate(&self) {
        assert!(
            self.dodge_move_rate > 0.0,
            "dodge_move_rate must be positive, got {}",
            self.dodge_move_rate
        );
        assert!(
            self.forced_rate_multiplier > 0.0,
            "forced_rate_multiplier must be positive, got {}",
            self.forced_rate_multiplier
        );
        assert!(
            self.far_probe_m > 0.0,
            "far_probe_m must be positive, got {}",
            self.far_probe_m
        );
        assert!(
            self.near_probe_m > 0.0,
            "near_probe_m must be positive, got {}",
            self.near_probe_m
        );
    }

    /// Set the intentional-failure probability. Values outside 0..=100 are
    /// rejected: the prior value is retained and `false` is returned so the
    /// caller can surface a diagnostic.
    pub fn set_fail_probability(&mut self, percentage: i32) -> bool {
        if !(0..=100).contains(&percentage) {
            return false;
        }
        self.fail_probability_pct = percentage;
        true
    }
}

/// Tuning for a shooting decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShootTuning {
    /// Continuous in-range time required before firing (ms).
    pub attack_delay_ms: u64,
    /// Maximum range of the player's weapon (m); the NPC returns fire only
    /// while it is itself inside this envelope.
    pub max_shoot_range_m: f32,
    /// Vertical drop below the body at which the projectile spawns (m).
    pub spawn_drop_m: f32,
    /// Fixed velocity offset added to the player's position to form the lob.
    pub lob_offset: Vec3,
}

impl Default for ShootTuning {
    fn default() -> Self {
        Self {
            attack_delay_ms: ATTACK_DELAY_MS,
            max_shoot_range_m: MAX_SHOOT_RANGE_M,
            spawn_drop_m: SHOT_SPAWN_DROP_M,
            lob_offset: Vec3::from_array(LOB_VELOCITY_OFFSET),
        }
    }
}
