//! Dodge decision engine.
//!
//! Each tick the engine decides whether dodging is warranted right now,
//! and if so evaluates every legal candidate move by its projected
//! destination and commits to the one that gets the body farthest from
//! both the player's position and the player's aim ray. Layered on top:
//! forced-dodge windows with a speed boost, a randomized intentional
//! failure so the NPC stays hittable, and a smoothing window that holds a
//! chosen direction long enough to avoid zig-zag stutter.

use glam::Vec3;
use rand::Rng;

use skirmish_core::config::DodgeTuning;
use skirmish_core::constants::{FAST_DODGE_MOVE_RATE, SLOW_DODGE_MOVE_RATE};
use skirmish_core::enums::MoveDirection;
use skirmish_core::player::{within_shoot_range, PlayerSnapshot};
use skirmish_world::SpatialQuery;

use crate::mover::Mover;

/// Absolute sim-millisecond deadlines driving the dodge state machine.
/// `None` means the associated state is inactive.
#[derive(Debug, Clone, Copy, Default)]
struct DodgeTimers {
    /// End of the current forced-dodge window.
    forced_end_ms: Option<u64>,
    /// End of the current intentional-failure window.
    fail_effect_end_ms: Option<u64>,
    /// End of the cooldown before the next failure roll.
    fail_recovery_end_ms: Option<u64>,
    /// End of the window holding the current candidate set.
    smoothing_end_ms: Option<u64>,
}

/// Current dodge move rate with exact pre-boost restoration.
/// `saved` is `Some` if and only if a boost is applied.
#[derive(Debug, Clone, Copy)]
pub struct DodgeRate {
    current: f32,
    saved: Option<f32>,
}

impl DodgeRate {
    pub fn new(rate: f32) -> Self {
        Self {
            current: rate,
            saved: None,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn is_boosted(&self) -> bool {
        self.saved.is_some()
    }

    /// Overwrite the base rate. Does not touch a saved pre-boost value.
    pub fn set(&mut self, rate: f32) {
        self.current = rate;
    }

    /// Apply the boost multiplier, saving the prior rate. A second boost on
    /// top of an active one does not stack. Returns whether it applied.
    pub fn boost(&mut self, multiplier: f32) -> bool {
        if self.saved.is_some() {
            return false;
        }
        self.saved = Some(self.current);
        self.current *= multiplier;
        true
    }

    /// Restore the exact pre-boost rate. Returns whether there was a boost
    /// to undo.
    pub fn restore(&mut self) -> bool {
        match self.saved.take() {
            Some(prior) => {
                self.current = prior;
                true
            }
            None => false,
        }
    }
}

/// The dodge decision engine, composed with one movement variant.
pub struct DodgeEngine<M: Mover> {
    mover: M,
    tuning: DodgeTuning,
    rate: DodgeRate,
    timers: DodgeTimers,
    /// Whether the active forced window was opened without a speed boost.
    /// A smooth window can later be upgraded to a boosted one.
    forced_is_smooth: bool,
    /// Directions that passed both safety probes, with their far projected
    /// destinations, in fixed direction order.
    candidates: Vec<(MoveDirection, Vec3)>,
}

impl<M: Mover> DodgeEngine<M> {
    pub fn new(mover: M, tuning: DodgeTuning) -> Self {
        tuning.validate();
        Self {
            mover,
            rate: DodgeRate::new(tuning.dodge_move_rate),
            tuning,
            timers: DodgeTimers::default(),
            forced_is_smooth: false,
            candidates: Vec::with_capacity(MoveDirection::ALL.len()),
        }
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn mover_mut(&mut self) -> &mut M {
        &mut self.mover
    }

    pub fn tuning(&self) -> &DodgeTuning {
        &self.tuning
    }

    pub fn dodge_rate(&self) -> f32 {
        self.rate.current()
    }

    pub fn is_rate_boosted(&self) -> bool {
        self.rate.is_boosted()
    }

    pub fn is_forced_dodging(&self) -> bool {
        self.timers.forced_end_ms.is_some()
    }

    pub fn candidates(&self) -> &[(MoveDirection, Vec3)] {
        &self.candidates
    }

    pub fn set_move_rate_to_slow_default(&mut self) {
        self.rate.set(SLOW_DODGE_MOVE_RATE);
    }

    pub fn set_move_rate_to_fast_default(&mut self) {
        self.rate.set(FAST_DODGE_MOVE_RATE);
    }

    /// See [`DodgeTuning::set_fail_probability`]. Returns `false` (prior
    /// value retained) on an out-of-range percentage.
    pub fn set_fail_probability(&mut self, percentage: i32) -> bool {
        self.tuning.set_fail_probability(percentage)
    }

    /// Per-tick entry point. Decides whether to dodge and carries the move
    /// out. Returns whether a dodge move was made this tick. A zero or
    /// negative `dt_secs` degenerates to a no-distance tick.
    pub fn tick(
        &mut self,
        world: &dyn SpatialQuery,
        player: &PlayerSnapshot,
        now_ms: u64,
        dt_secs: f32,
        rng: &mut impl Rng,
    ) -> bool {
        let dt = dt_secs.max(0.0);

        if self.player_within_closeness(player) {
            self.force_dodge(now_ms);
        }

        if self.dodge_is_appropriate(player, now_ms, rng) {
            let dodged = self.dodge_to_best_position(world, player, now_ms, dt);
            if !dodged {
                // Inconsistent or empty candidate state: stay put.
                self.mover.on_idle();
            }
            dodged
        } else {
            self.candidates.clear();
            self.mover.look_at(player.position);
            self.mover.on_idle();
            false
        }
    }

    /// Open a boosted forced-dodge window of the default duration.
    /// Triggered externally when the NPC is hit by a shot, and internally
    /// when the player gets too close.
    pub fn force_dodge(&mut self, now_ms: u64) {
        self.force_dodge_for(now_ms, self.tuning.forced_duration_ms, true);
    }

    /// Open a forced-dodge window without the speed boost. A later boosted
    /// request upgrades it.
    pub fn smooth_force_dodge(&mut self, now_ms: u64) {
        self.force_dodge_for(now_ms, self.tuning.forced_duration_ms, false);
    }

    /// A window opens only when none is active, or when the active one is
    /// smooth and a boost is requested (the upgrade). An already-boosted
    /// window is neither restacked nor extended.
    fn force_dodge_for(&mut self, now_ms: u64, duration_ms: u64, boost: bool) {
        let upgrade = self.forced_is_smooth && boost;
        if self.timers.forced_end_ms.is_some() && !upgrade {
            return;
        }
        self.forced_is_smooth = !boost;
        self.timers.forced_end_ms = Some(now_ms + duration_ms);
        if boost {
            self.apply_forced_rate();
        }
    }

    /// Whether a dodge is warranted right now. Mutates timer state: an
    /// expired forced window is retired here (restoring the pre-boost
    /// rate), and the intentional-failure overlay rolls and opens its
    /// windows here.
    pub fn dodge_is_appropriate(
        &mut self,
        player: &PlayerSnapshot,
        now_ms: u64,
        rng: &mut impl Rng,
    ) -> bool {
        if let Some(end) = self.timers.forced_end_ms {
            if now_ms > end {
                self.restore_pre_forced_rate();
                self.timers.forced_end_ms = None;
            } else {
                // Forced dodging bypasses every other check
                return true;
            }
        }

        if self.player_within_closeness(player) {
            return true;
        }

        let distance_to_player = player.distance_to(self.mover.pose().position);
        if !within_shoot_range(distance_to_player, self.tuning.max_shoot_range_m) {
            // The player cannot hit from there, so there is nothing to dodge
            return false;
        }

        let mut appropriate =
            self.player_within_aim_radius(player) || self.player_within_closeness(player);

        if self.tuning.fail_probability_pct > 0 {
            if self
                .timers
                .fail_effect_end_ms
                .is_some_and(|end| now_ms < end)
            {
                // Inside a rolled failure window: refuse to notice the threat
                appropriate = false;
            }

            let recovery_elapsed = self
                .timers
                .fail_recovery_end_ms
                .map_or(true, |end| now_ms > end);
            if recovery_elapsed {
                let roll: i32 = rng.gen_range(0..=100);
                if roll <= self.tuning.fail_probability_pct {
                    let effect_end = now_ms + self.tuning.fail_effect_duration_ms;
                    self.timers.fail_effect_end_ms = Some(effect_end);
                    self.timers.fail_recovery_end_ms =
                        Some(effect_end + self.tuning.fail_recovery_duration_ms);
                    appropriate = false;
                } else {
                    self.timers.fail_recovery_end_ms =
                        Some(now_ms + self.tuning.fail_recovery_duration_ms);
                }
            }
        }

        appropriate
    }

    /// Evaluate the candidate set and move along the winning direction.
    /// Returns false when no candidate survives, in which case the body
    /// does not move at all.
    fn dodge_to_best_position(
        &mut self,
        world: &dyn SpatialQuery,
        player: &PlayerSnapshot,
        now_ms: u64,
        dt_secs: f32,
    ) -> bool {
        self.refresh_candidates(world, now_ms);

        let Some(best) = best_candidate_index(player, &self.candidates) else {
            return false;
        };
        let (direction, _) = self.candidates[best];

        self.mover
            .move_toward(world, direction, self.rate.current() * dt_secs);
        true
    }

    /// Rebuild the candidate set unless a forced dodge is running or the
    /// smoothing window is still open; both suppress re-evaluation so a
    /// chosen dodge runs to completion without zig-zagging.
    fn refresh_candidates(&mut self, world: &dyn SpatialQuery, now_ms: u64) {
        if !self.candidates.is_empty() {
            if self.timers.forced_end_ms.is_some() {
                return;
            }
            match self.timers.smoothing_end_ms {
                Some(end) if now_ms <= end => return,
                _ => {
                    self.timers.smoothing_end_ms =
                        Some(now_ms + self.tuning.smoothing_duration_ms);
                }
            }
        }

        self.candidates.clear();
        for direction in MoveDirection::ALL {
            let far = self
                .mover
                .projected_position(direction, self.tuning.far_probe_m);
            let near = self
                .mover
                .projected_position(direction, self.tuning.near_probe_m);
            let (Some(far), Some(near)) = (far, near) else {
                continue;
            };

            // The safety ray follows the facing the body would have after
            // turning toward the candidate, so turn first.
            self.mover.look_at(far);
            let rotation = self.mover.pose().rotation;
            if self.mover.safe_to_move(world, far, rotation)
                && self.mover.safe_to_move(world, near, rotation)
            {
                self.candidates.push((direction, far));
            }
        }
    }

    fn apply_forced_rate(&mut self) {
        if self.rate.boost(self.tuning.forced_rate_multiplier) {
            self.mover.set_pace(true);
        }
    }

    fn restore_pre_forced_rate(&mut self) {
        if self.rate.restore() {
            self.mover.set_pace(false);
        }
    }

    fn player_within_closeness(&self, player: &PlayerSnapshot) -> bool {
        player.distance_to(self.mover.pose().position) < self.tuning.closeness_force_dodge_radius_m
    }

    fn player_within_aim_radius(&self, player: &PlayerSnapshot) -> bool {
        player.distance_to_aim(self.mover.pose().position) < self.tuning.aim_dodge_radius_m
    }
}

/// Index of the candidate whose projected destination maximizes distance
/// to BOTH the player's aim ray and the player's position. The first
/// candidate starts as the incumbent; a challenger replaces it only by
/// strictly improving both metrics.
pub(crate) fn best_candidate_index(
    player: &PlayerSnapshot,
    candidates: &[(MoveDirection, Vec3)],
) -> Option<usize> {
    let (_, first) = candidates.first()?;
    let mut best = 0;
    let mut best_aim = player.distance_to_aim(*first);
    let mut best_position = player.distance_to(*first);

    for (index, (_, projected)) in candidates.iter().enumerate().skip(1) {
        let aim = player.distance_to_aim(*projected);
        let position = player.distance_to(*projected);
        if aim > best_aim && position > best_position {
            best_aim = aim;
            best_position = position;
            best = index;
        }
    }

    Some(best)
}
