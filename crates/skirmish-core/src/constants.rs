//! Simulation constants and tuning defaults.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Dodge radii ---

/// An NPC starts dodging whenever the player's aim ray passes within this
/// distance of it (meters).
pub const AIM_DODGE_RADIUS_M: f32 = 5.0;

/// The player being this close to the NPC's position unconditionally
/// triggers (and force-boosts) dodging (meters).
pub const CLOSENESS_FORCE_DODGE_RADIUS_M: f32 = 25.0;

// --- Dodge move rates ---

/// Slow dodge move rate preset (m/s). Must be positive.
pub const SLOW_DODGE_MOVE_RATE: f32 = 0.5;

/// Fast dodge move rate preset (m/s). Must be positive.
pub const FAST_DODGE_MOVE_RATE: f32 = 3.0;

/// Default dodge move rate (m/s). Must be positive.
pub const DEFAULT_DODGE_MOVE_RATE: f32 = FAST_DODGE_MOVE_RATE;

/// Multiplier applied to the dodge move rate while a boosted forced dodge
/// is in effect. Must be positive.
pub const FORCED_DODGE_RATE_MULTIPLIER: f32 = 3.0;

/// Distance of the far candidate projection (meters). Kept large so the
/// projected destinations are well separated and greedy picking between
/// near-identical projections cannot cause zig-zag stutter.
pub const FARTHEST_PROJECTED_PROBE_M: f32 = FAST_DODGE_MOVE_RATE * FORCED_DODGE_RATE_MULTIPLIER;

/// Distance of the near candidate projection (meters). Kept tiny; it only
/// probes for a collision immediately ahead of the body.
pub const CLOSEST_PROJECTED_PROBE_M: f32 = 0.001;

// --- Intentional dodge failure ---

/// Chance (percent, 0..=100) that the NPC intentionally fails to notice it
/// should dodge, so it is not impossible to hit. 0 = never fail,
/// 100 = never even attempt to dodge.
pub const DODGE_FAIL_PROBABILITY_PCT: i32 = 10;

/// How long a rolled dodge failure keeps suppressing dodges (milliseconds).
pub const DODGE_FAIL_EFFECT_DURATION_MS: u64 = 1000;

/// How long after a roll (failed or avoided) before the next roll may
/// happen (milliseconds). Doubles as the recovery period after a failure.
pub const DODGE_FAIL_RECOVERY_DURATION_MS: u64 = 3000;

// --- Dodge smoothing / forcing ---

/// Minimum duration a chosen dodge direction is held before candidates are
/// re-evaluated (milliseconds). Prevents oscillating direction picks.
pub const SMOOTH_CONSECUTIVE_DODGES_MS: u64 = 5000;

/// Duration of the forced-dodge window opened when an NPC is hit
/// (milliseconds).
pub const HIT_FORCED_DODGE_DURATION_MS: u64 = 1000;

// --- Player weapon envelope ---

/// Maximum range of the player's weapon (meters). Beyond this the player
/// cannot hit, so dodging is pointless.
pub const MAX_SHOOT_RANGE_M: f32 = 100.0;

// --- NPC return fire ---

/// How long an NPC must stay continuously within shooting range before it
/// lobs a projectile back (milliseconds).
pub const ATTACK_DELAY_MS: u64 = 3000;

/// Vertical drop below the NPC's position at which its projectile spawns
/// (meters).
pub const SHOT_SPAWN_DROP_M: f32 = 5.0;

/// Fixed lob velocity offset added to the player's last known position.
/// Not predictive aim; the lob arcs toward a point near the player.
pub const LOB_VELOCITY_OFFSET: [f32; 3] = [20.0, -45.0, 0.0];

// --- Movement safety ---

/// Minimum allowed clearance in front of an obstacle (meters). A candidate
/// position with an obstacle closer than this ahead is vetoed.
pub const MIN_OBSTACLE_CLEARANCE_M: f32 = 2.0;

/// Minimum clearance an aerial body keeps above the ground (meters).
pub const MIN_AERIAL_GROUND_CLEARANCE_M: f32 = 1.0;

// --- Animation ---

/// Normal walk-cycle playback rate.
pub const WALK_ANIMATION_SPEED: f32 = 1.0;

/// Walk-cycle playback rate while a boosted forced dodge is active.
pub const FAST_WALK_ANIMATION_SPEED: f32 = WALK_ANIMATION_SPEED * 2.0;

// --- NPC health ---

/// Hit points each NPC starts a mission with.
pub const NPC_HIT_POINTS: i32 = 20;

// --- Projectiles ---

/// Downward acceleration applied to lobbed projectiles (m/s²).
pub const PROJECTILE_GRAVITY: f32 = 9.81;

/// Projectiles falling below this height are despawned (meters).
pub const PROJECTILE_KILL_PLANE_Y: f32 = -100.0;
