//! Movement abstraction: directional intents with a safety veto.
//!
//! The [`Mover`] trait is the capability interface the dodge engine
//! composes with; the closed set of variants (ground, aerial, walking
//! ground) supplies direction legality and the safety predicate.

use glam::{Quat, Vec3};

use skirmish_core::constants::{
    FAST_WALK_ANIMATION_SPEED, MIN_AERIAL_GROUND_CLEARANCE_M, MIN_OBSTACLE_CLEARANCE_M,
    WALK_ANIMATION_SPEED,
};
use skirmish_core::enums::MoveDirection;
use skirmish_core::types::Pose;
use skirmish_world::SpatialQuery;

use crate::animation::{AnimationChannel, STAND_ANIMATION, WALK_ANIMATION};

/// A body's movement capability. `move_toward` re-orients toward the
/// projected destination and commits the translation only when the safety
/// predicate accepts it; a veto is a silent no-op, never an error.
pub trait Mover {
    fn pose(&self) -> &Pose;

    fn pose_mut(&mut self) -> &mut Pose;

    /// Where the body would end up moving `distance` in `direction`, or
    /// `None` for directions this body kind cannot take. Pure; does not
    /// move the body.
    fn projected_position(&self, direction: MoveDirection, distance: f32) -> Option<Vec3>;

    /// Whether the body may stand at `position` while facing per
    /// `rotation`.
    fn safe_to_move(&self, world: &dyn SpatialQuery, position: Vec3, rotation: Quat) -> bool;

    /// Turn to face `target` (up reference fixed to +Y).
    fn look_at(&mut self, target: Vec3) {
        self.pose_mut().look_at(target);
    }

    /// Project, re-orient, and translate if safe. Returns whether the
    /// translation was committed.
    fn move_toward(
        &mut self,
        world: &dyn SpatialQuery,
        direction: MoveDirection,
        distance: f32,
    ) -> bool {
        let Some(target) = self.projected_position(direction, distance) else {
            return false;
        };
        self.look_at(target);
        if !self.safe_to_move(world, target, self.pose().rotation) {
            return false;
        }
        self.pose_mut().position = target;
        true
    }

    /// Hook: the body is standing still this tick.
    fn on_idle(&mut self) {}

    /// Hook: scale movement-linked presentation (e.g. walk-cycle rate) for
    /// a boosted or restored dodge pace.
    fn set_pace(&mut self, _fast: bool) {}
}

/// Whether an obstacle sits closer than `min_clearance` ahead of
/// `position` along the facing direction of `rotation`.
pub fn obstacle_close_ahead(
    world: &dyn SpatialQuery,
    position: Vec3,
    rotation: Quat,
    min_clearance: f32,
) -> bool {
    let facing = rotation * Vec3::Z;
    match world.ray_cast(position, facing) {
        Some(distance) => distance < min_clearance,
        None => false,
    }
}

/// Whether `position` hangs over an unbounded drop. A downward ray that
/// hits nothing reads as infinite depth, i.e. a cliff.
pub fn cliff_below(world: &dyn SpatialQuery, position: Vec3) -> bool {
    world.ground_distance(position).is_none()
}

/// Handle onto the body's external physics representation. Ground bodies
/// attach one on construction so the physics world tracks their pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KinematicBinding {
    pub enabled: bool,
    pub kinematic: bool,
}

impl KinematicBinding {
    /// Create a fresh binding, or re-enable an existing one, and mark it
    /// kinematic so the physics representation follows AI-driven moves.
    pub fn attach(existing: Option<KinematicBinding>) -> Self {
        let mut binding = existing.unwrap_or(KinematicBinding {
            enabled: false,
            kinematic: false,
        });
        binding.enabled = true;
        binding.kinematic = true;
        binding
    }
}

/// Ground-bound body: cannot fly, refuses destinations with an obstacle
/// close ahead or a cliff below.
#[derive(Debug, Clone)]
pub struct GroundMover {
    pose: Pose,
    binding: KinematicBinding,
    min_obstacle_clearance: f32,
}

impl GroundMover {
    pub fn new(pose: Pose, existing_binding: Option<KinematicBinding>) -> Self {
        Self {
            pose,
            binding: KinematicBinding::attach(existing_binding),
            min_obstacle_clearance: MIN_OBSTACLE_CLEARANCE_M,
        }
    }

    pub fn binding(&self) -> &KinematicBinding {
        &self.binding
    }
}

impl Mover for GroundMover {
    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }

    fn projected_position(&self, direction: MoveDirection, distance: f32) -> Option<Vec3> {
        if !direction.is_horizontal() {
            return None;
        }
        Some(self.pose.position + direction.axis_offset() * distance)
    }

    fn safe_to_move(&self, world: &dyn SpatialQuery, position: Vec3, rotation: Quat) -> bool {
        !obstacle_close_ahead(world, position, rotation, self.min_obstacle_clearance)
            && !cliff_below(world, position)
    }
}

/// Airborne body: all six directions are legal; instead of the cliff check
/// it keeps a minimum clearance above whatever ground there is. Flyers
/// carry no kinematic binding.
#[derive(Debug, Clone)]
pub struct AerialMover {
    pose: Pose,
    min_obstacle_clearance: f32,
    min_ground_clearance: f32,
}

impl AerialMover {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            min_obstacle_clearance: MIN_OBSTACLE_CLEARANCE_M,
            min_ground_clearance: MIN_AERIAL_GROUND_CLEARANCE_M,
        }
    }
}

impl Mover for AerialMover {
    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }

    fn projected_position(&self, direction: MoveDirection, distance: f32) -> Option<Vec3> {
        Some(self.pose.position + direction.axis_offset() * distance)
    }

    fn safe_to_move(&self, world: &dyn SpatialQuery, position: Vec3, rotation: Quat) -> bool {
        if obstacle_close_ahead(world, position, rotation, self.min_obstacle_clearance) {
            return false;
        }
        // No ground below is fine for a flyer; too little clearance is not.
        world
            .ground_distance(position)
            .map_or(true, |distance| distance > self.min_ground_clearance)
    }
}

/// Ground body with a walk/stand animation binding. Plays the walk cycle
/// on every committed horizontal move and the stand clip when idle;
/// degrades to plain ground movement when the body has no channel.
#[derive(Debug, Clone)]
pub struct WalkingGroundMover {
    inner: GroundMover,
    channel: Option<AnimationChannel>,
}

impl WalkingGroundMover {
    pub fn new(pose: Pose, channel: Option<AnimationChannel>) -> Self {
        Self {
            inner: GroundMover::new(pose, None),
            channel,
        }
    }

    pub fn animation_channel(&self) -> Option<&AnimationChannel> {
        self.channel.as_ref()
    }

    pub fn binding(&self) -> &KinematicBinding {
        self.inner.binding()
    }
}

impl Mover for WalkingGroundMover {
    fn pose(&self) -> &Pose {
        self.inner.pose()
    }

    fn pose_mut(&mut self) -> &mut Pose {
        self.inner.pose_mut()
    }

    fn projected_position(&self, direction: MoveDirection, distance: f32) -> Option<Vec3> {
        self.inner.projected_position(direction, distance)
    }

    fn safe_to_move(&self, world: &dyn SpatialQuery, position: Vec3, rotation: Quat) -> bool {
        self.inner.safe_to_move(world, position, rotation)
    }

    fn move_toward(
        &mut self,
        world: &dyn SpatialQuery,
        direction: MoveDirection,
        distance: f32,
    ) -> bool {
        let committed = self.inner.move_toward(world, direction, distance);
        if committed && direction.is_horizontal() {
            if let Some(channel) = self.channel.as_mut() {
                channel.play(WALK_ANIMATION, true);
            }
        }
        committed
    }

    fn on_idle(&mut self) {
        if let Some(channel) = self.channel.as_mut() {
            channel.play(STAND_ANIMATION, false);
        }
    }

    fn set_pace(&mut self, fast: bool) {
        if let Some(channel) = self.channel.as_mut() {
            channel.set_speed(if fast {
                FAST_WALK_ANIMATION_SPEED
            } else {
                WALK_ANIMATION_SPEED
            });
        }
    }
}

/// The closed set of movement variants, so heterogeneous agents can share
/// one collection.
#[derive(Debug, Clone)]
pub enum MoverKind {
    Ground(GroundMover),
    Aerial(AerialMover),
    Walking(WalkingGroundMover),
}

impl MoverKind {
    pub fn animation_channel(&self) -> Option<&AnimationChannel> {
        match self {
            MoverKind::Walking(mover) => mover.animation_channel(),
            _ => None,
        }
    }
}

impl Mover for MoverKind {
    fn pose(&self) -> &Pose {
        match self {
            MoverKind::Ground(m) => m.pose(),
            MoverKind::Aerial(m) => m.pose(),
            MoverKind::Walking(m) => m.pose(),
        }
    }

    fn pose_mut(&mut self) -> &mut Pose {
        match self {
            MoverKind::Ground(m) => m.pose_mut(),
            MoverKind::Aerial(m) => m.pose_mut(),
            MoverKind::Walking(m) => m.pose_mut(),
        }
    }

    fn projected_position(&self, direction: MoveDirection, distance: f32) -> Option<Vec3> {
        match self {
            MoverKind::Ground(m) => m.projected_position(direction, distance),
            MoverKind::Aerial(m) => m.projected_position(direction, distance),
            MoverKind::Walking(m) => m.projected_position(direction, distance),
        }
    }

    fn safe_to_move(&self, world: &dyn SpatialQuery, position: Vec3, rotation: Quat) -> bool {
        match self {
            MoverKind::Ground(m) => m.safe_to_move(world, position, rotation),
            MoverKind::Aerial(m) => m.safe_to_move(world, position, rotation),
            MoverKind::Walking(m) => m.safe_to_move(world, position, rotation),
        }
    }

    fn move_toward(
        &mut self,
        world: &dyn SpatialQuery,
        direction: MoveDirection,
        distance: f32,
    ) -> bool {
        match self {
            MoverKind::Ground(m) => m.move_toward(world, direction, distance),
            MoverKind::Aerial(m) => m.move_toward(world, direction, distance),
            MoverKind::Walking(m) => m.move_toward(world, direction, distance),
        }
    }

    fn on_idle(&mut self) {
        match self {
            MoverKind::Ground(m) => m.on_idle(),
            MoverKind::Aerial(m) => m.on_idle(),
            MoverKind::Walking(m) => m.on_idle(),
        }
    }

    fn set_pace(&mut self, fast: bool) {
        match self {
            MoverKind::Ground(m) => m.set_pace(fast),
            MoverKind::Aerial(m) => m.set_pace(fast),
            MoverKind::Walking(m) => m.set_pace(fast),
        }
    }
}
