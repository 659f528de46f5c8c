//! Animation channel binding for bodies that carry a rigged model.

use skirmish_core::constants::WALK_ANIMATION_SPEED;

/// Clip name for the looping walk cycle.
pub const WALK_ANIMATION: &str = "Walk";

/// Clip name for the standing idle.
pub const STAND_ANIMATION: &str = "stand";

/// Handle onto a body's animation playback state. The renderer reads the
/// current clip and speed; the AI only ever writes them.
#[derive(Debug, Clone)]
pub struct AnimationChannel {
    current: Option<&'static str>,
    speed: f32,
    looping: bool,
    clip_starts: u32,
}

impl Default for AnimationChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationChannel {
    pub fn new() -> Self {
        Self {
            current: None,
            speed: WALK_ANIMATION_SPEED,
            looping: false,
            clip_starts: 0,
        }
    }

    /// Start a clip gracefully: re-issuing the clip that is already playing
    /// only updates its settings and never restarts it.
    pub fn play(&mut self, clip: &'static str, looping: bool) {
        self.looping = looping;
        if self.current != Some(clip) {
            self.current = Some(clip);
            self.clip_starts += 1;
        }
    }

    /// Playback rate multiplier.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn current(&self) -> Option<&'static str> {
        self.current
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    /// How many times a clip has actually been (re)started.
    pub fn clip_starts(&self) -> u32 {
        self.clip_starts
    }
}
