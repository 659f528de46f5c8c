//! Simulation engine — owns the world, the agents, and the tick loop.

use std::collections::{BTreeMap, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::config::{DodgeTuning, ShootTuning};
use skirmish_core::enums::AlertLevel;
use skirmish_core::events::{Alert, SimEvent};
use skirmish_core::player::PlayerSnapshot;
use skirmish_core::types::SimTime;
use skirmish_enemy_ai::composite::DodgeShooter;
use skirmish_enemy_ai::mover::MoverKind;
use skirmish_world::StaticWorld;

use crate::commands::SimCommand;
use crate::components::Health;
use crate::snapshot::{self, SimSnapshot};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Number of walking ground NPCs to spawn.
    pub walker_count: usize,
    /// Number of aerial NPCs to spawn.
    pub flyer_count: usize,
    /// Dodge tuning applied to every NPC.
    pub dodge: DodgeTuning,
    /// Shooting tuning applied to every NPC.
    pub shoot: ShootTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            walker_count: 5,
            flyer_count: 1,
            dodge: DodgeTuning::default(),
            shoot: ShootTuning::default(),
        }
    }
}

/// One NPC's body entity and its AI agent. The pose lives in the agent's
/// mover; the entity mirrors it for uniform world queries.
pub struct NpcAgent {
    pub entity: hecs::Entity,
    pub agent: DodgeShooter<MoverKind>,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimEngine {
    world: World,
    arena: StaticWorld,
    time: SimTime,
    rng: ChaCha8Rng,
    config: SimConfig,
    /// Keyed by NPC id; ordered so agent updates are deterministic.
    agents: BTreeMap<u32, NpcAgent>,
    command_queue: VecDeque<SimCommand>,
    events: Vec<SimEvent>,
    alerts: Vec<Alert>,
}

impl SimEngine {
    /// Create a new engine and spawn the mission.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            arena: world_setup::default_arena(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            agents: BTreeMap::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            alerts: Vec::new(),
        };
        engine.setup_mission();
        engine
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. The player snapshot is refreshed by the host every frame
    /// before any agent runs.
    pub fn tick(&mut self, player: &PlayerSnapshot) -> SimSnapshot {
        self.process_commands();

        systems::agents::run(
            &mut self.world,
            &self.arena,
            &mut self.agents,
            player,
            self.time.now_ms(),
            self.time.dt() as f32,
            &mut self.rng,
            &mut self.events,
        );
        systems::projectiles::run(&mut self.world, self.time.dt() as f32);

        self.time.advance();

        let events = std::mem::take(&mut self.events);
        let alerts = std::mem::take(&mut self.alerts);
        snapshot::build(&self.world, &self.agents, &self.time, events, alerts)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn arena(&self) -> &StaticWorld {
        &self.arena
    }

    pub fn agents(&self) -> &BTreeMap<u32, NpcAgent> {
        &self.agents
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::NotifyHit { npc_id } => self.handle_hit(npc_id),
            SimCommand::SetDodgeFailProbability { npc_id, percentage } => {
                let accepted = self
                    .agents
                    .get_mut(&npc_id)
                    .map(|npc| npc.agent.dodge_mut().set_fail_probability(percentage));
                match accepted {
                    None => self.push_alert(
                        AlertLevel::Warning,
                        format!("no NPC {npc_id} to retune"),
                    ),
                    Some(false) => self.push_alert(
                        AlertLevel::Warning,
                        format!(
                            "dodge fail probability must be within 0..=100, got {percentage}; prior value kept"
                        ),
                    ),
                    Some(true) => {}
                }
            }
            SimCommand::Reset => {
                self.world = World::new();
                self.agents.clear();
                self.time = SimTime::default();
                self.events.clear();
                self.setup_mission();
            }
        }
    }

    fn handle_hit(&mut self, npc_id: u32) {
        let entity = self.agents.get(&npc_id).map(|npc| npc.entity);
        let Some(entity) = entity else {
            self.push_alert(AlertLevel::Warning, format!("hit on unknown NPC {npc_id}"));
            return;
        };
        if !self.world.contains(entity) {
            // Already down; late hit reports are dropped
            return;
        }

        let now_ms = self.time.now_ms();
        if let Some(npc) = self.agents.get_mut(&npc_id) {
            npc.agent.dodge_mut().force_dodge(now_ms);
        }

        let remaining = match self.world.get::<&mut Health>(entity) {
            Ok(mut health) => {
                health.hp -= 1;
                health.hp
            }
            Err(_) => return,
        };

        if remaining <= 0 {
            let _ = self.world.despawn(entity);
            self.events.push(SimEvent::NpcDown { npc_id });
        } else {
            self.events.push(SimEvent::NpcHit {
                npc_id,
                remaining_hp: remaining,
            });
        }
    }

    fn push_alert(&mut self, level: AlertLevel, message: String) {
        self.alerts.push(Alert {
            level,
            message,
            tick: self.time.tick,
        });
    }

    /// Spawn the mission NPCs per the engine config.
    fn setup_mission(&mut self) {
        let mut next_id = 0u32;
        for index in 0..self.config.walker_count {
            world_setup::spawn_walker(
                &mut self.world,
                &mut self.agents,
                next_id,
                world_setup::walker_spawn_position(index),
                &self.config,
            );
            next_id += 1;
        }
        for index in 0..self.config.flyer_count {
            world_setup::spawn_flyer(
                &mut self.world,
                &mut self.agents,
                next_id,
                world_setup::flyer_spawn_position(index),
                &self.config,
            );
            next_id += 1;
        }
    }
}
