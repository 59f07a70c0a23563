//! Encounter engine — the core of the game.
//!
//! `EncounterEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `EncounterSnapshot`s. Completely
//! headless (no UI dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use specter_arsenal::profiles::get_profile;
use specter_core::commands::PlayerCommand;
use specter_core::constants::RELOAD_DURATION_TICKS;
use specter_core::enums::{SessionPhase, WeaponKind};
use specter_core::events::{FeedbackEvent, KillReward};
use specter_core::state::EncounterSnapshot;
use specter_core::types::{Position, SimTime};

use crate::loadout::{Loadout, ScoreState};
use crate::systems;

/// Configuration for a new encounter engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawn sequence.
    pub seed: u64,
    /// Weapon the player brings into sessions.
    pub weapon: WeaponKind,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            weapon: WeaponKind::Rifle,
        }
    }
}

/// The encounter engine. Owns the ECS world and all session state.
pub struct EncounterEngine {
    world: World,
    time: SimTime,
    phase: SessionPhase,
    rng: ChaCha8Rng,
    next_monster_id: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    feedback: Vec<FeedbackEvent>,
    rewards: Vec<KillReward>,
    weapon: WeaponKind,
    loadout: Loadout,
    score: ScoreState,
    crosshair: Position,
}

impl EncounterEngine {
    /// Create a new encounter engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let profile = get_profile(config.weapon);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SessionPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_monster_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            feedback: Vec::new(),
            rewards: Vec::new(),
            weapon: config.weapon,
            loadout: Loadout::from_profile(&profile),
            score: ScoreState::default(),
            crosshair: Position::center(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Commands drain fully before any system runs, so a shot always tests
    /// monster positions as of the previous tick's end — a shot and a
    /// movement step are never interleaved.
    pub fn tick(&mut self) -> EncounterSnapshot {
        self.process_commands();

        if self.phase == SessionPhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let feedback = std::mem::take(&mut self.feedback);
        let rewards = std::mem::take(&mut self.rewards);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.weapon,
            self.crosshair,
            &self.loadout,
            &self.score,
            feedback,
            rewards,
        )
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a monster with exact placement (for scripted test scenarios).
    #[cfg(test)]
    pub fn spawn_monster_at(&mut self, x: f64, y: f64, speed: f64) -> hecs::Entity {
        crate::world_setup::spawn_monster_at(
            &mut self.world,
            &mut self.next_monster_id,
            Position::new(x, y),
            speed,
        )
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Precondition failures are silent
    /// no-ops: the UI stays permissive and nothing is surfaced as an error.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if self.phase == SessionPhase::Idle {
                    self.world.clear();
                    self.score = ScoreState::default();
                    self.loadout.refill();
                    self.loadout.reload_done_tick = None;
                    self.next_monster_id = 0;
                    self.time = SimTime::default();
                    self.crosshair = Position::center();
                    self.phase = SessionPhase::Active;
                    self.feedback.push(FeedbackEvent::SessionStarted);
                }
            }
            PlayerCommand::EndSession => {
                if self.phase == SessionPhase::Active {
                    self.phase = SessionPhase::Idle;
                    // Cancel the in-flight reload; the remaining monsters
                    // carry no further meaning.
                    self.loadout.reload_done_tick = None;
                    self.world.clear();
                    self.feedback.push(FeedbackEvent::SessionEnded {
                        score: self.score.score,
                    });
                }
            }
            PlayerCommand::Shoot { x, y } => {
                if self.phase != SessionPhase::Active
                    || self.loadout.ammo == 0
                    || self.loadout.reloading()
                {
                    return;
                }
                // A shot consumes ammo even on a miss.
                self.loadout.ammo -= 1;
                self.score.shots_fired += 1;
                systems::combat::resolve_shot(
                    &mut self.world,
                    Position::new(x, y),
                    self.loadout.damage,
                    &mut self.score,
                    &mut self.feedback,
                    &mut self.rewards,
                );
            }
            PlayerCommand::Reload => {
                if self.phase != SessionPhase::Active
                    || self.loadout.reloading()
                    || self.loadout.ammo == self.loadout.magazine_size
                {
                    return;
                }
                self.loadout.reload_done_tick = Some(self.time.tick + RELOAD_DURATION_TICKS);
                self.feedback.push(FeedbackEvent::ReloadStarted);
            }
            PlayerCommand::MoveAim { x, y } => {
                if self.phase == SessionPhase::Active {
                    self.crosshair = Position::new(x, y);
                }
            }
            PlayerCommand::EquipWeapon { kind } => {
                // Idle only, so a running session keeps one stat profile.
                if self.phase == SessionPhase::Idle {
                    self.weapon = kind;
                    self.loadout = Loadout::from_profile(&get_profile(kind));
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Spawn scheduling (bounded population)
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_monster_id,
            self.time.tick,
        );
        // 2. Reload completion
        systems::reload::run(&mut self.loadout, self.time.tick, &mut self.feedback);
        // 3. Descent integration
        systems::movement::run(&mut self.world);
        // 4. Despawn filter — same tick as the movement that crossed the line
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
