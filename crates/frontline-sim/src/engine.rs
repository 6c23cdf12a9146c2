//! Game engine: the core of the game.
//!
//! `GameEngine` owns the session state, the scene graph wrapper, the camera
//! and the output sinks. The host calls [`GameEngine::frame`] once per
//! display refresh; everything else happens inside. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use frontline_core::commands::PlayerCommand;
use frontline_core::constants::*;
use frontline_core::enums::GamePhase;
use frontline_core::events::AudioCue;
use frontline_core::state::GameStateSnapshot;
use frontline_core::types::Camera;

use crate::assets::{AssetLoader, Assets};
use crate::error::EngineError;
use crate::game_state::{FrameEvents, GameState, PlayerLoadout, WaveState};
use crate::input::{normalize_key, InputState, KEY_PAUSE, KEY_RELOAD};
use crate::scene::{NullRenderer, RenderSink, SceneGraph};
use crate::sinks::{AudioSink, DisplaySink, NullAudio, NullDisplay};
use crate::systems;
use crate::world_setup;

/// Configuration for a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// Upper bound on simulated seconds per frame.
    pub max_frame_delta: f32,
    pub loadout: PlayerLoadout,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_frame_delta: MAX_FRAME_DELTA,
            loadout: PlayerLoadout::default(),
        }
    }
}

/// Host-provided collaborators. Anything left out falls back to a no-op.
pub struct Collaborators {
    pub renderer: Box<dyn RenderSink>,
    pub display: Box<dyn DisplaySink>,
    pub audio: Box<dyn AudioSink>,
    /// `None` renders the terrain with the default material.
    pub assets: Option<Box<dyn AssetLoader>>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            renderer: Box::new(NullRenderer),
            display: Box::new(NullDisplay),
            audio: Box::new(NullAudio),
            assets: None,
        }
    }
}

/// The game engine. Owns the session and all collaborators.
pub struct GameEngine {
    config: SimConfig,
    state: GameState,
    scene: SceneGraph,
    camera: Camera,
    input: InputState,
    display: Box<dyn DisplaySink>,
    audio: Box<dyn AudioSink>,
    assets: Option<Box<dyn AssetLoader>>,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    scheduled: bool,
    fps: u32,
}

impl GameEngine {
    pub fn new(config: SimConfig, collaborators: Collaborators) -> Self {
        Self {
            state: GameState::new(&config.loadout),
            scene: SceneGraph::new(collaborators.renderer),
            camera: Camera::default(),
            input: InputState::new(),
            display: collaborators.display,
            audio: collaborators.audio,
            assets: collaborators.assets,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            scheduled: false,
            fps: 0,
            config,
        }
    }

    /// Load assets, build the arena, spawn the player and the first wave.
    ///
    /// On asset failure the player sees an error message and the loop is
    /// never scheduled.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        if self.state.phase != GamePhase::Idle {
            return Err(EngineError::InvalidPhase {
                operation: "initialize",
                phase: self.state.phase,
            });
        }

        let assets = match self.assets.as_mut() {
            Some(loader) => match Assets::load(&mut **loader) {
                Ok(assets) => assets,
                Err(err) => {
                    tracing::error!(error = %err, "initialization failed");
                    self.display.show_error(INIT_FAILURE_MESSAGE);
                    return Err(err.into());
                }
            },
            None => Assets::default(),
        };

        world_setup::build_arena(&mut self.scene, &assets);
        self.camera = Camera {
            position: self.state.player.eye_position(),
            yaw: self.input.yaw(),
            pitch: self.input.pitch(),
        };
        systems::wave_spawner::start_wave(&mut self.state.world, &mut self.scene, 1);
        self.state.wave = WaveState::InProgress(1);
        self.state.phase = GamePhase::Running;
        self.scheduled = true;

        tracing::info!(
            seed = self.config.seed,
            textured = assets.ground_texture.is_some(),
            "game initialized"
        );
        Ok(())
    }

    /// Throw the session away and initialize a fresh one.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        if self.state.phase == GamePhase::Paused {
            self.display.hide_pause_menu();
            self.audio.resume_all();
        }
        systems::cleanup::despawn_all(
            &mut self.state.world,
            &mut self.scene,
            &mut self.despawn_buffer,
        );
        self.scene.clear();
        self.state = GameState::new(&self.config.loadout);
        self.input.release_all();
        self.command_queue.clear();
        self.scheduled = false;
        tracing::info!("restarting game");
        self.initialize()
    }

    /// Running ↔ Paused. Ignored in any other phase.
    pub fn toggle_pause(&mut self) {
        match self.state.phase {
            GamePhase::Running => {
                self.state.phase = GamePhase::Paused;
                self.input.release_all();
                self.display.show_pause_menu();
                self.audio.pause_all();
                tracing::debug!("paused");
            }
            GamePhase::Paused => {
                self.state.phase = GamePhase::Running;
                self.display.hide_pause_menu();
                self.audio.resume_all();
                tracing::debug!("resumed");
            }
            GamePhase::Idle | GamePhase::GameOver => {}
        }
    }

    /// Unschedule the frame loop. The phase is left as it is.
    pub fn stop(&mut self) {
        self.scheduled = false;
    }

    /// Whether the host should keep calling [`frame`](Self::frame).
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Run one frame with the wall-clock delta since the previous one.
    pub fn frame(&mut self, raw_delta_secs: f32) -> GameStateSnapshot {
        self.process_commands();

        // Non-finite or negative deltas simulate nothing.
        let raw = if raw_delta_secs.is_finite() {
            raw_delta_secs.max(0.0)
        } else {
            0.0
        };
        if raw > 0.0 {
            self.fps = (1.0 / raw).round() as u32;
        }
        let dt = raw.min(self.config.max_frame_delta.max(0.0));

        if self.scheduled && self.state.phase == GamePhase::Running {
            self.update(dt);
            self.scene.render(&self.camera);
            let snapshot = systems::snapshot::build_snapshot(&self.state, self.fps);
            self.display.update(&snapshot);
            return snapshot;
        }

        systems::snapshot::build_snapshot(&self.state, self.fps)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Split borrow of the session and the scene for tests that stage entities.
    #[cfg(test)]
    pub(crate) fn parts_mut(&mut self) -> (&mut GameState, &mut SceneGraph) {
        (&mut self.state, &mut self.scene)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::KeyDown { key } => match normalize_key(&key).as_str() {
                KEY_PAUSE => self.toggle_pause(),
                KEY_RELOAD => self.reload(),
                other => {
                    if self.state.phase == GamePhase::Running {
                        self.input.key_down(other);
                    }
                }
            },
            PlayerCommand::KeyUp { key } => {
                self.input.key_up(&key);
            }
            PlayerCommand::MouseMove { dx, dy } => {
                if self.state.phase == GamePhase::Running {
                    self.input.mouse_move(dx, dy);
                }
            }
            PlayerCommand::TogglePause => self.toggle_pause(),
            PlayerCommand::Reload => self.reload(),
            PlayerCommand::Restart => {
                // The display sink has already shown the failure.
                if let Err(err) = self.restart() {
                    tracing::warn!(error = %err, "restart failed");
                }
            }
        }
    }

    fn reload(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.state.player.reload();
        }
    }

    /// One simulation step, systems in order.
    fn update(&mut self, dt: f32) {
        let mut events = FrameEvents::default();
        self.state.time.advance(dt);

        // 1. Player movement and firing
        systems::player::run(
            &mut self.state,
            &mut self.scene,
            &self.input,
            &self.camera,
            dt,
        );
        // 2. Camera follow
        systems::camera::run(&mut self.camera, &self.state.player, &self.input);
        // 3. Enemies (remove dead, track, fire)
        systems::enemy::run(
            &mut self.state.world,
            &mut self.scene,
            &self.state.player,
            &mut events,
            &mut self.despawn_buffer,
            dt,
        );
        // 4. Projectile integration and expiry
        systems::projectiles::run(
            &mut self.state.world,
            &mut self.scene,
            &mut self.despawn_buffer,
            dt,
        );
        // 5. Particle aging
        systems::particles::run(
            &mut self.state.world,
            &mut self.scene,
            &mut self.despawn_buffer,
            dt,
        );
        // 6. Collisions
        systems::collision::run(
            &mut self.state,
            &mut self.scene,
            &mut self.rng,
            &mut events,
            &mut self.despawn_buffer,
            dt,
        );
        // 7. Wave completion
        systems::wave_spawner::run(&mut self.state, &mut self.scene, &mut events);

        self.flush_events(events);

        // 8. Game over
        if !self.state.player.is_alive() {
            self.end_game();
        }
    }

    fn flush_events(&mut self, events: FrameEvents) {
        for cue in events.audio {
            self.audio.play(cue);
        }
        if events.damage_flash {
            self.display.show_damage_flash();
        }
    }

    /// Runs at most once per session.
    fn end_game(&mut self) {
        if self.state.game_over_reported {
            return;
        }
        self.state.game_over_reported = true;
        self.state.phase = GamePhase::GameOver;
        self.scheduled = false;
        self.input.release_all();

        let wave = self.state.wave.number();
        self.display.show_game_over(self.state.score, wave);
        self.audio.play(AudioCue::GameOver);
        tracing::info!(score = self.state.score, wave, "game over");
    }
}
