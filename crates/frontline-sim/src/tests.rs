//! Tests for the engine, the frame loop, collisions and wave progression.

use std::sync::{Arc, Mutex};

use glam::Vec3;

use frontline_ai::profiles::WaveProfile;
use frontline_core::commands::PlayerCommand;
use frontline_core::components::{Enemy, Particle, Projectile, Transform, Visual};
use frontline_core::constants::*;
use frontline_core::enums::*;
use frontline_core::events::AudioCue;
use frontline_core::state::GameStateSnapshot;
use frontline_core::types::{Camera, NodeId};

use crate::assets::MemoryAssetLoader;
use crate::engine::{Collaborators, GameEngine, SimConfig};
use crate::error::EngineError;
use crate::game_state::WaveState;
use crate::input::InputState;
use crate::scene::RenderSink;
use crate::sinks::{AudioSink, DisplaySink};
use crate::systems::{collision, particles};
use crate::world_setup;

const FRAME: f32 = 1.0 / 60.0;

// ---- Recording sinks ----

#[derive(Default)]
struct Log {
    audio: Vec<AudioCue>,
    audio_paused: bool,
    pause_menu_visible: bool,
    game_over: Vec<(u32, u32)>,
    errors: Vec<String>,
    damage_flashes: u32,
    hud_updates: u32,
    added: Vec<(NodeId, VisualKind)>,
    removed: Vec<NodeId>,
    opacity: Vec<(NodeId, f32)>,
    renders: u32,
    clears: u32,
}

type SharedLog = Arc<Mutex<Log>>;

struct RecordingRenderer(SharedLog);

impl RenderSink for RecordingRenderer {
    fn add_node(&mut self, node: NodeId, kind: VisualKind, _position: Vec3) {
        self.0.lock().unwrap().added.push((node, kind));
    }
    fn remove_node(&mut self, node: NodeId) {
        self.0.lock().unwrap().removed.push(node);
    }
    fn set_transform(&mut self, _node: NodeId, _position: Vec3, _yaw: f32) {}
    fn set_opacity(&mut self, node: NodeId, opacity: f32) {
        self.0.lock().unwrap().opacity.push((node, opacity));
    }
    fn clear(&mut self) {
        self.0.lock().unwrap().clears += 1;
    }
    fn render(&mut self, _camera: &Camera) {
        self.0.lock().unwrap().renders += 1;
    }
}

struct RecordingDisplay(SharedLog);

impl DisplaySink for RecordingDisplay {
    fn update(&mut self, _view: &GameStateSnapshot) {
        self.0.lock().unwrap().hud_updates += 1;
    }
    fn show_pause_menu(&mut self) {
        self.0.lock().unwrap().pause_menu_visible = true;
    }
    fn hide_pause_menu(&mut self) {
        self.0.lock().unwrap().pause_menu_visible = false;
    }
    fn show_game_over(&mut self, score: u32, wave: u32) {
        self.0.lock().unwrap().game_over.push((score, wave));
    }
    fn show_damage_flash(&mut self) {
        self.0.lock().unwrap().damage_flashes += 1;
    }
    fn show_error(&mut self, message: &str) {
        self.0.lock().unwrap().errors.push(message.to_string());
    }
}

struct RecordingAudio(SharedLog);

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.0.lock().unwrap().audio.push(cue);
    }
    fn pause_all(&mut self) {
        self.0.lock().unwrap().audio_paused = true;
    }
    fn resume_all(&mut self) {
        self.0.lock().unwrap().audio_paused = false;
    }
}

fn recording_collaborators(log: &SharedLog, loader: Option<MemoryAssetLoader>) -> Collaborators {
    Collaborators {
        renderer: Box::new(RecordingRenderer(log.clone())),
        display: Box::new(RecordingDisplay(log.clone())),
        audio: Box::new(RecordingAudio(log.clone())),
        assets: loader.map(|l| Box::new(l) as Box<dyn crate::assets::AssetLoader>),
    }
}

fn make_engine(seed: u64) -> (GameEngine, SharedLog) {
    let log = SharedLog::default();
    let engine = GameEngine::new(
        SimConfig {
            seed,
            ..Default::default()
        },
        recording_collaborators(&log, Some(MemoryAssetLoader::with_game_assets())),
    );
    (engine, log)
}

fn started_engine(seed: u64) -> (GameEngine, SharedLog) {
    let (mut engine, log) = make_engine(seed);
    engine.initialize().unwrap();
    (engine, log)
}

fn count<C: hecs::Component>(engine: &GameEngine) -> usize {
    engine.state().world.query::<&C>().iter().count()
}

/// Move every wave enemy far away and silence it so staged tests are isolated.
fn park_wave_enemies(engine: &mut GameEngine) {
    let (state, _scene) = engine.parts_mut();
    for (_e, (transform, enemy)) in state.world.query_mut::<(&mut Transform, &mut Enemy)>() {
        transform.position = Vec3::new(transform.position.x * 2.5, 0.0, transform.position.z * 2.5);
        enemy.cooldown_remaining = 1000.0;
    }
}

// ---- Lifecycle ----

#[test]
fn test_new_engine_is_idle_and_unscheduled() {
    let (engine, _log) = make_engine(1);
    assert_eq!(engine.phase(), GamePhase::Idle);
    assert!(!engine.is_scheduled());
}

#[test]
fn test_initialize_builds_arena_and_first_wave() {
    let (engine, log) = started_engine(1);
    assert_eq!(engine.phase(), GamePhase::Running);
    assert!(engine.is_scheduled());
    assert_eq!(engine.state().wave, WaveState::InProgress(1));
    assert_eq!(engine.state().score, 0);
    assert_eq!(count::<Enemy>(&engine), 5);
    assert_eq!(engine.state().player.position, Vec3::from_array(PLAYER_START));

    let log = log.lock().unwrap();
    let kinds: Vec<VisualKind> = log.added.iter().map(|(_, k)| *k).collect();
    assert_eq!(kinds.iter().filter(|k| **k == VisualKind::Skybox).count(), 1);
    assert_eq!(kinds.iter().filter(|k| **k == VisualKind::Wall).count(), 4);
    assert!(kinds
        .iter()
        .any(|k| matches!(k, VisualKind::Terrain { texture: Some(_) })));
    assert_eq!(kinds.iter().filter(|k| **k == VisualKind::Enemy).count(), 5);
}

#[test]
fn test_initialize_twice_is_rejected() {
    let (mut engine, _log) = started_engine(1);
    let err = engine.initialize().unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidPhase {
            phase: GamePhase::Running,
            ..
        }
    ));
}

#[test]
fn test_asset_failure_shows_error_and_never_starts() {
    let log = SharedLog::default();
    let mut engine = GameEngine::new(
        SimConfig::default(),
        recording_collaborators(&log, Some(MemoryAssetLoader::new())),
    );

    let err = engine.initialize().unwrap_err();
    assert!(matches!(err, EngineError::AssetLoad(_)));
    assert_eq!(engine.phase(), GamePhase::Idle);
    assert!(!engine.is_scheduled());

    let snap = engine.frame(FRAME);
    assert_eq!(snap.time.frame, 0);

    let log = log.lock().unwrap();
    assert_eq!(log.errors, vec![INIT_FAILURE_MESSAGE.to_string()]);
    assert!(log.added.is_empty());
    assert_eq!(log.renders, 0);
}

#[test]
fn test_missing_loader_uses_default_terrain() {
    let log = SharedLog::default();
    let mut engine = GameEngine::new(SimConfig::default(), recording_collaborators(&log, None));
    engine.initialize().unwrap();

    let log = log.lock().unwrap();
    assert!(log
        .added
        .iter()
        .any(|(_, k)| *k == VisualKind::Terrain { texture: None }));
}

#[test]
fn test_restart_resets_session() {
    let (mut engine, log) = started_engine(3);
    {
        let (state, _) = engine.parts_mut();
        state.score = 1234;
        state.player.health = 10.0;
        state.player.ammo = 3;
    }
    engine.queue_command(PlayerCommand::KeyDown {
        key: "mousedown".into(),
    });
    engine.frame(FRAME);
    assert!(count::<Projectile>(&engine) > 0);

    engine.queue_command(PlayerCommand::Restart);
    let snap = engine.frame(FRAME);

    assert_eq!(engine.phase(), GamePhase::Running);
    assert_eq!(engine.state().wave, WaveState::InProgress(1));
    assert_eq!(engine.state().player.health, PLAYER_MAX_HEALTH);
    assert_eq!(engine.state().player.ammo, PLAYER_MAX_AMMO);
    assert!(!engine.input().is_down("mousedown"));
    assert_eq!(snap.score, 0);
    assert_eq!(count::<Enemy>(&engine), 5);
    // Only shots from the fresh wave remain.
    let player_shots = engine
        .state()
        .world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.origin == ProjectileOrigin::Player)
        .count();
    assert_eq!(player_shots, 0);
    // Skybox, terrain and four walls, plus one node per entity.
    assert_eq!(
        engine.scene().live_count(),
        6 + count::<Enemy>(&engine) + count::<Projectile>(&engine)
    );
    assert_eq!(log.lock().unwrap().clears, 1);
}

// ---- Frame loop ----

#[test]
fn test_frame_delta_is_clamped() {
    let (mut engine, _log) = started_engine(1);
    let snap = engine.frame(1.0);
    assert_eq!(snap.time.frame, 1);
    assert!((snap.time.elapsed_secs - MAX_FRAME_DELTA as f64).abs() < 1e-6);
    assert_eq!(snap.fps, 1);

    let snap = engine.frame(0.010);
    assert!((snap.time.elapsed_secs - (MAX_FRAME_DELTA as f64 + 0.010)).abs() < 1e-6);
    assert_eq!(snap.fps, 100);
}

#[test]
fn test_non_finite_delta_simulates_nothing() {
    let (mut engine, _log) = started_engine(1);
    park_wave_enemies(&mut engine);
    let bullet = {
        let (state, scene) = engine.parts_mut();
        let bullet = world_setup::spawn_projectile(
            &mut state.world,
            scene,
            ProjectileOrigin::Player,
            Vec3::new(0.0, 100.0, 0.0),
            Vec3::Y,
            PLAYER_PROJECTILE_DAMAGE,
        );
        state.world.get::<&mut Projectile>(bullet).unwrap().lifetime = 0.05;
        bullet
    };

    for raw in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -1.0] {
        let snap = engine.frame(raw);
        assert_eq!(snap.time.elapsed_secs, 0.0);
    }
    let lifetime = engine.state().world.get::<&Projectile>(bullet).unwrap().lifetime;
    assert_eq!(lifetime, 0.05);

    for _ in 0..5 {
        engine.frame(FRAME);
    }
    assert!(engine.state().time.elapsed_secs.is_finite());
    assert!(!engine.state().world.contains(bullet));
}

#[test]
fn test_negative_max_frame_delta_freezes_time() {
    let mut engine = GameEngine::new(
        SimConfig {
            max_frame_delta: -0.01,
            ..Default::default()
        },
        Collaborators::default(),
    );
    engine.initialize().unwrap();
    let snap = engine.frame(FRAME);
    assert_eq!(snap.time.frame, 1);
    assert_eq!(snap.time.elapsed_secs, 0.0);
}

#[test]
fn test_running_frame_renders_and_updates_hud() {
    let (mut engine, log) = started_engine(1);
    for _ in 0..5 {
        engine.frame(FRAME);
    }
    let log = log.lock().unwrap();
    assert_eq!(log.renders, 5);
    assert_eq!(log.hud_updates, 5);
}

#[test]
fn test_determinism_same_seed() {
    let (mut a, _) = started_engine(12345);
    let (mut b, _) = started_engine(12345);
    let inputs = [
        PlayerCommand::KeyDown {
            key: "mousedown".into(),
        },
        PlayerCommand::MouseMove { dx: 40.0, dy: 0.0 },
        PlayerCommand::KeyDown { key: "w".into() },
    ];
    a.queue_commands(inputs.clone());
    b.queue_commands(inputs);

    for _ in 0..600 {
        let snap_a = a.frame(FRAME);
        let snap_b = b.frame(FRAME);
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_pause_skips_update_but_stays_scheduled() {
    let (mut engine, log) = started_engine(1);
    engine.frame(FRAME);

    engine.queue_command(PlayerCommand::KeyDown { key: "P".into() });
    let before = engine.frame(FRAME);
    assert_eq!(engine.phase(), GamePhase::Paused);
    assert!(engine.is_scheduled());
    {
        let log = log.lock().unwrap();
        assert!(log.pause_menu_visible);
        assert!(log.audio_paused);
    }

    for _ in 0..30 {
        let snap = engine.frame(FRAME);
        assert_eq!(snap.time.frame, before.time.frame);
    }
    assert_eq!(log.lock().unwrap().renders, 1);

    engine.queue_command(PlayerCommand::TogglePause);
    let snap = engine.frame(FRAME);
    assert_eq!(engine.phase(), GamePhase::Running);
    assert_eq!(snap.time.frame, before.time.frame + 1);
    let log = log.lock().unwrap();
    assert!(!log.pause_menu_visible);
    assert!(!log.audio_paused);
}

#[test]
fn test_stop_unschedules_without_changing_phase() {
    let (mut engine, _log) = started_engine(1);
    engine.stop();
    assert!(!engine.is_scheduled());
    assert_eq!(engine.phase(), GamePhase::Running);
    let snap = engine.frame(FRAME);
    assert_eq!(snap.time.frame, 0);
}

// ---- Player ----

#[test]
fn test_forward_key_moves_toward_negative_z() {
    let (mut engine, _log) = started_engine(1);
    park_wave_enemies(&mut engine);
    engine.queue_command(PlayerCommand::KeyDown { key: "w".into() });
    for _ in 0..60 {
        engine.frame(FRAME);
    }
    let pos = engine.state().player.position;
    assert!((pos.z - (PLAYER_START[2] - PLAYER_SPEED)).abs() < 1e-3, "z = {}", pos.z);
    assert!(pos.x.abs() < 1e-4);

    engine.queue_command(PlayerCommand::KeyUp { key: "w".into() });
    engine.frame(FRAME);
    let still = engine.state().player.position;
    engine.frame(FRAME);
    assert_eq!(engine.state().player.position, still);
}

#[test]
fn test_movement_follows_look_yaw() {
    let (mut engine, _log) = started_engine(1);
    park_wave_enemies(&mut engine);
    // Turn a quarter left: forward becomes -X.
    let dx = -(std::f32::consts::FRAC_PI_2 / MOUSE_SENSITIVITY);
    engine.queue_command(PlayerCommand::MouseMove { dx, dy: 0.0 });
    engine.queue_command(PlayerCommand::KeyDown { key: "w".into() });
    for _ in 0..30 {
        engine.frame(FRAME);
    }
    let pos = engine.state().player.position;
    assert!((pos.x + PLAYER_SPEED * 0.5).abs() < 1e-2, "x = {}", pos.x);
    assert!((pos.z - PLAYER_START[2]).abs() < 1e-2);
}

#[test]
fn test_position_clamped_to_arena() {
    let (mut engine, _log) = started_engine(1);
    park_wave_enemies(&mut engine);
    engine.parts_mut().0.player.position.x = PLAYER_BOUND - 0.05;
    engine.queue_command(PlayerCommand::KeyDown { key: "d".into() });
    for _ in 0..30 {
        engine.frame(FRAME);
    }
    assert_eq!(engine.state().player.position.x, PLAYER_BOUND);
}

#[test]
fn test_jump_and_land() {
    let (mut engine, _log) = started_engine(1);
    park_wave_enemies(&mut engine);
    engine.queue_command(PlayerCommand::KeyDown { key: " ".into() });
    engine.frame(FRAME);
    engine.queue_command(PlayerCommand::KeyUp { key: " ".into() });
    assert!(engine.state().player.position.y > 0.0);
    assert!(!engine.state().player.grounded);

    let mut peak: f32 = 0.0;
    for _ in 0..120 {
        engine.frame(FRAME);
        peak = peak.max(engine.state().player.position.y);
    }
    let expected_peak = PLAYER_JUMP_SPEED * PLAYER_JUMP_SPEED / (2.0 * PLAYER_GRAVITY);
    assert!((peak - expected_peak).abs() < 0.2, "peak = {peak}");
    assert_eq!(engine.state().player.position.y, 0.0);
    assert!(engine.state().player.grounded);
}

#[test]
fn test_mouse_look_clamps_pitch() {
    let mut input = InputState::new();
    input.mouse_move(100.0, 0.0);
    assert!((input.yaw() + 0.2).abs() < 1e-6);
    input.mouse_move(0.0, -10_000.0);
    assert_eq!(input.pitch(), PITCH_LIMIT);
    input.mouse_move(0.0, 20_000.0);
    assert_eq!(input.pitch(), -PITCH_LIMIT);
}

#[test]
fn test_fire_spawns_projectile_and_respects_cooldown() {
    let (mut engine, _log) = started_engine(1);
    park_wave_enemies(&mut engine);
    engine.queue_command(PlayerCommand::KeyDown {
        key: "mousedown".into(),
    });
    engine.frame(FRAME);
    assert_eq!(engine.state().player.ammo, PLAYER_MAX_AMMO - 1);
    assert_eq!(count::<Projectile>(&engine), 1);

    // Cooldown 0.1 s: no second shot on the next frame.
    engine.frame(FRAME);
    assert_eq!(engine.state().player.ammo, PLAYER_MAX_AMMO - 1);

    // One second of held fire at 60 Hz yields roughly ten shots.
    for _ in 0..60 {
        engine.frame(FRAME);
    }
    let fired = PLAYER_MAX_AMMO - engine.state().player.ammo;
    assert!((9..=11).contains(&fired), "fired {fired}");
}

#[test]
fn test_fire_rejected_without_ammo() {
    let (mut engine, _log) = started_engine(1);
    park_wave_enemies(&mut engine);
    engine.parts_mut().0.player.ammo = 0;
    engine.queue_command(PlayerCommand::KeyDown {
        key: "mousedown".into(),
    });
    for _ in 0..30 {
        engine.frame(FRAME);
    }
    assert_eq!(engine.state().player.ammo, 0);
    assert_eq!(count::<Projectile>(&engine), 0);

    engine.queue_command(PlayerCommand::KeyDown { key: "r".into() });
    engine.frame(FRAME);
    assert_eq!(count::<Projectile>(&engine), 1);
    assert_eq!(engine.state().player.ammo, PLAYER_MAX_AMMO - 1);
}

#[test]
fn test_heal_clamps_to_max() {
    let (mut engine, _log) = started_engine(1);
    let (state, _) = engine.parts_mut();
    let player = &mut state.player;
    player.take_damage(30.0);
    player.heal(10.0);
    assert_eq!(player.health, PLAYER_MAX_HEALTH - 20.0);
    player.heal(500.0);
    assert_eq!(player.health, PLAYER_MAX_HEALTH);
    player.take_damage(500.0);
    assert_eq!(player.health, 0.0);
}

// ---- Projectiles ----

#[test]
fn test_expired_and_escaped_projectiles_removed() {
    let (mut engine, log) = started_engine(1);
    park_wave_enemies(&mut engine);
    let (expiring, escaping, flying) = {
        let (state, scene) = engine.parts_mut();
        let a = world_setup::spawn_projectile(
            &mut state.world,
            scene,
            ProjectileOrigin::Player,
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::Y,
            20.0,
        );
        state.world.get::<&mut Projectile>(a).unwrap().lifetime = 0.001;
        let b = world_setup::spawn_projectile(
            &mut state.world,
            scene,
            ProjectileOrigin::Player,
            Vec3::new(0.0, 0.0, -PROJECTILE_MAX_DISTANCE + 0.1),
            Vec3::NEG_Z,
            20.0,
        );
        let c = world_setup::spawn_projectile(
            &mut state.world,
            scene,
            ProjectileOrigin::Player,
            Vec3::new(0.0, 20.0, 0.0),
            Vec3::Y,
            20.0,
        );
        (a, b, c)
    };
    let nodes: Vec<NodeId> = [expiring, escaping]
        .iter()
        .map(|e| engine.state().world.get::<&Visual>(*e).unwrap().node)
        .collect();

    engine.frame(FRAME);

    let world = &engine.state().world;
    assert!(!world.contains(expiring));
    assert!(!world.contains(escaping));
    assert!(world.contains(flying));
    let p = world.get::<&Transform>(flying).unwrap().position;
    assert!((p.y - (20.0 + PLAYER_PROJECTILE_SPEED * FRAME)).abs() < 1e-4);

    for node in nodes {
        assert!(!engine.scene().is_live(node));
        assert!(log.lock().unwrap().removed.contains(&node));
    }
}

#[test]
fn test_every_entity_has_live_node() {
    let (mut engine, _log) = started_engine(9);
    engine.queue_commands([
        PlayerCommand::KeyDown {
            key: "mousedown".into(),
        },
        PlayerCommand::MouseMove { dx: -300.0, dy: 20.0 },
    ]);
    for _ in 0..400 {
        engine.frame(FRAME);
        for (_e, visual) in engine.state().world.query::<&Visual>().iter() {
            assert!(engine.scene().is_live(visual.node));
        }
    }
}

// ---- Collisions ----

#[test]
fn test_collision_threshold_is_twice_radius() {
    assert!(collision::collides(Vec3::ZERO, Vec3::new(3.99, 0.0, 0.0), 2.0));
    assert!(!collision::collides(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), 2.0));
}

#[test]
fn test_projectile_hit_damages_enemy_and_scores() {
    let (mut engine, log) = started_engine(1);
    park_wave_enemies(&mut engine);
    let target_pos = Vec3::new(0.0, 0.0, 20.0);
    let (target, bullet) = {
        let (state, scene) = engine.parts_mut();
        let profile = WaveProfile::for_wave(1);
        let target = world_setup::spawn_enemy(&mut state.world, scene, &profile, target_pos);
        state.world.get::<&mut Enemy>(target).unwrap().cooldown_remaining = 1000.0;
        let bullet = world_setup::spawn_projectile(
            &mut state.world,
            scene,
            ProjectileOrigin::Player,
            target_pos + Vec3::new(0.0, 0.0, 1.0),
            Vec3::NEG_Z,
            PLAYER_PROJECTILE_DAMAGE,
        );
        (target, bullet)
    };
    let particles_before = count::<Particle>(&engine);

    engine.frame(FRAME);

    let health = engine.state().world.get::<&Enemy>(target).unwrap().health;
    assert_eq!(health, WaveProfile::for_wave(1).health - PLAYER_PROJECTILE_DAMAGE);
    assert_eq!(engine.state().score, HIT_SCORE);
    assert!(!engine.state().world.contains(bullet));
    assert_eq!(
        count::<Particle>(&engine),
        particles_before + IMPACT_PARTICLE_COUNT as usize
    );
    assert!(log.lock().unwrap().audio.contains(&AudioCue::Hit));
}

#[test]
fn test_snapshot_skips_enemies_killed_this_frame() {
    let (mut engine, _log) = started_engine(1);
    park_wave_enemies(&mut engine);
    let target_pos = Vec3::new(0.0, 0.0, 20.0);
    let target = {
        let (state, scene) = engine.parts_mut();
        let profile = WaveProfile::for_wave(1);
        let target = world_setup::spawn_enemy(&mut state.world, scene, &profile, target_pos);
        state.world.get::<&mut Enemy>(target).unwrap().cooldown_remaining = 1000.0;
        world_setup::spawn_projectile(
            &mut state.world,
            scene,
            ProjectileOrigin::Player,
            target_pos + Vec3::new(0.0, 0.0, 1.0),
            Vec3::NEG_Z,
            1000.0,
        );
        target
    };
    let wave_size = WaveProfile::for_wave(1).enemy_count;

    let snap = engine.frame(FRAME);

    // Still in the world until the next enemy pass, but not on the HUD.
    assert!(engine.state().world.contains(target));
    assert_eq!(count::<Enemy>(&engine), wave_size as usize + 1);
    assert_eq!(snap.enemies, wave_size);

    engine.frame(FRAME);
    assert!(!engine.state().world.contains(target));
}

#[test]
fn test_projectile_hits_only_first_enemy() {
    let (mut engine, _log) = started_engine(1);
    park_wave_enemies(&mut engine);
    let pos = Vec3::new(0.0, 0.0, 20.0);
    let (first, second) = {
        let (state, scene) = engine.parts_mut();
        let profile = WaveProfile::for_wave(1);
        let a = world_setup::spawn_enemy(&mut state.world, scene, &profile, pos);
        let b = world_setup::spawn_enemy(&mut state.world, scene, &profile, pos);
        for e in [a, b] {
            state.world.get::<&mut Enemy>(e).unwrap().cooldown_remaining = 1000.0;
        }
        world_setup::spawn_projectile(
            &mut state.world,
            scene,
            ProjectileOrigin::Player,
            pos,
            Vec3::NEG_Z,
            PLAYER_PROJECTILE_DAMAGE,
        );
        (a, b)
    };

    engine.frame(FRAME);

    let full = WaveProfile::for_wave(1).health;
    let world = &engine.state().world;
    let healths = [
        world.get::<&Enemy>(first).unwrap().health,
        world.get::<&Enemy>(second).unwrap().health,
    ];
    assert_eq!(healths.iter().filter(|h| **h < full).count(), 1);
    assert_eq!(engine.state().score, HIT_SCORE);
}

#[test]
fn test_enemy_projectile_damages_player_once() {
    let (mut engine, log) = started_engine(1);
    park_wave_enemies(&mut engine);
    let bullet = {
        let (state, scene) = engine.parts_mut();
        let at = state.player.position;
        world_setup::spawn_projectile(
            &mut state.world,
            scene,
            ProjectileOrigin::Enemy,
            at,
            Vec3::X,
            12.0,
        )
    };

    engine.frame(FRAME);
    engine.frame(FRAME);

    assert!(!engine.state().world.contains(bullet));
    assert_eq!(engine.state().player.health, PLAYER_MAX_HEALTH - 12.0);
    assert_eq!(log.lock().unwrap().damage_flashes, 1);
}

#[test]
fn test_enemy_projectiles_ignore_enemies() {
    let (mut engine, _log) = started_engine(1);
    park_wave_enemies(&mut engine);
    let pos = Vec3::new(0.0, 0.0, 10.0);
    let (target, bullet) = {
        let (state, scene) = engine.parts_mut();
        let profile = WaveProfile::for_wave(1);
        let target = world_setup::spawn_enemy(&mut state.world, scene, &profile, pos);
        state.world.get::<&mut Enemy>(target).unwrap().cooldown_remaining = 1000.0;
        let bullet = world_setup::spawn_projectile(
            &mut state.world,
            scene,
            ProjectileOrigin::Enemy,
            pos,
            Vec3::X,
            12.0,
        );
        (target, bullet)
    };

    engine.frame(FRAME);

    let world = &engine.state().world;
    assert!(world.contains(bullet));
    assert_eq!(world.get::<&Enemy>(target).unwrap().health, WaveProfile::for_wave(1).health);
    assert_eq!(engine.state().score, 0);
}

#[test]
fn test_contact_damage_scales_with_delta_time() {
    let (mut engine, log) = started_engine(1);
    park_wave_enemies(&mut engine);
    {
        let (state, scene) = engine.parts_mut();
        let at = state.player.position + Vec3::new(1.0, 0.0, 0.0);
        let profile = WaveProfile::for_wave(1);
        let e = world_setup::spawn_enemy(&mut state.world, scene, &profile, at);
        state.world.get::<&mut Enemy>(e).unwrap().cooldown_remaining = 1000.0;
    }

    engine.frame(0.020);

    let expected = PLAYER_MAX_HEALTH - WaveProfile::for_wave(1).damage * 0.020;
    assert!((engine.state().player.health - expected).abs() < 1e-4);
    assert_eq!(log.lock().unwrap().damage_flashes, 1);
}

#[test]
fn test_enemy_fires_within_range() {
    let (mut engine, log) = started_engine(1);
    park_wave_enemies(&mut engine);
    {
        let (state, scene) = engine.parts_mut();
        let at = state.player.position + Vec3::new(0.0, 0.0, -50.0);
        world_setup::spawn_enemy(&mut state.world, scene, &WaveProfile::for_wave(1), at);
    }

    engine.frame(FRAME);
    let enemy_shots = engine
        .state()
        .world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.origin == ProjectileOrigin::Enemy)
        .count();
    assert_eq!(enemy_shots, 1);
    assert_eq!(log.lock().unwrap().audio, vec![AudioCue::EnemyFire]);

    // Cooldown holds the next shot for two seconds.
    for _ in 0..60 {
        engine.frame(FRAME);
    }
    let fires = log
        .lock()
        .unwrap()
        .audio
        .iter()
        .filter(|c| **c == AudioCue::EnemyFire)
        .count();
    assert_eq!(fires, 1);
}

// ---- Waves ----

#[test]
fn test_wave_clear_starts_next_wave_with_bonus() {
    let (mut engine, log) = started_engine(1);
    {
        let (state, _) = engine.parts_mut();
        for (_e, enemy) in state.world.query_mut::<&mut Enemy>() {
            enemy.health = 0.0;
        }
        state.score = 70;
    }

    let snap = engine.frame(FRAME);

    assert_eq!(engine.state().wave, WaveState::InProgress(2));
    assert_eq!(snap.score, 70 + WAVE_CLEAR_BONUS);
    assert_eq!(snap.wave, 2);
    assert_eq!(count::<Enemy>(&engine), 7);

    let profile = WaveProfile::for_wave(2);
    for (_e, (transform, enemy)) in engine.state().world.query::<(&Transform, &Enemy)>().iter() {
        assert_eq!(enemy.health, profile.health);
        assert_eq!(enemy.damage, profile.damage);
        assert!((enemy.speed - profile.speed).abs() < 1e-6);
        assert!((transform.position.length() - WAVE_SPAWN_RADIUS).abs() < 1e-3);
        assert_eq!(transform.position.y, 0.0);
    }
    assert!(log.lock().unwrap().audio.contains(&AudioCue::WaveComplete));
}

#[test]
fn test_wave_not_advanced_while_enemies_remain() {
    let (mut engine, _log) = started_engine(1);
    {
        let (state, _) = engine.parts_mut();
        let mut first = true;
        for (_e, enemy) in state.world.query_mut::<&mut Enemy>() {
            if !first {
                enemy.health = 0.0;
            }
            first = false;
        }
    }
    engine.frame(FRAME);
    assert_eq!(engine.state().wave, WaveState::InProgress(1));
    assert_eq!(count::<Enemy>(&engine), 1);
    assert_eq!(engine.state().score, 0);
}

// ---- Particles ----

#[test]
fn test_particles_fade_and_expire() {
    let (mut engine, log) = started_engine(1);
    park_wave_enemies(&mut engine);
    {
        let (state, scene) = engine.parts_mut();
        let mut rng = <rand_chacha::ChaCha8Rng as rand::SeedableRng>::seed_from_u64(7);
        particles::spawn_impact(&mut state.world, scene, &mut rng, Vec3::new(0.0, 5.0, 0.0));
    }
    assert_eq!(count::<Particle>(&engine), IMPACT_PARTICLE_COUNT as usize);
    for (_e, p) in engine.state().world.query::<&Particle>().iter() {
        assert!(p.velocity.y >= 0.0 && p.velocity.y < IMPACT_LIFT);
        assert!(p.velocity.x.abs() <= IMPACT_SPREAD / 2.0);
    }

    engine.frame(0.1);
    {
        let log = log.lock().unwrap();
        // Clamped to one 30 ms step.
        let (_, alpha) = *log.opacity.last().unwrap();
        let expected = (IMPACT_PARTICLE_LIFETIME - MAX_FRAME_DELTA) / IMPACT_PARTICLE_LIFETIME;
        assert!((alpha - expected).abs() < 1e-4, "alpha = {alpha}");
    }

    for _ in 0..20 {
        engine.frame(0.03);
    }
    assert_eq!(count::<Particle>(&engine), 0);
}

// ---- Game over ----

#[test]
fn test_game_over_happens_once() {
    let (mut engine, log) = started_engine(1);
    park_wave_enemies(&mut engine);
    {
        let (state, scene) = engine.parts_mut();
        state.player.health = 1.0;
        state.score = 40;
        let at = state.player.position;
        world_setup::spawn_projectile(&mut state.world, scene, ProjectileOrigin::Enemy, at, Vec3::X, 12.0);
        world_setup::spawn_projectile(&mut state.world, scene, ProjectileOrigin::Enemy, at, Vec3::Z, 12.0);
    }

    let snap = engine.frame(FRAME);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.health, 0.0);
    assert!(!engine.is_scheduled());

    for _ in 0..10 {
        engine.frame(FRAME);
    }
    engine.toggle_pause();
    assert_eq!(engine.phase(), GamePhase::GameOver);

    let log = log.lock().unwrap();
    assert_eq!(log.game_over, vec![(40, 1)]);
    assert_eq!(
        log.audio.iter().filter(|c| **c == AudioCue::GameOver).count(),
        1
    );
}
