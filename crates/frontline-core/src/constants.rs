//! Simulation constants and tuning parameters.
//!
//! Distances are in world units, times in seconds, speeds in units per
//! second. Speeds tuned per frame were converted at a 60 FPS reference
//! rate.

// --- Frame loop ---

/// Upper bound on the simulated time consumed by a single frame (30 ms).
/// Larger wall-clock gaps (tab stalls, debugger pauses) are truncated.
pub const MAX_FRAME_DELTA: f32 = 0.030;

/// Nominal display refresh rate used by the host loop (Hz).
pub const DISPLAY_REFRESH_HZ: u32 = 60;

// --- World bounds ---

/// Player x/z position is clamped to ±this value.
pub const PLAYER_BOUND: f32 = 240.0;

/// Half-extent of the walled arena.
pub const ARENA_HALF_EXTENT: f32 = 250.0;

/// Height of the boundary walls.
pub const WALL_HEIGHT: f32 = 50.0;

/// Side length of the ground plane.
pub const TERRAIN_SIZE: f32 = 500.0;

/// Radius of the skybox sphere.
pub const SKYBOX_RADIUS: f32 = 450.0;

/// Projectiles farther than this from the origin are removed.
pub const PROJECTILE_MAX_DISTANCE: f32 = 300.0;

// --- Camera / look ---

/// Eye height above the player's feet.
pub const EYE_HEIGHT: f32 = 1.6;

/// Fraction of the remaining distance the camera closes each frame.
pub const CAMERA_FOLLOW_LERP: f32 = 0.1;

/// Look rotation in radians per pixel of mouse movement.
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// Vertical look is clamped to ±this angle.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;

// --- Player ---

/// Spawn position of the player.
pub const PLAYER_START: [f32; 3] = [0.0, 0.0, 50.0];

pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_MAX_AMMO: u32 = 120;

/// Horizontal movement speed.
pub const PLAYER_SPEED: f32 = 6.0;

/// Initial upward speed of a jump.
pub const PLAYER_JUMP_SPEED: f32 = 9.0;

/// Downward acceleration applied while airborne.
pub const PLAYER_GRAVITY: f32 = 36.0;

/// Minimum game time between two player shots.
pub const PLAYER_FIRE_INTERVAL: f32 = 0.1;

/// Damage carried by a player projectile.
pub const PLAYER_PROJECTILE_DAMAGE: f32 = 20.0;

/// Distance in front of the eye at which player projectiles spawn.
pub const MUZZLE_OFFSET: f32 = 2.0;

// --- Projectiles ---

pub const PLAYER_PROJECTILE_SPEED: f32 = 30.0;
pub const ENEMY_PROJECTILE_SPEED: f32 = 18.0;

/// Seconds a projectile survives before expiring.
pub const PROJECTILE_LIFETIME: f32 = 10.0;

// --- Enemies ---

/// Enemies only fire at a player closer than this.
pub const ENEMY_ATTACK_RANGE: f32 = 100.0;

/// Seconds between two shots of the same enemy.
pub const ENEMY_ATTACK_COOLDOWN: f32 = 2.0;

// --- Collision ---

/// Radius used for projectile hits (both projectile/enemy and projectile/player).
pub const PROJECTILE_HIT_RADIUS: f32 = 2.0;

/// Radius used for enemy/player contact.
pub const CONTACT_RADIUS: f32 = 3.0;

/// Collision threshold = radius * this scale.
pub const COLLISION_RADIUS_SCALE: f32 = 2.0;

// --- Scoring ---

/// Score awarded per projectile hit on an enemy.
pub const HIT_SCORE: u32 = 10;

/// Score awarded when a wave is cleared.
pub const WAVE_CLEAR_BONUS: u32 = 500;

// --- Wave spawning ---

pub const WAVE_BASE_ENEMIES: u32 = 3;
pub const WAVE_ENEMIES_PER_LEVEL: u32 = 2;

/// Enemies spawn evenly on a circle of this radius around the origin.
pub const WAVE_SPAWN_RADIUS: f32 = 80.0;

pub const ENEMY_BASE_HEALTH: f32 = 30.0;
pub const ENEMY_HEALTH_PER_WAVE: f32 = 5.0;
pub const ENEMY_BASE_SPEED: f32 = 0.03;
pub const ENEMY_SPEED_PER_WAVE: f32 = 0.01;
pub const ENEMY_BASE_DAMAGE: f32 = 10.0;
pub const ENEMY_DAMAGE_PER_WAVE: f32 = 2.0;

// --- Effects ---

pub const IMPACT_PARTICLE_COUNT: u32 = 5;
pub const IMPACT_PARTICLE_LIFETIME: f32 = 0.5;
pub const IMPACT_PARTICLE_COLOR: u32 = 0xffaa00;

/// Horizontal velocity spread of impact particles.
pub const IMPACT_SPREAD: f32 = 0.5;

/// Maximum upward velocity of impact particles.
pub const IMPACT_LIFT: f32 = 0.3;

// --- Assets ---

pub const GROUND_TEXTURE_PATH: &str = "assets/textures/ground.jpg";

/// Shown to the player when initialization fails.
pub const INIT_FAILURE_MESSAGE: &str = "Failed to initialize game. Please refresh.";
