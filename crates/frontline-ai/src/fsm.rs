//! Enemy targeting finite state machine.
//!
//! Pure functions that decide where an enemy faces and whether it fires
//! this frame. No ECS dependency; operates on plain data.

use glam::Vec3;

use frontline_core::types::yaw_towards;

/// What an enemy is doing this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyStance {
    /// Player dead or out of range. The enemy only tracks the player.
    Idle,
    /// Player in range, weapon still cycling.
    Engaging,
    /// Player in range and the weapon is ready: a shot goes out this frame.
    Firing,
}

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub position: Vec3,
    pub player_position: Vec3,
    pub player_alive: bool,
    pub attack_range: f32,
    pub attack_cooldown_secs: f32,
    pub cooldown_remaining: f32,
    /// Clamped frame delta in seconds.
    pub dt: f32,
}

/// Output from the enemy FSM.
pub struct EnemyDecision {
    pub stance: EnemyStance,
    /// Yaw that faces the player.
    pub yaw: f32,
    pub cooldown_remaining: f32,
    /// Unit direction of the shot, when firing.
    pub fire_direction: Option<Vec3>,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyDecision {
    let yaw = yaw_towards(ctx.position, ctx.player_position);
    let cooldown = (ctx.cooldown_remaining - ctx.dt).max(0.0);
    let to_player = ctx.player_position - ctx.position;

    if !ctx.player_alive || to_player.length() >= ctx.attack_range {
        return EnemyDecision {
            stance: EnemyStance::Idle,
            yaw,
            cooldown_remaining: cooldown,
            fire_direction: None,
        };
    }

    if cooldown > 0.0 {
        return EnemyDecision {
            stance: EnemyStance::Engaging,
            yaw,
            cooldown_remaining: cooldown,
            fire_direction: None,
        };
    }

    // Player standing inside the enemy: aim straight ahead.
    let direction = to_player.try_normalize().unwrap_or(Vec3::NEG_Z);
    EnemyDecision {
        stance: EnemyStance::Firing,
        yaw,
        cooldown_remaining: ctx.attack_cooldown_secs,
        fire_direction: Some(direction),
    }
}
