//! Keyboard and mouse state.
//!
//! Keys are tracked by lowercase name as the host reports them. The mouse
//! accumulates into a look yaw/pitch that the camera and player read.

use std::collections::HashSet;

use glam::Vec3;

use frontline_core::constants::{MOUSE_SENSITIVITY, PITCH_LIMIT};

pub const KEY_FORWARD: &str = "w";
pub const KEY_BACK: &str = "s";
pub const KEY_LEFT: &str = "a";
pub const KEY_RIGHT: &str = "d";
pub const KEY_JUMP: &str = " ";
/// Primary mouse button, reported as a pseudo-key.
pub const KEY_FIRE: &str = "mousedown";
pub const KEY_PAUSE: &str = "p";
pub const KEY_RELOAD: &str = "r";

/// Lowercase a key name and fold the aliases hosts use for space.
pub fn normalize_key(key: &str) -> String {
    let key = key.to_lowercase();
    match key.as_str() {
        "space" | "spacebar" => KEY_JUMP.to_string(),
        _ => key,
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<String>,
    yaw: f32,
    pitch: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.keys.insert(normalize_key(key));
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.remove(&normalize_key(key));
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.keys.contains(&normalize_key(key))
    }

    /// Apply relative mouse movement in pixels. Moving right turns right,
    /// moving down looks down.
    pub fn mouse_move(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch - dy * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Movement intent in the player's local frame: x is strafe (right
    /// positive), z is forward/back (forward = -Z). Unit length or zero.
    pub fn movement_vector(&self) -> Vec3 {
        let mut v = Vec3::ZERO;
        if self.is_down(KEY_FORWARD) {
            v.z -= 1.0;
        }
        if self.is_down(KEY_BACK) {
            v.z += 1.0;
        }
        if self.is_down(KEY_LEFT) {
            v.x -= 1.0;
        }
        if self.is_down(KEY_RIGHT) {
            v.x += 1.0;
        }
        v.normalize_or_zero()
    }

    /// Release every key. Look angles are kept.
    pub fn release_all(&mut self) {
        self.keys.clear();
    }
}
