//! Player commands sent from the host to the engine.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Raw input ---
    /// A key went down. Names are case-insensitive (`"w"`, `" "`, `"mousedown"`).
    KeyDown { key: String },
    /// A key was released.
    KeyUp { key: String },
    /// Relative mouse movement in pixels.
    MouseMove { dx: f32, dy: f32 },

    // --- Session control ---
    /// Pause if running, resume if paused.
    TogglePause,
    /// Refill the player's ammo.
    Reload,
    /// Throw away the session and start over.
    Restart,
}
