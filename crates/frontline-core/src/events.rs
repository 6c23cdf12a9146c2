//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Named sounds the engine asks the audio sink to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudioCue {
    /// A player projectile hit an enemy.
    Hit,
    /// An enemy fired at the player.
    EnemyFire,
    /// The last enemy of a wave died.
    WaveComplete,
    /// The player died.
    GameOver,
}

impl AudioCue {
    /// Sound asset name.
    pub fn name(self) -> &'static str {
        match self {
            AudioCue::Hit => "hit",
            AudioCue::EnemyFire => "enemyFire",
            AudioCue::WaveComplete => "waveComplete",
            AudioCue::GameOver => "gameOver",
        }
    }
}
