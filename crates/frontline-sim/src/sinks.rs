//! One-way output sinks for the HUD overlay and audio.

use frontline_core::events::AudioCue;
use frontline_core::state::GameStateSnapshot;

/// HUD and menu overlay.
pub trait DisplaySink: Send {
    /// Refresh the HUD (health, ammo, score, wave, fps).
    fn update(&mut self, view: &GameStateSnapshot);
    fn show_pause_menu(&mut self);
    fn hide_pause_menu(&mut self);
    fn show_game_over(&mut self, score: u32, wave: u32);
    /// Brief red flash when the player takes damage.
    fn show_damage_flash(&mut self);
    /// User-visible error message.
    fn show_error(&mut self, message: &str);
}

/// Sound playback.
pub trait AudioSink: Send {
    fn play(&mut self, cue: AudioCue);
    fn pause_all(&mut self);
    fn resume_all(&mut self);
}

#[derive(Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn update(&mut self, _view: &GameStateSnapshot) {}
    fn show_pause_menu(&mut self) {}
    fn hide_pause_menu(&mut self) {}
    fn show_game_over(&mut self, _score: u32, _wave: u32) {}
    fn show_damage_flash(&mut self) {}
    fn show_error(&mut self, _message: &str) {}
}

#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
    fn pause_all(&mut self) {}
    fn resume_all(&mut self) {}
}
