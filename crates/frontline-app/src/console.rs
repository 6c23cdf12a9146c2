//! Console implementations of the display and audio sinks.
//!
//! The HUD is either logged through `tracing` or written as JSON lines, one
//! object per event, for piping into other tools.

use std::io::{self, Write};

use serde::Serialize;

use frontline_core::events::AudioCue;
use frontline_core::state::GameStateSnapshot;
use frontline_sim::sinks::{AudioSink, DisplaySink};

/// HUD refreshes are reported once per this many frames.
pub const HUD_REPORT_INTERVAL: u32 = 60;

/// One line of `--json` output.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ConsoleEvent<'a> {
    Hud {
        #[serde(rename = "displayHealth")]
        display_health: u32,
        #[serde(flatten)]
        snapshot: &'a GameStateSnapshot,
    },
    PauseMenu {
        visible: bool,
    },
    GameOver {
        score: u32,
        wave: u32,
    },
    DamageFlash,
    Error {
        message: &'a str,
    },
}

/// Display sink that prints to a writer (stdout in the binary).
pub struct ConsoleDisplay<W: Write + Send> {
    out: W,
    json: bool,
    hud_interval: u32,
    updates: u32,
}

impl ConsoleDisplay<io::Stdout> {
    pub fn stdout(json: bool) -> Self {
        Self::new(io::stdout(), json)
    }
}

impl<W: Write + Send> ConsoleDisplay<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            hud_interval: HUD_REPORT_INTERVAL,
            updates: 0,
        }
    }

    /// Report every `n`th HUD refresh (at least every one).
    pub fn with_hud_interval(mut self, n: u32) -> Self {
        self.hud_interval = n.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &ConsoleEvent<'_>) {
        let written = serde_json::to_string(event)
            .map_err(io::Error::from)
            .and_then(|line| writeln!(self.out, "{line}"));
        if let Err(err) = written {
            tracing::warn!(error = %err, "failed to write console event");
        }
    }
}

impl<W: Write + Send> DisplaySink for ConsoleDisplay<W> {
    fn update(&mut self, view: &GameStateSnapshot) {
        self.updates += 1;
        if self.updates % self.hud_interval != 0 {
            return;
        }
        if self.json {
            self.emit(&ConsoleEvent::Hud {
                display_health: view.display_health(),
                snapshot: view,
            });
        } else {
            tracing::info!(
                health = view.display_health(),
                ammo = view.ammo,
                score = view.score,
                wave = view.wave,
                enemies = view.enemies,
                fps = view.fps,
                "hud"
            );
        }
    }

    fn show_pause_menu(&mut self) {
        if self.json {
            self.emit(&ConsoleEvent::PauseMenu { visible: true });
        } else {
            tracing::info!("paused");
        }
    }

    fn hide_pause_menu(&mut self) {
        if self.json {
            self.emit(&ConsoleEvent::PauseMenu { visible: false });
        } else {
            tracing::info!("resumed");
        }
    }

    fn show_game_over(&mut self, score: u32, wave: u32) {
        if self.json {
            self.emit(&ConsoleEvent::GameOver { score, wave });
        } else {
            tracing::info!(score, wave, "GAME OVER");
        }
    }

    fn show_damage_flash(&mut self) {
        if self.json {
            self.emit(&ConsoleEvent::DamageFlash);
        } else {
            tracing::debug!("damage taken");
        }
    }

    fn show_error(&mut self, message: &str) {
        if self.json {
            self.emit(&ConsoleEvent::Error { message });
        } else {
            tracing::error!("{message}");
        }
    }
}

/// Audio sink that only logs the cues it would play.
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
}

impl LogAudio {
    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: AudioCue) {
        if !self.muted {
            tracing::debug!(cue = cue.name(), "play");
        }
    }

    fn pause_all(&mut self) {
        self.muted = true;
    }

    fn resume_all(&mut self) {
        self.muted = false;
    }
}
