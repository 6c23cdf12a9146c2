//! Scripted input for unattended runs.
//!
//! The autopilot holds the trigger, sweeps the view and strafes back and
//! forth. It reloads whenever the magazine runs dry. Only the HUD snapshot
//! is visible to it, the same view a player has.

use frontline_core::commands::PlayerCommand;
use frontline_core::enums::GamePhase;
use frontline_core::state::GameStateSnapshot;

use crate::game_loop::InputSource;

/// Horizontal mouse movement per frame, in pixels.
const SWEEP_DX: f32 = 3.0;

/// Frames spent strafing in one direction before switching.
const STRAFE_FRAMES: u64 = 120;

#[derive(Debug, Default)]
pub struct Autopilot {
    frames: u64,
    /// Key currently held for strafing.
    strafe_key: Option<&'static str>,
    trigger_held: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    fn key_down(key: &str) -> PlayerCommand {
        PlayerCommand::KeyDown {
            key: key.to_string(),
        }
    }

    fn key_up(key: &str) -> PlayerCommand {
        PlayerCommand::KeyUp {
            key: key.to_string(),
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        if snapshot.phase != GamePhase::Running {
            // Pausing releases every key on the engine side.
            self.trigger_held = false;
            self.strafe_key = None;
            return commands;
        }

        if !self.trigger_held {
            commands.push(Self::key_down("mousedown"));
            self.trigger_held = true;
        }
        if snapshot.ammo == 0 {
            commands.push(PlayerCommand::Reload);
        }

        let wanted = if (self.frames / STRAFE_FRAMES) % 2 == 0 {
            "a"
        } else {
            "d"
        };
        if self.strafe_key != Some(wanted) {
            if let Some(previous) = self.strafe_key {
                commands.push(Self::key_up(previous));
            }
            commands.push(Self::key_down(wanted));
            self.strafe_key = Some(wanted);
        }

        commands.push(PlayerCommand::MouseMove {
            dx: SWEEP_DX,
            dy: 0.0,
        });
        self.frames += 1;
        commands
    }
}
