//! Frame-loop thread: drives the engine at the display refresh rate.
//!
//! The engine is moved into the thread and never shared. Commands arrive via
//! an `mpsc` channel and are drained at frame boundaries. Hosts that poll can
//! pass a shared slot that receives the latest snapshot.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use frontline_core::commands::PlayerCommand;
use frontline_core::constants::DISPLAY_REFRESH_HZ;
use frontline_core::state::GameStateSnapshot;
use frontline_sim::GameEngine;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration =
    Duration::from_nanos(1_000_000_000 / DISPLAY_REFRESH_HZ as u64);

/// Commands sent from the host to the frame-loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the engine.
    Player(PlayerCommand),
    /// Stop the loop after the current frame.
    Shutdown,
}

/// Something that produces player input from what is on screen.
pub trait InputSource: Send {
    fn poll(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand>;
}

#[derive(Debug, Clone)]
pub struct LoopSettings {
    /// Stop after this many frames. `None` runs until game over.
    pub max_frames: Option<u64>,
    pub frame_duration: Duration,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            max_frames: None,
            frame_duration: FRAME_DURATION,
        }
    }
}

/// What the loop thread hands back when it exits.
#[derive(Debug, Clone)]
pub struct LoopReport {
    pub frames: u64,
    pub last_snapshot: Option<GameStateSnapshot>,
}

/// Spawns the frame loop in a new thread. The engine must already be
/// initialized.
pub fn spawn_game_loop(
    engine: GameEngine,
    input: Option<Box<dyn InputSource>>,
    settings: LoopSettings,
    latest_snapshot: Option<Arc<Mutex<Option<GameStateSnapshot>>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopReport>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("frontline-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, input, &settings, cmd_rx, latest_snapshot.as_deref())
        })?;

    Ok((cmd_tx, handle))
}

/// Runs until Shutdown, channel disconnect, the engine unscheduling itself
/// (game over, stop) or the frame limit.
fn run_game_loop(
    mut engine: GameEngine,
    mut input: Option<Box<dyn InputSource>>,
    settings: &LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: Option<&Mutex<Option<GameStateSnapshot>>>,
) -> LoopReport {
    let mut report = LoopReport {
        frames: 0,
        last_snapshot: None,
    };
    let mut last_frame: Option<Instant> = None;
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::debug!(frames = report.frames, "game loop shutting down");
                    return report;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame with the wall-clock delta
        let now = Instant::now();
        let delta = last_frame.map_or(settings.frame_duration, |t| now - t);
        last_frame = Some(now);
        let snapshot = engine.frame(delta.as_secs_f32());
        report.frames += 1;

        // 3. Scripted input reacts to what it just saw
        if let Some(source) = input.as_mut() {
            engine.queue_commands(source.poll(&snapshot));
        }

        // 4. Store latest snapshot for polling
        if let Some(Ok(mut lock)) = latest_snapshot.map(Mutex::lock) {
            *lock = Some(snapshot.clone());
        }
        report.last_snapshot = Some(snapshot);

        if !engine.is_scheduled() {
            tracing::debug!(phase = ?engine.phase(), "engine unscheduled");
            return report;
        }
        if settings.max_frames.is_some_and(|max| report.frames >= max) {
            engine.stop();
            return report;
        }

        // 5. Sleep until next frame
        next_frame_time += settings.frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > settings.frame_duration * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}
