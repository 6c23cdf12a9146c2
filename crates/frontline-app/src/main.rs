use anyhow::{anyhow, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use frontline_app::autopilot::Autopilot;
use frontline_app::console::{ConsoleDisplay, LogAudio};
use frontline_app::game_loop::{self, InputSource, LoopSettings};
use frontline_app::loadout;
use frontline_catalog::Catalog;
use frontline_sim::assets::MemoryAssetLoader;
use frontline_sim::scene::NullRenderer;
use frontline_sim::{Collaborators, GameEngine, SimConfig};

#[derive(Parser)]
#[command(name = "frontline", about = "Headless FRONTLINE arena session")]
struct Cli {
    /// RNG seed for the session
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Frames to run before stopping (0 = until game over)
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Catalog id of the character to play
    #[arg(long, default_value = "commando-jack")]
    character: String,

    /// Catalog id of the weapon (defaults to the character's starting weapon)
    #[arg(long)]
    weapon: Option<String>,

    /// Let the built-in autopilot play
    #[arg(long)]
    autopilot: bool,

    /// Write HUD events to stdout as JSON lines
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::load().context("failed to load catalog")?;
    for issue in catalog.validate() {
        tracing::debug!(%issue, "catalog reference does not resolve");
    }
    let loadout = loadout::for_character(&catalog, &cli.character, cli.weapon.as_deref())?;

    let collaborators = Collaborators {
        renderer: Box::new(NullRenderer),
        display: Box::new(ConsoleDisplay::stdout(cli.json)),
        audio: Box::new(LogAudio::default()),
        assets: Some(Box::new(MemoryAssetLoader::with_game_assets())),
    };
    let config = SimConfig {
        seed: cli.seed,
        loadout,
        ..SimConfig::default()
    };
    let mut engine = GameEngine::new(config, collaborators);
    engine.initialize().context("failed to initialize game")?;

    let input = cli
        .autopilot
        .then(|| Box::new(Autopilot::new()) as Box<dyn InputSource>);
    let settings = LoopSettings {
        max_frames: (cli.frames > 0).then_some(cli.frames),
        ..LoopSettings::default()
    };
    let (_commands, handle) = game_loop::spawn_game_loop(engine, input, settings, None)
        .context("failed to spawn game loop")?;

    let report = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    match report.last_snapshot {
        Some(s) => tracing::info!(
            frames = report.frames,
            phase = ?s.phase,
            score = s.score,
            wave = s.wave,
            health = s.display_health(),
            "session ended"
        ),
        None => tracing::info!(frames = report.frames, "session ended"),
    }
    Ok(())
}
