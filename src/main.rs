mod app;
mod config;
mod event;
mod gamestate;
mod hotbar;
mod input;
mod render;
mod script;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use voxcraft_player::Walker;

use crate::app::App;
use crate::config::AppConfig;
use crate::gamestate::GameState;
use crate::render::FrameReporter;
use crate::script::Script;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless voxel sandbox session", long_about = None)]
struct Args {
    /// Session config (TOML). Built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scripted input to replay (TOML `[[input]]` entries)
    #[arg(long)]
    script: Option<PathBuf>,

    /// World seed. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate. Defaults to one past the script's last entry.
    #[arg(long)]
    ticks: Option<u64>,

    /// Simulated frame length in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u32,

    /// Log a frame summary every N ticks (0 = only the final frame)
    #[arg(long, default_value_t = 60)]
    report_every: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            AppConfig::from_path(path)?
        }
        None => AppConfig::default(),
    };
    let recipes = cfg.recipe_book()?;
    log::info!("{} crafting recipes loaded", recipes.len());

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("world seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let world = voxcraft_world::generate(&cfg.worldgen, &mut rng);

    let gs = GameState::new(
        world,
        Walker::new(cfg.movement.clone()),
        cfg.settings.clone(),
        cfg.keybindings.clone(),
        recipes,
    );
    let mut app = App::new(gs);

    let mut last_scripted = None;
    if let Some(path) = &args.script {
        let script = Script::from_path(path)?;
        last_scripted = script.last_tick();
        let n = script.schedule(&mut app.queue);
        log::info!("scheduled {} scripted inputs from {}", n, path.display());
    }
    let ticks = args
        .ticks
        .unwrap_or_else(|| last_scripted.map_or(1, |t| t.saturating_add(1)));

    let mut reporter = FrameReporter::new();
    for t in 0..ticks {
        app.step(args.frame_ms);
        let frame = reporter.frame(&app.gs);
        if args.report_every > 0 && (t + 1) % args.report_every == 0 {
            log::info!(target: "render", "[tick {}] {}", t + 1, frame);
        }
    }

    let frame = reporter.frame(&app.gs);
    log::info!(target: "render", "final {}", frame);
    if app.queue.pending() > 0 {
        log::warn!("{} scripted inputs fall after the last tick", app.queue.pending());
    }
    let s = &app.debug_stats;
    log::info!(
        "ran {} ticks ({} moving), {} events, {} removed, {} placed, {} declined, {} frames rebuilt, {} skipped",
        s.ticks_run,
        s.ticks_moved,
        s.events_processed,
        s.blocks_removed,
        s.blocks_placed,
        s.edits_declined,
        reporter.frames_built,
        reporter.frames_skipped
    );
    Ok(())
}
