//! Terminal runner (default binary).
//!
//! Owns the clock and the terminal: it polls input, feeds actions and
//! timestamps to the engine, and hands a snapshot to the renderer each frame.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use blockfall::core::{EngineConfig, GameEngine, Renderer};
use blockfall::input::{CrosstermInput, InputEvent, InputSource};
use blockfall::logging;
use blockfall::term::{GameView, TerminalDisplay};
use blockfall::types::{BASE_DROP_MS, GRID_HEIGHT, GRID_WIDTH, MIN_DROP_MS, TICK_MS};

/// Falling-block puzzle in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: usize,
    /// Grid height in cells
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: usize,
    /// Gravity interval at level 1, in milliseconds
    #[arg(long, default_value_t = BASE_DROP_MS)]
    drop_interval_ms: u32,
    /// Fastest gravity interval reachable by levelling up
    #[arg(long, default_value_t = MIN_DROP_MS)]
    min_drop_interval_ms: u32,
    /// Seed for the piece generator (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u32>,
    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            width: self.width,
            height: self.height,
            base_drop_interval_ms: self.drop_interval_ms,
            min_drop_interval_ms: self.min_drop_interval_ms,
            ..EngineConfig::default()
        }
    }

    fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        logging::init(path, LevelFilter::Debug)?;
    }

    let seed = args.seed();
    let engine = GameEngine::new(args.engine_config(), seed).context("invalid game settings")?;
    log::info!("starting with seed {}", seed);

    let mut display = TerminalDisplay::new(GameView::default());
    display.enter()?;

    let result = run(engine, &mut display, &mut CrosstermInput::new());

    // Always try to restore terminal state.
    let _ = display.exit();
    log::logger().flush();
    result
}

fn run(
    mut engine: GameEngine,
    display: &mut TerminalDisplay,
    input: &mut impl InputSource,
) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;
    let tick_duration = Duration::from_millis(TICK_MS);

    engine.start(now_ms());
    let mut last_tick = Instant::now();

    loop {
        display.render(&engine.snapshot())?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if let Some(event) = input.poll(timeout)? {
            match event {
                InputEvent::Quit => return Ok(()),
                InputEvent::Resize => display.refresh_size()?,
                InputEvent::Action(action) => {
                    engine.apply_action(action);
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick(now_ms());
        }
    }
}
