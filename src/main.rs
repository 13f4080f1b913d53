use clap::{Parser, ValueEnum};
use games_core::engine::config::GameConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod app;
mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GameKind {
    Xiangqi,
    Gomoku,
}

/// Play Xiangqi or Gomoku against the computer in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which game to start.
    #[arg(short, long, value_enum, default_value_t = GameKind::Xiangqi)]
    game: GameKind,

    /// JSON file with game settings; missing keys keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random Xiangqi opponent.
    #[arg(long)]
    seed: Option<u64>,

    /// Search depth, applied to whichever game is played.
    #[arg(short, long)]
    depth: Option<u8>,
}

fn load_config(args: &Args) -> Result<GameConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            GameConfig::load_from_json(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(depth) = args.depth {
        config.xiangqi_depth = depth;
        config.gomoku_depth = depth;
    }
    Ok(config)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "configuration loaded");

    match args.game {
        GameKind::Xiangqi => app::run_xiangqi(&config),
        GameKind::Gomoku => app::run_gomoku(&config),
    }
    ExitCode::SUCCESS
}
