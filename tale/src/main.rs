use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use game_rules::{ClockRandom, GameConfig};
use narrative_core::{load_story, play, Navigator, PlayOutcome};

/// Exit code used when input runs out before the story ends.
const INPUT_CLOSED_EXIT: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "tale", version)]
#[command(about = "A choice-driven console adventure: pick letters, fight, find loot")]
struct Args {
    /// Story document to play (overrides `story_path` from the config)
    #[arg(long)]
    story: Option<PathBuf>,

    /// TOML config with the starting hero and inventory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(PlayOutcome::Ended) => ExitCode::SUCCESS,
        Ok(PlayOutcome::InputClosed) => ExitCode::from(INPUT_CLOSED_EXIT),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: &Args) -> Result<PlayOutcome> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(story) = &args.story {
        config = config.with_story_path(story.clone());
    }

    let root = load_story(&config.story_path)
        .with_context(|| format!("failed to load story {}", config.story_path.display()))?;
    let mut navigator = Navigator::from_config(root, &config, ClockRandom::new());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    play(&mut navigator, stdin.lock(), &mut stdout).context("console session failed")
}
