use std::path::PathBuf;

use clap::{Parser, Subcommand};
use connect4::Connect4;
use play::{play_session, run_voyage, ScenarioConfig};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    game: Game,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, global = true, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Game {
    /// Two players take turns entering column numbers (0 to 6) on stdin
    Connect4,
    /// Steer a ship through a scenario with a string of f/b/l/r commands
    Ship {
        /// Path to the scenario JSON file
        #[arg(short, long)]
        scenario: PathBuf,

        /// The commands to run, e.g. "ffrbl"
        #[arg(short, long)]
        commands: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    match args.game {
        Game::Connect4 => {
            let mut game = Connect4::new(std::io::stdout());
            let outcome = play_session(std::io::stdin().lock(), &mut game, &mut std::io::stdout())?;
            info!(?outcome, discs = game.num_discs(), "Session over");
        }
        Game::Ship { scenario, commands } => {
            let config = ScenarioConfig::load(&scenario)?;
            info!(scenario = %scenario.display(), "Loaded scenario");
            let summary = run_voyage(config, &commands)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

// Logs go to stderr, stdout is reserved for the game itself
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
