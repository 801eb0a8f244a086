use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use immuto::config::Config;
use immuto::demo::{replay, Scenario};
use immuto::logging::init_tracing;

/// Replay a demo scenario and print the root state after every dispatch.
#[derive(Parser, Debug)]
#[command(name = "immuto", version, about, long_about = None)]
struct Args {
    /// Scenario to replay
    #[arg(value_enum, default_value_t = Scenario::Shop)]
    scenario: Scenario,

    /// Config file (default: the platform config dir's immuto/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pretty-print each state
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    let replayed = replay(args.scenario, &config.store)
        .with_context(|| format!("Scenario {:?} failed", args.scenario))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for state in &replayed.states {
        let line = if args.pretty {
            serde_json::to_string_pretty(state)?
        } else {
            serde_json::to_string(state)?
        };
        writeln!(out, "{}", line)?;
    }

    tracing::info!(dispatched = replayed.dispatched, "Scenario finished");
    Ok(())
}
