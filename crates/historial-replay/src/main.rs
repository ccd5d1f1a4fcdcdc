use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eyre::Result;

use historial_export::payload::to_payload_pretty;
use historial_export::render::render_summary;
use historial_replay::{init_tracing, read_events_file, replay};
use historial_session::config::load_or_default;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// JSON submission payload
    Payload,
    /// Plain-text clinical history entry
    Summary,
}

#[derive(Debug, Parser)]
#[command(name = "historial-replay")]
#[command(about = "Replay recorded form events and print the resulting record")]
struct Args {
    /// JSON-lines file with one field change per line
    #[arg(long)]
    events: PathBuf,

    /// Form config file (defaults to the user config location)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "payload")]
    format: Format,

    /// Emit log events as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(args.log_json)?;

    let config = load_or_default(args.config.as_deref())?;
    let events = read_events_file(&args.events)?;
    tracing::info!(events = events.len(), path = %args.events.display(), "replaying form events");

    let outcome = replay(config, events)?;
    for reaction in &outcome.reactions {
        tracing::info!(reaction = %serde_json::to_string(reaction)?, "reaction");
    }

    if !outcome.missing.is_empty() {
        eyre::bail!("form is incomplete: {}", outcome.missing.join("; "));
    }

    let output = match args.format {
        Format::Payload => to_payload_pretty(&outcome.snapshot)?,
        Format::Summary => render_summary(&outcome.snapshot)?,
    };
    println!("{output}");

    Ok(())
}
