//! historial-replay
//!
//! Replays a recorded sequence of field changes through a form controller
//! and reports the resulting snapshot.

use std::io::BufRead;
use std::path::Path;

use eyre::{Result, WrapErr};

use historial_core::models::snapshot::ClinicalRecordSnapshot;
use historial_session::{FieldChange, FormConfig, FormController, QueuedEvents, Reaction};

/// Install the global subscriber: `RUST_LOG` filtering (default `info`),
/// written to stderr so stdout carries only the record. `json` switches to
/// one JSON object per event.
pub fn init_tracing(json: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))
}

/// Read one `FieldChange` per line. Blank lines and lines starting with
/// `#` are skipped.
pub fn read_events(reader: impl BufRead) -> Result<QueuedEvents> {
    let mut events = QueuedEvents::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.wrap_err("failed to read event line")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let change: FieldChange = serde_json::from_str(line)
            .wrap_err_with(|| format!("invalid field change on line {}", index + 1))?;
        events.push(change);
    }
    Ok(events)
}

pub fn read_events_file(path: &Path) -> Result<QueuedEvents> {
    let file = std::fs::File::open(path)
        .wrap_err_with(|| format!("failed to open {}", path.display()))?;
    read_events(std::io::BufReader::new(file))
}

#[derive(Debug)]
pub struct ReplayOutcome {
    pub reactions: Vec<Reaction>,
    pub snapshot: ClinicalRecordSnapshot,
    /// Completeness problems, empty when the form could be submitted.
    pub missing: Vec<String>,
}

/// Drive a fresh form session with `events`.
pub fn replay(config: FormConfig, mut events: QueuedEvents) -> Result<ReplayOutcome> {
    config.validate().wrap_err("form config is invalid")?;
    let mut controller = FormController::new(config);
    let reactions = controller
        .run(&mut events)
        .wrap_err_with(|| format!("replay stopped with {} event(s) left", events.len()))?;

    let session = controller.session();
    Ok(ReplayOutcome {
        reactions,
        snapshot: session.snapshot(),
        missing: session.check_completeness(),
    })
}
