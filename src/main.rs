use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{debug, info, warn};

mod config;
mod context;
mod encode;
mod input;
mod logging;
mod output;

use input::Decoded;
use output::HookOutput;

fn main() -> Result<()> {
    // Config and logging problems are reported, never fatal: the host's
    // session must start regardless.
    let (config, config_error) = match config::load_default() {
        Ok(config) => (config, None),
        Err(e) => (config::HookConfig::default(), Some(e)),
    };
    if let Ok(sink) = logging::init_logging(&config) {
        debug!(?sink, "logging initialized");
    }
    if let Some(e) = config_error {
        warn!(error = %format!("{:#}", e), "ignoring config");
    }

    let decoded = read_input();
    if let Decoded::Fallback(_, failure) = &decoded {
        warn!(
            kind = failure.kind(),
            error = %failure,
            "could not decode hook input, using empty event"
        );
    }
    let input = decoded.input();
    info!(
        session_id = input.session_id(),
        source = input.source(),
        event = input.hook_event_name(),
        kind = input.kind(),
        "session start"
    );

    let written = write_output(io::stdout().lock())?;
    debug!(bytes = written, "emitted orchestration context");

    Ok(())
}

fn read_input() -> Decoded {
    let (bytes, decoded) = input::read_from(io::stdin().lock());
    debug!(bytes, "read hook input");
    decoded
}

/// Write the SessionStart envelope. The only fallible step that reaches the
/// exit status.
fn write_output<W: Write>(mut writer: W) -> Result<usize> {
    let payload =
        encode::to_line(&HookOutput::session_start()).context("Failed to encode hook output")?;
    writer
        .write_all(&payload)
        .context("Failed to write hook output")?;
    writer.flush().context("Failed to flush hook output")?;
    Ok(payload.len())
}
