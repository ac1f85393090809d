//! Payload input from a file or stdin

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use session_core::{parse_session_list, SessionList};

/// Read raw payload text. `None` or "-" reads stdin.
pub fn read_payload(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sessions from {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read sessions from stdin")?;
            Ok(raw)
        }
    }
}

/// Read and parse a session list. `Ok(None)` means no list was provided.
pub fn load_sessions(input: Option<&Path>) -> Result<Option<SessionList>> {
    let raw = read_payload(input)?;
    let sessions = parse_session_list(&raw).context("Failed to parse session list")?;

    match &sessions {
        Some(list) => tracing::debug!(count = list.len(), "loaded session list"),
        None => tracing::debug!("no session list provided"),
    }

    Ok(sessions)
}
