//! CLI command implementations

pub mod list;
pub mod translate;

use anyhow::Result;
use session_core::{SessionView, SessionsConfig};
use std::io::Write;

use crate::cli::OutputFormat;
use crate::output::{human, json, minimal};

/// `--pretty` turns pretty JSON on; the config file can only turn it on too
pub(crate) fn pretty_json(flag: bool, config: &SessionsConfig) -> bool {
    flag || config.pretty
}

/// Write view records in the chosen format
pub(crate) fn write_views<W: Write>(
    out: &mut W,
    views: &[SessionView],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if views.is_empty() {
                writeln!(out, "No sessions found")?;
            } else {
                writeln!(out, "{}", human::format_header(views.len()))?;
                writeln!(out)?;
                for view in views {
                    writeln!(out, "{}", human::format_view(view))?;
                }
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", json::format_views(views, pretty)?)?;
        }
        OutputFormat::Minimal => {
            for view in views {
                writeln!(out, "{}", minimal::format_view(view))?;
            }
        }
    }

    Ok(())
}
