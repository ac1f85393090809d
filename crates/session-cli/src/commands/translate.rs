//! Translate command - print view records in input order

use anyhow::Result;
use std::path::Path;

use session_core::{translate, SessionsConfig};

use crate::cli::Cli;
use crate::input::load_sessions;

pub fn run(cli: &Cli, config: &SessionsConfig, input: Option<&Path>) -> Result<()> {
    let sessions = load_sessions(input)?;
    let views = translate(sessions.as_deref());

    super::write_views(
        &mut std::io::stdout().lock(),
        &views,
        cli.effective_format(),
        super::pretty_json(cli.pretty, config),
    )
}
