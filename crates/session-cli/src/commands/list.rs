//! List command - newest sessions first, one page at a time

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use session_core::{list_sessions, PageRequest, SessionPage, SessionsConfig};

use crate::cli::{Cli, OutputFormat};
use crate::input::load_sessions;
use crate::output::{colors, json};

pub fn run(
    cli: &Cli,
    config: &SessionsConfig,
    input: Option<&Path>,
    size: Option<usize>,
    page: Option<usize>,
) -> Result<()> {
    let sessions = load_sessions(input)?.unwrap_or_default();
    let page = list_sessions(sessions, page_request(size, page, config));

    write_page(
        &mut std::io::stdout().lock(),
        &page,
        cli.effective_format(),
        super::pretty_json(cli.pretty, config),
    )
}

/// `--size` wins over the config's `page_size`
pub(crate) fn page_request(
    size: Option<usize>,
    page: Option<usize>,
    config: &SessionsConfig,
) -> Option<PageRequest> {
    PageRequest::from_options(size.or(config.page_size), page)
}

pub(crate) fn write_page<W: Write>(
    out: &mut W,
    page: &SessionPage,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    let views = page.views();

    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", json::format_page(page, &views, pretty)?)?;
        }
        OutputFormat::Human => {
            super::write_views(out, &views, format, false)?;
            writeln!(out)?;
            writeln!(out, "{}", colors::status(&page.message))?;
        }
        OutputFormat::Minimal => {
            super::write_views(out, &views, format, false)?;
        }
    }

    Ok(())
}
