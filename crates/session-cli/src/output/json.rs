//! JSON output formatting

use serde::Serialize;
use session_core::{SessionPage, SessionView};

/// Listing output: the page's views plus the status line
#[derive(Debug, Serialize)]
struct PageOutput<'a> {
    sessions: &'a [SessionView],
    message: &'a str,
    total: usize,
}

fn to_string<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Output view records as a JSON array
pub fn format_views(views: &[SessionView], pretty: bool) -> serde_json::Result<String> {
    to_string(&views, pretty)
}

/// Output a listing page as a JSON object
pub fn format_page(
    page: &SessionPage,
    views: &[SessionView],
    pretty: bool,
) -> serde_json::Result<String> {
    to_string(
        &PageOutput {
            sessions: views,
            message: &page.message,
            total: page.total,
        },
        pretty,
    )
}
