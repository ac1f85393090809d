//! Human-readable output formatting

use super::colors::*;
use session_core::{display_timestamp, SessionView};

/// Format a view record as one list row: label, timestamp, key
pub fn format_view(view: &SessionView) -> String {
    let label = if view.label.is_empty() {
        placeholder("(untitled)")
    } else {
        colored_label(&view.label)
    };

    let time = if view.timestamp.is_empty() {
        placeholder("unknown")
    } else {
        colored_time(&display_timestamp(&view.timestamp))
    };

    let key = if view.key.is_empty() {
        placeholder("-")
    } else {
        colored_key(&view.key)
    };

    format!("{}  {}  {}", label, time, key)
}

/// Format the header line for a list of views
pub fn format_header(count: usize) -> String {
    header(&format!("Sessions ({})", format_count(count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_full_view() {
        plain();
        let view = SessionView {
            key: "s1".to_string(),
            label: "Chat A".to_string(),
            timestamp: "2024-01-01T08:00:00Z".to_string(),
        };
        assert_eq!(format_view(&view), "Chat A  2024-01-01 08:00:00  s1");
    }

    #[test]
    fn test_format_empty_view() {
        plain();
        assert_eq!(
            format_view(&SessionView::default()),
            "(untitled)  unknown  -"
        );
    }

    #[test]
    fn test_unparsed_timestamp_shown_verbatim() {
        plain();
        let view = SessionView {
            key: String::new(),
            label: "X".to_string(),
            timestamp: "t".to_string(),
        };
        assert_eq!(format_view(&view), "X  t  -");
    }

    #[test]
    fn test_format_header() {
        plain();
        assert_eq!(format_header(1200), "Sessions (1,200)");
    }
}
