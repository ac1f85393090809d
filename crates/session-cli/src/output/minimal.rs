//! Minimal text output formatting

use session_core::SessionView;

/// Format a view record as tab-separated key, label and timestamp
pub fn format_view(view: &SessionView) -> String {
    format!("{}\t{}\t{}", view.key, view.label, view.timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_keep_columns() {
        assert_eq!(format_view(&SessionView::default()), "\t\t");
    }
}
