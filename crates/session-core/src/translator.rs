//! Session list translation into display records

use crate::types::{SessionRecord, SessionView};

impl SessionView {
    /// Build the view for one list entry. A missing entry still yields a
    /// record, with every field empty.
    pub fn from_record(record: Option<&SessionRecord>) -> Self {
        match record {
            Some(record) => Self {
                key: or_empty(&record.id),
                label: or_empty(&record.name),
                timestamp: or_empty(&record.timestamp),
            },
            None => Self::default(),
        }
    }
}

impl From<&SessionRecord> for SessionView {
    fn from(record: &SessionRecord) -> Self {
        Self::from_record(Some(record))
    }
}

/// Translate a session list into view records.
///
/// `None` stands for a list that was never provided and translates to an
/// empty list. Output is positional: entry `i` is built from input entry
/// `i`, null entries included.
pub fn translate(sessions: Option<&[Option<SessionRecord>]>) -> Vec<SessionView> {
    let sessions = sessions.unwrap_or_default();
    let views: Vec<SessionView> = sessions
        .iter()
        .map(|session| SessionView::from_record(session.as_ref()))
        .collect();

    let missing = sessions.iter().filter(|s| s.is_none()).count();
    tracing::debug!(count = views.len(), missing, "translated session list");

    views
}

/// Translate a list with no null entries
pub fn translate_records(sessions: &[SessionRecord]) -> Vec<SessionView> {
    sessions.iter().map(SessionView::from).collect()
}

fn or_empty(field: &Option<String>) -> String {
    field
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(key: &str, label: &str, timestamp: &str) -> SessionView {
        SessionView {
            key: key.to_string(),
            label: label.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_empty_list() {
        assert!(translate(Some(&[])).is_empty());
    }

    #[test]
    fn test_not_provided() {
        assert!(translate(None).is_empty());
    }

    #[test]
    fn test_full_record() {
        let sessions = vec![Some(
            SessionRecord::new()
                .with_id("s1")
                .with_name("Chat A")
                .with_timestamp("2024-01-01"),
        )];
        assert_eq!(
            translate(Some(&sessions)),
            vec![view("s1", "Chat A", "2024-01-01")]
        );
    }

    #[test]
    fn test_partial_and_null_entries() {
        let sessions = vec![Some(SessionRecord::new().with_id("s1")), None];
        assert_eq!(
            translate(Some(&sessions)),
            vec![view("s1", "", ""), view("", "", "")]
        );
    }

    #[test]
    fn test_single_null_entry() {
        assert_eq!(translate(Some(&[None])), vec![SessionView::default()]);
    }

    #[test]
    fn test_empty_id_falls_back() {
        let sessions = vec![Some(
            SessionRecord::new()
                .with_id("")
                .with_name("X")
                .with_timestamp("t"),
        )];
        assert_eq!(translate(Some(&sessions)), vec![view("", "X", "t")]);
    }

    #[test]
    fn test_length_and_order_preserved() {
        let sessions: Vec<Option<SessionRecord>> = (0..50)
            .map(|i| {
                if i % 7 == 0 {
                    None
                } else {
                    Some(SessionRecord::new().with_id(format!("s{}", i)))
                }
            })
            .collect();

        let views = translate(Some(&sessions));
        assert_eq!(views.len(), sessions.len());
        for (i, v) in views.iter().enumerate() {
            let expected = if i % 7 == 0 { String::new() } else { format!("s{}", i) };
            assert_eq!(v.key, expected);
        }
    }

    #[test]
    fn test_input_untouched() {
        let sessions = vec![Some(SessionRecord::new().with_id("").with_name("X"))];
        let before = sessions.clone();
        let _ = translate(Some(&sessions));
        assert_eq!(sessions, before);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let record = SessionRecord::new()
            .with_id("s1")
            .with_latest_job_id("job-1");
        assert_eq!(SessionView::from(&record), view("s1", "", ""));
    }

    #[test]
    fn test_translate_records() {
        let sessions = vec![
            SessionRecord::new().with_name("A"),
            SessionRecord::new().with_timestamp("2024-02-02"),
        ];
        assert_eq!(
            translate_records(&sessions),
            vec![view("", "A", ""), view("", "", "2024-02-02")]
        );
    }
}
