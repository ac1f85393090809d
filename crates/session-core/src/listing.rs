//! Session ordering and pagination

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::errors::CoreError;
use crate::timestamp::parse_timestamp;
use crate::translator::translate;
use crate::types::{SessionRecord, SessionView};

/// A 1-based page of sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    size: usize,
    page: usize,
}

impl PageRequest {
    pub fn new(size: usize, page: usize) -> Result<Self, CoreError> {
        if size == 0 || page == 0 {
            return Err(CoreError::InvalidPage { size, page });
        }
        Ok(Self { size, page })
    }

    /// Build a request from optional CLI/query values. Pagination only
    /// applies when both are given and valid; otherwise the full list is
    /// returned.
    pub fn from_options(size: Option<usize>, page: Option<usize>) -> Option<Self> {
        let (size, page) = (size?, page?);
        match Self::new(size, page) {
            Ok(request) => Some(request),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring page request");
                None
            }
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Index of the first session on this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.size)
    }
}

/// One page of an ordered session list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPage {
    pub records: Vec<Option<SessionRecord>>,
    /// Number of sessions before pagination
    pub total: usize,
    pub message: String,
}

impl SessionPage {
    pub fn views(&self) -> Vec<SessionView> {
        translate(Some(&self.records))
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sort newest first. Sessions without a usable timestamp (and null
/// entries) go last, keeping their relative order.
pub fn sort_newest_first(records: &mut [Option<SessionRecord>]) {
    records.sort_by_key(|record| Reverse(sort_key(record.as_ref())));
}

fn sort_key(record: Option<&SessionRecord>) -> Option<DateTime<Utc>> {
    record
        .and_then(|r| r.timestamp.as_deref())
        .and_then(parse_timestamp)
}

/// Order sessions newest first and cut out the requested page
pub fn list_sessions(
    mut records: Vec<Option<SessionRecord>>,
    request: Option<PageRequest>,
) -> SessionPage {
    sort_newest_first(&mut records);
    let total = records.len();

    let Some(request) = request else {
        return SessionPage {
            records,
            total,
            message: format!("Fetched all {} sessions successfully", total),
        };
    };

    let start = request.offset();
    if start >= total {
        tracing::debug!(start, total, page = request.page(), "page index past end");
        return SessionPage {
            records: Vec::new(),
            total,
            message: "No more sessions to fetch, since the page index is too high".to_string(),
        };
    }

    let end = start.saturating_add(request.size()).min(total);
    tracing::debug!(
        start,
        end,
        total,
        size = request.size(),
        page = request.page(),
        "paginated session list"
    );

    let page: Vec<_> = records.drain(start..end).collect();
    SessionPage {
        message: format!(
            "Fetched {} out of {} sessions successfully",
            page.len(),
            total
        ),
        records: page,
        total,
    }
}
