//! limit/offset window for the article listing.

use std::collections::HashMap;

pub const MAX_PAGE_SIZE: i64 = 10;

/// Normalized `LIMIT`/`OFFSET` pair. `limit` is always in `1..=MAX_PAGE_SIZE`,
/// `offset` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    /// Build from the raw `count` and `start` query values.
    /// Missing or unparsable values count as zero before clamping.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let count = int_param(params, "count");
        let start = int_param(params, "start");
        Self::clamped(count, start)
    }

    pub fn clamped(count: i64, start: i64) -> Self {
        let limit = if (1..=MAX_PAGE_SIZE).contains(&count) {
            count
        } else {
            MAX_PAGE_SIZE
        };
        PageWindow {
            limit,
            offset: start.max(0),
        }
    }
}

fn int_param(params: &HashMap<String, String>, key: &str) -> i64 {
    match params.get(key).map(|v| v.parse::<i64>()) {
        Some(Ok(n)) => n,
        Some(Err(_)) | None => 0,
    }
}
