//! The grievance record and its wire shapes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A stored grievance. The persisted file is a JSON array of these.
///
/// `date` is kept verbatim as submitted; it is only interpreted at render
/// time for newest-first ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grievance {
    pub id: i64,
    pub title: String,
    pub complaint: String,
    pub mood: String,
    pub date: String,
}

/// A grievance as submitted, before the store assigns an id.
///
/// Deserialized straight from the submission form; no field is trimmed or
/// validated beyond being present.
#[derive(Debug, Clone, Deserialize)]
pub struct NewGrievance {
    pub title: String,
    pub complaint: String,
    pub mood: String,
    pub date: String,
}

impl NewGrievance {
    pub fn into_grievance(self, id: i64) -> Grievance {
        Grievance {
            id,
            title: self.title,
            complaint: self.complaint,
            mood: self.mood,
            date: self.date,
        }
    }
}

/// Body of `POST /admin/delete-grievance`.
///
/// `id` is a typed integer; comparison against stored ids is exact `i64`
/// equality, so a mistyped id is rejected at the boundary instead of
/// silently never matching.
#[derive(Debug, Deserialize)]
pub struct DeleteGrievance {
    pub id: i64,
}

/// Allocate the id for the next record.
///
/// Ids are wall-clock milliseconds at append time, bumped to one past the
/// largest existing id whenever that would not be strictly greater. This
/// keeps ids unique and increasing even under rapid successive appends or a
/// clock that stepped backwards.
pub fn next_record_id(existing: &[Grievance], now_ms: i64) -> i64 {
    let max_existing = existing.iter().map(|g| g.id).max().unwrap_or(0);
    now_ms.max(max_existing + 1)
}

/// Parse a submitted `date` string for sorting.
///
/// Accepts RFC 3339, the HTML `datetime-local` shape, and a bare
/// `YYYY-MM-DD` (the submission form's date input). Returns `None` for
/// anything else; the raw string is stored either way.
pub fn parse_record_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Sort newest-first by `date` for the admin view.
///
/// Records with an unparseable `date` sort after all parseable ones and keep
/// their stored order among themselves (the sort is stable).
pub fn sort_newest_first(records: &mut [Grievance]) {
    records.sort_by_key(|g| {
        let parsed = parse_record_date(&g.date);
        (parsed.is_none(), Reverse(parsed.unwrap_or(NaiveDateTime::MIN)))
    });
}
