use agenda_types::{
    DisplayRecord, Error, Popover, Result, SessionRecord, TimestampError, parse_session_date,
};
use chrono::{DateTime, Utc};
use log::debug;

use crate::query::SessionQuery;
use crate::strict::check_iso_format;

/// How strictly `session_date` values are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateMode {
    /// Any RFC 3339 timestamp, offsets normalized to UTC
    #[default]
    Lenient,
    /// Only exact `Date.toISOString()` output
    Strict,
}

impl DateMode {
    pub fn parse(self, value: &str) -> std::result::Result<DateTime<Utc>, TimestampError> {
        if self == DateMode::Strict && !check_iso_format(value) {
            return Err(TimestampError::not_iso_string(value));
        }
        parse_session_date(value)
    }
}

/// Map one session onto its calendar attribute
pub fn to_display_record(
    record: &SessionRecord,
) -> std::result::Result<DisplayRecord, TimestampError> {
    to_display_record_with(record, DateMode::Lenient)
}

pub fn to_display_record_with(
    record: &SessionRecord,
    mode: DateMode,
) -> std::result::Result<DisplayRecord, TimestampError> {
    Ok(DisplayRecord {
        dot: record.colour.clone(),
        key: record.slug.clone(),
        dates: mode.parse(&record.session_date)?,
        popover: Popover::new(record.title.as_str()),
    })
}

/// Map a batch of sessions, preserving order.
///
/// The first record whose date does not parse aborts the whole batch; no
/// partial output is returned.
pub fn to_display_records(records: &[SessionRecord]) -> Result<Vec<DisplayRecord>> {
    to_display_records_with(records, DateMode::Lenient)
}

pub fn to_display_records_strict(records: &[SessionRecord]) -> Result<Vec<DisplayRecord>> {
    to_display_records_with(records, DateMode::Strict)
}

pub fn to_display_records_with(
    records: &[SessionRecord],
    mode: DateMode,
) -> Result<Vec<DisplayRecord>> {
    debug!("transforming {} session(s) ({:?})", records.len(), mode);

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            to_display_record_with(record, mode)
                .map_err(|err| Error::parse(index, &record.slug, err))
        })
        .collect()
}

/// Transform every record, then order and page the result.
///
/// Dates are validated in input order before any selection happens, so a
/// malformed record fails the call even when paging would have skipped it.
pub fn build_calendar(
    records: &[SessionRecord],
    query: &SessionQuery,
    mode: DateMode,
) -> Result<Vec<DisplayRecord>> {
    let displays = to_display_records_with(records, mode)?;
    Ok(query.apply(displays))
}
