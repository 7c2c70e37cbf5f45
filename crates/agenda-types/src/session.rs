use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::{Result, TimestampError, parse_session_date};

/// One scheduled occurrence of a game session, as stored by the agenda service.
///
/// `description` and `dm` travel with the record but nothing downstream of
/// the transformer reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: i32,
    /// Unique, URL-safe identifier; becomes the display key
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Id of the user running the session
    pub dm: i32,
    /// ISO-8601 timestamp, normally `Date.toISOString()` output
    pub session_date: String,
    pub colour: String,
}

impl SessionRecord {
    /// Parsed `session_date`
    pub fn date(&self) -> std::result::Result<DateTime<Utc>, TimestampError> {
        parse_session_date(&self.session_date)
    }
}

/// Accepted layouts of a sessions document.
///
/// Either a bare array, or the `{"sessions": [...]}` envelope returned by the
/// session listing endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SessionsDocument {
    List(Vec<SessionRecord>),
    Envelope { sessions: Vec<SessionRecord> },
}

impl SessionsDocument {
    fn into_records(self) -> Vec<SessionRecord> {
        match self {
            SessionsDocument::List(records) => records,
            SessionsDocument::Envelope { sessions } => sessions,
        }
    }
}

/// Decode session records from JSON text
pub fn parse_sessions_json(content: &str) -> Result<Vec<SessionRecord>> {
    let document: SessionsDocument = serde_json::from_str(content)?;
    Ok(document.into_records())
}

/// Decode session records from a reader (file, stdin)
pub fn read_sessions_json<R: Read>(mut reader: R) -> Result<Vec<SessionRecord>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_sessions_json(&content)
}

/// The three sessions the calendar view was first prototyped with
pub fn sample_sessions() -> Vec<SessionRecord> {
    [
        (1, "epic-session", "Epic Session", "2019-09-21T15:30:00.000Z"),
        (2, "epic-session-2", "Epic Session 2", "2019-10-21T11:30:00.000Z"),
        (3, "epic-session-3", "Epic Session 3", "2019-09-30T17:30:00.000Z"),
    ]
    .into_iter()
    .map(|(id, slug, title, session_date)| SessionRecord {
        id,
        slug: slug.to_string(),
        title: title.to_string(),
        description: "stuff and things".to_string(),
        dm: 1,
        session_date: session_date.to_string(),
        colour: "red".to_string(),
    })
    .collect()
}
