//! Session record fixtures.

pub use agenda_types::sample_sessions;
use agenda_types::SessionRecord;

/// Fluent builder for `SessionRecord`, defaulting to a valid red session.
///
/// # Example
/// ```
/// use agenda_testing::SessionBuilder;
///
/// let record = SessionBuilder::new(7, "one-shot").date("not-a-date").build();
/// assert_eq!(record.title, "One Shot");
/// ```
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    record: SessionRecord,
}

impl SessionBuilder {
    pub fn new(id: i32, slug: &str) -> Self {
        Self {
            record: SessionRecord {
                id,
                slug: slug.to_string(),
                title: title_from_slug(slug),
                description: "stuff and things".to_string(),
                dm: 1,
                session_date: "2019-09-21T15:30:00.000Z".to_string(),
                colour: "red".to_string(),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.record.title = title.to_string();
        self
    }

    pub fn date(mut self, session_date: &str) -> Self {
        self.record.session_date = session_date.to_string();
        self
    }

    pub fn colour(mut self, colour: &str) -> Self {
        self.record.colour = colour.to_string();
        self
    }

    pub fn build(self) -> SessionRecord {
        self.record
    }
}

/// "epic-session-2" -> "Epic Session 2"
fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize records as a bare JSON array
pub fn sessions_json(records: &[SessionRecord]) -> String {
    serde_json::to_string_pretty(records).expect("session records serialize")
}

/// Serialize records inside the `{"sessions": [...]}` listing envelope
pub fn sessions_envelope_json(records: &[SessionRecord]) -> String {
    serde_json::to_string_pretty(&serde_json::json!({ "sessions": records }))
        .expect("session records serialize")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_slug() {
        assert_eq!(title_from_slug("epic-session-2"), "Epic Session 2");
        assert_eq!(title_from_slug("solo"), "Solo");
    }

    #[test]
    fn test_builder_matches_sample() {
        let built = SessionBuilder::new(2, "epic-session-2")
            .date("2019-10-21T11:30:00.000Z")
            .build();
        assert_eq!(built, sample_sessions()[1]);
    }
}
