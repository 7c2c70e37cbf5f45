use std::fmt;

/// Result type for agenda-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a `session_date` value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Not an ISO-8601 / RFC 3339 timestamp at all
    Invalid(chrono::ParseError),
    /// A valid timestamp, but not in `Date.toISOString()` shape (strict mode only)
    NotIsoString,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Invalid(err) => write!(f, "{}", err),
            ParseErrorKind::NotIsoString => {
                write!(f, "expected YYYY-MM-DDTHH:MM:SS.sssZ")
            }
        }
    }
}

/// A timestamp string that could not be turned into an instant.
///
/// Carries the raw value so callers can report it without keeping the
/// originating record around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampError {
    pub value: String,
    pub kind: ParseErrorKind,
}

impl TimestampError {
    pub fn invalid(value: &str, err: chrono::ParseError) -> Self {
        Self {
            value: value.to_string(),
            kind: ParseErrorKind::Invalid(err),
        }
    }

    pub fn not_iso_string(value: &str) -> Self {
        Self {
            value: value.to_string(),
            kind: ParseErrorKind::NotIsoString,
        }
    }
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid timestamp {:?}: {}", self.value, self.kind)
    }
}

impl std::error::Error for TimestampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Invalid(err) => Some(err),
            ParseErrorKind::NotIsoString => None,
        }
    }
}

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A record's `session_date` could not be parsed
    Parse {
        /// Position of the record in the input batch
        index: usize,
        slug: String,
        source: TimestampError,
    },

    /// IO operation failed
    Io(std::io::Error),

    /// Session records could not be decoded
    Json(serde_json::Error),
}

impl Error {
    pub fn parse(index: usize, slug: &str, source: TimestampError) -> Self {
        Error::Parse {
            index,
            slug: slug.to_string(),
            source,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse {
                index,
                slug,
                source,
            } => write!(
                f,
                "Parse error: session_date of record {} ('{}'): {}",
                index, slug, source
            ),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
