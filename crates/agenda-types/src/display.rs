use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hover content attached to a highlighted calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Popover {
    pub label: String,
}

impl Popover {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Calendar attribute consumed by the date-highlighting widget.
///
/// Field names are the widget's; `dates` serializes as `toISOString()` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    /// Colour of the dot drawn under the day
    pub dot: String,
    /// Stable key, the session slug
    pub key: String,
    #[serde(with = "crate::time::iso_millis")]
    pub dates: DateTime<Utc>,
    pub popover: Popover,
}
