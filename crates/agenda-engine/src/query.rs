use agenda_types::DisplayRecord;
use log::debug;
use serde::{Deserialize, Serialize};

/// Order of the calendar output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionOrder {
    /// Same order as the input records
    #[default]
    Input,
    /// Latest session date first
    Newest,
    /// Earliest session date first
    Oldest,
}

/// Ordering and paging applied to a transformed batch.
///
/// The default query is the identity: input order, no offset, no limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionQuery {
    pub order: SessionOrder,
    pub limit: Option<usize>,
    pub offset: usize,
}

impl SessionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: SessionOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn is_identity(&self) -> bool {
        self.order == SessionOrder::Input && self.limit.is_none() && self.offset == 0
    }

    /// Sort (stable on equal dates), then skip `offset` and keep at most `limit`
    pub fn apply(&self, mut records: Vec<DisplayRecord>) -> Vec<DisplayRecord> {
        if self.is_identity() {
            return records;
        }

        match self.order {
            SessionOrder::Input => {}
            SessionOrder::Newest => records.sort_by(|a, b| b.dates.cmp(&a.dates)),
            SessionOrder::Oldest => records.sort_by(|a, b| a.dates.cmp(&b.dates)),
        }

        let total = records.len();
        let selected: Vec<DisplayRecord> = records
            .into_iter()
            .skip(self.offset)
            .take(self.limit.unwrap_or(usize::MAX))
            .collect();

        debug!(
            "query {:?} kept {} of {} record(s)",
            self,
            selected.len(),
            total
        );
        selected
    }
}
