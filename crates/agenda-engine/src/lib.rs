//! Calendar transformation engine.
//!
//! Maps session records onto the attributes a date-highlighting calendar
//! widget renders: one coloured dot per session, keyed by slug, with the
//! session title in a popover.
//!
//! ```
//! use agenda_engine::{DateMode, SessionQuery, build_calendar};
//!
//! let calendar = build_calendar(&[], &SessionQuery::default(), DateMode::Lenient)?;
//! assert!(calendar.is_empty());
//! # Ok::<(), agenda_engine::Error>(())
//! ```

mod query;
mod strict;
mod transform;

pub use agenda_types::{Error, Result};
pub use query::{SessionOrder, SessionQuery};
pub use strict::check_iso_format;
pub use transform::{
    DateMode, build_calendar, to_display_record, to_display_record_with, to_display_records,
    to_display_records_strict, to_display_records_with,
};
