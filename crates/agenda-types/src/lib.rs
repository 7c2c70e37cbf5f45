pub mod display;
pub mod error;
pub mod session;
mod time;

pub use display::*;
pub use error::{Error, ParseErrorKind, Result, TimestampError};
pub use session::*;
pub use time::*;
