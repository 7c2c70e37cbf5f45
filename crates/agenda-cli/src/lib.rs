// Records come from the session service as `Date.toISOString()` text and
// leave as calendar attributes. Everything between is in agenda-engine; this
// crate only resolves options, reads input and renders.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
