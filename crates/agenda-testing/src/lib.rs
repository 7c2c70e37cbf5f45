//! Testing infrastructure for agenda integration tests.
//!
//! - `TestWorld`: isolated data directory plus input files, runs the CLI
//! - `assertions`: checks that calendar output lines up with its input
//! - `fixtures`: session record builders and the stock three-session sample

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{SessionBuilder, sample_sessions};
pub use world::{CliResult, TestWorld};
