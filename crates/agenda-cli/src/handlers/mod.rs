mod context;

pub mod config;
pub mod dates;
pub mod demo;

pub use context::HandlerContext;
