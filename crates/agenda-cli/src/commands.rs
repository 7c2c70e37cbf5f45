use super::args::{Cli, Commands};
use super::handlers;
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use crate::types::LogLevel;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    init_logger(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    log::debug!("data dir: {}", data_dir.display());
    let ctx = ExecutionContext::new(data_dir);

    match cli.command {
        Commands::Dates {
            input,
            order,
            limit,
            offset,
            strict,
            compact,
        } => handlers::dates::handle(
            &ctx,
            handlers::dates::DatesArgs {
                input,
                order,
                limit,
                offset,
                strict,
                compact,
            },
            cli.format,
        ),

        Commands::Demo { compact } => handlers::demo::handle(&ctx, cli.format, compact),

        Commands::Config => handlers::config::handle(&ctx, cli.format),
    }
}

/// `--log-level` sets the baseline; `RUST_LOG` directives refine it.
/// Logs always go to stderr so stdout stays parseable.
fn init_logger(level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level.into())
        .target(env_logger::Target::Stderr)
        .format_timestamp(None);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // A logger may already be installed when run() is called more than once in-process
    let _ = builder.try_init();
}
