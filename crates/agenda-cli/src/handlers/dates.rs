use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::types::{OrderArg, OutputFormat};
use agenda_engine::{DateMode, SessionQuery, build_calendar};
use agenda_types::{SessionRecord, read_sessions_json};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub struct DatesArgs {
    pub input: Option<PathBuf>,
    pub order: Option<OrderArg>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub strict: bool,
    pub compact: bool,
}

pub fn handle(
    ctx: &ExecutionContext,
    args: DatesArgs,
    format: Option<OutputFormat>,
) -> Result<()> {
    let query_config = &ctx.config()?.query;

    let query = SessionQuery::new()
        .with_order(args.order.map(Into::into).unwrap_or(query_config.order))
        .with_limit(args.limit.or(query_config.limit))
        .with_offset(args.offset.unwrap_or(0));

    let mode = if args.strict || query_config.strict {
        DateMode::Strict
    } else {
        DateMode::Lenient
    };

    let records = load_sessions(args.input.as_deref())?;
    let calendar = build_calendar(&records, &query, mode)?;
    log::info!(
        "{} of {} session(s) on the calendar",
        calendar.len(),
        records.len()
    );

    HandlerContext::new(ctx, format, args.compact)?.render(&calendar)
}

/// Read session records from a file, or from stdin for `None` / `-`
fn load_sessions(input: Option<&Path>) -> Result<Vec<SessionRecord>> {
    match input {
        Some(path) if path != Path::new("-") => {
            log::info!("reading sessions from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            read_sessions_json(BufReader::new(file))
                .with_context(|| format!("Failed to read sessions from {}", path.display()))
        }
        _ => {
            log::info!("reading sessions from stdin");
            read_sessions_json(std::io::stdin().lock())
                .context("Failed to read sessions from stdin")
        }
    }
}
