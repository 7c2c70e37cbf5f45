use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use agenda_engine::to_display_records;
use agenda_types::sample_sessions;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, format: Option<OutputFormat>, compact: bool) -> Result<()> {
    let calendar = to_display_records(&sample_sessions())?;
    HandlerContext::new(ctx, format, compact)?.render(&calendar)
}
