//! Calendar renderers.
//!
//! Every renderer writes into a buffer; the handler flushes it to stdout only
//! once rendering succeeded, so a failure never leaves half a document behind.

mod csv;
mod json;
mod plain;

use crate::types::OutputFormat;
use agenda_types::DisplayRecord;
use anyhow::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub color: bool,
}

pub fn render_calendar<W: Write>(
    out: &mut W,
    records: &[DisplayRecord],
    options: &RenderOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Plain => plain::render(out, records, options.color),
        OutputFormat::Json => json::render(out, records, options.pretty),
        OutputFormat::Csv => csv::render(out, records),
    }
}

/// Render into memory and return the text
pub fn render_to_string(records: &[DisplayRecord], options: &RenderOptions) -> Result<String> {
    let mut buf = Vec::new();
    render_calendar(&mut buf, records, options)?;
    Ok(String::from_utf8(buf)?)
}
