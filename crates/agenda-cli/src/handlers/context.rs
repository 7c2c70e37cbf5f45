use crate::context::ExecutionContext;
use crate::presentation::{RenderOptions, render_to_string};
use crate::types::OutputFormat;
use agenda_types::DisplayRecord;
use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::Write;

/// Presentation settings resolved from flags, config and the terminal
pub struct HandlerContext {
    pub options: RenderOptions,
}

impl HandlerContext {
    /// Flags win over `config.toml`, which wins over built-in defaults
    pub fn new(
        ctx: &ExecutionContext,
        format: Option<OutputFormat>,
        compact: bool,
    ) -> Result<Self> {
        let output = &ctx.config()?.output;

        let options = RenderOptions {
            format: format.or(output.format).unwrap_or(OutputFormat::Plain),
            pretty: output.pretty && !compact,
            color: std::io::stdout().is_terminal(),
        };
        log::debug!("render options: {:?}", options);

        Ok(Self { options })
    }

    /// Render the calendar to stdout in one write
    pub fn render(&self, records: &[DisplayRecord]) -> Result<()> {
        let text = render_to_string(records, &self.options)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
