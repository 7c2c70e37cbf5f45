use agenda_types::DisplayRecord;
use anyhow::Result;
use std::io::Write;

pub fn render<W: Write>(out: &mut W, records: &[DisplayRecord], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, records)?;
    } else {
        serde_json::to_writer(&mut *out, records)?;
    }
    writeln!(out)?;
    Ok(())
}
