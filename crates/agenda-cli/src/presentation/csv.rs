use agenda_types::{DisplayRecord, to_iso_string};
use anyhow::Result;
use std::io::Write;

pub fn render<W: Write>(out: &mut W, records: &[DisplayRecord]) -> Result<()> {
    let mut writer = ::csv::Writer::from_writer(out);
    writer.write_record(["key", "dot", "dates", "label"])?;

    for record in records {
        writer.write_record([
            record.key.as_str(),
            record.dot.as_str(),
            to_iso_string(&record.dates).as_str(),
            record.popover.label.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
