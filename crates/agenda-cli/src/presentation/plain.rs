use agenda_types::{DisplayRecord, to_iso_string};
use anyhow::Result;
use owo_colors::{AnsiColors, OwoColorize};
use std::io::Write;

const DOT: &str = "●";

pub fn render<W: Write>(out: &mut W, records: &[DisplayRecord], color: bool) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "No sessions.")?;
        return Ok(());
    }

    let key_width = records.iter().map(|r| r.key.chars().count()).max().unwrap_or(0);
    let dot_width = records.iter().map(|r| r.dot.chars().count()).max().unwrap_or(0);

    for record in records {
        let marker = match ansi_colour(&record.dot) {
            Some(ansi) if color => DOT.color(ansi).to_string(),
            _ => DOT.to_string(),
        };

        writeln!(
            out,
            "{}  {} {:<dot_width$}  {:<key_width$}  {}",
            to_iso_string(&record.dates),
            marker,
            record.dot,
            record.key,
            record.popover.label,
        )?;
    }

    Ok(())
}

/// Terminal colour for a dot colour name, if the terminal has one
fn ansi_colour(name: &str) -> Option<AnsiColors> {
    let colour = match name.to_ascii_lowercase().as_str() {
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "blue" => AnsiColors::Blue,
        "yellow" => AnsiColors::Yellow,
        "purple" | "magenta" => AnsiColors::Magenta,
        "teal" | "cyan" => AnsiColors::Cyan,
        "orange" => AnsiColors::BrightRed,
        "gray" | "grey" => AnsiColors::BrightBlack,
        "white" => AnsiColors::White,
        "black" => AnsiColors::Black,
        _ => return None,
    };
    Some(colour)
}
