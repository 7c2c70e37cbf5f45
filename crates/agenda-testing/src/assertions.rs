//! Assertions relating calendar output back to its input records.

use agenda_types::SessionRecord;
use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that `json` is a calendar array matching `records` one-for-one.
///
/// Checks length, order, and every copied field. `dates` is compared as the
/// `toISOString()` rendering of the record's parsed date.
pub fn assert_calendar_matches(json: &Value, records: &[SessionRecord]) -> Result<()> {
    let entries = json.as_array().context("Expected calendar JSON array")?;

    if entries.len() != records.len() {
        anyhow::bail!(
            "Expected {} calendar entries, got {}",
            records.len(),
            entries.len()
        );
    }

    for (i, (entry, record)) in entries.iter().zip(records).enumerate() {
        let expected_date = agenda_types::to_iso_string(
            &record
                .date()
                .with_context(|| format!("Record {} has an unparseable date", i))?,
        );

        let checks = [
            ("key", entry["key"].as_str(), record.slug.as_str()),
            ("dot", entry["dot"].as_str(), record.colour.as_str()),
            (
                "popover.label",
                entry["popover"]["label"].as_str(),
                record.title.as_str(),
            ),
            ("dates", entry["dates"].as_str(), expected_date.as_str()),
        ];

        for (field, actual, expected) in checks {
            if actual != Some(expected) {
                anyhow::bail!(
                    "Entry {} field {}: expected {:?}, got {:?}",
                    i,
                    field,
                    expected,
                    actual
                );
            }
        }
    }

    Ok(())
}

/// Assert the calendar keys, in order.
pub fn assert_keys(json: &Value, expected: &[&str]) -> Result<()> {
    let keys = json
        .as_array()
        .context("Expected calendar JSON array")?
        .iter()
        .map(|entry| entry["key"].as_str().unwrap_or_default())
        .collect::<Vec<_>>();

    if keys != expected {
        anyhow::bail!("Expected keys {:?}, got {:?}", expected, keys);
    }

    Ok(())
}
