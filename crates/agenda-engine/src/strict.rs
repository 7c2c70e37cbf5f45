use regex::Regex;
use std::sync::LazyLock;

/// Exact `Date.toISOString()` output: UTC, millisecond precision, `Z` suffix.
/// The open-ended `{4,}` year matches the session service's own validator.
static ISO_STRING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4,}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}Z$").unwrap()
});

/// Whether `value` has the shape of `Date.toISOString()` output.
///
/// Shape only; `2019-13-40T99:00:00.000Z` passes here and fails to parse.
pub fn check_iso_format(value: &str) -> bool {
    ISO_STRING_REGEX.is_match(value)
}
