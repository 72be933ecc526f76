use chrono::NaiveDate;
use chrono::Utc;

/// Lenient route-date normalization: trims and parses anything dateparser
/// accepts; everything else becomes `None` instead of an error.
pub fn normalize_route_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    dateparser::parse_with_timezone(trimmed, &Utc)
        .ok()
        .map(|dt| dt.date_naive())
}
