use crate::core::calendar::{day_of_week, week_of_year};
use crate::domain::model::{ContribLevel, ContributionDay, RawDay};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NO_CONTRIBUTIONS: &str = "No contributions";

/// Turns one raw cell into a typed day.
///
/// Returns `None` when the date is not strictly `YYYY-MM-DD`; such cells are
/// markup noise. Count and level fall back to 0 instead of failing.
pub fn normalize_day(raw: &RawDay) -> Option<ContributionDay> {
    let date = parse_date(&raw.date)?;
    let level = parse_level(&raw.level);

    Some(ContributionDay {
        date,
        count: parse_count(&raw.text),
        level,
        day_of_week: day_of_week(date),
        week_of_year: week_of_year(date),
        contrib_level: ContribLevel::from_level(level),
    })
}

/// chrono also accepts unpadded and signed fields, so the date must format back
/// to the exact input.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == text).then_some(date)
}

/// "No contributions" / "" -> 0, "N contributions" -> N, anything else -> 0.
pub fn parse_count(text: &str) -> u64 {
    let text = text.trim();
    if text.is_empty() || text == NO_CONTRIBUTIONS {
        return 0;
    }
    text.split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(0)
}

pub fn parse_level(level: &str) -> i64 {
    level.parse().unwrap_or(0)
}

/// Normalizes every cell in source order, dropping the ones with bad dates.
pub fn normalize_all(cells: &[RawDay]) -> Vec<ContributionDay> {
    let mut days = Vec::with_capacity(cells.len());
    for cell in cells {
        match normalize_day(cell) {
            Some(day) => days.push(day),
            None => tracing::debug!("Skipping cell with unparsable date '{}'", cell.date),
        }
    }
    days
}
