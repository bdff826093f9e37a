use chrono::NaiveDate;
use log::warn;

pub const DEFAULT_DURATION_DAYS: u32 = 3;
const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Ignoring malformed date '{}': {}", value, e);
            None
        }
    }
}

/// Number of itinerary days for an inclusive `YYYY-MM-DD` range.
///
/// Missing, malformed or reversed ranges fall back to `default_days`. This
/// never fails.
pub fn estimate_duration(
    start_date: Option<&str>,
    end_date: Option<&str>,
    default_days: u32,
) -> u32 {
    let default_days = default_days.max(1);
    let (Some(start), Some(end)) = (parse_date(start_date), parse_date(end_date)) else {
        return default_days;
    };

    if end < start {
        warn!(
            "End date {} is before start date {}, using default duration",
            end, start
        );
        return default_days;
    }

    let days = (end - start).num_days() + 1;
    u32::try_from(days).unwrap_or(default_days)
}
