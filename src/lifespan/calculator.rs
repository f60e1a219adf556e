use super::boundary::start_of_day;
use super::breakdown::DurationBreakdown;
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub lived: DurationBreakdown,
    pub remaining: DurationBreakdown,
    /// Share of the start..end span already elapsed, in percent, within [0, 100].
    pub life_progress: f64,
}

/// Compute lived/remaining breakdowns and progress for `start..end` as seen at `now`.
///
/// Both dates are read as the start of that day in `now`'s timezone. Returns
/// `None` unless `start <= now < end` (which also implies `start < end`).
pub fn compute<Tz: TimeZone>(
    start: NaiveDate,
    end: NaiveDate,
    now: &DateTime<Tz>,
) -> Option<CalculationResult> {
    let tz = now.timezone();
    let start = start_of_day(start, &tz);
    let end = start_of_day(end, &tz);

    if start > *now || end <= start || end <= *now {
        tracing::debug!(
            start_ms = start.timestamp_millis(),
            end_ms = end.timestamp_millis(),
            now_ms = now.timestamp_millis(),
            "rejected date ordering"
        );
        return None;
    }

    let lived = now.clone().signed_duration_since(start.clone());
    let remaining = end.clone().signed_duration_since(now.clone());
    let total = end.signed_duration_since(start);

    let ratio = lived.num_milliseconds() as f64 / total.num_milliseconds() as f64 * 100.0;

    Some(CalculationResult {
        lived: DurationBreakdown::from_span(lived),
        remaining: DurationBreakdown::from_span(remaining),
        life_progress: clamp_percentage(ratio),
    })
}

/// Bound a percentage to [0, 100]. NaN maps to 0.
pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}
