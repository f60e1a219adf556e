use chrono::Duration;
use serde::Serialize;

pub const MS_PER_DAY: i64 = 86_400_000;
pub const DAYS_PER_YEAR: f64 = 365.25;
pub const DAYS_PER_QUARTER: f64 = DAYS_PER_YEAR / 4.0;
pub const DAYS_PER_MONTH: f64 = 30.44;
pub const DAYS_PER_WEEK: u64 = 7;

/// A span expressed in several units at once.
///
/// Each unit is floored independently from `total_days` against its own
/// average length, so `years` and `months` do not nest: ten years of days
/// reports `years = 10` and `months = 120`, not `10y 0m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationBreakdown {
    pub years: u64,
    pub quarters: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub total_days: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Years,
    Quarters,
    Months,
    Weeks,
    Days,
}

impl Unit {
    pub const ALL: [Unit; 5] = [
        Unit::Years,
        Unit::Quarters,
        Unit::Months,
        Unit::Weeks,
        Unit::Days,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Unit::Years => "Years",
            Unit::Quarters => "Quarters",
            Unit::Months => "Months",
            Unit::Weeks => "Weeks",
            Unit::Days => "Days",
        }
    }
}

impl DurationBreakdown {
    /// Break a span down into average-length units. Negative spans count as zero.
    pub fn from_span(span: Duration) -> Self {
        let millis = span.num_milliseconds().max(0);
        Self::from_days((millis / MS_PER_DAY) as u64)
    }

    pub fn from_days(total_days: u64) -> Self {
        let days = total_days as f64;
        Self {
            years: (days / DAYS_PER_YEAR).floor() as u64,
            quarters: (days / DAYS_PER_QUARTER).floor() as u64,
            months: (days / DAYS_PER_MONTH).floor() as u64,
            weeks: total_days / DAYS_PER_WEEK,
            days: total_days,
            total_days,
        }
    }

    pub fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Years => self.years,
            Unit::Quarters => self.quarters,
            Unit::Months => self.months,
            Unit::Weeks => self.weeks,
            Unit::Days => self.days,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total_days == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_years_of_days() {
        let b = DurationBreakdown::from_days(3653);
        assert_eq!(b.years, 10);
        assert_eq!(b.quarters, 40);
        assert_eq!(b.weeks, 522);
        // 3653 / 30.44 = 120.006..
        assert_eq!(b.months, 120);
        assert_eq!(b.days, 3653);
        assert_eq!(b.total_days, 3653);
    }

    #[test]
    fn test_units_floor_independently() {
        // One day short of an average year.
        let b = DurationBreakdown::from_days(365);
        assert_eq!(b.years, 0);
        assert_eq!(b.quarters, 3);
        assert_eq!(b.months, 11);
        assert_eq!(b.weeks, 52);
    }

    #[test]
    fn test_from_span_truncates_partial_days() {
        let span = Duration::days(2) + Duration::hours(23) + Duration::minutes(59);
        assert_eq!(DurationBreakdown::from_span(span).total_days, 2);
    }

    #[test]
    fn test_from_span_negative_is_zero() {
        let b = DurationBreakdown::from_span(Duration::days(-3));
        assert!(b.is_zero());
        assert_eq!(b, DurationBreakdown::default());
    }

    #[test]
    fn test_get_matches_fields() {
        let b = DurationBreakdown::from_days(1000);
        let values: Vec<u64> = Unit::ALL.iter().map(|u| b.get(*u)).collect();
        assert_eq!(values, vec![b.years, b.quarters, b.months, b.weeks, b.days]);
    }
}
