use crate::error::LifeError;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date as typed on the command line.
pub fn parse_date(input: &str) -> Result<NaiveDate, LifeError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| LifeError::InvalidDate {
        input: input.to_string(),
    })
}

/// Parse an explicit reference instant (`--at`).
pub fn parse_instant(input: &str) -> Result<DateTime<FixedOffset>, LifeError> {
    DateTime::parse_from_rfc3339(input.trim()).map_err(|_| LifeError::InvalidInstant {
        input: input.to_string(),
    })
}

/// The instant at which `date` begins in `tz`.
///
/// Ambiguous midnights resolve to the earliest candidate. When a DST jump skips
/// midnight, the day starts at the first wall-clock time after the gap.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight).earliest().unwrap_or_else(|| {
        // Offset from before the jump; midnight under it lands inside the gap,
        // which maps forward onto the same calendar day.
        let offset = tz
            .offset_from_utc_datetime(&(midnight - Duration::days(1)))
            .fix();
        let utc = midnight - Duration::seconds(i64::from(offset.local_minus_utc()));
        tz.from_utc_datetime(&utc)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("1990-05-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 5, 1).unwrap());
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert!(parse_date(" 2024-02-29 ").is_ok());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("May 1st").unwrap_err();
        assert_eq!(
            err,
            LifeError::InvalidDate {
                input: "May 1st".to_string()
            }
        );
    }

    #[test]
    fn test_parse_date_rejects_impossible_day() {
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test]
    fn test_parse_instant_keeps_offset() {
        let at = parse_instant("2024-01-01T12:00:00+02:00").unwrap();
        assert_eq!(at.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn test_parse_instant_rejects_bare_date() {
        assert!(parse_instant("2024-01-01").is_err());
    }

    #[test]
    fn test_start_of_day_utc() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let instant = start_of_day(date, &Utc);
        assert_eq!(instant.to_rfc3339(), "2000-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_start_of_day_fixed_offset() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let tz = FixedOffset::east_opt(-5 * 3600).unwrap();
        let instant = start_of_day(date, &tz);
        assert_eq!(instant.with_timezone(&Utc).to_rfc3339(), "2000-01-01T05:00:00+00:00");
    }

    #[test]
    fn test_start_of_day_when_dst_skips_midnight() {
        use chrono::{Datelike, Timelike};
        use chrono_tz::Asia::Beirut;

        // Beirut jumped from 00:00 EET straight to 01:00 EEST on 2022-03-27.
        let date = NaiveDate::from_ymd_opt(2022, 3, 27).unwrap();
        let instant = start_of_day(date, &Beirut);

        assert_eq!(instant.date_naive(), date);
        assert_eq!(instant.hour(), 1);
        assert_eq!(instant.day(), 27);
        assert_eq!(instant.with_timezone(&Utc).to_rfc3339(), "2022-03-26T22:00:00+00:00");
    }
}
