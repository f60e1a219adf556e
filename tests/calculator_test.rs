use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use lifecalc::lifespan::boundary::start_of_day;
use lifecalc::lifespan::{DurationBreakdown, compute};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[test]
fn test_valid_triples_stay_in_bounds() {
    let start = date(1980, 6, 15);
    let end = date(2060, 6, 15);
    let mut now = start_of_day(start, &Utc);
    let end_instant = start_of_day(end, &Utc);

    while now < end_instant {
        let result = compute(start, end, &now).expect("ordered inputs must compute");
        assert!((0.0..=100.0).contains(&result.life_progress));
        now += Duration::days(997);
    }
}

#[test]
fn test_start_equal_now_lived_is_zero() {
    let now = at(2024, 5, 1);
    let result = compute(date(2024, 5, 1), date(2084, 5, 1), &now).unwrap();

    assert_eq!(result.lived, DurationBreakdown::default());
    assert_eq!(result.life_progress, 0.0);
}

#[test]
fn test_one_day_span() {
    let now = at(2024, 5, 1);
    let result = compute(date(2024, 5, 1), date(2024, 5, 2), &now).unwrap();

    assert_eq!(result.remaining.total_days, 1);
    assert_eq!(result.remaining.days, 1);
    assert_eq!(result.remaining.weeks, 0);
    assert_eq!(result.lived.total_days, 0);
}

#[test]
fn test_progress_tends_to_hundred_near_end() {
    let end = date(2070, 1, 1);
    let end_instant = start_of_day(end, &Utc);

    let mut last = 0.0;
    for ms in [86_400_000_i64, 3_600_000, 1_000, 1] {
        let now = end_instant - Duration::milliseconds(ms);
        let result = compute(date(1970, 1, 1), end, &now).unwrap();
        assert!(result.life_progress <= 100.0);
        assert!(result.life_progress >= last);
        last = result.life_progress;
    }
    assert!((100.0 - last).abs() < 1e-6);
}

#[test]
fn test_progress_monotonic_in_now() {
    let start = date(1995, 3, 10);
    let end = date(2075, 3, 10);
    let mut now = start_of_day(start, &Utc);
    let mut last = -1.0;

    for _ in 0..500 {
        let result = compute(start, end, &now).unwrap();
        assert!(result.life_progress >= last);
        last = result.life_progress;
        now += Duration::hours(1399);
    }
}

#[test]
fn test_rejects_start_in_future() {
    let now = at(2024, 1, 1);
    assert!(compute(date(2050, 1, 1), date(2090, 1, 1), &now).is_none());
}

#[test]
fn test_rejects_end_before_start() {
    let now = at(2024, 1, 1);
    assert!(compute(date(2000, 1, 1), date(1999, 1, 1), &now).is_none());
}

#[test]
fn test_rejects_end_not_after_now() {
    let now = at(2024, 1, 1);
    assert!(compute(date(2000, 1, 1), date(2024, 1, 1), &now).is_none());
    assert!(compute(date(2000, 1, 1), date(2010, 1, 1), &now).is_none());
}

#[test]
fn test_lived_and_remaining_are_independent_spans() {
    // Partial days are truncated on both sides, so the totals need not add up.
    let now = at(2024, 1, 1) + Duration::hours(12);
    let result = compute(date(2024, 1, 1), date(2024, 1, 4), &now).unwrap();

    assert_eq!(result.lived.total_days, 0);
    assert_eq!(result.remaining.total_days, 2);
}

#[test]
fn test_ten_year_breakdown() {
    let now = at(2010, 1, 1);
    let result = compute(date(2000, 1, 1), date(2050, 1, 1), &now).unwrap();

    assert_eq!(result.lived.total_days, 3653);
    assert_eq!(result.lived.years, 10);
    assert_eq!(result.lived.weeks, 522);
    assert_eq!(result.lived.months, 120);
}

#[test]
fn test_identical_inputs_identical_results() {
    let now = at(2024, 7, 4) + Duration::minutes(1234);
    let a = compute(date(1988, 2, 29), date(2068, 2, 29), &now).unwrap();
    let b = compute(date(1988, 2, 29), date(2068, 2, 29), &now).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.life_progress.to_bits(), b.life_progress.to_bits());
}
