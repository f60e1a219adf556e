use crate::OutputFormat;
use crate::config::{Config, DateZone, DisplayConfig};
use crate::error::LifeError;
use crate::lifespan::{CalculationResult, DurationBreakdown, Unit, compute};
use crate::platform;
use crate::state::{State, StoredDates};
use crate::utils::format::{format_count, format_date, format_percentage, progress_bar};
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, TimeZone, Utc};
use serde::Serialize;
use std::fmt::{self, Write as _};

/// Arguments of `lifecalc show`; explicit dates win over stored ones.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub at: Option<DateTime<FixedOffset>>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub now: DateTime<FixedOffset>,
    #[serde(flatten)]
    pub result: CalculationResult,
}

const LIVED_CAPTIONS: [&str; 5] = [
    "Years on this Earth",
    "Quarters experienced",
    "Months of experiences",
    "Weeks of memories",
    "Days of existence",
];

const REMAINING_CAPTIONS: [&str; 5] = [
    "Years ahead",
    "Seasons to experience",
    "Months to cherish",
    "Weeks to make count",
    "Days left to live",
];

pub fn show(config: &Config, opts: ShowOptions) -> Result<()> {
    let (_, state_path) = platform::state_paths(config.state.state_dir_override.as_ref())?;
    let stored = State::load(&state_path)?.dates;
    let dates = stored.merged(opts.start, opts.end);

    let Some((start, end)) = dates.both() else {
        print_missing(&dates);
        return Ok(());
    };

    let report = evaluate(config.dates.timezone, start, end, opts.at)?;

    match opts.format {
        OutputFormat::Text => {
            let text = render_text(&report, &config.display).context("Failed to render report")?;
            print!("{}", text);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Evaluate `start..end` at `at`, or at the current time, in the configured zone.
pub fn evaluate(
    zone: DateZone,
    start: NaiveDate,
    end: NaiveDate,
    at: Option<DateTime<FixedOffset>>,
) -> Result<Report, LifeError> {
    match zone {
        DateZone::Local => build_report(start, end, resolve_now(at, &Local)),
        DateZone::Utc => build_report(start, end, resolve_now(at, &Utc)),
    }
}

/// The clock is read here and nowhere else.
fn resolve_now<Tz: TimeZone>(at: Option<DateTime<FixedOffset>>, tz: &Tz) -> DateTime<Tz> {
    match at {
        Some(at) => at.with_timezone(tz),
        None => Utc::now().with_timezone(tz),
    }
}

pub fn build_report<Tz: TimeZone>(
    start: NaiveDate,
    end: NaiveDate,
    now: DateTime<Tz>,
) -> Result<Report, LifeError> {
    let result = compute(start, end, &now).ok_or(LifeError::InvalidDateOrdering)?;
    let offset = now.offset().fix();

    Ok(Report {
        start,
        end,
        now: now.with_timezone(&offset),
        result,
    })
}

fn print_missing(dates: &StoredDates) {
    let missing = match (dates.start, dates.end) {
        (None, None) => "start and end dates",
        (None, Some(_)) => "start date",
        _ => "end date",
    };
    println!("No {} set yet.", missing);
    println!("   Set them with: lifecalc set --start YYYY-MM-DD --end YYYY-MM-DD");
}

pub fn render_text(report: &Report, display: &DisplayConfig) -> Result<String, fmt::Error> {
    let result = &report.result;
    let mut out = String::new();

    writeln!(out, "Life Progress")?;
    writeln!(
        out,
        "  {} of your projected life completed",
        format_percentage(result.life_progress, display.progress_precision)
    )?;
    writeln!(
        out,
        "  {}\n",
        progress_bar(result.life_progress, display.progress_bar_width)
    )?;

    writeln!(
        out,
        "Time You've Lived (since {})",
        format_date(report.start, &display.date_format)
    )?;
    render_breakdown(&mut out, &result.lived, &LIVED_CAPTIONS, display.group_digits)?;

    writeln!(
        out,
        "\nTime Remaining (until {})",
        format_date(report.end, &display.date_format)
    )?;
    render_breakdown(
        &mut out,
        &result.remaining,
        &REMAINING_CAPTIONS,
        display.group_digits,
    )?;

    Ok(out)
}

fn render_breakdown(
    out: &mut String,
    b: &DurationBreakdown,
    captions: &[&str; 5],
    grouped: bool,
) -> fmt::Result {
    for (unit, caption) in Unit::ALL.iter().zip(captions) {
        writeln!(
            out,
            "  {:<10} {:>12}  {}",
            unit.label(),
            format_count(b.get(*unit), grouped),
            caption
        )?;
    }
    Ok(())
}
