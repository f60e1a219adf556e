use crate::commands::show;
use crate::config::Config;
use crate::lifespan::boundary::DATE_FORMAT;
use crate::platform;
use crate::state::with_state_lock;
use anyhow::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};

/// Remember one or both boundaries; whichever is omitted keeps its stored value.
///
/// The stored pair is checked the same way `show` would check it at `at`
/// (or now), and a warning is printed if `show` would reject it.
pub fn set(
    config: &Config,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    at: Option<DateTime<FixedOffset>>,
) -> Result<()> {
    if start.is_none() && end.is_none() {
        anyhow::bail!("Nothing to set. Pass --start and/or --end");
    }

    let (lock_path, state_path) =
        platform::state_paths(config.state.state_dir_override.as_ref())?;

    let dates = with_state_lock(&lock_path, &state_path, |state| {
        state.dates = state.dates.merged(start, end);
        state.touch();
        Ok(state.dates)
    })?;

    if let Some(start) = start {
        println!("✓ Start date set to {}", start.format(DATE_FORMAT));
    }
    if let Some(end) = end {
        println!("✓ End date set to {}", end.format(DATE_FORMAT));
    }

    // Only a hint: the ordering against "now" changes over time anyway.
    if let Some((start, end)) = dates.both() {
        if let Err(e) = show::evaluate(config.dates.timezone, start, end, at) {
            tracing::warn!(%start, %end, "stored dates do not currently form a valid span");
            eprintln!("Warning: {}.", e);
        }
    }

    Ok(())
}

pub fn clear(config: &Config) -> Result<()> {
    let (lock_path, state_path) =
        platform::state_paths(config.state.state_dir_override.as_ref())?;

    let had_dates = with_state_lock(&lock_path, &state_path, |state| {
        let had_dates = !state.dates.is_empty();
        state.dates = Default::default();
        state.touch();
        Ok(had_dates)
    })?;

    if had_dates {
        println!("✓ Cleared stored dates");
    } else {
        println!("No stored dates to clear.");
    }

    Ok(())
}
