use chrono::NaiveDate;
use std::fmt::Write as _;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Render `n` with comma thousands separators when `grouped`, e.g. `12,345`.
pub fn format_count(n: u64, grouped: bool) -> String {
    let digits = n.to_string();
    if !grouped || digits.len() <= 3 {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_percentage(pct: f64, precision: usize) -> String {
    format!("{:.*}%", precision, pct)
}

/// A fixed-width bar; the percentage is clamped to [0, 100] first.
pub fn progress_bar(pct: f64, width: usize) -> String {
    let pct = if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) };
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut bar = String::with_capacity(width * BAR_FILLED.len_utf8() + 2);
    bar.push('[');
    bar.extend(std::iter::repeat_n(BAR_FILLED, filled));
    bar.extend(std::iter::repeat_n(BAR_EMPTY, width - filled));
    bar.push(']');
    bar
}

/// Human display of a date. Falls back to ISO when the pattern cannot render.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}
