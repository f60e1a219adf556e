//! Date arithmetic behind the lived/remaining breakdown.
//!
//! Everything in here is pure: the reference instant is always passed in,
//! never read from the clock.

pub mod boundary;
pub mod breakdown;
pub mod calculator;

pub use breakdown::{DurationBreakdown, Unit};
pub use calculator::{compute, CalculationResult};
