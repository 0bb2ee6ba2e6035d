//! Date boundary math for the month grid.
//!
//! Every boundary follows the half-open convention: the "end" of a day, week,
//! or month is the first instant of the next one, so ranges compose as
//! `[begin, end)` without double-counting the boundary instant.

use chrono::{Datelike, Days, Months, NaiveDateTime, NaiveTime, Weekday};
use thiserror::Error;

/// The weekday every grid week begins on.
pub const WEEK_START: Weekday = Weekday::Sun;

/// Errors that can occur during date arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("Date arithmetic left the representable date range")]
    OutOfRange,
}

/// Result type for date arithmetic that can leave chrono's representable range.
pub type Result<T> = std::result::Result<T, DateTimeError>;

/// Returns the first instant of `d`'s calendar day.
pub fn begin_of_day(d: NaiveDateTime) -> NaiveDateTime {
    d.date().and_time(NaiveTime::MIN)
}

/// Returns the first instant of the day after `d` (exclusive day bound).
pub fn end_of_day(d: NaiveDateTime) -> Result<NaiveDateTime> {
    begin_of_day(d)
        .checked_add_days(Days::new(1))
        .ok_or(DateTimeError::OutOfRange)
}

/// Returns the first instant of the most recent week start.
///
/// Identity (after day truncation) when `d` already falls on the week start.
pub fn begin_of_week(d: NaiveDateTime) -> Result<NaiveDateTime> {
    let offset = d.weekday().days_since(WEEK_START);
    begin_of_day(d)
        .checked_sub_days(Days::new(u64::from(offset)))
        .ok_or(DateTimeError::OutOfRange)
}

/// Returns `begin_of_week(d)` advanced by exactly 7 days (exclusive week bound).
pub fn end_of_week(d: NaiveDateTime) -> Result<NaiveDateTime> {
    begin_of_week(d)?
        .checked_add_days(Days::new(7))
        .ok_or(DateTimeError::OutOfRange)
}

/// Returns the first instant of `d`'s month.
pub fn begin_of_month(d: NaiveDateTime) -> NaiveDateTime {
    let first = d.date().with_day(1).expect("day 1 is valid in every month");
    first.and_time(NaiveTime::MIN)
}

/// Returns the first instant of the month after `d` (exclusive month bound).
pub fn end_of_month(d: NaiveDateTime) -> Result<NaiveDateTime> {
    begin_of_month(d)
        .checked_add_months(Months::new(1))
        .ok_or(DateTimeError::OutOfRange)
}

/// Advances `d` by one day, preserving time-of-day.
pub fn next_day(d: NaiveDateTime) -> Result<NaiveDateTime> {
    d.checked_add_days(Days::new(1))
        .ok_or(DateTimeError::OutOfRange)
}

/// Moves `d` back by one day, preserving time-of-day.
pub fn prev_day(d: NaiveDateTime) -> Result<NaiveDateTime> {
    d.checked_sub_days(Days::new(1))
        .ok_or(DateTimeError::OutOfRange)
}

/// Advances `d` to the same day-of-month in the next month.
///
/// When the target month is shorter, clamps to its last day (Jan 31 -> Feb 28
/// or Feb 29 in leap years).
pub fn next_month(d: NaiveDateTime) -> Result<NaiveDateTime> {
    d.checked_add_months(Months::new(1))
        .ok_or(DateTimeError::OutOfRange)
}

/// Moves `d` to the same day-of-month in the previous month, with the same
/// clamping rule as [`next_month`].
pub fn prev_month(d: NaiveDateTime) -> Result<NaiveDateTime> {
    d.checked_sub_months(Months::new(1))
        .ok_or(DateTimeError::OutOfRange)
}

/// Advances `d` by one year; Feb 29 clamps to Feb 28 on non-leap years.
pub fn next_year(d: NaiveDateTime) -> Result<NaiveDateTime> {
    d.checked_add_months(Months::new(12))
        .ok_or(DateTimeError::OutOfRange)
}

/// Moves `d` back by one year, with the same leap-day clamp as [`next_year`].
pub fn prev_year(d: NaiveDateTime) -> Result<NaiveDateTime> {
    d.checked_sub_months(Months::new(12))
        .ok_or(DateTimeError::OutOfRange)
}

/// Returns the number of whole calendar days from `a` to `b` (`b - a`),
/// ignoring time-of-day on both sides.
pub fn diff_dates(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    b.date().signed_duration_since(a.date()).num_days()
}
