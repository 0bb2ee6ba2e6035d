use chrono::NaiveDateTime;

use crate::datetime::{begin_of_day, diff_dates, end_of_day, next_day};

use super::error::EventError;
use super::types::{DayOccurrence, EventItem};

/// Splits an event into one occurrence per calendar day it touches, in
/// increasing date order.
///
/// A single-day event yields exactly one occurrence identical to the input.
/// A multi-day event yields `diff_dates(begin, end) + 1` occurrences: the
/// first keeps the original begin instant and is clamped to the end of its
/// day, intermediate days span the full day, and the last starts at the
/// begin of its day and keeps the original end instant. Every occurrence
/// carries the source event's `id`.
pub fn split_event_by_day(item: &EventItem) -> Result<Vec<DayOccurrence>, EventError> {
    if item.begin_date > item.end_date {
        return Err(EventError::InvalidRange);
    }

    let span_days = diff_dates(item.begin_date, item.end_date);
    if span_days == 0 {
        return Ok(vec![occurrence(item, item.begin_date, item.end_date)]);
    }

    let mut occurrences = Vec::with_capacity(span_days as usize + 1);
    occurrences.push(occurrence(item, item.begin_date, end_of_day(item.begin_date)?));

    let mut day = begin_of_day(item.begin_date);
    for _ in 1..span_days {
        day = next_day(day)?;
        occurrences.push(occurrence(item, day, end_of_day(day)?));
    }

    occurrences.push(occurrence(item, begin_of_day(item.end_date), item.end_date));
    Ok(occurrences)
}

fn occurrence(
    item: &EventItem,
    begin_date: NaiveDateTime,
    end_date: NaiveDateTime,
) -> DayOccurrence {
    DayOccurrence {
        id: item.id,
        title: item.title.clone(),
        location: item.location.clone(),
        begin_date,
        end_date,
        all_day_event: item.all_day_event,
    }
}
