use chrono::NaiveDateTime;

use crate::datetime::DateTimeError;

use super::grid::build_week_rows;
use super::split::split_event_by_day;
use super::types::{DayOccurrence, EventItem, WeekRow};

/// Returns the occurrences whose begin instant falls within the row's
/// half-open `[begin_date, end_date)` range.
///
/// The splitter has already normalized multi-day events into single-day
/// pieces, so membership is a plain containment check on the begin instant.
pub fn assign_occurrences_to_week(
    row: &WeekRow,
    occurrences: &[DayOccurrence],
) -> Vec<DayOccurrence> {
    occurrences
        .iter()
        .filter(|occurrence| row.contains(occurrence.begin_date))
        .cloned()
        .collect()
}

/// Splits every event into day occurrences and concatenates the results.
///
/// A malformed event is reported and excluded, never repaired: the remaining
/// events still produce a usable view.
pub fn expand_events(items: &[EventItem]) -> Vec<DayOccurrence> {
    let mut occurrences = Vec::new();
    for item in items {
        match split_event_by_day(item) {
            Ok(mut days) => occurrences.append(&mut days),
            Err(error) => {
                tracing::warn!(id = %item.id, %error, "excluding event from the month view");
            }
        }
    }
    occurrences
}

/// Builds the full month view for the month containing `reference`: the week
/// rows of the visible grid, each populated with its day occurrences in
/// begin-instant order.
pub fn build_month_view(
    reference: NaiveDateTime,
    items: &[EventItem],
) -> Result<Vec<WeekRow>, DateTimeError> {
    let occurrences = expand_events(items);
    let rows = build_week_rows(reference)?
        .into_iter()
        .map(|row| {
            let mut assigned = assign_occurrences_to_week(&row, &occurrences);
            assigned.sort_by(|a, b| a.begin_date.cmp(&b.begin_date));
            WeekRow::new(row.begin_date, row.end_date, assigned)
        })
        .collect();
    Ok(rows)
}
