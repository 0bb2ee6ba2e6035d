use chrono::{Days, NaiveDateTime};

use crate::datetime::{self, DateTimeError};

use super::types::WeekRow;

/// Returns the half-open `[begin, end)` range of the visible month grid for
/// the month containing `reference`.
///
/// The grid begins on the week start at or before the first of the month and
/// ends on the week start after the month's exclusive upper bound, so leading
/// and trailing days from adjacent months are included.
pub fn grid_range(
    reference: NaiveDateTime,
) -> Result<(NaiveDateTime, NaiveDateTime), DateTimeError> {
    let begin = datetime::begin_of_week(datetime::begin_of_month(reference))?;
    let end = datetime::end_of_week(datetime::end_of_month(reference)?)?;
    Ok((begin, end))
}

/// Lazy iterator over the week rows covering a month grid.
///
/// Produced by [`week_rows`]; yields rows in order, each spanning exactly
/// 7 days, with no occurrences assigned.
#[derive(Debug, Clone)]
pub struct WeekRows {
    next_begin: NaiveDateTime,
    grid_end: NaiveDateTime,
}

impl Iterator for WeekRows {
    type Item = WeekRow;

    fn next(&mut self) -> Option<WeekRow> {
        if self.next_begin >= self.grid_end {
            return None;
        }
        // Both bounds are week-aligned, so begin + 7 days never passes grid_end.
        let end = self.next_begin.checked_add_days(Days::new(7))?;
        let row = WeekRow::empty(self.next_begin, end);
        self.next_begin = end;
        Some(row)
    }
}

/// Returns the sequence of week rows covering the month containing
/// `reference`, in increasing date order.
///
/// Always a whole number of weeks because both grid bounds are week-aligned.
pub fn week_rows(reference: NaiveDateTime) -> Result<WeekRows, DateTimeError> {
    let (begin, end) = grid_range(reference)?;
    Ok(WeekRows {
        next_begin: begin,
        grid_end: end,
    })
}

/// Collects [`week_rows`] into a `Vec`.
pub fn build_week_rows(reference: NaiveDateTime) -> Result<Vec<WeekRow>, DateTimeError> {
    Ok(week_rows(reference)?.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::{begin_of_month, end_of_month};
    use chrono::{Duration, NaiveDate};

    fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_leap_february_grid() {
        let rows = build_week_rows(dt(2024, 2, 15, 12, 0)).unwrap();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].begin_date, dt(2024, 1, 28, 0, 0));
        assert_eq!(rows.last().unwrap().end_date, dt(2024, 3, 3, 0, 0));
    }

    #[test]
    fn test_rows_advance_by_exactly_seven_days() {
        let rows = build_week_rows(dt(2024, 2, 15, 12, 0)).unwrap();

        for pair in rows.windows(2) {
            assert_eq!(pair[1].begin_date - pair[0].begin_date, Duration::days(7));
        }
        for row in &rows {
            assert_eq!(row.end_date - row.begin_date, Duration::days(7));
        }
    }

    #[test]
    fn test_grid_covers_the_whole_month() {
        let reference = dt(2024, 2, 15, 12, 0);
        let rows = build_week_rows(reference).unwrap();

        assert!(rows[0].begin_date <= begin_of_month(reference));
        assert!(rows.last().unwrap().end_date >= end_of_month(reference).unwrap());
    }

    #[test]
    fn test_year_boundary_december_to_january() {
        // December 2024 begins on a Sunday, so there are no leading days.
        let rows = build_week_rows(dt(2024, 12, 15, 0, 0)).unwrap();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].begin_date, dt(2024, 12, 1, 0, 0));
        assert_eq!(rows.last().unwrap().end_date, dt(2025, 1, 5, 0, 0));
    }

    #[test]
    fn test_six_row_month() {
        // March 2025 begins on a Saturday and has 31 days.
        let rows = build_week_rows(dt(2025, 3, 10, 0, 0)).unwrap();

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].begin_date, dt(2025, 2, 23, 0, 0));
        assert_eq!(rows.last().unwrap().end_date, dt(2025, 4, 6, 0, 0));
    }

    #[test]
    fn test_row_count_stays_within_bounds() {
        for year in [2023, 2024, 2025] {
            for month in 1..=12 {
                let rows = build_week_rows(dt(year, month, 10, 0, 0)).unwrap();
                assert!(
                    (4..=6).contains(&rows.len()),
                    "{year}-{month} produced {} rows",
                    rows.len()
                );
            }
        }
    }

    #[test]
    fn test_same_month_references_yield_same_grid() {
        let first = build_week_rows(dt(2024, 2, 1, 0, 0)).unwrap();
        let last = build_week_rows(dt(2024, 2, 29, 23, 59)).unwrap();
        assert_eq!(first, last);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let rows = week_rows(dt(2024, 2, 15, 0, 0)).unwrap();
        let first_pass: Vec<_> = rows.clone().collect();
        let second_pass: Vec<_> = rows.collect();
        assert_eq!(first_pass, second_pass);
    }
}
