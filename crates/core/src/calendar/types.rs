use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar event as fetched from the backing list.
///
/// `begin_date` and `end_date` are instants with full time-of-day precision.
/// Invariant: `begin_date <= end_date`; the splitter rejects records that
/// violate it. Records are never mutated by the core, only copied into
/// per-day projections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventItem {
    pub id: Uuid,
    pub title: String,
    pub location: Option<String>,
    pub begin_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub all_day_event: bool,
}

impl EventItem {
    /// Creates a new event spanning the given instants.
    pub fn new(
        title: impl Into<String>,
        begin_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            location: None,
            begin_date,
            end_date,
            all_day_event: false,
        }
    }

    /// Sets the location for this event.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Marks this event as an all-day event.
    pub fn with_all_day(mut self, all_day_event: bool) -> Self {
        self.all_day_event = all_day_event;
        self
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A per-day projection of an [`EventItem`] used only for grid placement.
///
/// `id` is the source event's ID and is shared by every occurrence the event
/// splits into: it is unique among source records, NOT among occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOccurrence {
    pub id: Uuid,
    pub title: String,
    pub location: Option<String>,
    pub begin_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub all_day_event: bool,
}

impl DayOccurrence {
    /// The calendar day this occurrence belongs to.
    pub fn day(&self) -> NaiveDate {
        self.begin_date.date()
    }
}

/// One visible row of the month grid: a half-open week range
/// `[begin_date, end_date)` and the occurrences assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRow {
    pub begin_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub items: Vec<DayOccurrence>,
}

impl WeekRow {
    /// Creates a new week row with the given boundaries and occurrences.
    pub fn new(
        begin_date: NaiveDateTime,
        end_date: NaiveDateTime,
        items: Vec<DayOccurrence>,
    ) -> Self {
        Self {
            begin_date,
            end_date,
            items,
        }
    }

    /// Creates a week row with no occurrences assigned yet.
    pub fn empty(begin_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        Self {
            begin_date,
            end_date,
            items: Vec::new(),
        }
    }

    /// Returns true if the instant falls within this row's half-open range.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.begin_date <= instant && instant < self.end_date
    }

    /// Returns true if this row has no occurrences.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of occurrences assigned to this row.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_event_item_builder() {
        let item = EventItem::new("Offsite", dt(2024, 3, 11, 9, 0), dt(2024, 3, 13, 17, 0))
            .with_location("Lisbon")
            .with_all_day(false);

        assert_eq!(item.title, "Offsite");
        assert_eq!(item.location, Some("Lisbon".to_string()));
        assert_eq!(item.begin_date, dt(2024, 3, 11, 9, 0));
        assert_eq!(item.end_date, dt(2024, 3, 13, 17, 0));
        assert!(!item.all_day_event);
    }

    #[test]
    fn test_event_item_serde_round_trip() {
        let item = EventItem::new("Review", dt(2024, 3, 11, 9, 0), dt(2024, 3, 11, 10, 0));
        let json = serde_json::to_string(&item).unwrap();
        let parsed: EventItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_week_row_contains_is_half_open() {
        let row = WeekRow::empty(dt(2024, 2, 11, 0, 0), dt(2024, 2, 18, 0, 0));

        assert!(row.contains(dt(2024, 2, 11, 0, 0)));
        assert!(row.contains(dt(2024, 2, 17, 23, 59)));
        assert!(!row.contains(dt(2024, 2, 18, 0, 0)));
        assert!(!row.contains(dt(2024, 2, 10, 23, 59)));
    }

    #[test]
    fn test_week_row_item_count() {
        let row = WeekRow::empty(dt(2024, 2, 11, 0, 0), dt(2024, 2, 18, 0, 0));
        assert!(row.is_empty());
        assert_eq!(row.item_count(), 0);
    }

    #[test]
    fn test_day_occurrence_day() {
        let occurrence = DayOccurrence {
            id: Uuid::new_v4(),
            title: "Standup".to_string(),
            location: None,
            begin_date: dt(2024, 2, 12, 9, 0),
            end_date: dt(2024, 2, 12, 9, 15),
            all_day_event: false,
        };
        assert_eq!(occurrence.day(), NaiveDate::from_ymd_opt(2024, 2, 12).unwrap());
    }
}
