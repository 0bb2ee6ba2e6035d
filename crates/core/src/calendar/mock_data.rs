//! Mock data generation for testing and seeding.
//!
//! Pure functions producing deterministic event mixes; usable from unit
//! tests and store seeding alike.

use chrono::{Duration, NaiveDate, NaiveTime};

use super::types::EventItem;

/// Generate mock events spread around a center date.
///
/// Creates a realistic distribution:
/// - ~20% multi-day events (trips, conferences)
/// - ~30% all-day events (holidays, birthdays)
/// - ~50% timed single-day activities (meetings, appointments)
///
/// # Example
///
/// ```
/// use eventcal_core::calendar::generate_seed_items;
/// use chrono::NaiveDate;
///
/// let center = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let items = generate_seed_items(center, 20);
///
/// assert_eq!(items.len(), 20);
/// ```
pub fn generate_seed_items(center_date: NaiveDate, count: u32) -> Vec<EventItem> {
    let time = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0).unwrap();

    let multi_day_count = (count as f32 * 0.20).ceil() as u32;
    let all_day_count = (count as f32 * 0.30).ceil() as u32;
    let timed_count = count.saturating_sub(multi_day_count + all_day_count);

    let mut items = Vec::with_capacity(count as usize);

    let multi_day_titles = [
        "Team Retreat",
        "Conference",
        "Vacation",
        "Training Workshop",
        "Trade Fair",
    ];
    for i in 0..multi_day_count {
        let start = center_date + Duration::days(i as i64 * 3 - 3);
        let end = start + Duration::days(2);
        let title = multi_day_titles[i as usize % multi_day_titles.len()];
        items.push(EventItem::new(
            title,
            start.and_time(time(9, 0)),
            end.and_time(time(17, 0)),
        ));
    }

    let all_day_titles = [
        "Birthday Party",
        "Public Holiday",
        "Company Anniversary",
        "Release Day",
        "Moving Day",
    ];
    for i in 0..all_day_count {
        let date = center_date + Duration::days(i as i64 - 1);
        let title = all_day_titles[i as usize % all_day_titles.len()];
        items.push(
            EventItem::new(title, date.and_time(time(0, 0)), date.and_time(time(23, 59)))
                .with_all_day(true),
        );
    }

    let timed_titles = [
        "Standup Meeting",
        "Lunch with Team",
        "Product Review",
        "Gym Session",
        "Team Sync",
        "Doctor Appointment",
        "Code Review",
        "Sprint Planning",
    ];
    let locations = ["Room 1", "Room 2", "Cafeteria", "Offsite"];
    for i in 0..timed_count {
        let date = center_date + Duration::days((i % 7) as i64 - 3);
        let start_hour = 8 + (i % 9);
        let title = timed_titles[i as usize % timed_titles.len()];
        let location = locations[i as usize % locations.len()];
        items.push(
            EventItem::new(
                title,
                date.and_time(time(start_hour, 0)),
                date.and_time(time(start_hour + 1, 0)),
            )
            .with_location(location),
        );
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::split_event_by_day;

    fn center() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_generates_requested_count() {
        assert_eq!(generate_seed_items(center(), 20).len(), 20);
        assert_eq!(generate_seed_items(center(), 30).len(), 30);
    }

    #[test]
    fn test_contains_a_mix_of_kinds() {
        let items = generate_seed_items(center(), 20);

        assert!(items.iter().any(|i| i.all_day_event));
        assert!(items.iter().any(|i| i.begin_date.date() != i.end_date.date()));
        assert!(items.iter().any(|i| i.location.is_some()));
    }

    #[test]
    fn test_every_seed_item_splits_cleanly() {
        for item in generate_seed_items(center(), 30) {
            assert!(split_event_by_day(&item).is_ok());
        }
    }
}
