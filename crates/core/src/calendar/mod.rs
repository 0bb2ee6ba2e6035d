mod error;
mod grid;
mod mock_data;
mod split;
mod types;
mod view;

pub use error::EventError;
pub use grid::{build_week_rows, grid_range, week_rows, WeekRows};
pub use mock_data::generate_seed_items;
pub use split::split_event_by_day;
pub use types::{DayOccurrence, EventItem, WeekRow};
pub use view::{assign_occurrences_to_week, build_month_view, expand_events};
