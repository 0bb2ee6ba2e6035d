use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::calendar::EventItem;

use super::{Permissions, Result};

/// The list-backed event store the month view fetches from.
///
/// Implementations own all I/O; the calendar core only consumes the already
/// resolved results.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Fetches the events overlapping the visible grid range of the month
    /// containing `date`.
    async fn get_items(&self, date: NaiveDateTime) -> Result<Vec<EventItem>>;

    /// Creates a new event.
    async fn create_item(&self, item: &EventItem) -> Result<()>;

    /// Deletes an event by its ID.
    async fn delete_item(&self, id: Uuid) -> Result<()>;

    /// Returns what the current user may do to the backing list.
    async fn get_permissions(&self) -> Result<Permissions>;
}
