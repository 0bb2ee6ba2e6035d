use serde::{Deserialize, Serialize};

/// What the current user may do to the backing event list.
///
/// Defaults to read-only; the store implementation decides the actual values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl Permissions {
    /// Permissions granting every operation.
    pub fn all() -> Self {
        Self {
            can_add: true,
            can_edit: true,
            can_delete: true,
        }
    }

    /// Permissions granting no write operation.
    pub fn read_only() -> Self {
        Self::default()
    }
}
