//! Entity definitions: the hero and the things they carry.

mod hero;
mod inventory;
mod item;

pub use hero::*;
pub use inventory::*;
pub use item::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for inventory items.
///
/// Item names are not unique, so the id is what tells two swords apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Create a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an item ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ids_are_distinct() {
        assert_ne!(ItemId::new(), ItemId::new());
    }

    #[test]
    fn test_item_id_display() {
        let id = ItemId::from_uuid(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
