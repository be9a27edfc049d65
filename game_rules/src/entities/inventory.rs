//! The hero's inventory.

use serde::{Deserialize, Serialize};

use super::InventoryItem;

/// Ordered collection of items.
///
/// Order matters: it drives the inventory listing and the potion search.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item at the end.
    pub fn push(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    /// Remove the item at `index`, shifting later items down.
    pub fn remove(&mut self, index: usize) -> Option<InventoryItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InventoryItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    /// Sum of every item's damage bonus, saturating at the `i32` bounds.
    pub fn total_damage_bonus(&self) -> i32 {
        self.saturating_total(|item| item.damage_bonus)
    }

    /// Sum of every item's armor bonus, saturating at the `i32` bounds.
    pub fn total_armor_bonus(&self) -> i32 {
        self.saturating_total(|item| item.armor_bonus)
    }

    fn saturating_total(&self, bonus: impl Fn(&InventoryItem) -> i32) -> i32 {
        self.items
            .iter()
            .map(bonus)
            .fold(0, |total, value| total.saturating_add(value))
    }

    /// First health potion, in insertion order, that still has a dose.
    pub fn first_usable_potion_mut(&mut self) -> Option<&mut InventoryItem> {
        self.items.iter_mut().find(|item| item.is_usable_potion())
    }
}

impl From<Vec<InventoryItem>> for Inventory {
    fn from(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<InventoryItem> for Inventory {
    fn from_iter<I: IntoIterator<Item = InventoryItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Inventory ===")?;
        for item in &self.items {
            writeln!(f, "Item: {}", item.name)?;
            writeln!(f, "Damage Bonus: {}", item.damage_bonus)?;
            writeln!(f, "Armor Bonus: {}", item.armor_bonus)?;
            writeln!(f, "Health Bonus: {}", item.health_bonus)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
