//! Inventory item definitions.

use serde::{Deserialize, Serialize};

use super::ItemId;

/// Name shared by every sword the random event hands out.
pub const SWORD_NAME: &str = "Sword";

/// Name the potion search looks for.
pub const HEALTH_POTION_NAME: &str = "Health Potion";

/// A single item carried by the hero.
///
/// Bonuses are plain integers. Nothing in the rules produces negative values,
/// but nothing forbids them either.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default, skip_serializing)]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub damage_bonus: i32,
    #[serde(default)]
    pub armor_bonus: i32,
    /// For potions this doubles as the number of doses left.
    #[serde(default)]
    pub health_bonus: i32,
}

impl InventoryItem {
    /// Create an item with the given name and no bonuses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            damage_bonus: 0,
            armor_bonus: 0,
            health_bonus: 0,
        }
    }

    /// The sword found by the random event.
    pub fn sword() -> Self {
        Self::new(SWORD_NAME).with_damage_bonus(10)
    }

    /// A health potion holding `doses` uses.
    pub fn health_potion(doses: i32) -> Self {
        Self::new(HEALTH_POTION_NAME).with_health_bonus(doses)
    }

    /// Set the damage bonus.
    pub fn with_damage_bonus(mut self, bonus: i32) -> Self {
        self.damage_bonus = bonus;
        self
    }

    /// Set the armor bonus.
    pub fn with_armor_bonus(mut self, bonus: i32) -> Self {
        self.armor_bonus = bonus;
        self
    }

    /// Set the health bonus.
    pub fn with_health_bonus(mut self, bonus: i32) -> Self {
        self.health_bonus = bonus;
        self
    }

    /// Whether this item can currently be drunk as a health potion.
    pub fn is_usable_potion(&self) -> bool {
        self.name == HEALTH_POTION_NAME && self.health_bonus > 0
    }

    /// Compare name and bonuses, ignoring the id.
    pub fn same_kind_as(&self, other: &InventoryItem) -> bool {
        self.name == other.name
            && self.damage_bonus == other.damage_bonus
            && self.armor_bonus == other.armor_bonus
            && self.health_bonus == other.health_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sword_template() {
        let sword = InventoryItem::sword();
        assert_eq!(sword.name, "Sword");
        assert_eq!(sword.damage_bonus, 10);
        assert_eq!(sword.armor_bonus, 0);
        assert_eq!(sword.health_bonus, 0);
    }

    #[test]
    fn test_potion_usability() {
        assert!(InventoryItem::health_potion(1).is_usable_potion());
        assert!(!InventoryItem::health_potion(0).is_usable_potion());
        assert!(!InventoryItem::new("Potion").with_health_bonus(3).is_usable_potion());
    }

    #[test]
    fn test_same_kind_ignores_id() {
        let a = InventoryItem::sword();
        let b = InventoryItem::sword();
        assert_ne!(a.id, b.id);
        assert!(a.same_kind_as(&b));
        assert!(!a.same_kind_as(&InventoryItem::health_potion(1)));
    }
}
