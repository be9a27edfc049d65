//! Drinking health potions.

use serde::{Deserialize, Serialize};

use super::POTION_HEAL;
use crate::entities::{Hero, Inventory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionOutcome {
    Used { restored: i32, doses_left: i32 },
    NoPotion,
}

/// Drink one dose from the first potion that has any left.
pub fn use_health_potion(inventory: &mut Inventory, hero: &mut Hero) -> PotionOutcome {
    let Some(potion) = inventory.first_usable_potion_mut() else {
        log::debug!("no usable health potion in inventory");
        return PotionOutcome::NoPotion;
    };

    potion.health_bonus -= 1;
    hero.heal(POTION_HEAL);
    log::info!(
        "potion {} used, {} doses left, hero health {}",
        potion.id,
        potion.health_bonus,
        hero.health
    );

    PotionOutcome::Used {
        restored: POTION_HEAL,
        doses_left: potion.health_bonus,
    }
}
