//! The three-way random event fired on every peaceful choice.

use serde::{Deserialize, Serialize};

use super::RandomSource;
use crate::entities::{Inventory, InventoryItem};

const OUTCOME_COUNT: usize = 3;

/// What the random event did to the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RandomEventOutcome {
    /// A sword was appended.
    FoundItem(InventoryItem),
    /// An item picked at random was removed.
    LostItem(InventoryItem),
    /// The loss outcome was drawn but there was nothing to take.
    NothingToLose,
    NothingHappens,
}

/// Draw one of the three outcomes and apply it to `inventory`.
pub fn trigger_random_event<R: RandomSource + ?Sized>(
    inventory: &mut Inventory,
    rng: &mut R,
) -> RandomEventOutcome {
    rng.reseed();

    let outcome = match rng.below(OUTCOME_COUNT) {
        0 => {
            let sword = InventoryItem::sword();
            log::info!("found {} {}", sword.name, sword.id);
            inventory.push(sword.clone());
            RandomEventOutcome::FoundItem(sword)
        }
        1 if inventory.is_empty() => RandomEventOutcome::NothingToLose,
        1 => {
            let index = rng.below(inventory.len());
            match inventory.remove(index) {
                Some(item) => {
                    log::info!("lost {} {} from slot {index}", item.name, item.id);
                    RandomEventOutcome::LostItem(item)
                }
                None => RandomEventOutcome::NothingToLose,
            }
        }
        _ => RandomEventOutcome::NothingHappens,
    };

    log::debug!("random event: {outcome:?}");
    outcome
}
