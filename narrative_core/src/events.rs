//! Events produced by the navigator, one per player command.
//!
//! The navigator never prints; the console turns these into text.

use game_rules::{BattleReport, PotionOutcome, RandomEventOutcome};
use serde::{Deserialize, Serialize};

use crate::story::NodePath;

/// What happened on the way into a newly chosen node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Encounter {
    /// The node was guarded and a battle was fought.
    Battle(BattleReport),

    /// The node was guarded but the hero could not hurt the enemy, so no
    /// blows were exchanged.
    Stalemate { player_damage: i32 },

    /// The way was peaceful and the random event fired.
    RandomEvent(RandomEventOutcome),
}

/// Result of a single navigator step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The hero followed a choice. Happens whatever the encounter's outcome.
    Moved {
        choice: usize,
        path: NodePath,
        encounter: Encounter,
    },

    /// A potion was drunk, or the search for one failed.
    Potion(PotionOutcome),

    /// The player asked to see the inventory.
    InventoryShown,

    /// The token was not a choice, `H` or `I`.
    Invalid { token: String },

    /// The story had already ended; nothing changed.
    Finished,
}

impl StepOutcome {
    /// Whether the step moved the cursor.
    pub fn moved(&self) -> bool {
        matches!(self, StepOutcome::Moved { .. })
    }
}
