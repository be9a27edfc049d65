//! Story Navigator - walks the story tree one player command at a time.
//!
//! The navigator owns the tree, a cursor into it and the session state
//! (hero, inventory, encounter ledger, random source). Each call to
//! [`Navigator::step`] consumes one token:
//!
//! 1. A letter naming one of the current node's choices moves to that child.
//!    A guarded child (enemy health above zero) is fought for first,
//!    otherwise the random event fires. The move happens either way, even
//!    when the hero loses the fight.
//! 2. `H` drinks a potion, `I` lists the inventory. The cursor stays put.
//! 3. Anything else is rejected and the cursor stays put.
//!
//! A node with no choices ends the story.

mod command;
mod ledger;

pub use command::*;
pub use ledger::*;

use game_rules::{
    resolve_battle, trigger_random_event, use_health_potion, BattleError, GameConfig, Hero,
    Inventory, RandomSource,
};

use crate::events::{Encounter, StepOutcome};
use crate::story::{NodePath, StoryNode};

pub struct Navigator {
    root: StoryNode,
    cursor: NodePath,
    ledger: EncounterLedger,
    hero: Hero,
    inventory: Inventory,
    rng: Box<dyn RandomSource>,
}

impl Navigator {
    /// Start at the root with a fresh hero and an empty inventory.
    pub fn new(root: StoryNode, rng: impl RandomSource + 'static) -> Self {
        Self {
            root,
            cursor: NodePath::root(),
            ledger: EncounterLedger::new(),
            hero: Hero::new(),
            inventory: Inventory::new(),
            rng: Box::new(rng),
        }
    }

    /// Start with the hero and inventory described by `config`.
    pub fn from_config(
        root: StoryNode,
        config: &GameConfig,
        rng: impl RandomSource + 'static,
    ) -> Self {
        Self::new(root, rng)
            .with_hero(config.hero())
            .with_inventory(config.inventory())
    }

    pub fn with_hero(mut self, hero: Hero) -> Self {
        self.hero = hero;
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    /// The node the hero is standing at.
    pub fn current(&self) -> &StoryNode {
        // The cursor only ever moves to children that exist.
        self.root.node_at(&self.cursor).unwrap_or(&self.root)
    }

    pub fn path(&self) -> &NodePath {
        &self.cursor
    }

    /// The story is over once the hero stands at a node with no choices.
    pub fn is_finished(&self) -> bool {
        self.current().is_leaf()
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn ledger(&self) -> &EncounterLedger {
        &self.ledger
    }

    /// Apply one input token.
    pub fn step(&mut self, token: &str) -> StepOutcome {
        let choice_count = self.current().children.len();
        if choice_count == 0 {
            return StepOutcome::Finished;
        }

        match Command::parse(token, choice_count) {
            Command::Choose(index) => self.choose(index),
            Command::UsePotion => {
                StepOutcome::Potion(use_health_potion(&mut self.inventory, &mut self.hero))
            }
            Command::ShowInventory => StepOutcome::InventoryShown,
            Command::Invalid => {
                log::warn!("invalid choice {token:?} at {}", self.cursor);
                StepOutcome::Invalid {
                    token: token.to_string(),
                }
            }
        }
    }

    fn choose(&mut self, index: usize) -> StepOutcome {
        let path = self.cursor.child(index);
        let Some(starting_health) = self.root.node_at(&path).map(|child| child.enemy_health)
        else {
            return StepOutcome::Invalid {
                token: choice_letter(index).map(String::from).unwrap_or_default(),
            };
        };

        let encounter = if self.ledger.enemy_health(&path, starting_health) > 0 {
            let enemy_health = self.ledger.health_mut(&path, starting_health);
            match resolve_battle(enemy_health, &self.inventory, &mut self.hero, self.rng.as_mut()) {
                Ok(report) => {
                    log::debug!("{} guarded nodes fought over so far", self.ledger.fought());
                    Encounter::Battle(report)
                }
                Err(BattleError::NoDamage { player_damage }) => {
                    Encounter::Stalemate { player_damage }
                }
            }
        } else {
            Encounter::RandomEvent(trigger_random_event(&mut self.inventory, self.rng.as_mut()))
        };

        log::info!("moved {} -> {path}, hero health {}", self.cursor, self.hero.health);
        self.cursor = path.clone();

        StepOutcome::Moved {
            choice: index,
            path,
            encounter,
        }
    }
}
