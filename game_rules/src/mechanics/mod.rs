//! Game mechanics: battles, random events, potions and the dice behind them.

mod battle;
mod dice;
mod potion;
mod random_event;

pub use battle::*;
pub use dice::*;
pub use potion::*;
pub use random_event::*;

/// Damage the hero deals with bare hands, before item bonuses.
pub const BASE_PLAYER_DAMAGE: i32 = 2;

/// Lowest blow an enemy can be rolled to deal.
pub const ENEMY_DAMAGE_MIN: i32 = 1;

/// Highest blow an enemy can be rolled to deal.
pub const ENEMY_DAMAGE_MAX: i32 = 10;

/// Health restored by one potion dose.
pub const POTION_HEAL: i32 = 20;
