//! Battle resolution: a fixed exchange of blows until one side drops.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{RandomSource, BASE_PLAYER_DAMAGE, ENEMY_DAMAGE_MAX, ENEMY_DAMAGE_MIN};
use crate::entities::{Hero, Inventory};

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// One round in which the enemy survived the hero's blow and struck back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRound {
    pub player_damage: i32,
    pub enemy_damage: i32,
    /// Hero health after the enemy's blow.
    pub hero_health: i32,
}

/// Full record of a resolved battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub player_damage: i32,
    /// Summed from the inventory but never subtracted from enemy blows.
    pub player_armor: i32,
    pub enemy_damage: i32,
    pub rounds: Vec<BattleRound>,
    pub outcome: BattleOutcome,
    pub enemy_health_left: i32,
}

impl BattleReport {
    pub fn is_victory(&self) -> bool {
        self.outcome == BattleOutcome::Victory
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BattleError {
    /// The hero cannot lower the enemy's health, so the fight would never end.
    #[error("hero deals {player_damage} damage per blow and can never win")]
    NoDamage { player_damage: i32 },
}

/// Fight the enemy whose health lives in `enemy_health`.
///
/// The enemy's blow strength is drawn once and used for every round. The
/// enemy only strikes back in rounds it survives. `enemy_health` is left at
/// whatever the fight reduced it to, so a later call resumes the same enemy.
///
/// # Errors
///
/// Returns [`BattleError::NoDamage`] without touching any state when both
/// sides are alive and the hero's total damage is zero or negative.
pub fn resolve_battle<R: RandomSource + ?Sized>(
    enemy_health: &mut i32,
    inventory: &Inventory,
    hero: &mut Hero,
    rng: &mut R,
) -> Result<BattleReport, BattleError> {
    rng.reseed();

    let player_damage = BASE_PLAYER_DAMAGE.saturating_add(inventory.total_damage_bonus());
    let player_armor = inventory.total_armor_bonus();

    if player_damage <= 0 && *enemy_health > 0 && hero.is_alive() {
        log::warn!("battle refused: hero damage {player_damage} cannot lower enemy health");
        return Err(BattleError::NoDamage { player_damage });
    }

    let enemy_damage = rng.between(ENEMY_DAMAGE_MIN, ENEMY_DAMAGE_MAX);
    log::debug!(
        "battle start: enemy health {}, hero health {}, hero damage {player_damage}, armor {player_armor}, enemy damage {enemy_damage}",
        *enemy_health,
        hero.health
    );

    let mut rounds = Vec::new();
    while *enemy_health > 0 && hero.is_alive() {
        *enemy_health = enemy_health.saturating_sub(player_damage);
        if *enemy_health > 0 {
            hero.take_damage(enemy_damage);
            rounds.push(BattleRound {
                player_damage,
                enemy_damage,
                hero_health: hero.health,
            });
            log::trace!(
                "round {}: enemy at {}, hero at {}",
                rounds.len(),
                *enemy_health,
                hero.health
            );
        }
    }

    let outcome = if hero.is_alive() {
        BattleOutcome::Victory
    } else {
        BattleOutcome::Defeat
    };
    log::info!(
        "battle over after {} rounds: {outcome:?}, hero health {}",
        rounds.len(),
        hero.health
    );

    Ok(BattleReport {
        player_damage,
        player_armor,
        enemy_damage,
        rounds,
        outcome,
        enemy_health_left: *enemy_health,
    })
}
