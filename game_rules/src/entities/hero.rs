//! The player's hero.

use serde::{Deserialize, Serialize};

/// Health every session starts with unless configured otherwise.
pub const STARTING_HEALTH: i32 = 100;

/// The hero is nothing more than a health pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub health: i32,
}

impl Hero {
    /// Create a hero at full starting health.
    pub fn new() -> Self {
        Self::with_health(STARTING_HEALTH)
    }

    pub fn with_health(health: i32) -> Self {
        Self { health }
    }

    /// Check if the hero is still standing.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Lose `amount` health, bottoming out at `i32::MIN`.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restore health. There is no cap below `i32::MAX`.
    pub fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount);
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hero() {
        let hero = Hero::new();
        assert_eq!(hero.health, 100);
        assert!(hero.is_alive());
    }

    #[test]
    fn test_hero_death() {
        let mut hero = Hero::with_health(5);
        hero.take_damage(5);
        assert!(!hero.is_alive());
    }

    #[test]
    fn test_heal_past_starting_health() {
        let mut hero = Hero::new();
        hero.heal(20);
        assert_eq!(hero.health, 120);
    }

    #[test]
    fn test_health_saturates_at_the_edges() {
        let mut hero = Hero::with_health(i32::MAX);
        hero.heal(20);
        assert_eq!(hero.health, i32::MAX);

        let mut hero = Hero::with_health(i32::MIN + 3);
        hero.take_damage(10);
        assert_eq!(hero.health, i32::MIN);
        assert!(!hero.is_alive());
    }
}
