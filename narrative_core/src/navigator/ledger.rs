//! Encounter ledger - per-session enemy health, kept apart from the tree.

use std::collections::HashMap;

use crate::story::NodePath;

/// Remaining enemy health for every node fought over this session.
///
/// A node's entry is created from its starting enemy health on the first
/// fight and only ever changed by battles after that. Coming back to a node
/// resumes from the entry, so a cleared enemy stays cleared.
#[derive(Debug, Clone, Default)]
pub struct EncounterLedger {
    remaining: HashMap<NodePath, i32>,
}

impl EncounterLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current enemy health at `path`, or `starting` if nobody fought there.
    pub fn enemy_health(&self, path: &NodePath, starting: i32) -> i32 {
        self.remaining.get(path).copied().unwrap_or(starting)
    }

    /// Health slot for the enemy at `path`, opened at `starting` if new.
    pub fn health_mut(&mut self, path: &NodePath, starting: i32) -> &mut i32 {
        self.remaining.entry(path.clone()).or_insert(starting)
    }

    /// Whether an enemy at `path` has been fought down to zero.
    pub fn is_cleared(&self, path: &NodePath) -> bool {
        self.remaining.get(path).is_some_and(|health| *health <= 0)
    }

    /// Number of nodes fought over.
    pub fn fought(&self) -> usize {
        self.remaining.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_node_reports_starting_health() {
        let ledger = EncounterLedger::new();
        let path = NodePath::root().child(1);
        assert_eq!(ledger.enemy_health(&path, 40), 40);
        assert!(!ledger.is_cleared(&path));
        assert_eq!(ledger.fought(), 0);
    }

    #[test]
    fn test_revisit_resumes_previous_health() {
        let mut ledger = EncounterLedger::new();
        let path = NodePath::root().child(0);

        *ledger.health_mut(&path, 40) -= 15;
        assert_eq!(ledger.enemy_health(&path, 40), 25);

        // The starting value only matters the first time.
        let slot = ledger.health_mut(&path, 40);
        assert_eq!(*slot, 25);
        *slot -= 30;

        assert!(ledger.is_cleared(&path));
        assert_eq!(ledger.enemy_health(&path, 40), -5);
        assert_eq!(ledger.fought(), 1);
    }
}
