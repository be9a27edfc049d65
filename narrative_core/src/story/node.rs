//! Story node definitions - the units the story tree is built from.

use serde::{Deserialize, Serialize};

use super::NodePath;

/// One piece of the story: a hint, the enemy guarding it and the choices
/// leading on from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    /// Text shown when the hero arrives here.
    #[serde(default)]
    pub hint: String,

    /// Starting health of the enemy fought on the way here. Zero or less
    /// means the way is peaceful.
    #[serde(default, rename = "enemyHealth")]
    pub enemy_health: i32,

    /// Choices in letter order: index 0 is 'A'.
    #[serde(default, rename = "choices", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<StoryNode>,
}

impl StoryNode {
    /// Create a peaceful node with no choices.
    pub fn new(hint: impl Into<String>) -> Self {
        Self {
            hint: hint.into(),
            enemy_health: 0,
            children: Vec::new(),
        }
    }

    /// Set the enemy guarding this node.
    pub fn with_enemy(mut self, health: i32) -> Self {
        self.enemy_health = health;
        self
    }

    /// Add a choice after the existing ones.
    pub fn with_choice(mut self, child: StoryNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add several choices in order.
    pub fn with_choices(mut self, children: impl IntoIterator<Item = StoryNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Parse a story tree from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// A leaf ends the story.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether reaching this node means fighting first.
    pub fn is_guarded(&self) -> bool {
        self.enemy_health > 0
    }

    pub fn child(&self, index: usize) -> Option<&StoryNode> {
        self.children.get(index)
    }

    /// Follow `path` down from this node.
    pub fn node_at(&self, path: &NodePath) -> Option<&StoryNode> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Number of nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Longest number of choices from this node to a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0usize)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StoryNode {
        StoryNode::new("A fork in the road.").with_choices([
            StoryNode::new("A troll blocks the bridge.")
                .with_enemy(30)
                .with_choice(StoryNode::new("You cross the river.")),
            StoryNode::new("You walk into the woods."),
        ])
    }

    #[test]
    fn test_parse_nested_tree() {
        let json = r#"{
            "hint": "A fork in the road.",
            "enemyHealth": 0,
            "choices": [
                {
                    "hint": "A troll blocks the bridge.",
                    "enemyHealth": 30,
                    "choices": [ { "hint": "You cross the river.", "enemyHealth": 0 } ]
                },
                { "hint": "You walk into the woods.", "enemyHealth": 0 }
            ]
        }"#;

        let root = StoryNode::from_json(json).unwrap();
        assert_eq!(root, sample());
        assert!(root.child(0).unwrap().is_guarded());
        assert!(root.child(1).unwrap().is_leaf());
    }

    #[test]
    fn test_missing_members_take_zero_values() {
        let root = StoryNode::from_json(r#"{ "choices": [ {} ] }"#).unwrap();
        assert_eq!(root.hint, "");
        assert_eq!(root.enemy_health, 0);
        assert_eq!(root.children.len(), 1);
        assert!(root.children[0].is_leaf());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(StoryNode::from_json(r#"{ "hint": "oops", "#).is_err());
        assert!(StoryNode::from_json(r#"{ "enemyHealth": "many" }"#).is_err());
        assert!(StoryNode::from_json(r#"[1, 2, 3]"#).is_err());
    }

    #[test]
    fn test_node_at_path() {
        let root = sample();
        let path = NodePath::root().child(0).child(0);
        assert_eq!(root.node_at(&path).unwrap().hint, "You cross the river.");
        assert!(root.node_at(&NodePath::root().child(5)).is_none());
        assert_eq!(root.node_at(&NodePath::root()), Some(&root));
    }

    #[test]
    fn test_count_and_depth() {
        let root = sample();
        assert_eq!(root.node_count(), 4);
        assert_eq!(root.depth(), 2);
        assert_eq!(StoryNode::new("alone").depth(), 0);
    }

    #[test]
    fn test_leaf_serializes_without_choices() {
        let json = serde_json::to_string(&StoryNode::new("end")).unwrap();
        assert_eq!(json, r#"{"hint":"end","enemyHealth":0}"#);
    }
}
