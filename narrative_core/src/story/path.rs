//! Node paths - addressing a node by the choices that lead to it.

use serde::{Deserialize, Serialize};

/// Child indices from the root to a node. The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// The path of the root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Step down into the `index`-th child in place.
    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of choices taken to get here.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &usize> {
        self.0.iter()
    }
}

/// Renders as the choice letters taken, e.g. `A-C-B`, or `root`.
impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "root");
        }
        for (position, index) in self.0.iter().enumerate() {
            if position > 0 {
                write!(f, "-")?;
            }
            match u8::try_from(*index).ok().filter(|i| *i < 26).map(|i| b'A' + i) {
                Some(letter) => write!(f, "{}", char::from(letter))?,
                None => write!(f, "#{index}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        let root = NodePath::root();
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.to_string(), "root");
    }

    #[test]
    fn test_child_paths() {
        let mut path = NodePath::root().child(0);
        path.push(2);
        assert_eq!(path.depth(), 2);
        assert_eq!(path.to_string(), "A-C");
        assert_ne!(path, NodePath::root().child(2).child(0));
    }

    #[test]
    fn test_display_of_wide_index() {
        assert_eq!(NodePath::root().child(26).to_string(), "#26");
        assert_eq!(NodePath::root().child(300).to_string(), "#300");
    }
}
