//! Story module - the story tree and the loader that reads it.
//!
//! A story document is a single JSON object:
//!
//! ```json
//! { "hint": "...", "enemyHealth": 0, "choices": [ { ... }, { ... } ] }
//! ```
//!
//! `choices` may be left out; a node without choices ends the story.

mod node;
mod path;

pub use node::*;
pub use path::*;

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("failed to read story document {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed story document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read the story document at `path` and build its tree.
pub fn load_story(path: impl AsRef<Path>) -> Result<StoryNode, StoryError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root = StoryNode::from_json(&text)?;
    log::info!(
        "loaded story from {}: {} nodes, depth {}",
        path.display(),
        root.node_count(),
        root.depth()
    );
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(label: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "narrative-core-{label}-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_file("ok", r#"{ "hint": "Hello", "enemyHealth": 0 }"#);
        let root = load_story(&path).unwrap();
        assert_eq!(root.hint, "Hello");
        assert!(root.is_leaf());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_story("/no/such/story.json").unwrap_err();
        assert!(matches!(err, StoryError::Io { .. }));
        assert!(err.to_string().contains("/no/such/story.json"));
    }

    #[test]
    fn test_load_malformed_file() {
        let path = temp_file("bad", "{ not json");
        let err = load_story(&path).unwrap_err();
        assert!(matches!(err, StoryError::Parse(_)));
        std::fs::remove_file(path).ok();
    }
}
