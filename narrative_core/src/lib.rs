//! # Narrative Core
//!
//! The story side of Branching Tale. This crate loads the story tree, walks
//! it in response to player commands and drives the console session, calling
//! into `game_rules` for every battle, random event and potion.
//!
//! ## Core Components
//!
//! - **story**: Story nodes, node paths and the JSON loader
//! - **navigator**: The state machine moving a cursor through the tree
//! - **events**: Step outcomes the navigator reports
//! - **console**: Prompt/response loop and player-facing text

pub mod console;
pub mod events;
pub mod navigator;
pub mod story;

pub use console::*;
pub use events::*;
pub use navigator::*;
pub use story::*;
