//! # Game Rules
//!
//! Everything that decides what happens to the hero: items and inventory,
//! battles, random events and potions. This crate knows nothing about the
//! story tree or the console.

pub mod config;
pub mod entities;
pub mod mechanics;

pub use config::*;
pub use entities::*;
pub use mechanics::*;
