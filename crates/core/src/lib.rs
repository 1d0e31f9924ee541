//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the terrain generator, the world model and the
//! interaction rules. It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: the same seed and dimensions always produce the same map
//! - **Testable**: every rule is a plain method on plain data
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular tile storage, neighbor queries, dimension checks
//! - [`map_gen`]: weighted seeding plus cellular-automata smoothing
//! - [`rng`]: seeded ChaCha RNG and cumulative weight tables
//! - [`entity`]: units and players
//! - [`world`]: cursor, selection, move mode and occupancy rules
//!
//! # Interaction Rules
//!
//! - **Cursor**: moves one cell per step and saturates at the map edges
//! - **Select**: picks the unit under the cursor, or clears the selection
//! - **Move mode**: only with a selection; arrows then move the unit instead
//!   of the cursor
//! - **Occupancy**: a unit never moves onto another unit; such moves are
//!   silently ignored
//!
//! # Example
//!
//! ```
//! use goblin_core::WorldState;
//! use goblin_types::{GameAction, InteractionMode};
//!
//! let mut world = WorldState::new(20, 10, Some(42)).unwrap();
//! world.initialize();
//! assert_eq!(world.entities().len(), 3);
//!
//! world.apply_action(GameAction::CursorLeft);
//! world.apply_action(GameAction::ToggleMoveMode);
//! // Nothing selected yet, so the mode does not change.
//! assert_eq!(world.mode(), InteractionMode::Normal);
//! ```

pub mod entity;
pub mod grid;
pub mod map_gen;
pub mod rng;
pub mod world;

pub use goblin_types as types;

// Re-export commonly used types for convenience
pub use entity::{Entity, EntityId, Player, PlayerId};
pub use grid::{Grid, MapError};
pub use map_gen::{generate, MapGenerator};
pub use rng::{GameRng, WeightedTable};
pub use world::WorldState;
