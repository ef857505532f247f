//! Procedural dungeon maps for a grid-based tabletop map editor.
//!
//! The generator places non-overlapping rooms, chains them with L-shaped
//! corridors, adds doors, and populates rooms with objects and monsters
//! according to a difficulty tier. Around it sit the sparse grid model, the
//! JSON save format, a difficulty scorer, and an undoable editing session.
//! All randomness is injected, so seeded runs are reproducible.

pub mod cell;
pub mod constants;
pub mod difficulty;
pub mod dungeon_gen;
pub mod editor;
pub mod grid;
pub mod save;

pub use cell::{Cell, CellType};
pub use difficulty::{rate_grid, DifficultyConfig, DifficultyRating, Tier};
pub use dungeon_gen::MapGenerator;
pub use editor::Editor;
pub use grid::{GeneratedMap, MapGrid};
pub use save::{MapDocument, MapDocumentError};
