//! Difficulty tiers: the parameter bundles that drive generation, and the
//! scorer that rates a finished map back onto the same scale.

use crate::grid::MapGrid;
use serde::{Deserialize, Serialize};

/// The four named difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

/// Immutable per-tier generation parameters. Ranges are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyConfig {
    /// How many rooms to aim for (min, max)
    pub rooms: (u32, u32),
    /// Monsters per room (min, max)
    pub monsters_per_room: (u32, u32),
    /// Chance a room gets decorative objects at all
    pub object_chance: f64,
    /// Flat count of additional map-wide monsters
    pub extra_monsters: u32,
}

const EASY: DifficultyConfig = DifficultyConfig {
    rooms: (3, 4),
    monsters_per_room: (0, 1),
    object_chance: 0.5,
    extra_monsters: 1,
};

const MEDIUM: DifficultyConfig = DifficultyConfig {
    rooms: (5, 7),
    monsters_per_room: (1, 2),
    object_chance: 0.6,
    extra_monsters: 3,
};

const HARD: DifficultyConfig = DifficultyConfig {
    rooms: (8, 10),
    monsters_per_room: (2, 3),
    object_chance: 0.7,
    extra_monsters: 5,
};

const VERY_HARD: DifficultyConfig = DifficultyConfig {
    rooms: (10, 14),
    monsters_per_room: (3, 5),
    object_chance: 0.8,
    extra_monsters: 8,
};

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Easy, Tier::Medium, Tier::Hard, Tier::VeryHard];

    /// The fixed parameter bundle for this tier
    pub fn config(self) -> &'static DifficultyConfig {
        match self {
            Tier::Easy => &EASY,
            Tier::Medium => &MEDIUM,
            Tier::Hard => &HARD,
            Tier::VeryHard => &VERY_HARD,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
            Tier::VeryHard => "very-hard",
        }
    }
}

/// A scored map: the rounded score and the tier it falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyRating {
    pub tier: Tier,
    pub score: u32,
}

// Scoring weights
const MONSTER_WEIGHT: f64 = 15.0;
const DOOR_WEIGHT: f64 = 2.0;
const WALL_DENSITY_WEIGHT: f64 = 50.0;
const FURNITURE_WEIGHT: f64 = 1.0;
const COMPLEXITY_WEIGHT: f64 = 30.0;

/// Rate a map's difficulty as a weighted sum over its contents: monsters
/// dominate, doors and furniture nudge, wall density and overall fill add a
/// grid-size-relative component.
pub fn rate_grid(grid: &MapGrid) -> DifficultyRating {
    let mut monsters = 0usize;
    let mut doors = 0usize;
    let mut walls = 0usize;
    let mut furniture = 0usize;

    for (_, cell) in grid.iter() {
        if cell.kind == crate::cell::CellType::Monster {
            monsters += 1;
        } else if cell.kind == crate::cell::CellType::Door {
            doors += 1;
        } else if cell.kind.is_wall() {
            walls += 1;
        } else if cell.kind.is_furniture() {
            furniture += 1;
        }
    }

    let area = (grid.width() * grid.height()) as f64;
    let wall_density = walls as f64 / area;
    let complexity = grid.len() as f64 / area;

    let score = monsters as f64 * MONSTER_WEIGHT
        + doors as f64 * DOOR_WEIGHT
        + wall_density * WALL_DENSITY_WEIGHT
        + furniture as f64 * FURNITURE_WEIGHT
        + complexity * COMPLEXITY_WEIGHT;

    let tier = if score < 20.0 {
        Tier::Easy
    } else if score < 50.0 {
        Tier::Medium
    } else if score < 80.0 {
        Tier::Hard
    } else {
        Tier::VeryHard
    };

    DifficultyRating {
        tier,
        score: score.round() as u32,
    }
}
