use serde::{Deserialize, Serialize};

/// Everything a grid square can hold, covering the full editor tool palette.
/// Wire names are the kebab-case strings the save format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellType {
    Wall,
    StoneWall,
    WoodWall,
    Floor,
    StoneFloor,
    WoodFloor,
    Door,
    Window,
    Stairs,
    Dirt,
    Water,
    Table,
    Chair,
    Bed,
    Chest,
    Torch,
    Tree,
    Character,
    Monster,
    Text,
}

/// Floor variants the generator fills room interiors with
pub const FLOOR_VARIANTS: [CellType; 3] =
    [CellType::Floor, CellType::StoneFloor, CellType::WoodFloor];

impl CellType {
    /// Default display color for this type (hex, from the editor palette)
    pub fn default_color(&self) -> &'static str {
        match self {
            CellType::Wall => "#6b7280",
            CellType::StoneWall => "#5a5a5a",
            CellType::WoodWall => "#8b6914",
            CellType::Floor => "#f3f4f6",
            CellType::StoneFloor => "#808080",
            CellType::WoodFloor => "#d2691e",
            CellType::Door => "#92400e",
            CellType::Window => "#87ceeb",
            CellType::Stairs => "#8b7355",
            CellType::Dirt => "#8b7355",
            CellType::Water => "#4a90e2",
            CellType::Table | CellType::Chair | CellType::Bed | CellType::Chest => "#fef3c7",
            CellType::Torch => "#fff3cd",
            CellType::Tree => "#e8f5e9",
            CellType::Character => "#dbeafe",
            CellType::Monster => "#fee2e2",
            CellType::Text => "#ffffff",
        }
    }

    /// Default icon glyph; empty for terrain types drawn by color/texture alone
    pub fn default_icon(&self) -> &'static str {
        match self {
            CellType::Table => "🍽",
            CellType::Chair => "🪑",
            CellType::Bed => "🛏️",
            CellType::Chest => "📦",
            CellType::Torch => "🔥",
            CellType::Tree => "🌲",
            CellType::Character => "🧙",
            CellType::Monster => "👹",
            _ => "",
        }
    }

    /// True for the floor variants the population phases may build on
    pub fn is_floor(&self) -> bool {
        matches!(
            self,
            CellType::Floor | CellType::StoneFloor | CellType::WoodFloor
        )
    }

    pub fn is_wall(&self) -> bool {
        matches!(
            self,
            CellType::Wall | CellType::StoneWall | CellType::WoodWall
        )
    }

    /// Furniture subset the difficulty scorer weighs
    pub fn is_furniture(&self) -> bool {
        matches!(
            self,
            CellType::Table | CellType::Chair | CellType::Bed | CellType::Chest
        )
    }
}

/// One grid square's content: type plus the display color and icon the
/// renderer consumes. Color and icon are data, not derived — text cells carry
/// user text in the icon field, and hand-edited cells may recolor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "type")]
    pub kind: CellType,
    pub color: String,
    pub icon: String,
}

impl Cell {
    /// A cell of the given type with its palette color and icon
    pub fn of(kind: CellType) -> Self {
        Self {
            kind,
            color: kind.default_color().to_string(),
            icon: kind.default_icon().to_string(),
        }
    }

    /// A free-text cell; the icon field holds the text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: CellType::Text,
            color: CellType::Text.default_color().to_string(),
            icon: text.into(),
        }
    }
}
