//! Generation and editor tuning constants.

/// Minimum room width/height
pub const ROOM_MIN_SIZE: i32 = 4;
/// Maximum room width/height
pub const ROOM_MAX_SIZE: i32 = 9;
/// Placement trials per room slot before the slot is skipped
pub const ROOM_PLACEMENT_ATTEMPTS: u32 = 100;
/// Retries per room monster before it is dropped
pub const MONSTER_PLACEMENT_ATTEMPTS: u32 = 20;
/// Shared retry budget across all map-wide extra monsters
pub const EXTRA_MONSTER_ATTEMPTS: u32 = 50;

/// Smallest grid edge the editor accepts
pub const GRID_MIN_SIZE: i32 = 10;
/// Largest grid edge the editor accepts
pub const GRID_MAX_SIZE: i32 = 100;

/// Minimum editor zoom
pub const ZOOM_MIN: f32 = 0.5;
/// Maximum editor zoom
pub const ZOOM_MAX: f32 = 2.0;
/// Zoom change per step
pub const ZOOM_STEP: f32 = 0.1;
/// Zoom for a freshly opened map
pub const ZOOM_DEFAULT: f32 = 1.0;
