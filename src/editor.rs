//! The editing session: a grid plus zoom state, with snapshot-based
//! undo/redo around every mutation.

use crate::cell::Cell;
use crate::constants::*;
use crate::difficulty::Tier;
use crate::dungeon_gen::MapGenerator;
use crate::grid::MapGrid;
use crate::save::{MapDocument, MapDocumentError};
use log::debug;
use rand::Rng;

pub struct Editor {
    grid: MapGrid,
    zoom: f32,
    undo_stack: Vec<MapGrid>,
    redo_stack: Vec<MapGrid>,
}

impl Editor {
    /// Open a fresh session. Requested dimensions are clamped to the
    /// supported grid range rather than rejected.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.clamp(GRID_MIN_SIZE, GRID_MAX_SIZE);
        let height = height.clamp(GRID_MIN_SIZE, GRID_MAX_SIZE);
        debug!("opening {}x{} editing session", width, height);
        Self {
            grid: MapGrid::new(width, height),
            zoom: ZOOM_DEFAULT,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn grid(&self) -> &MapGrid {
        &self.grid
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Push the current grid onto the undo stack. Any mutation invalidates
    /// the redo history.
    fn snapshot(&mut self) {
        self.undo_stack.push(self.grid.clone());
        self.redo_stack.clear();
    }

    /// Paint one cell. Out-of-bounds coordinates are ignored by the grid.
    pub fn place(&mut self, x: i32, y: i32, cell: Cell) {
        self.snapshot();
        self.grid.set(x, y, cell);
    }

    /// Place a free-text label at (x, y)
    pub fn place_text(&mut self, x: i32, y: i32, text: impl Into<String>) {
        self.snapshot();
        self.grid.set(x, y, Cell::text(text));
    }

    /// Empty one square
    pub fn erase(&mut self, x: i32, y: i32) {
        self.snapshot();
        self.grid.remove(x, y);
    }

    /// Empty the whole map
    pub fn clear(&mut self) {
        self.snapshot();
        self.grid.clear();
    }

    /// Replace the map with a generated dungeon at the given tier. Returns
    /// the (rooms, monsters) counts for the status line.
    pub fn generate(&mut self, tier: Tier, rng: &mut impl Rng) -> (usize, usize) {
        self.snapshot();
        let result = MapGenerator::generate(self.grid.width(), self.grid.height(), tier, rng);
        self.grid = result.grid;
        (result.room_count, result.monster_count)
    }

    /// Step back one mutation; no-op with empty history
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                self.redo_stack.push(std::mem::replace(&mut self.grid, previous));
                true
            }
            None => false,
        }
    }

    /// Reapply the last undone mutation; no-op with empty redo history
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                self.undo_stack.push(std::mem::replace(&mut self.grid, next));
                true
            }
            None => false,
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    /// Serialize the session to the save format
    pub fn save(&self) -> Result<String, MapDocumentError> {
        MapDocument::from_grid(&self.grid, self.zoom).to_json()
    }

    /// Load a saved map into the session, replacing the current grid. Loading
    /// is a mutation, so it is undoable like any other.
    pub fn load(&mut self, json: &str) -> Result<(), MapDocumentError> {
        let doc = MapDocument::from_json(json)?;
        let zoom = doc.zoom;
        let grid = doc.into_grid()?;
        self.snapshot();
        self.grid = grid;
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        debug!("loaded {}x{} map, {} cells", self.grid.width(), self.grid.height(), self.grid.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dimensions_are_clamped_to_supported_range() {
        let tiny = Editor::new(3, 3);
        assert_eq!(tiny.grid().width(), 10);
        assert_eq!(tiny.grid().height(), 10);

        let huge = Editor::new(500, 12);
        assert_eq!(huge.grid().width(), 100);
        assert_eq!(huge.grid().height(), 12);
    }

    #[test]
    fn test_place_then_undo_then_redo() {
        let mut editor = Editor::new(20, 20);
        editor.place(4, 4, Cell::of(CellType::Wall));
        assert_eq!(editor.grid().len(), 1);

        assert!(editor.undo());
        assert!(editor.grid().is_empty());

        assert!(editor.redo());
        assert_eq!(editor.grid().get(4, 4).unwrap().kind, CellType::Wall);
    }

    #[test]
    fn test_undo_and_redo_on_empty_history_are_noops() {
        let mut editor = Editor::new(20, 20);
        assert!(!editor.undo());
        assert!(!editor.redo());
    }

    #[test]
    fn test_new_mutation_clears_redo_history() {
        let mut editor = Editor::new(20, 20);
        editor.place(1, 1, Cell::of(CellType::Wall));
        editor.undo();
        editor.place(2, 2, Cell::of(CellType::Door));
        assert!(!editor.redo());
        assert_eq!(editor.grid().get(2, 2).unwrap().kind, CellType::Door);
    }

    #[test]
    fn test_generate_replaces_the_map_and_is_undoable() {
        let mut editor = Editor::new(30, 20);
        editor.place(0, 0, Cell::of(CellType::Tree));

        let mut rng = StdRng::seed_from_u64(42);
        let (rooms, _) = editor.generate(Tier::Medium, &mut rng);
        assert!(rooms >= 1);
        assert!(editor.grid().len() > 1);

        assert!(editor.undo());
        assert_eq!(editor.grid().len(), 1);
        assert_eq!(editor.grid().get(0, 0).unwrap().kind, CellType::Tree);
    }

    #[test]
    fn test_clear_empties_the_map() {
        let mut editor = Editor::new(20, 20);
        editor.place(3, 3, Cell::of(CellType::Water));
        editor.clear();
        assert!(editor.grid().is_empty());
        editor.undo();
        assert_eq!(editor.grid().len(), 1);
    }

    #[test]
    fn test_zoom_is_clamped_at_both_ends() {
        let mut editor = Editor::new(20, 20);
        for _ in 0..30 {
            editor.zoom_in();
        }
        assert!((editor.zoom() - 2.0).abs() < 1e-6);
        for _ in 0..30 {
            editor.zoom_out();
        }
        assert!((editor.zoom() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_save_and_load_preserve_the_session() {
        let mut editor = Editor::new(25, 15);
        editor.place(5, 5, Cell::of(CellType::Stairs));
        editor.place_text(6, 5, "down");
        editor.zoom_in();

        let json = editor.save().unwrap();

        let mut fresh = Editor::new(10, 10);
        fresh.load(&json).unwrap();
        assert_eq!(fresh.grid().width(), 25);
        assert_eq!(fresh.grid().height(), 15);
        assert_eq!(fresh.grid().get(5, 5).unwrap().kind, CellType::Stairs);
        assert_eq!(fresh.grid().get(6, 5).unwrap().icon, "down");
        assert!((fresh.zoom() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_load_failure_leaves_the_session_untouched() {
        let mut editor = Editor::new(20, 20);
        editor.place(1, 1, Cell::of(CellType::Wall));
        assert!(editor.load("{broken").is_err());
        assert_eq!(editor.grid().len(), 1);
        assert!(!editor.redo());
    }
}
