use crate::cell::Cell;
use std::collections::HashMap;

/// A bounded, sparse coordinate→cell mapping. Absent keys mean the square is
/// empty; writes are last-write-wins with no merging.
#[derive(Debug, Clone, PartialEq)]
pub struct MapGrid {
    width: i32,
    height: i32,
    cells: HashMap<(i32, i32), Cell>,
}

impl MapGrid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: HashMap::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.cells.get(&(x, y))
    }

    /// Overwrites whatever is at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            self.cells.insert((x, y), cell);
        }
    }

    pub fn remove(&mut self, x: i32, y: i32) -> Option<Cell> {
        self.cells.remove(&(x, y))
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of occupied squares
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(i32, i32), &Cell)> {
        self.cells.iter()
    }
}

/// What one generation call hands back: the finished mapping plus the
/// diagnostics counters the editor surfaces in its status line.
#[derive(Debug)]
pub struct GeneratedMap {
    pub grid: MapGrid,
    pub room_count: usize,
    pub monster_count: usize,
}
