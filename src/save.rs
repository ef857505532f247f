//! The map save format: a flat JSON document with grid dimensions, view
//! state, a timestamp, and one record per occupied square.

use crate::cell::Cell;
use crate::grid::MapGrid;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapDocumentError {
    #[error("cell_count says {expected} cells but the document holds {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
    #[error("invalid map JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One occupied square on the wire: coordinates plus the flattened cell
/// fields, so the record reads {x, y, type, color, icon}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub x: i32,
    pub y: i32,
    #[serde(flatten)]
    pub cell: Cell,
}

/// A complete saved map. `cell_count` duplicates the record count as a
/// corruption check on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    pub width: i32,
    pub height: i32,
    pub zoom: f32,
    pub timestamp: u64,
    pub cell_count: usize,
    pub cells: Vec<CellRecord>,
}

impl MapDocument {
    /// Snapshot a grid into a document. Records are sorted by (y, x) so the
    /// same grid always serializes to the same bytes.
    pub fn from_grid(grid: &MapGrid, zoom: f32) -> Self {
        let mut cells: Vec<CellRecord> = grid
            .iter()
            .map(|(&(x, y), cell)| CellRecord {
                x,
                y,
                cell: cell.clone(),
            })
            .collect();
        cells.sort_by_key(|record| (record.y, record.x));

        Self {
            width: grid.width(),
            height: grid.height(),
            zoom,
            timestamp: unix_timestamp(),
            cell_count: cells.len(),
            cells,
        }
    }

    /// Rebuild the grid. Records outside the document's own bounds are
    /// dropped by the grid's bounds check; a cell_count that disagrees with
    /// the record list is rejected outright.
    pub fn into_grid(self) -> Result<MapGrid, MapDocumentError> {
        if self.cell_count != self.cells.len() {
            return Err(MapDocumentError::CellCountMismatch {
                expected: self.cell_count,
                actual: self.cells.len(),
            });
        }

        let mut grid = MapGrid::new(self.width, self.height);
        for record in self.cells {
            grid.set(record.x, record.y, record.cell);
        }
        Ok(grid)
    }

    pub fn to_json(&self) -> Result<String, MapDocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, MapDocumentError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Seconds since the Unix epoch; clock-before-epoch degrades to zero
fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellType;

    fn sample_grid() -> MapGrid {
        let mut grid = MapGrid::new(30, 20);
        grid.set(1, 1, Cell::of(CellType::Wall));
        grid.set(2, 1, Cell::of(CellType::Floor));
        grid.set(3, 5, Cell::of(CellType::Monster));
        grid.set(7, 2, Cell::text("armory"));
        grid
    }

    #[test]
    fn test_record_wire_shape_is_flat() {
        let record = CellRecord {
            x: 3,
            y: 5,
            cell: Cell::of(CellType::StoneFloor),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["x"], 3);
        assert_eq!(json["y"], 5);
        assert_eq!(json["type"], "stone-floor");
        assert_eq!(json["color"], "#808080");
        assert_eq!(json["icon"], "");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let grid = sample_grid();
        let doc = MapDocument::from_grid(&grid, 1.5);
        assert_eq!(doc.cell_count, 4);
        assert_eq!(doc.zoom, 1.5);

        let json = doc.to_json().unwrap();
        let restored = MapDocument::from_json(&json).unwrap().into_grid().unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn test_records_are_sorted_row_major() {
        let doc = MapDocument::from_grid(&sample_grid(), 1.0);
        let coords: Vec<(i32, i32)> = doc.cells.iter().map(|r| (r.y, r.x)).collect();
        let mut sorted = coords.clone();
        sorted.sort();
        assert_eq!(coords, sorted);
    }

    #[test]
    fn test_cell_count_mismatch_is_rejected() {
        let mut doc = MapDocument::from_grid(&sample_grid(), 1.0);
        doc.cell_count += 1;
        let err = doc.into_grid().unwrap_err();
        assert!(matches!(
            err,
            MapDocumentError::CellCountMismatch {
                expected: 5,
                actual: 4
            }
        ));
    }

    #[test]
    fn test_out_of_bounds_records_are_dropped_on_load() {
        let doc = MapDocument {
            width: 10,
            height: 10,
            zoom: 1.0,
            timestamp: 0,
            cell_count: 2,
            cells: vec![
                CellRecord {
                    x: 5,
                    y: 5,
                    cell: Cell::of(CellType::Wall),
                },
                CellRecord {
                    x: 50,
                    y: 5,
                    cell: Cell::of(CellType::Wall),
                },
            ],
        };
        let grid = doc.into_grid().unwrap();
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_garbage_json_reports_a_parse_error() {
        let err = MapDocument::from_json("{not json").unwrap_err();
        assert!(matches!(err, MapDocumentError::Json(_)));
    }
}
