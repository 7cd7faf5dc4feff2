//! Cell-to-tile matching by average colour
//!
//! Every cell is matched independently against a read-only tile slice, so the
//! work fans out across the rayon pool. Each worker writes only the slot that
//! belongs to its cell; the slots are then reshaped into a grid-shaped arena.

use crate::analysis::color::{Color, average_color};
use crate::io::error::{MosaicError, Result};
use crate::spatial::grid::{Cell, GridLayout};
use crate::spatial::tiles::Tile;
use indicatif::ProgressBar;
use ndarray::Array2;
use rayon::prelude::*;

/// A cell position paired with the index of its chosen tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedCell {
    /// Column in grid units
    pub col: u32,
    /// Row in grid units
    pub row: u32,
    /// Left edge in base image pixels
    pub x: u32,
    /// Top edge in base image pixels
    pub y: u32,
    /// Index into the tile set
    pub tile: usize,
}

/// Index of the tile closest in colour to `target`
///
/// On equal distance the tile seen first wins; a later tile only replaces the
/// running best when strictly closer. Returns `None` for an empty slice.
pub fn best_match(target: Color, tiles: &[Tile]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, tile) in tiles.iter().enumerate() {
        let distance = target.distance(tile.average());
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Average a single cell and pick its tile
///
/// # Errors
///
/// Returns an error if the cell has no pixels or no tiles are supplied
pub fn match_cell(cell: &Cell<'_>, tiles: &[Tile]) -> Result<MatchedCell> {
    let target = average_color(&*cell.view).ok_or_else(|| MosaicError::InvalidSourceData {
        reason: format!("cell at ({}, {}) has no pixels", cell.col, cell.row),
    })?;
    let tile = best_match(target, tiles).ok_or_else(|| MosaicError::InvalidSourceData {
        reason: "cannot match a cell against an empty tile collection".to_string(),
    })?;

    Ok(MatchedCell {
        col: cell.col,
        row: cell.row,
        x: cell.x,
        y: cell.y,
        tile,
    })
}

/// Match all cells in parallel into a grid-shaped arena
///
/// `cells` must be the full row-major partition described by `layout`.
///
/// # Errors
///
/// Returns an error if any cell fails to match or the cell count disagrees
/// with the layout
pub fn match_cells(
    cells: &[Cell<'_>],
    layout: GridLayout,
    tiles: &[Tile],
    progress: &ProgressBar,
) -> Result<MatchGrid> {
    if cells.len() != layout.cell_count() {
        return Err(MosaicError::InvalidSourceData {
            reason: format!(
                "expected {} cells for a {}x{} grid, got {}",
                layout.cell_count(),
                layout.cols(),
                layout.rows(),
                cells.len()
            ),
        });
    }

    let slots = cells
        .par_iter()
        .map(|cell| {
            let matched = match_cell(cell, tiles).map(|m| m.tile);
            progress.inc(1);
            matched
        })
        .collect::<Result<Vec<usize>>>()?;

    MatchGrid::from_slots(layout, slots)
}

/// Tile choice for every cell, indexed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGrid {
    layout: GridLayout,
    tiles: Array2<usize>,
}

impl MatchGrid {
    /// Wrap row-major tile indices for a layout
    ///
    /// # Errors
    ///
    /// Returns an error if the slot count disagrees with the layout
    pub fn from_slots(layout: GridLayout, slots: Vec<usize>) -> Result<Self> {
        let shape = (layout.rows() as usize, layout.cols() as usize);
        let tiles =
            Array2::from_shape_vec(shape, slots).map_err(|e| MosaicError::InvalidSourceData {
                reason: format!("match results do not fit the grid: {e}"),
            })?;
        Ok(Self { layout, tiles })
    }

    /// Layout the matches were made on
    pub const fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Number of matched rows
    pub const fn rows(&self) -> u32 {
        self.layout.rows()
    }

    /// Number of matched columns
    pub const fn cols(&self) -> u32 {
        self.layout.cols()
    }

    /// Tile index chosen for a cell
    pub fn get(&self, col: u32, row: u32) -> Option<usize> {
        self.tiles.get((row as usize, col as usize)).copied()
    }

    /// Every match in row-major order
    pub fn matches(&self) -> impl Iterator<Item = MatchedCell> + '_ {
        self.tiles.indexed_iter().map(|((row, col), &tile)| {
            let (col, row) = (col as u32, row as u32);
            let (x, y) = self.layout.cell_origin(col, row);
            MatchedCell {
                col,
                row,
                x,
                y,
                tile,
            }
        })
    }

    /// How often each tile index was chosen
    pub fn usage_counts(&self, tile_count: usize) -> Vec<usize> {
        let mut counts = vec![0usize; tile_count];
        for &tile in &self.tiles {
            if let Some(count) = counts.get_mut(tile) {
                *count += 1;
            }
        }
        counts
    }
}
