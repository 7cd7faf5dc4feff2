//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Grid partitioning of the base image into cells
//! - The tile library and its precomputed colours

/// Grid layout and lazy cell partitioning
pub mod grid;
/// Tile library with average colours
pub mod tiles;

pub use grid::{Cell, GridLayout};
pub use tiles::{Tile, TileSet};
