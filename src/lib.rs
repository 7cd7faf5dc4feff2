//! Photomosaic builder that rebuilds an image from a library of tiles
//!
//! The base image is cut into a grid of small cells. Each cell is replaced by
//! the tile whose average colour is closest to the cell's average colour, and
//! the matched tiles are assembled into an enlarged output image.

#![forbid(unsafe_code)]

/// Cell matching, compositing and the end-to-end pipeline
pub mod algorithm;
/// Colour statistics shared by tiles and cells
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid partitioning and the tile library
pub mod spatial;

pub use io::error::{MosaicError, Result};
