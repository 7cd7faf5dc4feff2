//! Tile library with precomputed average colours
//!
//! Tiles keep the order they were added in. Matching breaks ties in favour of
//! the earliest tile, so a stable load order makes the mosaic reproducible.

use crate::analysis::color::{Color, average_color};
use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use image::imageops::{self, FilterType};
use std::path::{Path, PathBuf};

/// A tile image and its average colour
#[derive(Debug, Clone)]
pub struct Tile {
    path: PathBuf,
    image: RgbImage,
    average: Color,
}

impl Tile {
    /// Index a tile at its native size
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no pixels
    pub fn new(path: impl Into<PathBuf>, image: RgbImage) -> Result<Self> {
        let path = path.into();
        let average = average_color(&image).ok_or_else(|| MosaicError::InvalidSourceData {
            reason: format!("tile '{}' has no pixels", path.display()),
        })?;

        Ok(Self {
            path,
            image,
            average,
        })
    }

    /// Resample a tile to an exact size, then index it
    ///
    /// # Errors
    ///
    /// Returns an error if the source image or the requested size is empty
    pub fn resized(
        path: impl Into<PathBuf>,
        image: &RgbImage,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let path = path.into();
        if image.width() == 0 || image.height() == 0 || width == 0 || height == 0 {
            return Err(MosaicError::InvalidSourceData {
                reason: format!(
                    "cannot resize tile '{}' from {}x{} to {width}x{height}",
                    path.display(),
                    image.width(),
                    image.height()
                ),
            });
        }

        let resampled = if image.dimensions() == (width, height) {
            image.clone()
        } else {
            imageops::resize(image, width, height, FilterType::Triangle)
        };
        Self::new(path, resampled)
    }

    /// File the tile was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tile pixels
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Precomputed average colour
    pub const fn average(&self) -> Color {
        self.average
    }

    /// Tile dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Non-empty, ordered collection of tiles
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Build a tile set, keeping the given order
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyTileSet`] if no tiles are supplied
    pub fn new(tiles: Vec<Tile>, directory: &Path) -> Result<Self> {
        if tiles.is_empty() {
            return Err(MosaicError::EmptyTileSet {
                directory: directory.to_path_buf(),
            });
        }
        Ok(Self { tiles })
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether the set holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at a given index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Iterate tiles in load order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Tiles as a slice in load order
    pub const fn as_slice(&self) -> &[Tile] {
        self.tiles.as_slice()
    }

    /// Average colour of every tile in load order
    pub fn averages(&self) -> Vec<Color> {
        self.tiles.iter().map(Tile::average).collect()
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
