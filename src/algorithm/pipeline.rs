//! Mosaic configuration and the partition → match → composite pipeline

use crate::algorithm::compositor::{CanvasSpec, composite};
use crate::algorithm::matcher::{MatchGrid, match_cells};
use crate::io::configuration::{
    DEFAULT_OUTPUT_SCALE, DEFAULT_TILE_DOWNSCALE, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
    MAX_OUTPUT_SCALE, MAX_TILE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Cell, partition};
use crate::spatial::tiles::{Tile, TileSet};
use image::RgbImage;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Geometry parameters for a mosaic run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Width of each tile in the output
    pub tile_width: u32,
    /// Height of each tile in the output
    pub tile_height: u32,
    /// Divisor from tile size to base image cell size
    pub tile_downscale: u32,
    /// Multiplier from base image size to output size
    pub output_scale: u32,
    /// Resample tiles to exactly `tile_width` × `tile_height` on load
    pub resize_tiles: bool,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            tile_downscale: DEFAULT_TILE_DOWNSCALE,
            output_scale: DEFAULT_OUTPUT_SCALE,
            resize_tiles: false,
        }
    }
}

impl MosaicConfig {
    /// Width of a base image cell, zero when the downscale is zero
    pub const fn cell_width(&self) -> u32 {
        match self.tile_width.checked_div(self.tile_downscale) {
            Some(width) => width,
            None => 0,
        }
    }

    /// Height of a base image cell, zero when the downscale is zero
    pub const fn cell_height(&self) -> u32 {
        match self.tile_height.checked_div(self.tile_downscale) {
            Some(height) => height,
            None => 0,
        }
    }

    /// Whether scaled cells line up exactly with tiles, leaving no gaps or overlaps
    ///
    /// A scaled cell too large for `u32` never covers a tile.
    pub const fn tiles_cover_cells(&self) -> bool {
        matches!(
            self.cell_width().checked_mul(self.output_scale),
            Some(width) if width == self.tile_width
        ) && matches!(
            self.cell_height().checked_mul(self.output_scale),
            Some(height) if height == self.tile_height
        )
    }

    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns an error naming the first parameter that is zero, out of
    /// range, or yields an empty cell
    pub fn validate(&self) -> Result<()> {
        if self.tile_width == 0 || self.tile_width > MAX_TILE_SIZE {
            return Err(invalid_parameter(
                "tile_width",
                &self.tile_width,
                &format!("must be between 1 and {MAX_TILE_SIZE}"),
            ));
        }
        if self.tile_height == 0 || self.tile_height > MAX_TILE_SIZE {
            return Err(invalid_parameter(
                "tile_height",
                &self.tile_height,
                &format!("must be between 1 and {MAX_TILE_SIZE}"),
            ));
        }
        if self.tile_downscale == 0 {
            return Err(invalid_parameter(
                "tile_downscale",
                &self.tile_downscale,
                &"must be positive",
            ));
        }
        if self.tile_downscale > self.tile_width.min(self.tile_height) {
            return Err(invalid_parameter(
                "tile_downscale",
                &self.tile_downscale,
                &format!(
                    "cells would be empty for {}x{} tiles",
                    self.tile_width, self.tile_height
                ),
            ));
        }
        if self.output_scale == 0 || self.output_scale > MAX_OUTPUT_SCALE {
            return Err(invalid_parameter(
                "output_scale",
                &self.output_scale,
                &format!("must be between 1 and {MAX_OUTPUT_SCALE}"),
            ));
        }
        Ok(())
    }
}

/// Tile index plus configuration, ready to render base images
#[derive(Debug, Clone)]
pub struct MosaicPipeline {
    config: MosaicConfig,
    tiles: TileSet,
}

impl MosaicPipeline {
    /// Create a pipeline over an already indexed tile set
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: MosaicConfig, tiles: TileSet) -> Result<Self> {
        config.validate()?;
        if !config.tiles_cover_cells() {
            tracing::warn!(
                tile_width = config.tile_width,
                tile_height = config.tile_height,
                cell_width = config.cell_width(),
                cell_height = config.cell_height(),
                scale = config.output_scale,
                "scaled cells do not match the tile size; output will have gaps or overlaps"
            );
        }
        Ok(Self { config, tiles })
    }

    /// Index decoded tile images and create a pipeline over them
    ///
    /// Tiles keep the order of `images`, which decides ties during matching.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a tile has no
    /// pixels, or `images` is empty
    pub fn from_images(
        config: MosaicConfig,
        images: Vec<(PathBuf, RgbImage)>,
        directory: &Path,
    ) -> Result<Self> {
        config.validate()?;
        let tiles = images
            .into_iter()
            .map(|(path, image)| {
                if config.resize_tiles {
                    Tile::resized(path, &image, config.tile_width, config.tile_height)
                } else {
                    Tile::new(path, image)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        for tile in &tiles {
            if tile.dimensions() != (config.tile_width, config.tile_height) {
                tracing::debug!(
                    tile = %tile.path().display(),
                    width = tile.dimensions().0,
                    height = tile.dimensions().1,
                    "tile size differs from configured size; it will be cropped or leave gaps"
                );
            }
        }

        Self::new(config, TileSet::new(tiles, directory)?)
    }

    /// Configuration in use
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Indexed tiles in load order
    pub const fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// Match every whole cell of `base` against the tile set
    ///
    /// # Errors
    ///
    /// Returns an error if a cell cannot be matched
    pub fn match_base(&self, base: &RgbImage, progress: &ProgressBar) -> Result<MatchGrid> {
        let cells = partition(base, self.config.cell_width(), self.config.cell_height());
        let layout = cells.layout();
        if layout.is_empty() {
            tracing::warn!(
                width = base.width(),
                height = base.height(),
                cell_width = layout.cell_width(),
                cell_height = layout.cell_height(),
                "base image is smaller than one cell; output will be blank"
            );
        }
        let cells: Vec<Cell<'_>> = cells.collect();

        progress.set_length(cells.len() as u64);
        let start_time = Instant::now();
        let matches = match_cells(&cells, layout, self.tiles.as_slice(), progress)?;
        progress.finish();

        tracing::info!(
            cells = cells.len(),
            cols = layout.cols(),
            rows = layout.rows(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "matched cells"
        );
        if tracing::enabled!(tracing::Level::DEBUG) {
            let usage = matches.usage_counts(self.tiles.len());
            let distinct = usage.iter().filter(|&&count| count > 0).count();
            tracing::debug!(
                distinct_tiles = distinct,
                available_tiles = self.tiles.len(),
                "tile usage"
            );
        }

        Ok(matches)
    }

    /// Rebuild `base` from tiles at the configured scale
    ///
    /// # Errors
    ///
    /// Returns an error if matching fails or the output size overflows
    pub fn render(&self, base: &RgbImage, progress: &ProgressBar) -> Result<RgbImage> {
        let matches = self.match_base(base, progress)?;

        let canvas = CanvasSpec {
            base_width: base.width(),
            base_height: base.height(),
            scale: self.config.output_scale,
            tile_width: self.config.tile_width,
            tile_height: self.config.tile_height,
        };
        let output = composite(&canvas, &matches, &self.tiles)?;

        tracing::info!(
            width = output.width(),
            height = output.height(),
            "composited output image"
        );
        Ok(output)
    }
}
