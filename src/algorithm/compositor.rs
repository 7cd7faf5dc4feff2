//! Assembly of the output image from matched tiles
//!
//! Tiles are pasted verbatim at the scaled cell origin. Nothing is resampled
//! here; a tile larger than the configured tile size is cut to it, and any
//! part falling outside the canvas is clipped.

use crate::algorithm::matcher::MatchGrid;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::TileSet;
use image::imageops;
use image::{GenericImageView, RgbImage};

/// Size and placement rules for the output canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    /// Base image width in pixels
    pub base_width: u32,
    /// Base image height in pixels
    pub base_height: u32,
    /// Multiplier from base to output pixels
    pub scale: u32,
    /// Width of the region each tile occupies
    pub tile_width: u32,
    /// Height of the region each tile occupies
    pub tile_height: u32,
}

impl CanvasSpec {
    /// Output dimensions as (width, height)
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension overflows `u32`
    pub fn output_dimensions(&self) -> Result<(u32, u32)> {
        let width = self.base_width.checked_mul(self.scale).ok_or_else(|| {
            invalid_parameter("scale", &self.scale, &"output width overflows u32")
        })?;
        let height = self.base_height.checked_mul(self.scale).ok_or_else(|| {
            invalid_parameter("scale", &self.scale, &"output height overflows u32")
        })?;
        Ok((width, height))
    }
}

/// Paint every matched tile onto a fresh canvas
///
/// # Errors
///
/// Returns an error if the output size overflows or a match refers to a tile
/// missing from `tiles`
pub fn composite(canvas: &CanvasSpec, matches: &MatchGrid, tiles: &TileSet) -> Result<RgbImage> {
    let (width, height) = canvas.output_dimensions()?;
    let mut output = RgbImage::new(width, height);

    for matched in matches.matches() {
        let tile = tiles.get(matched.tile).ok_or_else(|| {
            invalid_parameter(
                "tile",
                &matched.tile,
                &format!("only {} tiles are loaded", tiles.len()),
            )
        })?;

        let (tile_width, tile_height) = tile.dimensions();
        let region = tile.image().view(
            0,
            0,
            tile_width.min(canvas.tile_width),
            tile_height.min(canvas.tile_height),
        );
        let x = i64::from(matched.x) * i64::from(canvas.scale);
        let y = i64::from(matched.y) * i64::from(canvas.scale);
        imageops::replace(&mut output, &*region, x, y);
    }

    Ok(output)
}
