//! Mosaic constants and runtime configuration defaults

// Tile geometry
/// Width in pixels of every tile placed in the output
pub const DEFAULT_TILE_WIDTH: u32 = 24;
/// Height in pixels of every tile placed in the output
pub const DEFAULT_TILE_HEIGHT: u32 = 24;

// Cell size in the base image is the tile size divided by this factor
/// Divisor from tile dimensions to base image cell dimensions
pub const DEFAULT_TILE_DOWNSCALE: u32 = 12;

/// Multiplier from base image dimensions to output dimensions
pub const DEFAULT_OUTPUT_SCALE: u32 = 12;

// Default filesystem layout
/// Directory holding the tile library
pub const DEFAULT_TILE_DIRECTORY: &str = "source/jpg";
/// Base image that gets rebuilt from tiles
pub const DEFAULT_BASE_IMAGE: &str = "source/base/base.jpg";
/// Where the finished mosaic is written
pub const DEFAULT_OUTPUT_PATH: &str = "source/output/output.jpg";

// Output settings
/// JPEG quality used when the output path has a JPEG extension
pub const DEFAULT_JPEG_QUALITY: u8 = 90;
/// Highest quality accepted by the JPEG encoder
pub const MAX_JPEG_QUALITY: u8 = 100;

// Safety limits to prevent excessive memory allocation
/// Maximum allowed scale factor for the output image
pub const MAX_OUTPUT_SCALE: u32 = 256;
/// Maximum allowed tile width or height in pixels
pub const MAX_TILE_SIZE: u32 = 4096;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
