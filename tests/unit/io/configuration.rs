//! Tests for default constants

#[cfg(test)]
mod tests {
    use photomosaic::io::configuration::{
        DEFAULT_BASE_IMAGE, DEFAULT_JPEG_QUALITY, DEFAULT_OUTPUT_PATH, DEFAULT_OUTPUT_SCALE,
        DEFAULT_TILE_DIRECTORY, DEFAULT_TILE_DOWNSCALE, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
        MAX_JPEG_QUALITY, MAX_OUTPUT_SCALE, MAX_TILE_SIZE, PROGRESS_BAR_WIDTH,
    };

    // Tests tile geometry defaults
    // Verified by changing constant values
    #[test]
    fn test_tile_geometry_defaults() {
        assert_eq!(DEFAULT_TILE_WIDTH, 24);
        assert_eq!(DEFAULT_TILE_HEIGHT, 24);
        assert_eq!(DEFAULT_TILE_DOWNSCALE, 12);
        assert_eq!(DEFAULT_OUTPUT_SCALE, 12);
    }

    // Tests default cells scale back up to exactly one tile
    // Verified by changing the output scale
    #[test]
    fn test_default_cells_scale_to_tiles() {
        let cell_width = DEFAULT_TILE_WIDTH / DEFAULT_TILE_DOWNSCALE;
        let cell_height = DEFAULT_TILE_HEIGHT / DEFAULT_TILE_DOWNSCALE;
        assert_eq!(cell_width * DEFAULT_OUTPUT_SCALE, DEFAULT_TILE_WIDTH);
        assert_eq!(cell_height * DEFAULT_OUTPUT_SCALE, DEFAULT_TILE_HEIGHT);
    }

    // Tests default paths keep the source tree layout
    // Verified by changing a default path
    #[test]
    fn test_default_paths() {
        assert_eq!(DEFAULT_TILE_DIRECTORY, "source/jpg");
        assert_eq!(DEFAULT_BASE_IMAGE, "source/base/base.jpg");
        assert_eq!(DEFAULT_OUTPUT_PATH, "source/output/output.jpg");
    }

    // Tests quality and scale limits are consistent with defaults
    // Verified by raising the default quality past the maximum
    #[test]
    fn test_limits() {
        assert!(DEFAULT_JPEG_QUALITY >= 1 && DEFAULT_JPEG_QUALITY <= MAX_JPEG_QUALITY);
        assert_eq!(MAX_JPEG_QUALITY, 100);
        assert!(DEFAULT_OUTPUT_SCALE <= MAX_OUTPUT_SCALE);
        assert!(DEFAULT_TILE_WIDTH <= MAX_TILE_SIZE && DEFAULT_TILE_HEIGHT <= MAX_TILE_SIZE);
        assert!(MAX_TILE_SIZE.checked_mul(MAX_OUTPUT_SCALE).is_some());
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }
}
