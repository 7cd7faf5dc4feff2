//! Tests for tile indexing and tile set ordering

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use photomosaic::MosaicError;
    use photomosaic::analysis::color::Color;
    use photomosaic::spatial::tiles::{Tile, TileSet};
    use std::path::{Path, PathBuf};

    // Tests a tile precomputes its average colour
    // Verified by leaving the average at its default
    #[test]
    fn test_tile_precomputes_average() {
        let Ok(tile) = Tile::new("red.png", RgbImage::from_pixel(4, 4, Rgb([200, 10, 20]))) else {
            unreachable!("Tile with pixels should be indexed");
        };

        assert_eq!(tile.average(), Color::new(200, 10, 20));
        assert_eq!(tile.path(), Path::new("red.png"));
        assert_eq!(tile.dimensions(), (4, 4));
    }

    // Tests zero-pixel tiles are rejected instead of panicking
    // Verified by unwrapping the missing average
    #[test]
    fn test_empty_tile_rejected() {
        let result = Tile::new("empty.png", RgbImage::new(0, 0));
        assert!(matches!(result, Err(MosaicError::InvalidSourceData { .. })));
    }

    // Tests resizing produces exactly the requested dimensions and keeps flat colours
    // Verified by passing width and height in the wrong order
    #[test]
    fn test_resized_tile_has_requested_size() {
        let source = RgbImage::from_pixel(10, 6, Rgb([40, 80, 120]));
        let Ok(tile) = Tile::resized("blue.png", &source, 4, 3) else {
            unreachable!("Resizing a non-empty tile should succeed");
        };

        assert_eq!(tile.dimensions(), (4, 3));
        assert_eq!(tile.average(), Color::new(40, 80, 120));
    }

    // Tests resizing to a zero size is rejected
    // Verified by removing the zero size guard
    #[test]
    fn test_resized_rejects_zero_size() {
        let source = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        assert!(Tile::resized("black.png", &source, 0, 2).is_err());
    }

    // Tests empty tile collections are an explicit error naming the directory
    // Verified by allowing empty tile sets
    #[test]
    fn test_empty_tile_set_rejected() {
        match TileSet::new(Vec::new(), Path::new("tiles")) {
            Err(MosaicError::EmptyTileSet { directory }) => {
                assert_eq!(directory, PathBuf::from("tiles"));
            }
            _ => unreachable!("Expected EmptyTileSet error"),
        }
    }

    // Tests tile set preserves insertion order
    // Verified by sorting tiles by average colour
    #[test]
    fn test_tile_set_preserves_order() {
        let colours = [[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 0, 0]];
        let tiles: Vec<Tile> = colours
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| {
                Tile::new(format!("{i}.png"), RgbImage::from_pixel(1, 1, Rgb(c))).ok()
            })
            .collect();

        let Ok(set) = TileSet::new(tiles, Path::new("tiles")) else {
            unreachable!("Non-empty tile set should be accepted");
        };

        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());
        assert_eq!(
            set.averages(),
            vec![
                Color::new(255, 0, 0),
                Color::new(0, 255, 0),
                Color::new(0, 0, 255),
                Color::new(255, 0, 0),
            ]
        );
        let names: Vec<_> = set.iter().map(|t| t.path().to_path_buf()).collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("0.png"),
                PathBuf::from("1.png"),
                PathBuf::from("2.png"),
                PathBuf::from("3.png"),
            ]
        );
        assert_eq!((&set).into_iter().count(), set.as_slice().len());
        assert!(set.get(3).is_some());
        assert!(set.get(4).is_none());
    }
}
