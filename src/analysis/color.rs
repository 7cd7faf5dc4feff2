//! Average colour computation and colour distance
//!
//! A single averaging routine serves both tile indexing and cell matching,
//! so tiles and cells are always compared on identical terms.

use image::{GenericImageView, Rgb};

/// Largest possible L1 distance between two RGB colours (3 × 255)
pub const MAX_DISTANCE: u32 = 765;

/// An RGB colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Color {
    /// Create a colour from its channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Sum of absolute per-channel differences (Manhattan distance in RGB)
    pub const fn distance(self, other: Self) -> u32 {
        self.red.abs_diff(other.red) as u32
            + self.green.abs_diff(other.green) as u32
            + self.blue.abs_diff(other.blue) as u32
    }

    /// Closeness score, highest for identical colours
    ///
    /// Ranks candidates in exactly the reverse order of [`Color::distance`].
    pub const fn similarity(self, other: Self) -> u32 {
        MAX_DISTANCE - self.distance(other)
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        let [red, green, blue] = pixel.0;
        Self { red, green, blue }
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Self([color.red, color.green, color.blue])
    }
}

/// Per-channel arithmetic mean over every pixel, truncated toward zero
///
/// Returns `None` for an image without pixels, where no mean exists.
pub fn average_color<I>(image: &I) -> Option<Color>
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    let (width, height) = image.dimensions();
    let pixel_count = u64::from(width) * u64::from(height);
    if pixel_count == 0 {
        return None;
    }

    let (mut red, mut green, mut blue) = (0u64, 0u64, 0u64);
    for (_, _, pixel) in image.pixels() {
        let [r, g, b] = pixel.0;
        red += u64::from(r);
        green += u64::from(g);
        blue += u64::from(b);
    }

    // Each mean is bounded by the largest channel value, so it fits in u8
    Some(Color {
        red: (red / pixel_count) as u8,
        green: (green / pixel_count) as u8,
        blue: (blue / pixel_count) as u8,
    })
}
