//! Fixed-size grid partitioning of the base image
//!
//! The grid covers only whole cells. Any strip at the right or bottom edge
//! narrower than a cell is left out of the partition rather than producing a
//! partial cell.

use image::{GenericImageView, RgbImage, SubImage};

/// Cell arrangement over an image of known size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    cell_width: u32,
    cell_height: u32,
    cols: u32,
    rows: u32,
}

impl GridLayout {
    /// Lay out whole cells over an image
    ///
    /// A zero cell dimension, or a cell larger than the image, yields an
    /// empty layout.
    pub const fn new(
        image_width: u32,
        image_height: u32,
        cell_width: u32,
        cell_height: u32,
    ) -> Self {
        let (cols, rows) = if cell_width == 0 || cell_height == 0 {
            (0, 0)
        } else {
            (image_width / cell_width, image_height / cell_height)
        };

        Self {
            cell_width,
            cell_height,
            cols,
            rows,
        }
    }

    /// Width of a single cell in pixels
    pub const fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Height of a single cell in pixels
    pub const fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Number of cells per row
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of cell rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Check whether the layout holds no cells
    pub const fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Width of the region covered by whole cells
    pub const fn covered_width(&self) -> u32 {
        self.cols * self.cell_width
    }

    /// Height of the region covered by whole cells
    pub const fn covered_height(&self) -> u32 {
        self.rows * self.cell_height
    }

    /// Pixel offset of the top-left corner of a cell
    pub const fn cell_origin(&self, col: u32, row: u32) -> (u32, u32) {
        (col * self.cell_width, row * self.cell_height)
    }
}

/// One grid cell and a borrowed view of its pixels
pub struct Cell<'a> {
    /// Column in grid units
    pub col: u32,
    /// Row in grid units
    pub row: u32,
    /// Left edge in base image pixels
    pub x: u32,
    /// Top edge in base image pixels
    pub y: u32,
    /// Sub-region of the base image, no scaling applied
    ///
    /// Dereference it (`&*cell.view`) where a `GenericImageView` bound is required.
    pub view: SubImage<&'a RgbImage>,
}

/// Lazy row-major sequence of cells over an image
pub struct Cells<'a> {
    image: &'a RgbImage,
    layout: GridLayout,
    next: usize,
}

impl<'a> Cells<'a> {
    /// Layout the cells are drawn from
    pub const fn layout(&self) -> GridLayout {
        self.layout
    }

    fn cell_at(&self, index: usize) -> Option<Cell<'a>> {
        if index >= self.layout.cell_count() {
            return None;
        }
        let cols = self.layout.cols() as usize;
        let col = (index % cols) as u32;
        let row = (index / cols) as u32;
        let (x, y) = self.layout.cell_origin(col, row);

        Some(Cell {
            col,
            row,
            x,
            y,
            view: self
                .image
                .view(x, y, self.layout.cell_width(), self.layout.cell_height()),
        })
    }
}

impl<'a> Iterator for Cells<'a> {
    type Item = Cell<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.cell_at(self.next)?;
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.layout.cell_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}

/// Partition an image into whole cells of the given size
pub fn partition(image: &RgbImage, cell_width: u32, cell_height: u32) -> Cells<'_> {
    let layout = GridLayout::new(image.width(), image.height(), cell_width, cell_height);
    Cells {
        image,
        layout,
        next: 0,
    }
}
