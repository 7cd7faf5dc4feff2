//! Loading of the base image and the tile directory
//!
//! Tile files are read in sorted path order so that tile order, and therefore
//! tie-breaking during matching, is the same on every run and platform.

use crate::io::error::{MosaicError, Result, WithPath};
use image::RgbImage;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// Decode the base image as 8-bit RGB
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not a decodable image
pub fn load_base_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded base image"
    );
    Ok(img.to_rgb8())
}

/// List regular files in a tile directory in sorted order
///
/// Subdirectories are ignored.
///
/// # Errors
///
/// Returns an error if the directory is missing or cannot be read
pub fn list_tile_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).with_path(directory, "read tile directory")? {
        let path = entry.with_path(directory, "read tile directory entry")?.path();
        if path.is_file() {
            files.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping non-file entry");
        }
    }
    files.sort();
    Ok(files)
}

/// Decode every tile image in a directory, skipping files that fail to decode
///
/// Undecodable files are reported as warnings and do not abort the run. The
/// result may be empty; callers decide whether that is fatal.
///
/// # Errors
///
/// Returns an error if the directory is missing or cannot be read
pub fn load_tile_images(
    directory: &Path,
    progress: &ProgressBar,
) -> Result<Vec<(PathBuf, RgbImage)>> {
    let files = list_tile_files(directory)?;
    progress.set_length(files.len() as u64);

    let mut images = Vec::with_capacity(files.len());
    let mut skipped = 0usize;
    for path in files {
        match image::open(&path) {
            Ok(img) => {
                tracing::debug!(path = %path.display(), "loaded tile");
                images.push((path, img.to_rgb8()));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping undecodable tile");
                skipped += 1;
            }
        }
        progress.inc(1);
    }
    progress.finish();

    tracing::info!(
        directory = %directory.display(),
        loaded = images.len(),
        skipped,
        "read tile directory"
    );
    Ok(images)
}
