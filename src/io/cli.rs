//! Command-line interface and end-to-end mosaic run

use crate::algorithm::pipeline::{MosaicConfig, MosaicPipeline};
use crate::io::configuration::{
    DEFAULT_BASE_IMAGE, DEFAULT_JPEG_QUALITY, DEFAULT_OUTPUT_PATH, DEFAULT_OUTPUT_SCALE,
    DEFAULT_TILE_DIRECTORY, DEFAULT_TILE_DOWNSCALE, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
    MAX_JPEG_QUALITY,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_mosaic, output_format};
use crate::io::progress::ProgressManager;
use crate::io::source::{load_base_image, load_tile_images};
use clap::Parser;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Rebuild an image from a library of tiles matched by average colour"
)]
/// Command-line arguments for the mosaic builder
pub struct Cli {
    /// Directory of tile images
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_TILE_DIRECTORY)]
    pub tiles: PathBuf,

    /// Base image to rebuild
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_BASE_IMAGE)]
    pub base: PathBuf,

    /// Output image path; the format follows the extension
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Tile width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Tile height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Divisor from tile size to base image cell size
    #[arg(short, long, default_value_t = DEFAULT_TILE_DOWNSCALE)]
    pub downscale: u32,

    /// Multiplier from base image size to output size
    #[arg(short, long, default_value_t = DEFAULT_OUTPUT_SCALE)]
    pub scale: u32,

    /// Resample tiles to the tile size when loading
    #[arg(short, long)]
    pub resize_tiles: bool,

    /// JPEG quality (1-100), used for JPEG outputs only
    #[arg(
        long,
        default_value_t = DEFAULT_JPEG_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_JPEG_QUALITY))
    )]
    pub quality: u8,

    /// Worker threads for matching (defaults to all cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Mosaic geometry selected on the command line
    pub const fn config(&self) -> MosaicConfig {
        MosaicConfig {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            tile_downscale: self.downscale,
            output_scale: self.scale,
            resize_tiles: self.resize_tiles,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs a single mosaic build from parsed arguments
pub struct MosaicRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl MosaicRunner {
    /// Create a runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Arguments this runner was built from
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Load, match, composite and write, aborting on the first fatal error
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or output extension is invalid,
    /// the tile directory or base image cannot be read, no tile decodes, or
    /// the output cannot be written
    pub fn process(&self) -> Result<()> {
        self.cli.config().validate()?;
        output_format(&self.cli.output)?;

        let result = match self.cli.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| invalid_parameter("threads", &threads, &e))?;
                pool.install(|| self.run())
            }
            None => self.run(),
        };

        self.progress_manager.finish();
        result
    }

    fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let config = self.cli.config();

        tracing::info!(directory = %self.cli.tiles.display(), "reading tiles");
        let images = load_tile_images(&self.cli.tiles, &self.stage("loading tiles"))?;
        let pipeline = MosaicPipeline::from_images(config, images, &self.cli.tiles)?;

        let base = load_base_image(&self.cli.base)?;

        tracing::info!(tiles = pipeline.tiles().len(), "matching tiles");
        let output = pipeline.render(&base, &self.stage("matching cells"))?;

        export_mosaic(&output, &self.cli.output, self.cli.quality)?;

        tracing::info!(
            elapsed_ms = start_time.elapsed().as_millis(),
            output = %self.cli.output.display(),
            "finished"
        );
        Ok(())
    }

    fn stage(&self, label: &str) -> ProgressBar {
        self.progress_manager.start_stage(label, 0)
    }
}
