//! Encoding and saving of the finished mosaic

use crate::io::configuration::MAX_JPEG_QUALITY;
use crate::io::error::{MosaicError, Result, WithPath, invalid_parameter};
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Image format implied by the output file extension
///
/// # Errors
///
/// Returns an error if the extension does not name a supported image format
pub fn output_format(output_path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(output_path)
        .map_err(|e| invalid_parameter("output", &output_path.display(), &e))
}

/// Save the mosaic, choosing the format from the file extension
///
/// JPEG output is written at `jpeg_quality`; other formats ignore it. Missing
/// parent directories are created.
///
/// # Errors
///
/// Returns an error if:
/// - The extension does not name a supported image format
/// - The output is JPEG and `jpeg_quality` is outside 1–100
/// - The parent directory cannot be created
/// - Encoding or writing the file fails
pub fn export_mosaic(mosaic: &RgbImage, output_path: &Path, jpeg_quality: u8) -> Result<()> {
    let format = output_format(output_path)?;
    if format == ImageFormat::Jpeg && (jpeg_quality == 0 || jpeg_quality > MAX_JPEG_QUALITY) {
        return Err(invalid_parameter(
            "quality",
            &jpeg_quality,
            &format!("must be between 1 and {MAX_JPEG_QUALITY}"),
        ));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    let export_error = |source: image::ImageError| MosaicError::ImageExport {
        path: output_path.to_path_buf(),
        source,
    };

    if format == ImageFormat::Jpeg {
        let file = File::create(output_path).with_path(output_path, "create output file")?;
        let mut writer = BufWriter::new(file);
        JpegEncoder::new_with_quality(&mut writer, jpeg_quality)
            .encode_image(mosaic)
            .map_err(export_error)?;
        writer.flush().with_path(output_path, "write output file")?;
    } else {
        mosaic
            .save_with_format(output_path, format)
            .map_err(export_error)?;
    }

    tracing::info!(
        path = %output_path.display(),
        format = ?format,
        width = mosaic.width(),
        height = mosaic.height(),
        "wrote mosaic"
    );
    Ok(())
}
