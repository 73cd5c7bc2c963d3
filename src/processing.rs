use crate::constants::{WEBP_METHOD, WEBP_QUALITY};
use crate::error::{ConvertError, Result};
use image::{ColorType, DynamicImage, ImageReader};
use std::fs;
use std::path::Path;
use webp::{Encoder, WebPConfig};

/// Converts a single image file to lossy WebP.
///
/// The full pipeline is decode -> color-mode normalization -> encode ->
/// write. Encoding happens entirely in memory and the output file is only
/// written after the encode succeeded, so a corrupt or unsupported source
/// never leaves a partial file at `output_path`. An existing file at
/// `output_path` is overwritten.
///
/// # Arguments
/// * `input_path` - Path to the source image (JPEG or PNG)
/// * `output_path` - Path the encoded WebP is written to
///
/// # Returns
/// * `Ok(bytes_written)` - Size of the encoded WebP in bytes
/// * `Err(ConvertError)` - If decoding, encoding, or the final write fails
pub fn convert_file(input_path: &Path, output_path: &Path) -> Result<u64> {
    let img = ImageReader::open(input_path)?.decode()?;
    let img = normalize_color_mode(img);

    let encoded = encode_webp(&img)?;
    fs::write(output_path, &encoded)?;

    Ok(encoded.len() as u64)
}

/// Reduces an image to RGB8 or RGBA8 so the WebP encoder accepts it.
///
/// Palette-indexed, grayscale, and 16-bit-per-channel layouts are converted:
/// sources with an alpha channel become RGBA8, everything else RGB8. Images
/// already in RGB8/RGBA8 pass through unchanged.
pub fn normalize_color_mode(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::Rgb8 | ColorType::Rgba8 => img,
        color if color.has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

fn encode_webp(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut config = WebPConfig::new()
        .map_err(|_| ConvertError::WebPEncoding("invalid encoder configuration".to_string()))?;
    config.quality = WEBP_QUALITY;
    config.method = WEBP_METHOD;

    let encoder =
        Encoder::from_image(img).map_err(|e| ConvertError::WebPEncoding(e.to_string()))?;
    let encoded = encoder
        .encode_advanced(&config)
        .map_err(|e| ConvertError::WebPEncoding(format!("{:?}", e)))?;

    Ok(encoded.to_vec())
}
