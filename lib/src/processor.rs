use crate::ascii::map_to_glyphs;
use crate::config::TextArtConfig;
use crate::error::Error;
use crate::lut::Ramp;
use crate::sampler::sample;
use crate::text::TextGrid;
use image::{DynamicImage, RgbaImage};
use std::time::Instant;

/// Converts an input image to ASCII art text
///
/// Pipeline:
/// 1. Validate the configuration and image dimensions
/// 2. Resample to `output_width × output_height` cells and compute luminance
/// 3. Apply contrast around mid-gray
/// 4. Select the ramp for the density level
/// 5. Pick a line glyph for edge cells and a tonal glyph for the rest
///
/// # Arguments
/// * `input` - The input RGBA image to convert
/// * `config` - Configuration parameters for the ASCII conversion
///
/// # Returns
/// The text grid, or an error when the configuration is invalid or the image
/// has no pixels
pub fn convert(input: &RgbaImage, config: &TextArtConfig) -> Result<TextGrid, Error> {
    config.validate()?;

    let (width, height) = input.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }

    let start = Instant::now();

    let lum = sample(input, config.output_width, config.contrast);
    let ramp = Ramp::from_density(config.density);
    let text = map_to_glyphs(&lum, config.edge_threshold, &ramp);

    log::debug!(
        "converted {}x{} image to {}x{} cells (ramp {}, edge threshold {}) in {:.2} ms",
        width,
        height,
        text.width(),
        text.height(),
        ramp.len(),
        config.edge_threshold,
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(text)
}

/// Converts any decoded image to ASCII art text
///
/// Same as [`convert`] after converting the image to RGBA.
pub fn convert_dynamic(input: &DynamicImage, config: &TextArtConfig) -> Result<TextGrid, Error> {
    convert(&input.to_rgba8(), config)
}
