use image::{Rgba, Rgba32FImage, RgbaImage, imageops};
use rayon::prelude::*;

/// Height-to-width ratio applied to output rows
///
/// Glyph cells are roughly twice as tall as they are wide.
pub const CHAR_ASPECT_RATIO: f64 = 0.5;

/// Luminance reported for any coordinate outside the grid
pub const BORDER_LUMINANCE: f64 = 255.0;

/// Downsampled, contrast-adjusted luminance, one value per output cell
#[derive(Debug, Clone, PartialEq)]
pub struct LuminanceGrid {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl LuminanceGrid {
    /// Build a grid by evaluating `f(x, y)` for every cell in row-major order
    ///
    /// Zero dimensions are clamped to 1.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> f64) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut values = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major luminance values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Luminance at `(x, y)`, or [`BORDER_LUMINANCE`] outside the grid
    ///
    /// Signed coordinates so that neighbour lookups at `x - 1` never wrap.
    pub fn get(&self, x: i64, y: i64) -> f64 {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return BORDER_LUMINANCE;
        }
        self.values[(y as usize) * (self.width as usize) + x as usize]
    }
}

/// Number of text rows for an image at a given output width
///
/// `floor(output_width * image_height / image_width * 0.5)`, never less than 1.
pub fn output_height(image_width: u32, image_height: u32, output_width: u32) -> u32 {
    if image_width == 0 {
        return 1;
    }
    let aspect_ratio = image_height as f64 / image_width as f64;
    let height = (output_width as f64 * aspect_ratio * CHAR_ASPECT_RATIO).floor();
    (height as u32).max(1)
}

/// Perceptual grayscale of an RGB triple
///
/// Formula: Y = 0.299*R + 0.587*G + 0.114*B (ITU-R BT.601)
pub fn grayscale(rgb: [u8; 3]) -> f64 {
    0.299 * rgb[0] as f64 + 0.587 * rgb[1] as f64 + 0.114 * rgb[2] as f64
}

/// Stretch a gray value around mid-gray and clamp to [0, 255]
///
/// A factor of 1.0 leaves the value unchanged, larger factors push values away
/// from 128, smaller ones pull them towards it.
pub fn apply_contrast(gray: f64, factor: f64) -> f64 {
    ((gray - 128.0) * factor + 128.0).clamp(0.0, 255.0)
}

/// Straight RGB of a premultiplied, normalised RGBA sample
///
/// Transparent samples read as black, the way a cleared canvas does.
fn unpremultiply(px: &[f32]) -> [u8; 3] {
    let alpha = px[3];
    if alpha <= 0.0 {
        return [0, 0, 0];
    }
    let channel = |c: f32| ((c / alpha) * 255.0).round().clamp(0.0, 255.0) as u8;
    [channel(px[0]), channel(px[1]), channel(px[2])]
}

/// Resample an image to the output grid and compute per-cell luminance
///
/// Resampling happens on alpha-premultiplied values, so partly transparent
/// pixels contribute in proportion to their alpha and fully transparent cells
/// come out black.
///
/// # Arguments
/// * `image` - Source image
/// * `output_width` - Number of columns (clamped to at least 1)
/// * `contrast` - Contrast factor, 1.0 is neutral
///
/// # Returns
/// A `output_width × output_height` grid of contrast-adjusted luminance.
/// An image without pixels yields a grid of [`BORDER_LUMINANCE`].
pub fn sample(image: &RgbaImage, output_width: u32, contrast: f64) -> LuminanceGrid {
    let (image_width, image_height) = image.dimensions();
    let width = output_width.max(1);
    let height = output_height(image_width, image_height, width);

    if image_width == 0 || image_height == 0 {
        return LuminanceGrid::from_fn(width, height, |_, _| BORDER_LUMINANCE);
    }

    let premultiplied = Rgba32FImage::from_fn(image_width, image_height, |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = a as f32 / 255.0;
        Rgba([
            r as f32 / 255.0 * alpha,
            g as f32 / 255.0 * alpha,
            b as f32 / 255.0 * alpha,
            alpha,
        ])
    });

    // Single bilinear pass down (or up) to one pixel per cell
    let resized = imageops::resize(&premultiplied, width, height, imageops::FilterType::Triangle);

    let values = resized
        .as_raw()
        .par_chunks_exact(4)
        .map(|px| apply_contrast(grayscale(unpremultiply(px)), contrast))
        .collect();

    LuminanceGrid {
        width,
        height,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_grayscale_black() {
        assert_eq!(grayscale([0, 0, 0]), 0.0);
    }

    #[test]
    fn test_grayscale_white() {
        assert!((grayscale([255, 255, 255]) - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_grayscale_weights() {
        assert!((grayscale([100, 0, 0]) - 29.9).abs() < 1e-9);
        assert!((grayscale([0, 100, 0]) - 58.7).abs() < 1e-9);
        assert!((grayscale([0, 0, 100]) - 11.4).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_identity() {
        for value in 0..=255 {
            let gray = value as f64 + 0.25;
            let adjusted = apply_contrast(gray.min(255.0), 1.0);
            assert!((adjusted - gray.min(255.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_contrast_increase_and_decrease() {
        assert_eq!(apply_contrast(150.0, 2.0), 172.0);
        assert_eq!(apply_contrast(100.0, 2.0), 72.0);
        assert_eq!(apply_contrast(150.0, 0.5), 139.0);
        assert_eq!(apply_contrast(128.0, 3.0), 128.0);
    }

    #[test]
    fn test_contrast_clamps() {
        assert_eq!(apply_contrast(250.0, 4.0), 255.0);
        assert_eq!(apply_contrast(10.0, 4.0), 0.0);
    }

    #[test]
    fn test_output_height_formula() {
        // 100 * (50 / 100) * 0.5 = 25
        assert_eq!(output_height(100, 50, 100), 25);
        // 80 * (600 / 800) * 0.5 = 30
        assert_eq!(output_height(800, 600, 80), 30);
        // 2 * (2 / 2) * 0.5 = 1
        assert_eq!(output_height(2, 2, 2), 1);
        // 7 * (9 / 10) * 0.5 = 3.15
        assert_eq!(output_height(10, 9, 7), 3);
    }

    #[test]
    fn test_output_height_clamps_to_one() {
        assert_eq!(output_height(1000, 1, 10), 1);
        assert_eq!(output_height(0, 0, 10), 1);
        assert_eq!(output_height(10, 10, 0), 1);
    }

    #[test]
    fn test_grid_out_of_bounds_is_white() {
        let grid = LuminanceGrid::from_fn(2, 2, |_, _| 0.0);
        assert_eq!(grid.get(0, 0), 0.0);
        assert_eq!(grid.get(-1, 0), BORDER_LUMINANCE);
        assert_eq!(grid.get(0, -1), BORDER_LUMINANCE);
        assert_eq!(grid.get(2, 0), BORDER_LUMINANCE);
        assert_eq!(grid.get(0, 2), BORDER_LUMINANCE);
        assert_eq!(grid.get(i64::MIN, i64::MAX), BORDER_LUMINANCE);
    }

    #[test]
    fn test_grid_from_fn_is_row_major() {
        let grid = LuminanceGrid::from_fn(3, 2, |x, y| (y * 10 + x) as f64);
        assert_eq!(grid.values(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(grid.get(2, 1), 12.0);
    }

    #[test]
    fn test_sample_dimensions() {
        let img = RgbaImage::new(200, 100);
        let grid = sample(&img, 40, 1.0);
        assert_eq!(grid.width(), 40);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.values().len(), 400);
    }

    #[test]
    fn test_sample_uniform_image() {
        let img = RgbaImage::from_pixel(64, 64, Rgba([128, 128, 128, 255]));
        let grid = sample(&img, 16, 1.0);
        assert_eq!(grid.height(), 8);
        for &value in grid.values() {
            assert!((value - 128.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sample_applies_contrast() {
        let img = RgbaImage::from_pixel(10, 10, Rgba([150, 150, 150, 255]));
        let grid = sample(&img, 10, 2.0);
        for &value in grid.values() {
            assert!((value - 172.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_unpremultiply() {
        assert_eq!(unpremultiply(&[0.5, 0.25, 0.0, 0.5]), [255, 128, 0]);
        assert_eq!(unpremultiply(&[0.3, 0.3, 0.3, 0.0]), [0, 0, 0]);
        assert_eq!(unpremultiply(&[1.0, 1.0, 1.0, 1.0]), [255, 255, 255]);
    }

    #[test]
    fn test_sample_transparent_reads_black() {
        let img = RgbaImage::from_pixel(40, 40, Rgba([255, 255, 255, 0]));
        let grid = sample(&img, 10, 1.0);
        assert!(grid.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_sample_half_transparent_keeps_color() {
        let img = RgbaImage::from_pixel(40, 40, Rgba([255, 255, 255, 128]));
        let grid = sample(&img, 10, 1.0);
        for &value in grid.values() {
            assert!((value - 255.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sample_weights_by_alpha() {
        // Opaque black columns interleaved with transparent white ones:
        // the white carries no weight, so every cell stays black
        let img = RgbaImage::from_fn(8, 8, |x, _| {
            if x % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 0])
            }
        });
        let grid = sample(&img, 4, 1.0);
        assert_eq!((grid.width(), grid.height()), (4, 2));
        assert!(grid.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_sample_degenerate_inputs() {
        let img = RgbaImage::from_pixel(300, 1, Rgba([0, 0, 0, 255]));
        let grid = sample(&img, 0, 1.0);
        assert_eq!((grid.width(), grid.height()), (1, 1));

        let empty = RgbaImage::new(0, 0);
        let grid = sample(&empty, 5, 1.0);
        assert_eq!((grid.width(), grid.height()), (5, 1));
        assert!(grid.values().iter().all(|&v| v == BORDER_LUMINANCE));
    }

    #[test]
    fn test_sample_is_deterministic() {
        let img = RgbaImage::from_fn(97, 61, |x, y| {
            Rgba([(x * 3) as u8, (y * 4) as u8, ((x + y) % 256) as u8, 255])
        });
        assert_eq!(sample(&img, 33, 1.3), sample(&img, 33, 1.3));
    }
}
