/// Basic example: Convert a simple test image to ASCII art
///
/// This creates a test image with some basic shapes and prints it as text
use ascii_textr::{TextArtConfig, convert};
use image::{Rgba, RgbaImage};

fn main() {
    println!("ASCII Textr - Basic Example");
    println!("===========================\n");

    // Create a simple 160x160 test image
    let width = 160;
    let height = 160;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([100, 100, 100, 255]));

    // Draw a white circle in the center with a black ring
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 50.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            } else if (dist - radius).abs() < 5.0 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }

    // Draw a thick diagonal line
    for i in 0..width {
        for t in 0..4 {
            if i + t < height {
                img.put_pixel(i, i + t, Rgba([20, 20, 20, 255]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    let config = TextArtConfig {
        output_width: 60,
        contrast: 1.2,
        edge_threshold: 60,
        density: 1.0,
    };

    println!("Processing with config:");
    println!("  - Output width: {}", config.output_width);
    println!("  - Contrast: {:.3}", config.contrast);
    println!("  - Edge threshold: {}", config.edge_threshold);
    println!("  - Density: {}", config.density);
    println!();

    match convert(&img, &config) {
        Ok(art) => {
            print!("{}", art);
            println!("\n{}x{} characters", art.width(), art.height());
        }
        Err(e) => eprintln!("Conversion failed: {}", e),
    }
}
