use ascii_textr::{Ramp, TextArtConfig, convert};
use image::{Rgba, RgbaImage};

fn main() {
    println!("ASCII Textr - Density Sweep");
    println!("===========================\n");

    // Horizontal gradient from black to white
    let img = RgbaImage::from_fn(256, 64, |x, _| {
        let gray = x as u8;
        Rgba([gray, gray, gray, 255])
    });

    for density in [0.1, 0.3, 0.5, 0.7, 1.0] {
        let ramp = Ramp::from_density(density);
        let config = TextArtConfig {
            output_width: 64,
            edge_threshold: 255, // tonal only
            density,
            ..Default::default()
        };

        println!(
            "Density {:.1} ({} glyphs: {:?})",
            density,
            ramp.len(),
            ramp.glyphs().iter().collect::<String>()
        );
        match convert(&img, &config) {
            Ok(art) => print!("{}", art.rows()[0]),
            Err(e) => print!("error: {}", e),
        }
        println!("\n");
    }
}
