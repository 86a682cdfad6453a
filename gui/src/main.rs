mod app;
mod debounce;

use app::TextArtApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Configure logging
    env_logger::init();

    // Configure viewport/window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("ASCII Textr")
            .with_icon(load_icon()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ASCII Textr",
        options,
        Box::new(|cc| Ok(Box::new(TextArtApp::new(cc)))),
    )
}

/// Application icon: a white `/` glyph on a dark background
fn load_icon() -> egui::IconData {
    let icon_size = 32;
    let mut pixels = vec![0u8; icon_size * icon_size * 4];

    for y in 0..icon_size {
        for x in 0..icon_size {
            let idx = (y * icon_size + x) * 4;

            // Thick rising diagonal
            let on_slash = (x + y).abs_diff(icon_size - 1) <= 2;
            let value: [u8; 4] = if on_slash { [255, 255, 255, 255] } else { [20, 20, 20, 255] };
            pixels[idx..idx + 4].copy_from_slice(&value);
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size as u32,
        height: icon_size as u32,
    }
}
