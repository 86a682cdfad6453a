use anyhow::{Context, Result};
use ascii_textr::{TextArtConfig, convert_dynamic};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Convert an image to edge-aware ASCII art text
#[derive(Debug, Parser)]
#[command(name = "ascii-textr", version)]
struct Args {
    /// Image to convert (png, jpeg, webp, ...)
    input: PathBuf,

    /// Characters per row
    #[arg(short, long, default_value_t = 100)]
    width: u32,

    /// Contrast factor around mid-gray; 1.0 is neutral
    #[arg(short, long, default_value_t = 1.0)]
    contrast: f64,

    /// Gradient (0-255) a cell must exceed to draw a line glyph
    #[arg(short, long, default_value_t = 50)]
    edge_threshold: u32,

    /// Fraction of the character ramp in use, in (0, 1]
    #[arg(short, long, default_value_t = 1.0)]
    density: f64,

    /// Write the text here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> TextArtConfig {
        TextArtConfig {
            output_width: self.width,
            contrast: self.contrast,
            edge_threshold: self.edge_threshold,
            density: self.density,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.config();
    config.validate().context("invalid arguments")?;

    let image = image::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    log::info!(
        "loaded {} ({}x{})",
        args.input.display(),
        image.width(),
        image.height()
    );

    let art = convert_dynamic(&image, &config)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;
    let text = art.to_text();

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!(
                "wrote {}x{} characters to {}",
                art.width(),
                art.height(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }

    Ok(())
}
