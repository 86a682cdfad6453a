//! ASCII Textr - image to plain-text ASCII art converter
//!
//! This library downsamples an image to a grid of character cells, measures
//! the luminance of each cell, and picks either a line glyph (`| _ / \`) where
//! the local gradient marks an edge, or a tonal glyph from a density-controlled
//! ramp everywhere else.
//!
//! # Example
//! ```no_run
//! use ascii_textr::{convert, TextArtConfig};
//! use image;
//!
//! let input = image::open("photo.jpg").unwrap().to_rgba8();
//! let config = TextArtConfig::default();
//! let art = convert(&input, &config).unwrap();
//! print!("{}", art);
//! ```

pub mod ascii;
pub mod config;
pub mod edges;
pub mod error;
pub mod lut;
pub mod processor;
pub mod sampler;
pub mod text;

// Re-export main types for convenience
pub use config::TextArtConfig;
pub use error::{ConfigError, Error};
pub use lut::Ramp;
pub use processor::{convert, convert_dynamic};
pub use text::TextGrid;
