use crate::error::ConfigError;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone, PartialEq)]
pub struct TextArtConfig {
    /// Resolution
    pub output_width: u32,       // characters per row, default 100

    /// Tone
    pub contrast: f64,           // 1.0 = neutral, default 1.0
    pub density: f64,            // (0.0, 1.0], fraction of the ramp in use, default 1.0

    /// Edge detection
    pub edge_threshold: u32,     // 0-255 gradient scale, default 50
}

impl Default for TextArtConfig {
    fn default() -> Self {
        Self {
            // Resolution
            output_width: 100,

            // Tone
            contrast: 1.0,
            density: 1.0,

            // Edge detection
            edge_threshold: 50,
        }
    }
}

impl TextArtConfig {
    /// Validates the configuration parameters
    ///
    /// The edge threshold is not range-checked: values of 255 and above simply
    /// disable edge glyphs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_width == 0 {
            return Err(ConfigError::OutputWidth(self.output_width));
        }
        if !self.contrast.is_finite() || self.contrast <= 0.0 {
            return Err(ConfigError::Contrast(self.contrast));
        }
        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(ConfigError::Density(self.density));
        }
        Ok(())
    }
}
