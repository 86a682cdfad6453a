//! ASCII character lookup tables
//!
//! The tonal ramp used for cells without an edge, and the density rule that
//! decides how much of it is active.

/// Tonal characters ordered by luminance
///
/// 10 levels from darkest (@) to lightest (space)
pub const FULL_RAMP: [char; 10] = [
    '@',  // 0: darkest
    '%',  // 1
    '#',  // 2
    '*',  // 3
    '+',  // 4
    '=',  // 5
    '-',  // 6
    ':',  // 7
    '.',  // 8
    ' ',  // 9: lightest
];

/// The active prefix of [`FULL_RAMP`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp {
    glyphs: &'static [char],
}

impl Default for Ramp {
    fn default() -> Self {
        Self { glyphs: &FULL_RAMP }
    }
}

impl Ramp {
    /// Select the ramp for a density level
    ///
    /// Keeps `floor(density * 10)` glyphs, never fewer than one and never more
    /// than the full ramp. Out-of-range and NaN densities clamp instead of
    /// failing.
    ///
    /// # Arguments
    /// * `density` - Density level in (0.0, 1.0]
    pub fn from_density(density: f64) -> Self {
        let wanted = (density * FULL_RAMP.len() as f64).floor();
        // `as` saturates negatives to 0 and maps NaN to 0
        let len = (wanted as usize).clamp(1, FULL_RAMP.len());
        Self {
            glyphs: &FULL_RAMP[..len],
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: a ramp holds at least one glyph
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &'static [char] {
        self.glyphs
    }

    /// Get the tonal character for a luminance value
    ///
    /// # Arguments
    /// * `luminance` - Luminance on the 0-255 scale
    ///
    /// # Returns
    /// `ramp[floor(luminance / 255 * (len - 1))]`
    pub fn tonal_glyph(&self, luminance: f64) -> char {
        let last = self.glyphs.len() - 1;
        let index = ((luminance / 255.0) * last as f64).floor() as usize;
        self.glyphs[index.min(last)]
    }
}
