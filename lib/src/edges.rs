use crate::sampler::LuminanceGrid;

/// Edge direction classification for line glyph selection
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeDirection {
    Vertical,   // | strong horizontal gradient
    Horizontal, // _ strong vertical gradient
    Diagonal1,  // / rising diagonal
    Diagonal2,  // \ falling diagonal, also wins diagonal ties
}

impl EdgeDirection {
    /// The line glyph drawn for this direction
    pub fn glyph(self) -> char {
        match self {
            EdgeDirection::Vertical => '|',
            EdgeDirection::Horizontal => '_',
            EdgeDirection::Diagonal1 => '/',
            EdgeDirection::Diagonal2 => '\\',
        }
    }
}

/// True for the four line glyphs
#[cfg(test)]
pub(crate) fn is_line_glyph(ch: char) -> bool {
    matches!(ch, '|' | '_' | '/' | '\\')
}

/// Central-difference gradients at a cell
///
/// # Returns
/// `(gx, gy)` where `gx = |g(x+1,y) - g(x-1,y)|` and `gy = |g(x,y+1) - g(x,y-1)|`.
/// Neighbours outside the grid read as white.
pub fn gradients(grid: &LuminanceGrid, x: i64, y: i64) -> (f64, f64) {
    let gx = (grid.get(x + 1, y) - grid.get(x - 1, y)).abs();
    let gy = (grid.get(x, y + 1) - grid.get(x, y - 1)).abs();
    (gx, gy)
}

/// Classify the edge at a cell, if any
///
/// Priority order: both gradients above the threshold gives a diagonal chosen
/// by comparing the two diagonal differences (`gd1 > gd2` gives `/`, anything
/// else `\`); otherwise a horizontal gradient gives `|` and a vertical
/// gradient gives `_`. Comparisons are strict, so a gradient equal to the
/// threshold is not an edge.
///
/// # Arguments
/// * `grid` - Luminance grid
/// * `x`, `y` - Cell coordinates
/// * `threshold` - Gradient a cell must exceed to count as an edge
pub fn detect_edge(grid: &LuminanceGrid, x: i64, y: i64, threshold: u32) -> Option<EdgeDirection> {
    let threshold = threshold as f64;
    let (gx, gy) = gradients(grid, x, y);

    if gx > threshold && gy > threshold {
        let gd1 = (grid.get(x + 1, y + 1) - grid.get(x - 1, y - 1)).abs();
        let gd2 = (grid.get(x - 1, y + 1) - grid.get(x + 1, y - 1)).abs();
        if gd1 > gd2 {
            Some(EdgeDirection::Diagonal1)
        } else {
            Some(EdgeDirection::Diagonal2)
        }
    } else if gx > threshold {
        Some(EdgeDirection::Vertical)
    } else if gy > threshold {
        Some(EdgeDirection::Horizontal)
    } else {
        None
    }
}
