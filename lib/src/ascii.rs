use crate::edges::detect_edge;
use crate::lut::Ramp;
use crate::sampler::LuminanceGrid;
use crate::text::TextGrid;
use rayon::prelude::*;

/// Select the ASCII character for one cell
///
/// Priority: a detected edge draws its line glyph, otherwise the cell's
/// luminance picks a glyph from the ramp.
///
/// # Arguments
/// * `grid` - Luminance grid
/// * `x` - Column
/// * `y` - Row
/// * `edge_threshold` - Gradient a cell must exceed to count as an edge
/// * `ramp` - Active tonal ramp
pub fn select_glyph(grid: &LuminanceGrid, x: u32, y: u32, edge_threshold: u32, ramp: &Ramp) -> char {
    let (x, y) = (x as i64, y as i64);
    match detect_edge(grid, x, y, edge_threshold) {
        Some(direction) => direction.glyph(),
        None => ramp.tonal_glyph(grid.get(x, y)),
    }
}

/// Map every cell of a luminance grid to a glyph
///
/// Cells only read their neighbours, so rows are processed in parallel and
/// collected back in order.
///
/// # Returns
/// A text grid with the same dimensions as `grid`
pub fn map_to_glyphs(grid: &LuminanceGrid, edge_threshold: u32, ramp: &Ramp) -> TextGrid {
    let rows = (0..grid.height())
        .into_par_iter()
        .map(|y| {
            (0..grid.width())
                .map(|x| select_glyph(grid, x, y, edge_threshold, ramp))
                .collect::<String>()
        })
        .collect();

    TextGrid::from_rows(grid.width(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::is_line_glyph;

    #[test]
    fn test_select_glyph_edge() {
        let grid = LuminanceGrid::from_fn(3, 3, |x, _| 100.0 * x as f64);
        assert_eq!(select_glyph(&grid, 1, 1, 10, &Ramp::default()), '|');
    }

    #[test]
    fn test_select_glyph_zero_threshold() {
        // Centre gradient is only 0.5, still an edge at threshold 0
        let grid = LuminanceGrid::from_fn(3, 3, |x, _| 100.0 + 0.25 * x as f64);
        assert_eq!(select_glyph(&grid, 1, 1, 0, &Ramp::default()), '|');
        assert_eq!(select_glyph(&grid, 1, 1, 1, &Ramp::default()), '*');
    }

    #[test]
    fn test_select_glyph_fill() {
        let grid = LuminanceGrid::from_fn(3, 3, |_, _| 0.0);
        // Centre has no gradient
        assert_eq!(select_glyph(&grid, 1, 1, 10, &Ramp::default()), '@');

        let grid = LuminanceGrid::from_fn(3, 3, |_, _| 255.0);
        assert_eq!(select_glyph(&grid, 1, 1, 10, &Ramp::default()), ' ');
    }

    #[test]
    fn test_mid_gray_two_by_one() {
        let grid = LuminanceGrid::from_fn(2, 1, |_, _| 128.0);

        // Without edges every cell is ramp[4]
        let text = map_to_glyphs(&grid, 255, &Ramp::default());
        assert_eq!(text.to_text(), "++\n");

        // The white border gives gx = 127 at both cells
        let text = map_to_glyphs(&grid, 50, &Ramp::default());
        assert_eq!(text.to_text(), "||\n");
    }

    #[test]
    fn test_uniform_interior_is_tonal() {
        let grid = LuminanceGrid::from_fn(6, 5, |_, _| 128.0);
        let text = map_to_glyphs(&grid, 50, &Ramp::default());
        for y in 1..4 {
            for x in 1..5 {
                assert_eq!(text.char_at(x, y), Some('+'));
            }
        }
    }

    #[test]
    fn test_uniform_white_has_no_edges() {
        // The border sentinel matches white, so no cell sees a gradient
        let grid = LuminanceGrid::from_fn(7, 4, |_, _| 255.0);
        let text = map_to_glyphs(&grid, 0, &Ramp::default());
        assert!(text.rows().iter().all(|row| row == "       "));
    }

    #[test]
    fn test_high_threshold_is_pure_tonal() {
        let grid = LuminanceGrid::from_fn(8, 8, |x, y| if (x / 2 + y / 2) % 2 == 0 { 0.0 } else { 255.0 });
        let text = map_to_glyphs(&grid, 255, &Ramp::default());
        for row in text.rows() {
            assert!(row.chars().all(|ch| ch == '@' || ch == ' '));
        }
    }

    #[test]
    fn test_checkerboard_boundaries_are_lines() {
        let grid = LuminanceGrid::from_fn(4, 4, |x, y| if (x / 2 + y / 2) % 2 == 0 { 0.0 } else { 255.0 });
        let text = map_to_glyphs(&grid, 10, &Ramp::default());
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            let ch = text.char_at(x, y).unwrap();
            assert!(is_line_glyph(ch), "({}, {}) was {:?}", x, y, ch);
        }
        // gd1 = |0 - 0|, gd2 = |255 - 255|: tie
        assert_eq!(text.char_at(1, 1), Some('\\'));
    }

    #[test]
    fn test_density_changes_tonal_glyphs() {
        let grid = LuminanceGrid::from_fn(3, 3, |_, _| 128.0);
        let half = Ramp::from_density(0.5);
        // floor(128 / 255 * 4) = 2
        assert_eq!(select_glyph(&grid, 1, 1, 50, &half), '#');
    }

    #[test]
    fn test_output_dimensions() {
        let grid = LuminanceGrid::from_fn(13, 7, |x, y| ((x * 19 + y * 7) % 256) as f64);
        let text = map_to_glyphs(&grid, 30, &Ramp::from_density(0.7));
        assert_eq!(text.width(), 13);
        assert_eq!(text.height(), 7);
        for row in text.rows() {
            assert_eq!(row.chars().count(), 13);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let grid = LuminanceGrid::from_fn(41, 23, |x, y| ((x * x + 3 * y) % 256) as f64);
        let ramp = Ramp::from_density(0.8);
        let text = map_to_glyphs(&grid, 20, &ramp);

        for y in 0..grid.height() {
            let expected: String = (0..grid.width())
                .map(|x| select_glyph(&grid, x, y, 20, &ramp))
                .collect();
            assert_eq!(text.rows()[y as usize], expected);
        }
    }
}
