use std::fmt;

/// Finished ASCII art: `height` rows of exactly `width` characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    width: u32,
    height: u32,
    rows: Vec<String>,
}

impl TextGrid {
    /// Wrap rows produced by the glyph mapper
    ///
    /// Every row must hold `width` characters.
    pub(crate) fn from_rows(width: u32, rows: Vec<String>) -> Self {
        debug_assert!(rows.iter().all(|row| row.chars().count() == width as usize));
        Self {
            width,
            height: rows.len() as u32,
            rows,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Character at `(x, y)`, if inside the grid
    pub fn char_at(&self, x: u32, y: u32) -> Option<char> {
        if x >= self.width {
            return None;
        }
        self.rows.get(y as usize)?.chars().nth(x as usize)
    }

    /// Plain text for display or export, every row terminated by `\n`
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.width as usize + 1) * self.rows.len());
        for row in &self.rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
