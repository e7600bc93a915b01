use std::fmt::{self, Write};

use super::parse::{CELL_SEPARATOR, EMPTY_GRID, QUOTE, ROW_SEPARATOR};
use super::*;

fn needs_quotes(cell: &str) -> bool {
    cell == EMPTY_GRID || cell.contains([CELL_SEPARATOR, ROW_SEPARATOR, QUOTE])
}

/// Writes the textual form accepted by `str::parse`, quoting cells as needed.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_GRID);
        }
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char(ROW_SEPARATOR)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_char(CELL_SEPARATOR)?;
                }
                let text = cell.to_string();
                if needs_quotes(&text) {
                    write!(f, "\"{}\"", text.replace(QUOTE, "\"\""))?;
                } else {
                    f.write_str(&text)?;
                }
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> Grid<T> {
    /// Renders one row per line with tab-separated cells, ready to paste back
    /// into a spreadsheet.
    pub fn to_tab_separated(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    out.push('\t');
                }
                let _ = write!(out, "{}", cell);
            }
        }
        out
    }
}
