use std::convert::Infallible;
use std::str::FromStr;

use tracing::*;

use super::*;

/// Separates rows in the textual form of a grid.
pub const ROW_SEPARATOR: char = ';';
/// Separates cells within a row.
pub const CELL_SEPARATOR: char = ',';
/// Wraps a cell holding separators, quotes, or the empty-grid spelling.
pub const QUOTE: char = '"';
/// Textual form of a grid with no rows.
pub const EMPTY_GRID: &str = "[]";

/// Parses `"A,B;C"` into the rows `[["A", "B"], ["C"]]`.
///
/// Every row segment holds at least one cell, so `""` is a single empty cell
/// and `"x;;z"` is a column whose middle cell is blank. A grid with no rows
/// is spelled `[]`. Inside `"..."` separators are literal and `""` is a quote,
/// as in CSV. An unterminated quote runs to the end of the input. Cells are
/// taken verbatim, without trimming.
///
/// # Example
/// ```
/// use sheetlift::Grid;
///
/// let grid: Grid<String> = "A,\"B;C\";".parse().unwrap();
/// assert_eq!(
///     grid,
///     Grid::from_rows(vec![vec!["A".to_string(), "B;C".to_string()], vec![String::new()]])
/// );
/// ```
impl FromStr for Grid<String> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        trace!("Parsing grid from {:?}", s);
        if s == EMPTY_GRID {
            return Ok(Grid::default());
        }

        let mut rows = Vec::new();
        let mut row = SmallVecLine::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            if in_quotes {
                if c == QUOTE {
                    // Check for escaped quote
                    if chars.peek() == Some(&QUOTE) {
                        current.push(QUOTE);
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    current.push(c);
                }
            } else {
                match c {
                    QUOTE => in_quotes = true,
                    CELL_SEPARATOR => row.push(std::mem::take(&mut current)),
                    ROW_SEPARATOR => {
                        row.push(std::mem::take(&mut current));
                        rows.push(std::mem::take(&mut row));
                    }
                    _ => current.push(c),
                }
            }
        }
        if in_quotes {
            debug!("Unterminated quote in grid text, closing it at the end");
        }
        row.push(current);
        rows.push(row);

        Ok(Grid::new(rows))
    }
}
