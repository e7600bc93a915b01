use crate::SmallVecLine;

mod display;
mod parse;

pub use parse::{CELL_SEPARATOR, EMPTY_GRID, QUOTE, ROW_SEPARATOR};

/// An ordered 2-D selection of cell values.
///
/// Rows keep the order of the caller's selection. Rows are not required to
/// have the same length; see [`GridLike::is_rectangular`](crate::GridLike::is_rectangular).
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid<T> {
    pub rows: Vec<SmallVecLine<T>>,
}

impl<T> Grid<T> {
    /// Creates a new `Grid` from already collected rows.
    pub fn new(rows: Vec<SmallVecLine<T>>) -> Self {
        Self { rows }
    }

    /// Creates a `Grid` from any nested collection of cells.
    ///
    /// # Example
    /// ```
    /// use sheetlift::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec!["A", "B"], vec!["C"]]);
    /// assert_eq!(grid.get(0, 1), Some(&"B"));
    /// assert_eq!(grid.get(1, 1), None);
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        Self {
            rows: rows.into_iter().map(|row| row.into_iter().collect()).collect(),
        }
    }

    /// Creates a 1×1 `Grid` holding `value`.
    pub fn single(value: T) -> Self {
        let mut row = SmallVecLine::new();
        row.push(value);
        Self { rows: vec![row] }
    }

    /// Returns an iterator over the rows, in selection order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    pub fn row(&self, index: usize) -> Option<&[T]> {
        self.rows.get(index).map(|row| row.as_slice())
    }

    /// Returns the cell at `row`, `column`, if the selection covers it.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    /// Returns `true` when the grid has no rows.
    ///
    /// A grid made of empty rows is not empty: it still has a shape to keep.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<SmallVecLine<T>> {
        self.rows
    }

    /// Unwraps the only cell of a 1×1 grid, handing the grid back otherwise.
    ///
    /// # Example
    /// ```
    /// use sheetlift::Grid;
    ///
    /// assert_eq!(Grid::single(7).into_single(), Ok(7));
    /// assert!(Grid::from_rows(vec![vec![1, 2]]).into_single().is_err());
    /// ```
    pub fn into_single(mut self) -> Result<T, Self> {
        if self.rows.len() == 1 && self.rows[0].len() == 1 {
            if let Some(value) = self.rows.pop().and_then(|mut row| row.pop()) {
                return Ok(value);
            }
        }
        Err(self)
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}
