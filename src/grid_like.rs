use crate::{CellInput, Grid};

/// A trait for types that can report the shape of a cell selection.
pub trait GridLike {
    type Cell;

    /// Returns an iterator over all rows.
    fn rows_iter(&self) -> impl Iterator<Item = &[Self::Cell]>;

    /// Returns the number of rows.
    fn row_count(&self) -> usize {
        self.rows_iter().count()
    }

    /// Returns the number of columns of every row, in order.
    fn column_counts(&self) -> Vec<usize> {
        self.rows_iter().map(<[Self::Cell]>::len).collect()
    }

    /// Returns the number of cells across all rows.
    fn cell_count(&self) -> usize {
        self.rows_iter().map(<[Self::Cell]>::len).sum()
    }

    /// Returns `true` when every row has the same number of columns.
    fn is_rectangular(&self) -> bool {
        let mut counts = self.rows_iter().map(<[Self::Cell]>::len);
        match counts.next() {
            Some(first) => counts.all(|count| count == first),
            None => true,
        }
    }
}

impl<T> GridLike for Grid<T> {
    type Cell = T;

    fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.rows()
    }
}

/// A scalar reports the shape of a single cell.
impl<T> GridLike for CellInput<T> {
    type Cell = T;

    fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        let (scalar, rows) = match self {
            CellInput::Scalar(value) => (Some(std::slice::from_ref(value)), Default::default()),
            CellInput::Grid(grid) => (None, grid.rows.as_slice()),
        };
        scalar
            .into_iter()
            .chain(rows.iter().map(|row| row.as_slice()))
    }
}
