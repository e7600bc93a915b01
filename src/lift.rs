use rayon::prelude::*;
use tracing::*;

use crate::{Grid, GridLike, SmallVecLine};

/// Lifts `f` so that it applies to every cell of a grid.
///
/// The returned function keeps the shape of its input exactly: same number of
/// rows, same number of cells in each row, same order. Ragged grids are
/// mapped row by row as they are.
pub fn lift<T, F>(f: F) -> impl Fn(Grid<T>) -> Grid<T>
where
    F: Fn(T) -> T,
{
    move |grid| {
        trace_shape(&grid);
        let rows = grid
            .into_rows()
            .into_iter()
            .map(|row| row.into_iter().map(&f).collect::<SmallVecLine<T>>())
            .collect();
        Grid::new(rows)
    }
}

/// Lifts a fallible `f` over a grid.
///
/// The first cell for which `f` fails aborts the whole grid; cells after it
/// are never visited and no partial grid is returned.
///
/// # Example
/// ```
/// use sheetlift::{try_lift, Grid};
///
/// let parse = try_lift(|cell: String| cell.parse::<u8>().map(|n| (n + 1).to_string()));
///
/// let ok = parse(Grid::from_rows(vec![vec!["1".to_string(), "2".to_string()]]));
/// assert_eq!(ok.unwrap(), Grid::from_rows(vec![vec!["2".to_string(), "3".to_string()]]));
///
/// let err = parse(Grid::from_rows(vec![vec!["1".to_string(), "x".to_string()]]));
/// assert!(err.is_err());
/// ```
pub fn try_lift<T, E, F>(f: F) -> impl Fn(Grid<T>) -> Result<Grid<T>, E>
where
    F: Fn(T) -> Result<T, E>,
{
    move |grid| {
        trace_shape(&grid);
        let rows = grid
            .into_rows()
            .into_iter()
            .map(|row| row.into_iter().map(&f).collect::<Result<SmallVecLine<T>, E>>())
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Grid::new(rows))
    }
}

/// Same as [`lift`], with rows mapped in parallel using rayon.
///
/// Row and cell order are preserved.
pub fn lift_par<T, F>(f: F) -> impl Fn(Grid<T>) -> Grid<T>
where
    T: Send,
    F: Fn(T) -> T + Sync + Send,
{
    move |grid| {
        trace_shape(&grid);
        let rows = grid
            .into_rows()
            .into_par_iter()
            .map(|row| row.into_iter().map(&f).collect::<SmallVecLine<T>>())
            .collect();
        Grid::new(rows)
    }
}

/// Same as [`try_lift`], with rows mapped in parallel using rayon.
///
/// Each row stops at its own first failure, but rows already running in
/// parallel with a failing one may still be mapped to their end. The error is
/// returned instead of any grid.
pub fn try_lift_par<T, E, F>(f: F) -> impl Fn(Grid<T>) -> Result<Grid<T>, E>
where
    T: Send,
    E: Send,
    F: Fn(T) -> Result<T, E> + Sync + Send,
{
    move |grid| {
        trace_shape(&grid);
        let rows = grid
            .into_rows()
            .into_par_iter()
            .map(|row| row.into_iter().map(&f).collect::<Result<SmallVecLine<T>, E>>())
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Grid::new(rows))
    }
}

fn trace_shape<T>(grid: &Grid<T>) {
    trace!(
        "Lifting over {} rows, {} cells",
        grid.row_count(),
        grid.cell_count()
    );
    if !grid.is_rectangular() {
        debug!(
            "Grid is not rectangular, column counts: {:?}",
            grid.column_counts()
        );
    }
}
