use tracing::*;

use crate::{CellInput, Grid};

/// Decides whether an input is handled by the grid branch of a dispatcher.
///
/// Any `Fn(&CellInput<T>) -> bool` is a discriminator, so a custom policy can
/// be passed as a closure.
pub trait Discriminator<T> {
    fn is_grid(&self, input: &CellInput<T>) -> bool;
}

/// Routes on the variant chosen at the formula boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByShape;

impl<T> Discriminator<T> for ByShape {
    fn is_grid(&self, input: &CellInput<T>) -> bool {
        input.is_grid()
    }
}

/// The discriminator to pass when no customization is needed.
pub const DEFAULT_DISCRIMINATOR: ByShape = ByShape;

impl<T, F> Discriminator<T> for F
where
    F: Fn(&CellInput<T>) -> bool,
{
    fn is_grid(&self, input: &CellInput<T>) -> bool {
        self(input)
    }
}

enum Route<T> {
    Single(T),
    Lifted(Grid<T>),
}

/// Resolves the discriminator's verdict against the actual variant.
///
/// A scalar sent to the grid branch travels as a 1×1 grid. A grid sent to the
/// scalar branch is unwrapped only when it holds exactly one cell and
/// otherwise falls back to the grid branch.
fn route<T, D: Discriminator<T>>(discriminator: &D, input: CellInput<T>) -> Route<T> {
    let is_grid = discriminator.is_grid(&input);
    match (input, is_grid) {
        (CellInput::Scalar(value), false) => Route::Single(value),
        (CellInput::Grid(grid), true) => Route::Lifted(grid),
        (CellInput::Scalar(value), true) => {
            debug!("Promoting scalar to a 1x1 grid");
            Route::Lifted(Grid::single(value))
        }
        (CellInput::Grid(grid), false) => match grid.into_single() {
            Ok(value) => {
                debug!("Unwrapping 1x1 grid to a scalar");
                Route::Single(value)
            }
            Err(grid) => {
                debug!(
                    "Grid of {} rows cannot be treated as a scalar, using the grid branch",
                    grid.rows.len()
                );
                Route::Lifted(grid)
            }
        },
    }
}

/// Builds a dispatcher that sends scalars to `single` and grids to `lifted`.
///
/// # Example
/// ```
/// use sheetlift::{combine, lift, CellInput, Grid, DEFAULT_DISCRIMINATOR};
///
/// let shout = |s: String| s.to_uppercase();
/// let dispatch = combine(shout, lift(shout), DEFAULT_DISCRIMINATOR);
///
/// assert_eq!(
///     dispatch(CellInput::Scalar("hi".to_string())),
///     CellInput::Scalar("HI".to_string())
/// );
/// assert_eq!(
///     dispatch(CellInput::Grid(Grid::from_rows(vec![vec!["a".to_string()]]))),
///     CellInput::Grid(Grid::from_rows(vec![vec!["A".to_string()]]))
/// );
/// ```
pub fn combine<T, S, L, D>(single: S, lifted: L, discriminator: D) -> impl Fn(CellInput<T>) -> CellInput<T>
where
    S: Fn(T) -> T,
    L: Fn(Grid<T>) -> Grid<T>,
    D: Discriminator<T>,
{
    move |input| match route(&discriminator, input) {
        Route::Single(value) => CellInput::Scalar(single(value)),
        Route::Lifted(grid) => CellInput::Grid(lifted(grid)),
    }
}

/// Fallible form of [`combine`]; errors from either branch are returned as is.
pub fn try_combine<T, E, S, L, D>(
    single: S,
    lifted: L,
    discriminator: D,
) -> impl Fn(CellInput<T>) -> Result<CellInput<T>, E>
where
    S: Fn(T) -> Result<T, E>,
    L: Fn(Grid<T>) -> Result<Grid<T>, E>,
    D: Discriminator<T>,
{
    move |input| match route(&discriminator, input) {
        Route::Single(value) => single(value).map(CellInput::Scalar),
        Route::Lifted(grid) => lifted(grid).map(CellInput::Grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lift, try_lift, GridLike};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_scalar_calls_single_once() {
        let calls = Cell::new(0);
        let f = |n: i32| {
            calls.set(calls.get() + 1);
            n + 1
        };
        let dispatch = combine(&f, lift(&f), DEFAULT_DISCRIMINATOR);

        assert_eq!(dispatch(CellInput::Scalar(41)), CellInput::Scalar(42));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_branch_is_chosen_by_variant() {
        let dispatch = combine(|n: i32| n - 1, |_: Grid<i32>| Grid::single(0), ByShape);

        assert_eq!(dispatch(CellInput::Scalar(1)), CellInput::Scalar(0));
        assert_eq!(
            dispatch(CellInput::Grid(Grid::from_rows(vec![vec![5, 6]]))),
            CellInput::Grid(Grid::single(0))
        );
    }

    #[test]
    fn test_custom_discriminator_promotes_scalar() {
        let dispatch = combine(
            |n: i32| n * 10,
            lift(|n: i32| n * 2),
            |_: &CellInput<i32>| true,
        );
        assert_eq!(
            dispatch(CellInput::Scalar(3)),
            CellInput::Grid(Grid::single(6))
        );
    }

    #[test]
    fn test_custom_discriminator_unwraps_single_cell_grid() {
        let dispatch = combine(
            |n: i32| n * 10,
            lift(|n: i32| n * 2),
            |_: &CellInput<i32>| false,
        );
        assert_eq!(
            dispatch(CellInput::Grid(Grid::single(3))),
            CellInput::Scalar(30)
        );
        // More than one cell cannot go to the scalar branch
        assert_eq!(
            dispatch(CellInput::Grid(Grid::from_rows(vec![vec![1], vec![2]]))),
            CellInput::Grid(Grid::from_rows(vec![vec![2], vec![4]]))
        );
    }

    #[test]
    fn test_try_combine_propagates_errors() {
        let check = |n: u8| if n > 100 { Err(n) } else { Ok(n) };
        let dispatch = try_combine(check, try_lift(check), DEFAULT_DISCRIMINATOR);

        assert_eq!(dispatch(CellInput::Scalar(7)), Ok(CellInput::Scalar(7)));
        assert_eq!(dispatch(CellInput::Scalar(200)), Err(200));
        assert_eq!(
            dispatch(CellInput::Grid(Grid::from_rows(vec![vec![1, 101, 102]]))),
            Err(101)
        );
    }

    proptest! {
        #[test]
        fn test_grid_calls_single_per_cell_proptest(rows in 0..10usize, columns in 0..10usize) {
            let calls = Cell::new(0);
            let f = |n: usize| {
                calls.set(calls.get() + 1);
                n
            };
            let dispatch = combine(&f, lift(&f), DEFAULT_DISCRIMINATOR);
            let grid = Grid::from_rows((0..rows).map(|r| (0..columns).map(move |c| r * columns + c)));

            let result = dispatch(CellInput::Grid(grid.clone()));

            prop_assert_eq!(calls.get(), rows * columns);
            prop_assert_eq!(result.column_counts(), grid.column_counts());
        }
    }
}
