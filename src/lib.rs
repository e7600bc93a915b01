//! This crate lifts single-cell transformations over spreadsheet ranges.
//! A formula argument is either one cell value or a 2-D grid of values, and
//! [`lift`] and [`combine`] let one function over a single value serve both.
//!
//! The bundled `HELLO` custom function and the example menu show how an add-on
//! built on top of it is wired to a spreadsheet host.

/// Grid storage for a selected range of cells.
///
/// # Example
/// ```
/// use sheetlift::{Grid, GridLike};
///
/// let grid: Grid<String> = "A,B;C".parse().unwrap();
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.column_counts(), vec![2, 1]);
/// assert!(!grid.is_rectangular());
/// ```
pub mod grid;
pub mod grid_like;
/// The scalar-or-grid argument received at the formula boundary.
pub mod value;
/// Element-wise lifting of single-value transformations onto grids.
///
/// # Example
/// ```
/// use sheetlift::{lift, Grid};
///
/// let double = lift(|n: u32| n * 2);
/// let grid = Grid::from_rows(vec![vec![1, 2], vec![3]]);
/// assert_eq!(double(grid), Grid::from_rows(vec![vec![2, 4], vec![6]]));
/// ```
pub mod lift;
/// Dispatch between a single-value transformation and its lifted counterpart.
pub mod combine;
/// Configuration for the greeting formula.
pub mod config;
/// The greeting transformation behind the `HELLO` custom function.
///
/// # Example
/// ```
/// use sheetlift::{greet, CellInput};
///
/// let greeted = greet(CellInput::Scalar("World".to_string()));
/// assert_eq!(greeted, CellInput::Scalar("Hello, World!".to_string()));
/// ```
pub mod greeting;
/// Custom functions exposed to the spreadsheet formula engine.
pub mod formula;
/// Declarative description of the add-on menu and its actions.
pub mod menu;
#[cfg(test)]
mod test_util;

use smallvec::SmallVec;
use thiserror::Error;

pub use combine::{combine, try_combine, ByShape, Discriminator, DEFAULT_DISCRIMINATOR};
pub use config::GreetingConfig;
pub use formula::{evaluate, find_function, CustomFunction, FUNCTIONS};
pub use greeting::{greet, greet_with, hello, hello_with};
pub use grid::Grid;
pub use grid_like::GridLike;
pub use lift::{lift, lift_par, try_lift, try_lift_par};
pub use menu::{
    addon_menu, on_open, placeholder_alert, run_action, Alert, Button, ButtonSet, Host, Menu,
    MenuEntry,
};
pub use value::CellInput;

// Most selections handed to a custom function are a handful of columns wide
const DEFAULT_SMALLVEC_SIZE: usize = 8;

#[derive(Error, Debug, PartialEq)]
pub enum AddonError {
    #[error("Unknown custom function: {name}")]
    UnknownFunction { name: String },

    #[error("Unknown menu action: {action}")]
    UnknownAction { action: String },
}

/// A type alias for SmallVec with an optimized stack-allocated buffer size.
pub type SmallVecLine<T> = SmallVec<[T; DEFAULT_SMALLVEC_SIZE]>;
