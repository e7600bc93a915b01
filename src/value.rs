use crate::Grid;

/// An argument as a custom function receives it: one cell, or a range.
///
/// The formula adapter decides the variant once, at the call boundary, so the
/// transformations downstream never inspect runtime types.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CellInput<T> {
    Scalar(T),
    Grid(Grid<T>),
}

impl<T> CellInput<T> {
    pub fn is_grid(&self) -> bool {
        matches!(self, CellInput::Grid(_))
    }

    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            CellInput::Scalar(value) => Some(value),
            CellInput::Grid(_) => None,
        }
    }

    pub fn as_grid(&self) -> Option<&Grid<T>> {
        match self {
            CellInput::Grid(grid) => Some(grid),
            CellInput::Scalar(_) => None,
        }
    }
}
