//! Conventions:
//! - Spreadsheet-facing names are ALL CAPS (e.g. `HELLO`); lookups ignore case
//!   the way the formula bar does.
//! - Every function takes one argument, a cell value or a range, and returns
//!   a result of the same shape.

use tracing::*;

use crate::{greet, AddonError, CellInput};

#[derive(Debug, Clone, Copy)]
pub struct CustomFunction {
    pub name: &'static str,
    pub description: &'static str,
    pub eval: fn(CellInput<String>) -> CellInput<String>,
}

impl CustomFunction {
    pub fn call(&self, input: CellInput<String>) -> CellInput<String> {
        (self.eval)(input)
    }
}

pub const FUNCTIONS: &[CustomFunction] = &[CustomFunction {
    name: "HELLO",
    description: "Inserts a cell value, or each value of a range, into the greeting Hello, {value}!",
    eval: greet,
}];

pub fn find_function(name: &str) -> Option<&'static CustomFunction> {
    FUNCTIONS
        .iter()
        .find(|function| function.name.eq_ignore_ascii_case(name))
}

/// Evaluates the custom function `name` as the formula engine would.
///
/// # Errors
/// Returns [`AddonError::UnknownFunction`] if no function has that name.
///
/// # Example
/// ```
/// use sheetlift::{evaluate, CellInput};
///
/// let result = evaluate("hello", CellInput::Scalar("World".to_string())).unwrap();
/// assert_eq!(result, CellInput::Scalar("Hello, World!".to_string()));
/// ```
pub fn evaluate(name: &str, input: CellInput<String>) -> Result<CellInput<String>, AddonError> {
    let function = find_function(name).ok_or_else(|| {
        debug!("No custom function named {}", name);
        AddonError::UnknownFunction {
            name: name.to_string(),
        }
    })?;
    debug!("Evaluating {}", function.name);
    Ok(function.call(input))
}
