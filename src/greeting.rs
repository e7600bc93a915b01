use tracing::*;

use crate::{combine, lift, lift_par, CellInput, GreetingConfig, DEFAULT_DISCRIMINATOR};

/// Greets a single cell value: `Hello, {value}!`.
pub fn hello(value: String) -> String {
    format!("Hello, {}!", value)
}

/// Greets a single cell value with the salutation and terminator of `config`.
pub fn hello_with(config: &GreetingConfig, value: String) -> String {
    format!("{}, {}{}", config.salutation, value, config.terminator)
}

/// Greets a cell value or every cell of a range, keeping the range's shape.
pub fn greet(input: CellInput<String>) -> CellInput<String> {
    let dispatch = combine(hello, lift(hello), DEFAULT_DISCRIMINATOR);
    dispatch(input)
}

/// Same as [`greet`] with a custom [`GreetingConfig`].
///
/// # Example
/// ```
/// use sheetlift::{greet_with, CellInput, Grid, GreetingConfig};
///
/// let config = GreetingConfig::new("Goodbye", ".", false);
/// let greeted = greet_with(&config, CellInput::Grid("A;B".parse().unwrap()));
/// assert_eq!(
///     greeted,
///     CellInput::Grid(Grid::from_rows(vec![
///         vec!["Goodbye, A.".to_string()],
///         vec!["Goodbye, B.".to_string()],
///     ]))
/// );
/// ```
pub fn greet_with(config: &GreetingConfig, input: CellInput<String>) -> CellInput<String> {
    debug!("Greeting with config: {:?}", config);
    let single = |value| hello_with(config, value);
    if config.enable_parallel {
        combine(single, lift_par(single), DEFAULT_DISCRIMINATOR)(input)
    } else {
        combine(single, lift(single), DEFAULT_DISCRIMINATOR)(input)
    }
}
