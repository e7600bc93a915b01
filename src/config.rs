const DEFAULT_SALUTATION: &str = "Hello";
const DEFAULT_TERMINATOR: &str = "!";

/// Configuration for the greeting formula.
///
/// # Example
/// ```
/// use sheetlift::GreetingConfig;
///
/// let config = GreetingConfig::default();
/// assert_eq!(config.salutation, "Hello");
/// assert_eq!(config.terminator, "!");
/// assert_eq!(config.enable_parallel, false);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GreetingConfig {
    /// Word placed before the cell value (default: "Hello")
    pub salutation: String,
    /// Text appended after the cell value (default: "!")
    pub terminator: String,
    /// Greet the rows of a grid in parallel (default: false)
    pub enable_parallel: bool,
}

impl GreetingConfig {
    /// Creates a new `GreetingConfig` with the specified parameters.
    ///
    /// # Example
    /// ```
    /// use sheetlift::GreetingConfig;
    ///
    /// let config = GreetingConfig::new("Goodbye", ".", true);
    /// assert_eq!(config.salutation, "Goodbye");
    /// assert_eq!(config.terminator, ".");
    /// assert!(config.enable_parallel);
    /// ```
    pub fn new(
        salutation: impl Into<String>,
        terminator: impl Into<String>,
        enable_parallel: bool,
    ) -> Self {
        Self {
            salutation: salutation.into(),
            terminator: terminator.into(),
            enable_parallel,
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        GreetingConfig::new(DEFAULT_SALUTATION, DEFAULT_TERMINATOR, false)
    }
}
