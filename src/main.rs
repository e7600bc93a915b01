use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheetlift::{
    evaluate, greet_with, on_open, run_action, Alert, Button, CellInput, Grid,
    GreetingConfig, Host, Menu, MenuEntry, FUNCTIONS,
};
use tracing::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sheetlift", version, about = "Run the HELLO custom function and the add-on menu")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Greet a cell value, or every cell of a range
    Hello {
        /// The cell value, or the range when --grid is set
        value: String,
        /// Read VALUE as a range: rows split by ';', cells by ',', `"..."` quotes
        /// a cell, `[]` is a range with no rows
        #[arg(long)]
        grid: bool,
        /// Word placed before each value
        #[arg(long)]
        salutation: Option<String>,
        /// Text appended after each value
        #[arg(long)]
        terminator: Option<String>,
        /// Greet the rows of a range in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Evaluate a custom function by name
    Call {
        function: String,
        value: String,
        #[arg(long)]
        grid: bool,
    },
    /// List the registered custom functions
    Functions,
    /// Open the spreadsheet and print the installed menu
    Menu,
    /// Click a menu item bound to ACTION
    Action { action: String },
}

/// Renders the host's side of the add-on as plain text.
#[derive(Default)]
struct ConsoleHost {
    lines: Vec<String>,
}

impl ConsoleHost {
    fn render_menu(&mut self, menu: &Menu, depth: usize) {
        let indent = "  ".repeat(depth);
        self.lines.push(format!("{}{}", indent, menu.title));
        for entry in &menu.entries {
            match entry {
                MenuEntry::Item { label, action } => {
                    self.lines.push(format!("{}  {} -> {}", indent, label, action))
                }
                MenuEntry::Separator => self.lines.push(format!("{}  ---", indent)),
                MenuEntry::SubMenu(sub_menu) => self.render_menu(sub_menu, depth + 1),
            }
        }
    }
}

impl Host for ConsoleHost {
    fn install_menu(&mut self, menu: &Menu) {
        self.render_menu(menu, 0);
    }

    // Non-interactive: answers with the first button of the set
    fn alert(&mut self, alert: &Alert) -> Button {
        let buttons = alert.buttons.buttons();
        self.lines.push(format!("[{}] {}", alert.title, alert.message));
        self.lines.push(format!("{:?}", buttons));
        buttons.first().copied().unwrap_or(Button::Close)
    }
}

fn parse_input(value: &str, grid: bool) -> CellInput<String> {
    if grid {
        match value.parse::<Grid<String>>() {
            Ok(grid) => CellInput::Grid(grid),
            Err(never) => match never {},
        }
    } else {
        CellInput::Scalar(value.to_string())
    }
}

fn render(output: &CellInput<String>) -> String {
    match output {
        CellInput::Scalar(value) => value.clone(),
        CellInput::Grid(grid) => grid.to_tab_separated(),
    }
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Hello {
            value,
            grid,
            salutation,
            terminator,
            parallel,
        } => {
            let defaults = GreetingConfig::default();
            let config = GreetingConfig::new(
                salutation.unwrap_or(defaults.salutation),
                terminator.unwrap_or(defaults.terminator),
                parallel,
            );
            Ok(render(&greet_with(&config, parse_input(&value, grid))))
        }
        Command::Call {
            function,
            value,
            grid,
        } => {
            let output = evaluate(&function, parse_input(&value, grid))
                .with_context(|| format!("Failed to evaluate {}", function))?;
            Ok(render(&output))
        }
        Command::Functions => Ok(FUNCTIONS
            .iter()
            .map(|function| format!("{}\t{}", function.name, function.description))
            .collect::<Vec<_>>()
            .join("\n")),
        Command::Menu => {
            let mut host = ConsoleHost::default();
            on_open(&mut host);
            Ok(host.lines.join("\n"))
        }
        Command::Action { action } => {
            let mut host = ConsoleHost::default();
            let button = run_action(&mut host, &action)
                .with_context(|| format!("Failed to run menu action {}", action))?;
            info!("Alert dismissed with {:?}", button);
            Ok(host.lines.join("\n"))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    trace!("Parsed arguments: {:?}", cli);
    let output = run(cli)?;
    println!("{}", output);
    Ok(())
}
