use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use expense_core::VERSION;

/// Expense - a personal expense tracker for the terminal
#[derive(Parser)]
#[command(name = "expense")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the expense database
    #[arg(short, long, global = true, env = "EXPENSE_DB")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the expense database will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Currency symbol used when displaying amounts
    #[arg(long, value_name = "SYMBOL")]
    pub currency: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Category label (e.g. Food, Transport)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Amount; negative values record income or refunds
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `total` command
#[derive(Args)]
pub struct TotalArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Expense ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `breakdown` command
#[derive(Args)]
pub struct BreakdownArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `categories` command
#[derive(Args)]
pub struct CategoriesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the config file and create the expense database
    Init(InitArgs),

    /// Record a new expense
    Add(AddArgs),

    /// Show the total of all recorded expenses
    Total(TotalArgs),

    /// List all expenses, newest first
    List(ListArgs),

    /// Delete an expense by ID
    Delete(DeleteArgs),

    /// Show totals per category
    Breakdown(BreakdownArgs),

    /// Show the suggested categories
    Categories(CategoriesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_accepts_negative_amount() {
        let cli = Cli::try_parse_from([
            "expense", "add", "--category", "Income", "--amount", "-50", "--no-input",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add(args)) => assert_eq!(args.amount, Some(-50.0)),
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_add_rejects_non_numeric_amount() {
        let result = Cli::try_parse_from(["expense", "add", "--amount", "lots"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["expense", "delete", "abc"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["expense", "list", "--db", "/tmp/x.db", "-vv", "--json"])
            .unwrap();
        assert_eq!(cli.db.as_deref(), Some("/tmp/x.db"));
        assert_eq!(cli.verbose, 2);
    }
}
