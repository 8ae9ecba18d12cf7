//! Expense CLI - a personal expense tracker for the terminal
//!
//! This is the command-line interface for Expense. It records, lists, and
//! aggregates expenses stored by `expense-core`.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use expense_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{add, breakdown, delete, init, list, misc, total};
use crate::errors::{exit_code_for, CliError};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.error_ui_context();

        let (message, hint) = match e.downcast_ref::<CliError>() {
            Some(cli_err) => (cli_err.message().to_string(), cli_err.hint().map(str::to_string)),
            None => {
                let message = format!("{:#}", e);
                let hint = extract_error_hint(&message);
                (message, hint)
            }
        };

        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Provide contextual hints for common error patterns.
fn extract_error_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("failed to parse config") {
        return Some(
            "Fix the TOML syntax, or run `expense init --force` to rewrite the config.".to_string(),
        );
    }

    if error_lower.contains("home is not set") {
        return Some("Pass --db or set EXPENSE_DB to choose a database file.".to_string());
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            add::handle_add(ctx, args)?;
        }
        Some(Commands::Total(args)) => {
            total::handle_total(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            list::handle_list(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            delete::handle_delete(ctx, args)?;
        }
        Some(Commands::Breakdown(args)) => {
            breakdown::handle_breakdown(ctx, args)?;
        }
        Some(Commands::Categories(args)) => {
            misc::handle_categories(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Expense v{}", VERSION);
            println!("\nQuickstart:");
            println!("  expense init");
            println!("  expense add --category Food --amount 120 --description \"Lunch\"");
            println!("  expense list");
            println!("  expense total");
            println!("  expense breakdown");
            println!("\nRun `expense --help` for full usage.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_bad_config() {
        let hint = extract_error_hint("Failed to parse config /x/config.toml: expected `]`");
        assert!(hint.unwrap().contains("expense init --force"));
    }

    #[test]
    fn test_no_hint_for_unknown_error() {
        assert!(extract_error_hint("something odd").is_none());
    }
}
