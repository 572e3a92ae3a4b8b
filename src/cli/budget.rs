//! Budget CLI commands
//!
//! Implements CLI commands for setting and viewing category budgets.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_details, format_budget_table};
use crate::error::TrackerResult;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_amount;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the budget for a category, creating the category if needed
    Set {
        /// Category name
        category: String,
        /// Amount (e.g., "250" or "250.00")
        amount: String,
    },

    /// List all budgets
    #[command(alias = "ls")]
    List,

    /// Show the budget for one category
    Show {
        /// Category name
        category: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount = parse_amount(&amount)?;
            let budget = service.set_budget(&category, amount)?;
            println!(
                "Budget for {} set to {}",
                budget.category,
                budget.amount.format_with_symbol(symbol)
            );
        }
        BudgetCommands::List => {
            let budgets = service.list()?;
            print!("{}", format_budget_table(&budgets, symbol));
        }
        BudgetCommands::Show { category } => {
            let budget = service.require(&category)?;
            print!("{}", format_budget_details(&budget, symbol));
        }
    }

    Ok(())
}
