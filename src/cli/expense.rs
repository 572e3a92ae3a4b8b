//! Expense CLI commands
//!
//! Implements `add` and `list`.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_recorded_expense};
use crate::error::{TrackerError, TrackerResult};
use crate::services::{BudgetService, CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

use super::{parse_amount, parse_month};

/// Arguments for recording an expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount (e.g., "12", "12.50")
    pub amount: String,

    /// Category name (must have a budget)
    #[arg(short, long)]
    pub category: String,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Mark as a repeated expense
    #[arg(short, long)]
    pub repeated: bool,

    /// Payment method (e.g., "Cash", "Credit Card")
    #[arg(short = 'm', long = "method")]
    pub payment_method: Option<String>,
}

/// Arguments for listing expenses
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show expenses in this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Handle the add command
pub fn handle_add_command(storage: &Storage, settings: &Settings, args: AddArgs) -> TrackerResult<()> {
    let amount = parse_amount(&args.amount)?;
    let date = match args.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    let service = ExpenseService::new(storage);
    let result = service.add_expense(CreateExpenseInput {
        date,
        category: args.category,
        amount,
        is_repeated: args.repeated,
        payment_method: args.payment_method,
    });

    let recorded = match result {
        Err(e) if e.is_not_found() => {
            let known = BudgetService::new(storage).categories()?;
            eprintln!("Known categories: {}", known.join(", "));
            return Err(e);
        }
        other => other?,
    };

    print!("{}", format_recorded_expense(&recorded, &settings.currency_symbol));
    Ok(())
}

/// Handle the list command
pub fn handle_list_command(storage: &Storage, settings: &Settings, args: ListArgs) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);

    let expenses = match args.month.as_deref() {
        Some(raw) => {
            let month = parse_month(raw)?;
            println!("Expenses for {}", month.friendly());
            service.expenses_for_month(month)?
        }
        None => service.list()?,
    };

    print!("{}", format_expense_table(&expenses, &settings.currency_symbol));
    Ok(())
}

fn parse_date(raw: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", raw.trim()))
    })
}
