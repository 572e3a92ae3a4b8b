//! CLI commands for reports
//!
//! Provides commands for printing and exporting the monthly summary and the
//! per-category report for a month.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::reports::{CategorySpendingReport, MonthlySummaryReport};
use crate::storage::Storage;

use super::parse_month;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals per month with a bar chart
    Monthly {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending per category for one month, next to each budget
    Month {
        /// Month to report on (YYYY-MM)
        month: String,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Monthly { output } => {
            let report = MonthlySummaryReport::generate(storage)?;
            match output {
                Some(path) => {
                    report.export_csv(create_output(&path)?)?;
                    println!("Monthly summary exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(symbol)),
            }
        }
        ReportCommands::Month { month, output } => {
            let month = parse_month(&month)?;
            let report = CategorySpendingReport::generate(storage, month)?;
            match output {
                Some(path) => {
                    report.export_csv(create_output(&path)?)?;
                    println!("Category report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(symbol)),
            }
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> TrackerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        TrackerError::Io(format!("Failed to create {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
