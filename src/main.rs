use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

use expense_tracker::cli::{
    authenticate, handle_add_command, handle_budget_command, handle_history_command,
    handle_list_command, handle_report_command, AddArgs, BudgetCommands, ListArgs, Login,
    ReportCommands,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::display::format_category_list;
use expense_tracker::services::{BudgetService, LoginOutcome};
use expense_tracker::storage::{init, Storage};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Single-user expense tracker with monthly budgets",
    long_about = "Records expenses against per-category budgets, warns when an expense \
                  goes over its budget, and summarizes spending by month. All data is \
                  kept as plain CSV files in one directory."
)]
struct Cli {
    /// Directory holding the data files (defaults to $EXPENSE_TRACKER_DATA_DIR,
    /// then the executable's directory)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Username to log in with
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_USER")]
    user: Option<String>,

    /// Password to log in with (prompted for when absent)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data files with the default categories
    Init,

    /// Show current configuration and paths
    Config,

    /// Log in, saving the login on first use
    Login,

    /// Record an expense
    Add(AddArgs),

    /// List expenses
    #[command(alias = "ls")]
    List(ListArgs),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// List category names
    Categories,

    /// List suggested payment methods
    PaymentMethods,

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    expense_tracker::logging::init_logging(cli.verbose);

    let paths = TrackerPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;
    tracing::debug!(data_dir = %paths.base_dir().display(), "resolved data directory");

    let Some(command) = cli.command else {
        println!("Expense Tracker - record expenses against monthly budgets");
        println!();
        println!("Run 'expense --help' for usage information.");
        println!("Run 'expense init' to create the data files.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            init::initialize_storage(&paths, &settings)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories:");
            for category in &settings.default_categories {
                println!("  - {}", category);
            }
            println!();
            println!("Run 'expense budget set <category> <amount>' to change a budget.");
            return Ok(());
        }
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Expenses file:    {}", paths.expenses_file().display());
            println!("Budgets file:     {}", paths.budgets_file().display());
            println!("Credentials file: {}", paths.credentials_file().display());
            println!("Initialized:      {}", !init::needs_initialization(&paths));
            println!();
            println!("Settings:");
            println!("  Schema version:     {}", settings.schema_version);
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Credential hashing: {}", settings.credential_hashing);
            println!("  Audit log enabled:  {}", settings.audit_enabled);
            return Ok(());
        }
        Commands::PaymentMethods => {
            print!("{}", format_category_list(&settings.payment_methods));
            return Ok(());
        }
        _ => {}
    }

    let storage = Storage::new(paths, &settings)?;
    storage.load_all(&settings)?;

    let login = Login {
        username: cli.user,
        password: cli.password.map(Zeroizing::new),
    };
    let outcome = authenticate(&storage, &settings, login)?;

    match command {
        Commands::Login => match outcome {
            LoginOutcome::Enrolled => println!("Login created. Welcome!"),
            LoginOutcome::Authenticated => println!("Login successful."),
        },
        Commands::Add(args) => handle_add_command(&storage, &settings, args)?,
        Commands::List(args) => handle_list_command(&storage, &settings, args)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, cmd)?,
        Commands::Categories => {
            let categories = BudgetService::new(&storage).categories()?;
            print!("{}", format_category_list(&categories));
        }
        Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd)?,
        Commands::History { count } => handle_history_command(&storage, count)?,
        Commands::Init | Commands::Config | Commands::PaymentMethods => {}
    }

    Ok(())
}
