use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tallydesk::cli::{
    handle_calc_command, handle_chart_command, handle_expense_command, handle_export_command,
    handle_greet_command, handle_income_command, handle_sample_command, handle_summary_command,
    handle_todo_command, ExportFormat,
};
use tallydesk::clock::SystemClock;
use tallydesk::config::{paths::TallyPaths, settings::Settings};
use tallydesk::models::PeriodType;
use tallydesk::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Pocket calculator and personal ledger for the terminal",
    long_about = "tallydesk keeps a desk calculator, an income and expense ledger \
                  with charts, and a small to-do list one command away."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a key sequence to the calculator, e.g. "12+7="
    Calc {
        /// Keys: digits, '.', + - * / (or × ÷), =, % and n (±), c (clear)
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },

    /// Income records
    #[command(subcommand)]
    Income(tallydesk::cli::IncomeCommands),

    /// Expense records
    #[command(subcommand)]
    Expense(tallydesk::cli::ExpenseCommands),

    /// Show totals and spending by category
    Summary,

    /// Income vs expense chart
    Chart {
        /// Bucket size: day, week or month
        #[arg(short, long)]
        period: Option<PeriodType>,
        /// How many windows to step back from the current one
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },

    /// To-do list commands
    #[command(subcommand)]
    Todo(tallydesk::cli::TodoCommands),

    /// Say hello
    Greet {
        /// Who to greet
        name: Option<String>,
    },

    /// Replace the ledger with three months of sample data
    Sample,

    /// Export the ledger and to-do list
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Launch the calculator TUI
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Commands that need no stored state
    match &cli.command {
        Some(Commands::Calc { keys }) => {
            handle_calc_command(keys)?;
            return Ok(());
        }
        Some(Commands::Greet { name }) => {
            handle_greet_command(name.clone());
            return Ok(());
        }
        Some(Commands::Tui) => return tallydesk::tui::run_tui(),
        _ => {}
    }

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    let clock = SystemClock;

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, &clock, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, &clock, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&storage, &settings)?;
        }
        Some(Commands::Chart { period, offset }) => {
            handle_chart_command(&storage, &settings, &clock, period, offset)?;
        }
        Some(Commands::Todo(cmd)) => {
            handle_todo_command(&storage, &settings, &clock, cmd)?;
        }
        Some(Commands::Sample) => {
            handle_sample_command(&storage, &settings, &clock)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?;
        }
        Some(Commands::Config) => {
            println!("tallydesk Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Tasks file:     {}", paths.tasks_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Default chart period: {}", settings.default_chart_period);
            println!("  Audit enabled:        {}", settings.audit_enabled);
        }
        Some(Commands::Calc { .. } | Commands::Greet { .. } | Commands::Tui) => {}
        None => {
            println!("tallydesk - calculator, ledger and to-do list");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally tui' to launch the calculator.");
        }
    }

    Ok(())
}
