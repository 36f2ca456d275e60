use anyhow::Result;
use clap::{Parser, Subcommand};

use cashflow::cli::{
    handle_add, handle_delete, handle_edit, handle_list, handle_summary, FilterArg, KindArg,
};
use cashflow::config::{CashflowPaths, Settings};
use cashflow::storage::open_ledger;

#[derive(Parser)]
#[command(
    name = "cashflow",
    version,
    about = "Terminal-based personal income and expense tracker",
    long_about = "cashflow is a terminal-based personal ledger. Record income and \
                  expense entries, watch the running balance, and filter, edit, or \
                  delete entries from the command line or the interactive TUI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Add a new entry
    Add {
        /// What the money was for
        description: String,
        /// Amount in currency units, e.g. 450.50
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Entry type
        #[arg(short, long, value_enum, default_value = "income")]
        kind: KindArg,
        /// Entry date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List entries, newest first
    #[command(alias = "ls")]
    List {
        /// Show only entries of this type
        #[arg(short, long, value_enum, default_value = "all")]
        filter: FilterArg,
    },

    /// Edit an existing entry; omitted fields keep their values
    Edit {
        /// Id of the entry to edit
        id: String,
        /// New entry type
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Id of the entry to delete
        id: String,
    },

    /// Show income, expense, and balance totals
    Summary,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CashflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            let store = open_ledger(&paths)?;
            cashflow::tui::run_tui(store, settings)?;
        }
        Some(Commands::Add {
            description,
            amount,
            kind,
            date,
        }) => {
            let mut store = open_ledger(&paths)?;
            handle_add(&mut store, &settings, kind, description, amount, date)?;
        }
        Some(Commands::List { filter }) => {
            let store = open_ledger(&paths)?;
            handle_list(&store, &settings, filter)?;
        }
        Some(Commands::Edit {
            id,
            kind,
            description,
            amount,
            date,
        }) => {
            let mut store = open_ledger(&paths)?;
            handle_edit(&mut store, &settings, id, kind, description, amount, date)?;
        }
        Some(Commands::Delete { id }) => {
            let mut store = open_ledger(&paths)?;
            handle_delete(&mut store, id)?;
        }
        Some(Commands::Summary) => {
            let store = open_ledger(&paths)?;
            handle_summary(&store, &settings)?;
        }
        Some(Commands::Config) => {
            println!("cashflow configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("cashflow - Terminal-based income and expense tracker");
            println!();
            println!("Run 'cashflow --help' for usage information.");
            println!("Run 'cashflow tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
