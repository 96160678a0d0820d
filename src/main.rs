use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use spence::cli::{
    handle_accounts_command, handle_ask_command, handle_bill_command, handle_budget_command,
    handle_dashboard_command, handle_insights_command, handle_spending_command,
    handle_transaction_command, parse_window, BillCommands, TransactionCommands,
};
use spence::config::{paths::SpencePaths, settings::Settings};
use spence::dataset::DatasetConfig;
use spence::session::Session;

#[derive(Parser)]
#[command(
    name = "spence",
    author = "Kaylee Beyene",
    version,
    about = "Terminal personal-finance dashboard over a generated demo dataset",
    long_about = "Spence renders a personal-finance dashboard over a demo dataset \
                  generated fresh for each session: balances, transactions, bills, \
                  budgets, spending analytics, and a canned assistant. Nothing is \
                  persisted; use --seed for a reproducible session."
)]
struct Cli {
    /// Fixed RNG seed for a reproducible session
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Override the reference date (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard (default)
    Dashboard {
        /// Aggregation window (day, week, month)
        #[arg(short, long)]
        window: Option<String>,
    },

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transactions(TransactionCommands),

    /// Bill commands
    #[command(subcommand)]
    Bills(BillCommands),

    /// Spending analytics
    Spending {
        /// Aggregation window (day, week, month)
        #[arg(short, long)]
        window: Option<String>,
        /// Output layout (bar, line, pie)
        #[arg(short, long, default_value = "bar")]
        chart: String,
        /// Show the full category breakdown table
        #[arg(long)]
        by_category: bool,
    },

    /// Budget overview for the trailing month
    Budget,

    /// Linked accounts and net worth
    Accounts,

    /// Smart insight cards
    Insights,

    /// Ask the assistant a question
    Ask {
        /// The question
        question: Vec<String>,
        /// Skip the simulated typing delay
        #[arg(long)]
        instant: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpencePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let today = match &cli.today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("Invalid --today '{}': {}", s, e))?,
        None => chrono::Local::now().date_naive(),
    };

    // Generate the session dataset; CLI seed wins over settings
    let mut config =
        DatasetConfig::new(today).transaction_count(settings.dataset.transaction_count);
    if let Some(seed) = cli.seed.or(settings.dataset.seed) {
        config = config.seed(seed);
    }
    let session = Session::generate(&config);

    let default_window = settings.default_window;

    match cli.command {
        None | Some(Commands::Dashboard { window: None }) => {
            handle_dashboard_command(&session, default_window)?;
        }
        Some(Commands::Dashboard {
            window: Some(window),
        }) => {
            handle_dashboard_command(&session, parse_window(&window)?)?;
        }
        Some(Commands::Transactions(cmd)) => {
            handle_transaction_command(&session, cmd)?;
        }
        Some(Commands::Bills(cmd)) => {
            handle_bill_command(&session, cmd)?;
        }
        Some(Commands::Spending {
            window,
            chart,
            by_category,
        }) => {
            let window = window.unwrap_or_else(|| default_window.to_string());
            handle_spending_command(&session, &window, &chart, by_category)?;
        }
        Some(Commands::Budget) => {
            handle_budget_command(&session)?;
        }
        Some(Commands::Accounts) => {
            handle_accounts_command(&session)?;
        }
        Some(Commands::Insights) => {
            handle_insights_command(&session)?;
        }
        Some(Commands::Ask { question, instant }) => {
            let question = question.join(" ");
            if question.trim().is_empty() {
                anyhow::bail!("Ask needs a question, e.g. `spence ask how can I save money`");
            }
            handle_ask_command(&session, &question, instant)?;
        }
        Some(Commands::Config) => {
            println!("Config file: {}", paths.settings_file().display());
            println!("Default window: {}", settings.default_window);
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Date format: {}", settings.date_format);
            println!(
                "Dataset: {} transactions, seed {}",
                settings.dataset.transaction_count,
                settings
                    .dataset
                    .seed
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "random".to_string())
            );
        }
    }

    Ok(())
}
