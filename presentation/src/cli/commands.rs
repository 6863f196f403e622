//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use ticket_desk_domain::{Category, OutputFormat as DomainOutputFormat};

/// Output format for ticket responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed, human-readable response
    Text,
    /// JSON object
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// Ticket category as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Guide,
    Policies,
    Faq,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Guide => Category::Guide,
            CategoryArg::Policies => Category::Policies,
            CategoryArg::Faq => Category::Faq,
        }
    }
}

/// CLI arguments for ticket-desk
#[derive(Parser, Debug)]
#[command(name = "ticket-desk")]
#[command(author, version, about = "Submit support tickets to the AI support agent")]
#[command(long_about = r#"
ticket-desk sends a support ticket (category + description) to the support
agent and prints its reply. If the agent cannot be reached, a fixed fallback
message is printed instead; the command itself does not fail.

With --local, no request is made: each category gets a fixed answer.

Configuration files are loaded from (in priority order):
1. TICKET_DESK_<SECTION>__<KEY>            Environment
2. --config <path>                          Explicit config file
3. ./ticket-desk.toml                       Project-level config
4. ~/.config/ticket-desk/config.toml        Global config

Example:
  ticket-desk -c faq "How do I download my invoices?"
  ticket-desk --local -c guide "Where do I start?"
  ticket-desk --form
  ticket-desk --batch questions.json --team blue
"#)]
pub struct Cli {
    /// Description of the problem (required unless --form or --batch)
    pub description: Option<String>,

    /// Type of request
    #[arg(short, long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Answer from the canned table instead of calling the agent
    #[arg(long)]
    pub local: bool,

    /// Agent endpoint URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds, 0 to disable (overrides config)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Start the interactive ticket form
    #[arg(short, long, conflicts_with_all = ["batch", "description"])]
    pub form: bool,

    /// Submit every question of a JSON batch file
    #[arg(short, long, value_name = "PATH", conflicts_with = "description")]
    pub batch: Option<PathBuf>,

    /// Team name written into batch output
    #[arg(long, value_name = "NAME", requires = "batch")]
    pub team: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Append submission events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
