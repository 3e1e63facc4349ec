use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "creditview", version)]
#[command(
    about = "Browse carbon-credit records and export retirement certificates",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Records file (JSON array of credits)
    #[arg(short, long, global = true, default_value = "credits.json")]
    pub data: PathBuf,

    /// Configuration directory (defaults to ./.creditview)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List one page of credits
    #[command(alias = "ls")]
    List(ListArgs),

    /// Export a retirement certificate for one credit
    #[command(alias = "cert")]
    Certificate {
        /// Id of the credit
        id: String,

        /// Output format: html or pdf
        #[arg(short, long, default_value = "html")]
        format: String,

        /// Directory to save into (defaults to output_dir from config, then ".")
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Status filter: all, active or retired
    #[arg(short = 't', long = "type", default_value = "all")]
    pub type_filter: String,

    /// Case-insensitive text matched against project name and vintage
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort by name or year. Repeat to flip the direction (name, name = descending)
    #[arg(long)]
    pub sort: Vec<String>,

    /// Page number, clamped to the available pages
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    #[arg(long, value_enum, default_value_t = Layout::Table)]
    pub layout: Layout,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            type_filter: "all".to_string(),
            search: None,
            sort: Vec::new(),
            page: 1,
            layout: Layout::Table,
            json: false,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Table,
    Cards,
}
