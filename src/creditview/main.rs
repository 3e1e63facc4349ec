use chrono::Local;
use clap::Parser;
use colored::Colorize;
use creditview::api::{CreditApi, ListRequest};
use creditview::certificate::{DirectoryDelivery, ExportFormat};
use creditview::config::ViewConfig;
use creditview::error::Result;
use creditview::query::{SortKey, TypeFilter};
use creditview::source::fs::JsonFileSource;
use std::path::PathBuf;

mod args;
mod cli;
use args::{Cli, Commands, ListArgs};
use cli::print::{print_messages, print_page};

const CONFIG_DIR: &str = ".creditview";

fn main() {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    data: PathBuf,
    config: ViewConfig,
}

impl AppContext {
    fn api(&self, out: PathBuf) -> CreditApi<JsonFileSource, DirectoryDelivery> {
        CreditApi::new(
            JsonFileSource::new(&self.data),
            DirectoryDelivery::new(out),
            &self.config,
        )
    }

    fn default_out_dir(&self) -> PathBuf {
        self.config
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_DIR));
    let ctx = AppContext {
        data: cli.data.clone(),
        config: ViewConfig::load(&config_dir)?,
    };

    match cli.command {
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::Certificate { id, format, out }) => {
            handle_certificate(&ctx, &id, &format, out)
        }
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_list(&ctx, ListArgs::default()),
    }
}

fn handle_list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let request = ListRequest {
        type_filter: args.type_filter.parse::<TypeFilter>()?,
        search: args.search,
        sorts: args
            .sort
            .iter()
            .map(|s| s.parse::<SortKey>())
            .collect::<Result<Vec<_>>>()?,
        page: args.page,
    };

    let result = ctx.api(ctx.default_out_dir()).list(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    if let Some(page) = &result.page {
        print_page(page, args.layout, Local::now().date_naive());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_certificate(
    ctx: &AppContext,
    id: &str,
    format: &str,
    out: Option<PathBuf>,
) -> Result<()> {
    let format = format.parse::<ExportFormat>()?;
    let out = out.unwrap_or_else(|| ctx.default_out_dir());

    let result = ctx.api(out).export_certificate(id, format)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    Ok(())
}
