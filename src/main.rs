use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagebar::config::{Config, MAX_WINDOW_SIZE};
use pagebar::error::AppError;
use pagebar::pager::PageWindow;
use pagebar::render::{self, OutputFormat};

#[derive(Parser)]
#[command(
    name = "pagebar",
    version,
    about = "Compute the page links to show in a pagination bar"
)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page currently being viewed (1-based)
    #[arg(long)]
    current: u32,

    /// Total number of pages
    #[arg(long, required_unless_present = "items", conflicts_with = "items")]
    total: Option<u32>,

    /// Total number of items; the page count is derived from it
    #[arg(long)]
    items: Option<u64>,

    /// Items per page when --items is given [default: from config]
    #[arg(long, requires = "items")]
    per_page: Option<u32>,

    /// Maximum number of page links [default: from config]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_SIZE)))]
    window: Option<u32>,

    /// Output format [default: from config]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() {
    let cli = Cli::parse();

    // Load configuration; logging is not set up yet
    let config = load_config(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error loading config: {e}");
        std::process::exit(1);
    });

    // Setup tracing/logging; stdout is reserved for the rendered bar
    let filter = EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli, &config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::default()),
    }
}

fn run(cli: &Cli, config: &Config) -> Result<String, AppError> {
    let window_size = cli.window.unwrap_or(config.pager.window_size);
    let format = cli.format.unwrap_or(config.render.format);

    let window = match (cli.total, cli.items) {
        (Some(total), None) => PageWindow::new(cli.current, total, window_size)?,
        (None, Some(items)) => {
            let per_page = cli.per_page.unwrap_or(config.pager.items_per_page);
            PageWindow::for_items(cli.current, per_page, items, window_size)?
        }
        _ => unreachable!("clap requires exactly one of --total or --items"),
    };
    tracing::debug!(
        "Page window: current={}, total={}, pages={:?}, previous={:?}, next={:?}",
        window.current_page(),
        window.total_pages(),
        window.pages(),
        window.previous_page(),
        window.next_page(),
    );

    Ok(render::render(&window, format, &config.render)?)
}
