use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use lfx_pager::config::Config;
use lfx_pager::web::{self, RenderOptions};
use lfx_pager::{Control, PageState, PagerError};

#[derive(Parser)]
#[command(name = "lfx-pager", version, about = "Compute and render table pagination bars")]
struct Cli {
    /// Path to config file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Current page, 1-based
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    page: i64,

    /// Items per page (defaults to pagination.page_size)
    #[arg(long, allow_hyphen_values = true)]
    page_size: Option<i64>,

    /// Total item count
    #[arg(long, allow_hyphen_values = true)]
    total: i64,

    /// Page-size choices, comma separated (defaults to pagination.page_size_options)
    #[arg(long, value_delimiter = ',')]
    options: Option<Vec<i64>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Extra query string carried through HTML links, e.g. "q=rust&type=b"
    #[arg(long, default_value = "")]
    query: String,

    /// Apply a user interaction before printing: prev, next, page:N, size:N
    #[arg(long = "click")]
    clicks: Vec<Control>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Html,
}

fn main() {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }),
        None => Config::default(),
    };

    // Setup tracing/logging
    let filter =
        EnvFilter::try_new(&config.logging.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
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

fn run(cli: &Cli, config: &Config) -> Result<String, PagerError> {
    let options = cli
        .options
        .clone()
        .unwrap_or_else(|| config.pagination.page_size_options.clone());
    let mut state = PageState {
        page: cli.page,
        page_size: cli.page_size.unwrap_or(config.pagination.page_size),
    };
    let view = state.apply(&cli.clicks, cli.total, &options)?;

    match cli.format {
        Format::Json => Ok(serde_json::to_string_pretty(&view)?),
        Format::Html => {
            let renderer = web::initialize()?;
            let pairs = web::context::parse_query(&cli.query)?;
            let render_options = RenderOptions::from(&config.render).with_query(&pairs);
            renderer.render(&view, &render_options)
        }
    }
}
