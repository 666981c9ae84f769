use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use facetpath::{CodecConfig, FacetCodec, FacetRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "FACETPATH_LOG";

#[derive(Parser)]
#[command(name = "facetpath")]
#[command(about = "Parse and canonicalize faceted catalog paths")]
#[command(
    after_help = "Environment:\n  FACETPATH_LOG            Log filter (default: warn)\n  FACETPATH_ROUTE_PREFIX   Catalog route prefix\n  FACETPATH_DEFAULT_LIMIT  Default page size\n  FACETPATH_MAX_LIMIT      Largest page size"
)]
struct Cli {
    /// Comma-separated attribute slugs known to the catalog
    #[arg(long, global = true, value_delimiter = ',')]
    facets: Vec<String>,
    /// Route prefix, overrides FACETPATH_ROUTE_PREFIX
    #[arg(long, global = true)]
    route_prefix: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the category path and filters encoded in a path as JSON
    Parse { path: String },
    /// Print the canonical form of a path
    Canonicalize { path: String },
    /// Print the catalog query string for a path
    Params {
        path: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Print the cache key of a path
    CacheKey { path: String },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config = CodecConfig::from_env()?;
    if let Some(prefix) = cli.route_prefix {
        config.route_prefix = prefix;
    }
    let registry = FacetRegistry::from_slugs(cli.facets.into_iter().filter(|f| !f.is_empty()));
    let codec = FacetCodec::new(config, registry)?;

    match cli.command {
        Commands::Parse { path } => {
            let parsed = codec.parse_path(&path)?;
            serde_json::to_string_pretty(&parsed).context("failed to render parsed path")
        }
        Commands::Canonicalize { path } => Ok(codec.canonicalize_path(&path)?),
        Commands::Params { path, page, limit } => {
            let parsed = codec.parse_path(&path)?;
            Ok(codec.api_query(&parsed, page, limit).to_query_string())
        }
        Commands::CacheKey { path } => {
            let parsed = codec.parse_path(&path)?;
            Ok(codec.cache_key(&parsed))
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
