use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use dszoo_core::config::Config;
use dszoo_core::{catalog, Descriptor, SearchCache, SearchOptions};

mod render;

#[derive(Parser)]
#[command(name = "dszoo", about = "Data Structure Zoo — search the data-structure catalogue")]
struct Cli {
    /// Text to search for. Omit to list the whole catalogue.
    #[arg(default_value = "")]
    query: String,

    /// JSON catalogue to search instead of the configured or built-in one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Lowercase the query before matching.
    #[arg(long)]
    ignore_case: bool,

    /// Print matches as a JSON array.
    #[arg(long)]
    json: bool,

    /// Log at debug level to stderr (RUST_LOG takes precedence).
    #[arg(long)]
    debug: bool,
}

/// What a query prints, and on which stream.
#[derive(Debug, PartialEq)]
enum Output {
    Stdout(String),
    Stderr(String),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::defaults()
    });

    let (catalog_path, options) = resolve(&cli, &config);
    let descriptors = load_catalog(catalog_path)?;
    let cache = SearchCache::with_options(&descriptors, options);

    match output(&cache.query(&cli.query), &cli.query, cli.json)? {
        Output::Stdout(text) => print!("{text}"),
        Output::Stderr(text) => eprint!("{text}"),
    }

    Ok(())
}

/// Command-line flags win over the config file.
fn resolve<'c>(cli: &'c Cli, config: &'c Config) -> (Option<&'c Path>, SearchOptions) {
    let path = cli.catalog.as_deref().or(config.catalog.path.as_deref());

    let mut options = config.search;
    if cli.ignore_case {
        options.case_sensitive = false;
    }
    (path, options)
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Vec<Descriptor>> {
    match path {
        Some(path) => catalog::load(path)
            .with_context(|| format!("loading catalogue {}", path.display())),
        None => Ok(catalog::builtin()),
    }
}

fn output(results: &[&Descriptor], query: &str, json: bool) -> anyhow::Result<Output> {
    if json {
        return Ok(Output::Stdout(format!(
            "{}\n",
            serde_json::to_string_pretty(results)?
        )));
    }
    if results.is_empty() {
        return Ok(Output::Stderr(format!("no matches for {query:?}\n")));
    }
    Ok(Output::Stdout(render::cards(results)))
}
