use anyhow::{Context, Result};
use clap::Parser;
use phishfeat::{BoolEncoding, ExtractorConfig, FeatureEngine, ModelKind, Schema};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Print the feature vector of a URL (and optionally its saved HTML) as JSON.
#[derive(Debug, Parser)]
#[command(name = "phishfeat", version, about)]
struct Args {
    /// URL to extract features from
    #[arg(required_unless_present = "list_schemas")]
    url: Option<String>,

    /// Saved HTML of the page, required by DOM schemas
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Schema name; defaults to `online` with --html, `url_all` without
    #[arg(long)]
    schema: Option<String>,

    /// Model selector (0=LR, 1=SVM, 2=KNN, 3=RF); overrides --schema
    #[arg(long, conflicts_with = "schema")]
    model: Option<i64>,

    /// Render flags as 1/0 instead of true/false
    #[arg(long)]
    numeric: bool,

    /// TOML file overriding allow-lists, keywords and threshold
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List registered schemas and exit
    #[arg(long)]
    list_schemas: bool,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    if args.list_schemas {
        for schema in Schema::ALL {
            let html = if schema.requires_html() { "html" } else { "url" };
            println!("{:<14} {:>3} fields  {}", schema.name(), schema.fields().len(), html);
        }
        return Ok(());
    }

    let url = args.url.context("a URL is required")?;

    let config = match &args.config {
        Some(path) => ExtractorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ExtractorConfig::default(),
    };
    let engine = FeatureEngine::new(config);

    let html = match &args.html {
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            Some(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => None,
    };

    let schema = match (args.model, &args.schema) {
        (Some(selector), _) => ModelKind::from_selector(selector)?.schema(),
        (None, Some(name)) => name.parse::<Schema>()?,
        (None, None) if html.is_some() => Schema::Online,
        (None, None) => Schema::UrlAll,
    };

    let features = engine.assemble(&url, html.as_deref(), schema)?;
    let encoding = if args.numeric {
        BoolEncoding::Numeric
    } else {
        BoolEncoding::Logical
    };
    println!("{}", serde_json::to_string_pretty(&features.encoded(encoding))?);
    Ok(())
}

fn main() {
    init_logging();

    if let Err(err) = run(Args::parse()) {
        eprintln!("phishfeat error: {:#}", err);
        std::process::exit(1);
    }
}
