//! panda-extract - Entry Point
//!
//! CLI front-end for the batch pipeline: collects PDFs, runs the extraction
//! batch, writes the result sheets, prints the summary.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use panda_extract::models::UploadedFile;
use panda_extract::{BatchRunner, Config, OpenAiClient, config, export};

#[derive(Parser, Debug)]
#[command(name = "panda-extract")]
#[command(about = "Extract title/author/e-mail triples from scientific article PDFs")]
#[command(version)]
struct Cli {
    /// PDF files or directories containing PDFs
    #[arg(required = true, value_name = "PATH")]
    inputs: Vec<PathBuf>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Chat model used for extraction
    #[arg(long, env = "OPENAI_MODEL", default_value = config::api::DEFAULT_MODEL)]
    model: String,

    /// Pages read from the start of each PDF
    #[arg(long, default_value_t = config::batch::DEFAULT_PAGE_LIMIT)]
    pages: usize,

    /// Process files in chunks of this size (progress granularity only)
    #[arg(long)]
    batch_size: Option<usize>,

    /// Directory for the result sheets
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Base name for the result sheets
    #[arg(long, default_value = "resultado")]
    out_name: String,

    /// Append a timestamp to the output filenames
    #[arg(long)]
    timestamp: bool,

    /// Skip the token/cost usage report
    #[arg(long)]
    no_usage: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Collect the working set: explicit files in argument order, directories
/// expanded one level with their PDFs sorted by name.
fn collect_pdfs(inputs: &[PathBuf]) -> anyhow::Result<Vec<UploadedFile>> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(input)
                .with_context(|| format!("cannot read directory {}", input.display()))?
            {
                let path = entry?.path();
                if is_pdf(&path) {
                    entries.push(path);
                }
            }
            entries.sort();
            paths.extend(entries);
        } else if is_pdf(input) {
            paths.push(input.clone());
        } else {
            tracing::warn!(path = %input.display(), "skipping non-PDF argument");
        }
    }

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes =
            std::fs::read(&path).with_context(|| format!("cannot read {}", path.display()))?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        files.push(UploadedFile::new(name, bytes));
    }

    Ok(files)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %cli.model,
        "Starting extraction batch"
    );

    if cli.api_key.is_none() {
        anyhow::bail!("OPENAI_API_KEY is not set; pass --api-key or add it to .env");
    }

    let mut config = Config::new(cli.api_key);
    config.model = cli.model;
    config.page_limit = cli.pages;
    config.chunk_size = cli.batch_size;
    config.report_usage = !cli.no_usage;

    let client = Arc::new(OpenAiClient::new(config.clone())?);
    let runner = BatchRunner::new(client, &config);

    let files = collect_pdfs(&cli.inputs)?;
    let submitted = files.len();

    let report = runner.run(files).await?;

    let written = export::write_report(&report, &cli.out_dir, &cli.out_name, cli.timestamp)
        .context("failed to write result sheets")?;

    if submitted > report.total_files {
        println!("{submitted} file(s) submitted, first {} processed", report.total_files);
    }
    println!("{report}");
    for record in &report.errors {
        println!("  {}: {}", record.file, record.error);
    }
    for path in &written {
        println!("wrote {}", path.display());
    }

    Ok(())
}
