use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use shingleset::{compare_documents, validate_text, Delimiters, JaccardConfig, Similarity};

#[derive(Parser, Debug)]
#[command(name = "jaccard")]
#[command(
    about = "Pairwise Jaccard similarity between comma-delimited shingle files",
    long_about = None
)]
struct Cli {
    /// Files to compare; every unordered pair is reported.
    #[arg(required = true, num_args = 1..)]
    files: Vec<PathBuf>,
    /// Characters that separate tokens in each file (default: ",").
    #[arg(long, env = "JACCARD_DELIMITERS")]
    delimiters: Option<String>,
    /// Print stage-by-stage diagnostics to stderr.
    #[arg(short = 'd', long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = match cli.delimiters.as_deref() {
        Some(d) => JaccardConfig {
            delimiters: Delimiters::new(d)?,
        },
        None => JaccardConfig::default(),
    };

    // Read everything up front so an unreadable file aborts before any report.
    let mut inputs = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        debug!(file = %path.display(), bytes = raw.len(), "read input");
        let text = validate_text(&raw)
            .with_context(|| format!("validating {}", path.display()))?
            .to_owned();
        inputs.push((path.display().to_string(), text));
    }

    let reports = compare_documents(inputs, &config);

    let mut out = std::io::stdout().lock();
    for r in &reports {
        writeln!(out, "Comparing files \"{}\" and \"{}\":", r.left_id, r.right_id)?;
        match r.comparison.similarity {
            Similarity::Defined(_) => writeln!(
                out,
                "  Files \"{}\" and \"{}\" are {} similar.",
                r.left_id, r.right_id, r.comparison.similarity
            )?,
            Similarity::Undefined => writeln!(
                out,
                "  Files \"{}\" and \"{}\" are of undefined similarity (both empty).",
                r.left_id, r.right_id
            )?,
        }
    }
    out.flush()?;
    Ok(())
}
