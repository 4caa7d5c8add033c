use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use shingleset::{shingle_text, validate_text, Delimiters, ShingleConfig};

#[derive(Parser, Debug)]
#[command(name = "shingle")]
#[command(
    about = "Decompose a text file into a comma-delimited set of word shingles",
    long_about = None
)]
struct Cli {
    /// File to read.
    #[arg(short = 'i', long, default_value = "input.txt")]
    input: PathBuf,
    /// File to write; `-` writes to stdout.
    #[arg(short = 'o', long, default_value = "output.txt")]
    output: PathBuf,
    /// Words per shingle (at least 1).
    #[arg(short = 's', long, env = "SHINGLE_SIZE", default_value_t = 2)]
    size: usize,
    /// Characters that separate words (default: space . , " CR LF ( )).
    #[arg(long, env = "SHINGLE_DELIMITERS")]
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

fn write_output(path: &Path, text: &str) -> Result<()> {
    if path == Path::new("-") {
        let mut out = std::io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        return Ok(());
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let delimiters = match cli.delimiters.as_deref() {
        Some(d) => Delimiters::new(d)?,
        None => Delimiters::words(),
    };
    let config = ShingleConfig {
        size: cli.size,
        delimiters,
        ..Default::default()
    };
    config.validate()?;
    debug!(size = config.size, input = %cli.input.display(), "configuration accepted");

    let raw = std::fs::read(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    debug!(bytes = raw.len(), "read input");
    let text =
        validate_text(&raw).with_context(|| format!("validating {}", cli.input.display()))?;

    let out = shingle_text(text, &config)?;
    write_output(&cli.output, &out.delimited)?;
    debug!(
        output = %cli.output.display(),
        shingles = out.shingles.len(),
        bytes = out.delimited.len(),
        "wrote shingles"
    );
    Ok(())
}
