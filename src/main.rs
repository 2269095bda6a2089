use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use mandelbrot_explorer::{PpmFilePresenter, SnapshotController, init_tracing, parse_args};

/// Renders one view of the Mandelbrot set to a PPM image.
#[derive(Debug, Parser)]
#[command(name = "mandelbrot_explorer", version)]
struct Cli {
    /// Image to write
    #[arg(short = 'o', long, default_value = "mandelbrot.ppm")]
    output: PathBuf,

    /// Log at debug level unless RUST_LOG is set
    #[arg(long)]
    verbose: bool,

    /// View options: -l FILE | -d N -x X -y Y -s SCALE -i N -c PALETTE -p PRECISION -t BOOL
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    options: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let state = parse_args(&cli.options).context("invalid view options")?;
    let mut controller = SnapshotController::new(PpmFilePresenter::new());

    controller.generate(state).context("failed to render frame")?;
    controller
        .write(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(path = %cli.output.display(), "done");

    Ok(())
}
