use anyhow::{Context, Result};
use clap::Parser;

use mandelbrot_explorer::{PixelsPresenterFactory, RunGuiCommand, init_tracing, parse_args};

/// Explore the Mandelbrot set: drag to pan, scroll to zoom, S to save, Q to quit.
#[derive(Debug, Parser)]
#[command(name = "gui", version)]
struct Cli {
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
    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), state);

    command.execute().context("explorer window failed")
}
