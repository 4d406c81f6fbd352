//! dtm2obj
//!
//! Convert a GeoTIFF Digital Terrain Model into a closed OBJ solid.

use clap::Parser;
use dtm_runner::{run, Args, RunConfig};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = RunConfig::from_args(&args).and_then(|config| run(&config));
    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
