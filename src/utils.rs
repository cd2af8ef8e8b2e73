//! Utils

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::{ServiceType, ServiceYear};

/// Arguments for the quote example
#[derive(Debug, Parser)]
pub struct ExampleQuoteArgs {
    /// Year to price the selection for
    #[clap(short, long, default_value = "2022")]
    pub year: ServiceYear,

    /// Services to select, in order
    #[clap(short, long = "select")]
    pub select: Vec<ServiceType>,

    /// Services to deselect after selecting, in order
    #[clap(short, long = "deselect")]
    pub deselect: Vec<ServiceType>,

    /// YAML catalog to use instead of the standard price list
    #[clap(short, long)]
    pub catalog: Option<PathBuf>,

    /// Log selection and pricing decisions
    #[clap(short, long)]
    pub verbose: bool,
}

/// Install a `tracing` subscriber for examples.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init_logger(verbose: bool) {
    let default_directive = if verbose {
        "bundle_pricing=trace,info"
    } else {
        "bundle_pricing=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new(default_directive));

    // A subscriber may already be installed, e.g. by a test harness.
    _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
