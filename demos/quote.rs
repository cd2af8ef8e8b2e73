//! Quote Example
//!
//! Builds a selection from the command line and prints its price.
//!
//! Use `-s` to select a service (repeatable, applied in order)
//! Use `-d` to deselect a service after all selections (repeatable)
//! Use `-y` to choose the pricing year
//! Use `-c` to load a YAML catalog instead of the standard price list

use std::io;

use anyhow::Result;

use bundle_pricing::{
    catalog::Catalog,
    pricing,
    selection::{self, Selection},
    services::ServiceUpdate,
    utils::{ExampleQuoteArgs, init_logger},
};
use clap::Parser;

/// Quote Example
pub fn main() -> Result<()> {
    let args = ExampleQuoteArgs::parse();

    init_logger(args.verbose);

    let catalog = match args.catalog.as_deref() {
        Some(path) => Catalog::load(path)?,
        None => Catalog::standard(),
    };

    let updates = args
        .select
        .iter()
        .copied()
        .map(ServiceUpdate::select)
        .chain(args.deselect.iter().copied().map(ServiceUpdate::deselect));

    let selection = updates.fold(Selection::new(), |current, update| {
        selection::update(&catalog, &current, update)
    });

    let quote = pricing::calculate(&catalog, &selection, args.year);

    quote.write_to(io::stdout().lock())?;

    Ok(())
}
