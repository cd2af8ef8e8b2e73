//! Bundle Pricing
//!
//! Selection and pricing for bundled photography and video services. Extra
//! services ride on main services, and combinations of main services earn
//! year-dependent discounts.

pub mod catalog;
pub mod fixtures;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod receipt;
pub mod selection;
pub mod services;
pub mod utils;

use crate::{
    catalog::Catalog,
    pricing::PriceQuote,
    selection::Selection,
    services::{ServiceUpdate, ServiceYear},
};

/// Apply a select or deselect event against the standard catalog.
pub fn update_selected_services(selection: &Selection, update: ServiceUpdate) -> Selection {
    selection::update(Catalog::shared(), selection, update)
}

/// Price a selection for a year against the standard catalog.
pub fn calculate_price(selection: &Selection, year: ServiceYear) -> PriceQuote {
    pricing::calculate(Catalog::shared(), selection, year)
}
