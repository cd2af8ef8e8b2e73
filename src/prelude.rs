//! Bundle pricing prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    calculate_price,
    catalog::{Catalog, ExtraDiscountSurcharge, ServiceDiscount, ServicePrice, ServiceRelation},
    fixtures::FixtureError,
    prices::Price,
    pricing::{AppliedDiscount, DiscountRule, PriceQuote, QuoteLine},
    receipt::ReceiptError,
    selection::Selection,
    services::{ParseServiceError, ServiceAction, ServiceType, ServiceUpdate, ServiceYear},
    update_selected_services,
};
