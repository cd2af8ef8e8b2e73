//! Pricing
//!
//! Quotes a selection for a year: base prices from the catalog, minus every
//! combination discount whose rule matches the selection.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use smallvec::SmallVec;
use tracing::trace;

use crate::{
    catalog::Catalog,
    prices::Price,
    selection::Selection,
    services::{ServiceType, ServiceYear},
};

/// A combination discount rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountRule {
    /// Photography and video recording booked together.
    MainCombo,

    /// A wedding session booked with photography or video recording.
    ///
    /// The amount is the extra-combo discount for the year plus any
    /// surcharges for that year whose service is selected.
    ExtraCombo,
}

impl DiscountRule {
    /// Rules in the order they are applied.
    pub const ALL: [DiscountRule; 2] = [DiscountRule::MainCombo, DiscountRule::ExtraCombo];

    /// Human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            DiscountRule::MainCombo => "Photography + video",
            DiscountRule::ExtraCombo => "Wedding session combo",
        }
    }

    /// Whether the rule applies to `selection`.
    pub fn applies_to(self, selection: &Selection) -> bool {
        match self {
            DiscountRule::MainCombo => {
                selection.contains(ServiceType::Photography)
                    && selection.contains(ServiceType::VideoRecording)
            }
            DiscountRule::ExtraCombo => {
                selection.contains(ServiceType::WeddingSession)
                    && selection.contains_any(&[
                        ServiceType::Photography,
                        ServiceType::VideoRecording,
                    ])
            }
        }
    }

    /// Discount amount for `year`, assuming the rule applies. Missing entries count as zero.
    pub fn amount(self, catalog: &Catalog, selection: &Selection, year: ServiceYear) -> Price {
        match self {
            DiscountRule::MainCombo => catalog.discount_of(year).unwrap_or_default(),
            DiscountRule::ExtraCombo => extra_combo_discount(catalog, selection, year),
        }
    }
}

/// Extra-combo discount for `year` including the surcharges triggered by `selection`.
pub fn extra_combo_discount(catalog: &Catalog, selection: &Selection, year: ServiceYear) -> Price {
    let base = catalog.extra_discount_of(year).unwrap_or_default();

    let surcharges: Price = catalog
        .surcharges_for(year)
        .filter(|surcharge| selection.contains(surcharge.service))
        .map(|surcharge| surcharge.amount)
        .sum();

    base + surcharges
}

/// A discount that was applied to a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedDiscount {
    /// Rule that matched
    pub rule: DiscountRule,

    /// Amount taken off
    pub amount: Price,
}

/// One selected service and its base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteLine {
    /// The selected service
    pub service: ServiceType,

    /// Its price, or `None` when the catalog has no entry for it
    pub price: Option<Price>,
}

/// Price of a selection for a given year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    year: ServiceYear,
    lines: SmallVec<[QuoteLine; 5]>,
    discounts: SmallVec<[AppliedDiscount; 2]>,
    base_price: Price,
    final_price: Price,
}

impl PriceQuote {
    /// Year the quote was calculated for
    pub fn year(&self) -> ServiceYear {
        self.year
    }

    /// Per-service base prices, in selection order
    pub fn lines(&self) -> &[QuoteLine] {
        &self.lines
    }

    /// Discounts that were applied
    pub fn discounts(&self) -> &[AppliedDiscount] {
        &self.discounts
    }

    /// Sum of the selected services' prices
    pub fn base_price(&self) -> Price {
        self.base_price
    }

    /// Base price minus all applied discounts
    pub fn final_price(&self) -> Price {
        self.final_price
    }

    /// Total of all applied discounts
    pub fn savings(&self) -> Price {
        self.base_price - self.final_price
    }

    /// Savings as a fraction of the base price.
    pub fn savings_percent(&self) -> Percentage {
        let base_price = self.base_price.value();

        if base_price == 0 {
            return Percentage::from(0.0);
        }

        let savings_dec = Decimal::from_i64(self.savings().value()).unwrap_or(Decimal::ZERO);
        let base_dec = Decimal::from_i64(base_price).unwrap_or(Decimal::ZERO);

        Percentage::from(savings_dec / base_dec)
    }
}

/// Price `selection` for `year` against `catalog`.
///
/// Each service is priced for the year first, then by its year-independent
/// entry; services with neither contribute nothing.
pub fn calculate(catalog: &Catalog, selection: &Selection, year: ServiceYear) -> PriceQuote {
    let lines: SmallVec<[QuoteLine; 5]> = selection
        .iter()
        .map(|service| QuoteLine {
            service,
            price: catalog
                .price_of(service, Some(year))
                .or_else(|| catalog.price_of(service, None)),
        })
        .collect();

    let base_price: Price = lines.iter().filter_map(|line| line.price).sum();

    let discounts: SmallVec<[AppliedDiscount; 2]> = DiscountRule::ALL
        .into_iter()
        .filter(|rule| rule.applies_to(selection))
        .map(|rule| AppliedDiscount {
            rule,
            amount: rule.amount(catalog, selection, year),
        })
        .collect();

    let discount: Price = discounts.iter().map(|applied| applied.amount).sum();
    let final_price = base_price - discount;

    trace!(%year, %base_price, %discount, %final_price, "calculated quote");

    PriceQuote {
        year,
        lines,
        discounts,
        base_price,
        final_price,
    }
}
