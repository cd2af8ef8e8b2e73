//! Catalog
//!
//! Reference data for pricing: per-year service prices, combination discounts
//! and the relations between main and extra services. A catalog is never
//! mutated once built.

use std::sync::LazyLock;

use smallvec::{SmallVec, smallvec};

use crate::{
    prices::Price,
    services::{ServiceType, ServiceYear},
};

static STANDARD: LazyLock<Catalog> = LazyLock::new(Catalog::standard);

/// Price of a service, optionally tied to a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePrice {
    /// Service this price applies to
    pub service: ServiceType,

    /// Year this price applies to, `None` for year-independent prices
    pub year: Option<ServiceYear>,

    /// Price
    pub price: Price,
}

/// Discount amount for a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDiscount {
    /// Year the discount applies to
    pub year: ServiceYear,

    /// Amount taken off the base price
    pub discount: Price,
}

/// Amount added to the extra-combo discount when `service` is selected in `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraDiscountSurcharge {
    /// Year the surcharge applies to
    pub year: ServiceYear,

    /// Service that must be selected for the surcharge to apply
    pub service: ServiceType,

    /// Amount added on top of the extra-combo discount
    pub amount: Price,
}

/// Declares that `extra_service` needs at least one of `main_services` selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRelation {
    /// The dependent service
    pub extra_service: ServiceType,

    /// Services, any of which unlocks the extra service
    pub main_services: SmallVec<[ServiceType; 2]>,
}

/// Immutable pricing reference data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    prices: Vec<ServicePrice>,
    discounts: Vec<ServiceDiscount>,
    extra_discounts: Vec<ServiceDiscount>,
    surcharges: Vec<ExtraDiscountSurcharge>,
    relations: Vec<ServiceRelation>,
}

impl Catalog {
    /// Create a catalog from its tables.
    ///
    /// No validation is performed here; see [`Catalog::from_yaml_str`] for a
    /// checked constructor.
    pub fn new(
        prices: Vec<ServicePrice>,
        discounts: Vec<ServiceDiscount>,
        extra_discounts: Vec<ServiceDiscount>,
        surcharges: Vec<ExtraDiscountSurcharge>,
        relations: Vec<ServiceRelation>,
    ) -> Self {
        Catalog {
            prices,
            discounts,
            extra_discounts,
            surcharges,
            relations,
        }
    }

    /// The standard price list.
    pub fn standard() -> Self {
        use ServiceType::{BlurayPackage, Photography, TwoDayEvent, VideoRecording, WeddingSession};
        use ServiceYear::{Y2020, Y2021, Y2022};

        let yearly = |service, year, price| ServicePrice {
            service,
            year: Some(year),
            price: Price::new(price),
        };

        let flat = |service, price| ServicePrice {
            service,
            year: None,
            price: Price::new(price),
        };

        let discount = |year, discount| ServiceDiscount {
            year,
            discount: Price::new(discount),
        };

        Catalog {
            prices: vec![
                yearly(Photography, Y2020, 1700),
                yearly(Photography, Y2021, 1800),
                yearly(Photography, Y2022, 1900),
                yearly(VideoRecording, Y2020, 1700),
                yearly(VideoRecording, Y2021, 1800),
                yearly(VideoRecording, Y2022, 1900),
                yearly(WeddingSession, Y2020, 600),
                yearly(WeddingSession, Y2021, 600),
                yearly(WeddingSession, Y2022, 600),
                flat(BlurayPackage, 300),
                flat(TwoDayEvent, 400),
            ],
            discounts: vec![
                discount(Y2020, 1200),
                discount(Y2021, 1300),
                discount(Y2022, 1300),
            ],
            extra_discounts: vec![
                discount(Y2020, 300),
                discount(Y2021, 300),
                discount(Y2022, 300),
            ],
            surcharges: vec![ExtraDiscountSurcharge {
                year: Y2022,
                service: Photography,
                amount: Price::new(300),
            }],
            relations: vec![
                ServiceRelation {
                    extra_service: BlurayPackage,
                    main_services: smallvec![VideoRecording],
                },
                ServiceRelation {
                    extra_service: TwoDayEvent,
                    main_services: smallvec![Photography, VideoRecording],
                },
            ],
        }
    }

    /// The standard price list, built once and shared for the life of the process.
    pub fn shared() -> &'static Catalog {
        &STANDARD
    }

    /// Price for an exact `(service, year)` match.
    ///
    /// Year-independent prices are only found when `year` is `None`.
    pub fn price_of(&self, service: ServiceType, year: Option<ServiceYear>) -> Option<Price> {
        self.prices
            .iter()
            .find(|entry| entry.service == service && entry.year == year)
            .map(|entry| entry.price)
    }

    /// Main-combo discount for a year.
    pub fn discount_of(&self, year: ServiceYear) -> Option<Price> {
        find_discount(&self.discounts, year)
    }

    /// Base extra-combo discount for a year, without surcharges.
    pub fn extra_discount_of(&self, year: ServiceYear) -> Option<Price> {
        find_discount(&self.extra_discounts, year)
    }

    /// Surcharges that apply to the extra-combo discount in `year`.
    pub fn surcharges_for(
        &self,
        year: ServiceYear,
    ) -> impl Iterator<Item = &ExtraDiscountSurcharge> + '_ {
        self.surcharges
            .iter()
            .filter(move |surcharge| surcharge.year == year)
    }

    /// Main services that unlock `extra`, or `None` if it isn't an extra service.
    pub fn main_services_of(&self, extra: ServiceType) -> Option<&[ServiceType]> {
        self.relations
            .iter()
            .find(|relation| relation.extra_service == extra)
            .map(|relation| relation.main_services.as_slice())
    }

    /// Whether `service` is declared as an extra service.
    pub fn is_extra_service(&self, service: ServiceType) -> bool {
        self.relations
            .iter()
            .any(|relation| relation.extra_service == service)
    }

    /// All extra services, in declaration order.
    pub fn extra_services(&self) -> impl Iterator<Item = ServiceType> + '_ {
        self.relations.iter().map(|relation| relation.extra_service)
    }

    /// Price table
    pub fn prices(&self) -> &[ServicePrice] {
        &self.prices
    }

    /// Main-combo discount table
    pub fn discounts(&self) -> &[ServiceDiscount] {
        &self.discounts
    }

    /// Extra-combo discount table
    pub fn extra_discounts(&self) -> &[ServiceDiscount] {
        &self.extra_discounts
    }

    /// Extra-combo surcharges
    pub fn surcharges(&self) -> &[ExtraDiscountSurcharge] {
        &self.surcharges
    }

    /// Main/extra service relations
    pub fn relations(&self) -> &[ServiceRelation] {
        &self.relations
    }
}

fn find_discount(table: &[ServiceDiscount], year: ServiceYear) -> Option<Price> {
    table
        .iter()
        .find(|entry| entry.year == year)
        .map(|entry| entry.discount)
}
