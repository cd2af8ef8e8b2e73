//! Fixtures
//!
//! Loads a [`Catalog`] from YAML. Every table is checked before the catalog is
//! built, so lookups on a loaded catalog never have to pick between duplicates.

use std::{fs, path::Path};

use rustc_hash::FxHashSet;
use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{Catalog, ExtraDiscountSurcharge, ServiceDiscount, ServicePrice, ServiceRelation},
    prices::Price,
    services::{ServiceType, ServiceYear},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// More than one price for the same service and year
    #[error(
        "Duplicate price for {service} ({})",
        .year.map_or_else(|| "any year".to_string(), |year| year.to_string())
    )]
    DuplicatePrice {
        /// Service with more than one price
        service: ServiceType,
        /// Year of the duplicate entry, `None` for year-independent prices
        year: Option<ServiceYear>,
    },

    /// More than one discount for the same year in a table
    #[error("Duplicate {table} entry for {year}")]
    DuplicateDiscount {
        /// Table the duplicate was found in
        table: &'static str,
        /// Year with more than one entry
        year: ServiceYear,
    },

    /// More than one relation for the same extra service
    #[error("Duplicate relation for extra service {0}")]
    DuplicateRelation(ServiceType),

    /// A relation without any main services
    #[error("Extra service {0} has no main services")]
    NoMainServices(ServiceType),

    /// An extra service listed as one of its own main services
    #[error("Extra service {0} lists itself as a main service")]
    SelfRelation(ServiceType),

    /// An extra service used as the main service of another extra
    #[error("Extra service {main} is used as a main service of {extra}")]
    ChainedExtra {
        /// The dependent extra service
        extra: ServiceType,
        /// The extra service it was declared to depend on
        main: ServiceType,
    },
}

/// Catalog tables as written in YAML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFixture {
    /// Service prices
    pub prices: Vec<PriceFixture>,

    /// Photography + video discounts
    #[serde(default)]
    pub discounts: Vec<DiscountFixture>,

    /// Wedding session combo discounts
    #[serde(default)]
    pub extra_discounts: Vec<DiscountFixture>,

    /// Additions to the wedding session combo discount
    #[serde(default)]
    pub surcharges: Vec<SurchargeFixture>,

    /// Main/extra relations
    #[serde(default)]
    pub relations: Vec<RelationFixture>,
}

/// Price entry
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceFixture {
    /// Service
    pub service: ServiceType,

    /// Year, omitted for year-independent prices
    #[serde(default)]
    pub year: Option<ServiceYear>,

    /// Price
    pub price: i64,
}

/// Discount entry
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscountFixture {
    /// Year
    pub year: ServiceYear,

    /// Discount amount
    pub discount: i64,
}

/// Surcharge entry
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurchargeFixture {
    /// Year
    pub year: ServiceYear,

    /// Service that triggers the surcharge
    pub service: ServiceType,

    /// Amount
    pub amount: i64,
}

/// Relation entry
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationFixture {
    /// Extra service
    pub extra: ServiceType,

    /// Main services, any of which unlocks the extra
    pub requires: Vec<ServiceType>,
}

impl TryFrom<CatalogFixture> for Catalog {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let prices = convert_prices(fixture.prices)?;
        let discounts = convert_discounts("discounts", fixture.discounts)?;
        let extra_discounts = convert_discounts("extra_discounts", fixture.extra_discounts)?;
        let relations = convert_relations(fixture.relations)?;

        let surcharges = fixture
            .surcharges
            .into_iter()
            .map(|surcharge| ExtraDiscountSurcharge {
                year: surcharge.year,
                service: surcharge.service,
                amount: Price::new(surcharge.amount),
            })
            .collect();

        Ok(Catalog::new(
            prices,
            discounts,
            extra_discounts,
            surcharges,
            relations,
        ))
    }
}

impl Catalog {
    /// Parse and validate a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the tables are inconsistent.
    pub fn from_yaml_str(contents: &str) -> Result<Self, FixtureError> {
        let fixture: CatalogFixture = serde_norway::from_str(contents)?;

        Catalog::try_from(fixture)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let catalog = Catalog::from_yaml_str(&contents)?;

        debug!(
            path = %path.display(),
            prices = catalog.prices().len(),
            relations = catalog.relations().len(),
            "loaded catalog"
        );

        Ok(catalog)
    }
}

fn convert_prices(entries: Vec<PriceFixture>) -> Result<Vec<ServicePrice>, FixtureError> {
    let mut seen = FxHashSet::default();

    entries
        .into_iter()
        .map(|entry| {
            if !seen.insert((entry.service, entry.year)) {
                return Err(FixtureError::DuplicatePrice {
                    service: entry.service,
                    year: entry.year,
                });
            }

            Ok(ServicePrice {
                service: entry.service,
                year: entry.year,
                price: Price::new(entry.price),
            })
        })
        .collect()
}

fn convert_discounts(
    table: &'static str,
    entries: Vec<DiscountFixture>,
) -> Result<Vec<ServiceDiscount>, FixtureError> {
    let mut seen = FxHashSet::default();

    entries
        .into_iter()
        .map(|entry| {
            if !seen.insert(entry.year) {
                return Err(FixtureError::DuplicateDiscount {
                    table,
                    year: entry.year,
                });
            }

            Ok(ServiceDiscount {
                year: entry.year,
                discount: Price::new(entry.discount),
            })
        })
        .collect()
}

fn convert_relations(entries: Vec<RelationFixture>) -> Result<Vec<ServiceRelation>, FixtureError> {
    let extras: FxHashSet<ServiceType> = entries.iter().map(|entry| entry.extra).collect();

    let mut seen = FxHashSet::default();
    let mut relations = Vec::with_capacity(entries.len());

    for entry in entries {
        if !seen.insert(entry.extra) {
            return Err(FixtureError::DuplicateRelation(entry.extra));
        }

        if entry.requires.is_empty() {
            return Err(FixtureError::NoMainServices(entry.extra));
        }

        let mut main_services: SmallVec<[ServiceType; 2]> = SmallVec::new();

        for main in entry.requires {
            if main == entry.extra {
                return Err(FixtureError::SelfRelation(entry.extra));
            }

            if extras.contains(&main) {
                return Err(FixtureError::ChainedExtra {
                    extra: entry.extra,
                    main,
                });
            }

            if !main_services.contains(&main) {
                main_services.push(main);
            }
        }

        relations.push(ServiceRelation {
            extra_service: entry.extra,
            main_services,
        });
    }

    Ok(relations)
}
