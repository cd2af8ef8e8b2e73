//! Integration tests for quoting selections against the standard price list.
//!
//! Combination scenarios compare the final price of a selection with and
//! without one extra service, so they pin the discount rules rather than the
//! raw price table.

use bundle_pricing::prelude::*;

use ServiceType::{BlurayPackage, Photography, TwoDayEvent, VideoRecording, WeddingSession};
use ServiceYear::{Y2020, Y2021, Y2022};

fn final_price(services: &[ServiceType], year: ServiceYear) -> i64 {
    calculate_price(&Selection::from(services), year)
        .final_price()
        .value()
}

/// Asserts the price change of adding `added` to `base`, and that the
/// combination costs less than buying `added` on its own.
fn assert_increase(base: &[ServiceType], added: ServiceType, year: ServiceYear, increase: i64) {
    let with: Vec<ServiceType> = base.iter().copied().chain([added]).collect();

    let without_price = final_price(base, year);
    let with_price = final_price(&with, year);
    let alone_price = final_price(&[added], year);

    assert_eq!(
        with_price - without_price,
        increase,
        "adding {added} to {base:?} in {year}"
    );
    assert!(
        without_price + alone_price > with_price,
        "no discount for {added} with {base:?} in {year}"
    );
}

#[test]
fn zero_with_no_services_selected() {
    for year in ServiceYear::ALL {
        let quote = calculate_price(&Selection::new(), year);

        assert_eq!(quote.base_price(), Price::ZERO);
        assert_eq!(quote.final_price(), Price::ZERO);
    }
}

#[test]
fn single_service_prices_match_price_list() {
    let cases = [
        (WeddingSession, Y2020, 600),
        (WeddingSession, Y2021, 600),
        (WeddingSession, Y2022, 600),
        (Photography, Y2020, 1700),
        (Photography, Y2021, 1800),
        (Photography, Y2022, 1900),
        (VideoRecording, Y2020, 1700),
        (VideoRecording, Y2021, 1800),
        (VideoRecording, Y2022, 1900),
    ];

    for (service, year, expected) in cases {
        let quote = calculate_price(&Selection::from([service]), year);

        assert_eq!(quote.base_price(), Price::new(expected), "{service} in {year}");
        assert_eq!(quote.final_price(), quote.base_price(), "{service} in {year}");
    }
}

#[test]
fn photography_with_wedding_session() {
    for (year, increase) in [(Y2020, 300), (Y2021, 300), (Y2022, 0)] {
        assert_increase(&[Photography], WeddingSession, year, increase);

        let quote = calculate_price(&Selection::from([Photography, WeddingSession]), year);

        assert!(quote.base_price() > Price::ZERO, "base price in {year}");
        assert!(quote.final_price() > Price::ZERO, "final price in {year}");
    }
}

#[test]
fn video_recording_with_wedding_session() {
    for year in ServiceYear::ALL {
        assert_increase(&[VideoRecording], WeddingSession, year, 300);
    }
}

#[test]
fn video_recording_with_photography() {
    for (year, increase) in [(Y2020, 500), (Y2021, 500), (Y2022, 600)] {
        assert_increase(&[VideoRecording], Photography, year, increase);
    }
}

#[test]
fn combo_discount_in_2021() {
    assert_eq!(
        final_price(&[Photography, VideoRecording], Y2021),
        1800 + 1800 - 1300
    );
}

#[test]
fn video_recording_and_photography_with_wedding_session() {
    for (year, increase) in [(Y2020, 300), (Y2021, 300), (Y2022, 0)] {
        assert_increase(
            &[VideoRecording, Photography],
            WeddingSession,
            year,
            increase,
        );

        let quote = calculate_price(
            &Selection::from([VideoRecording, Photography, WeddingSession]),
            year,
        );

        assert!(quote.final_price() > Price::ZERO, "final price in {year}");
    }
}

#[test]
fn extras_add_their_flat_price() {
    for year in ServiceYear::ALL {
        let base = final_price(&[VideoRecording], year);
        let with_extras = final_price(&[VideoRecording, BlurayPackage, TwoDayEvent], year);

        assert_eq!(with_extras - base, 300 + 400, "extras in {year}");
    }
}

#[test]
fn selection_order_does_not_change_price() {
    let forward = calculate_price(
        &Selection::from([Photography, VideoRecording, WeddingSession, TwoDayEvent]),
        Y2022,
    );
    let backward = calculate_price(
        &Selection::from([TwoDayEvent, WeddingSession, VideoRecording, Photography]),
        Y2022,
    );

    assert_eq!(forward.base_price(), backward.base_price());
    assert_eq!(forward.final_price(), backward.final_price());
}

#[test]
fn quote_lists_applied_discounts() {
    let quote = calculate_price(
        &Selection::from([Photography, VideoRecording, WeddingSession]),
        Y2022,
    );

    assert_eq!(
        quote.discounts(),
        [
            AppliedDiscount {
                rule: DiscountRule::MainCombo,
                amount: Price::new(1300),
            },
            AppliedDiscount {
                rule: DiscountRule::ExtraCombo,
                amount: Price::new(600),
            },
        ]
    );
    assert_eq!(quote.savings(), Price::new(1900));
}
