//! Integration tests for selecting and deselecting services.

use bundle_pricing::prelude::*;

use ServiceType::{BlurayPackage, Photography, TwoDayEvent, VideoRecording, WeddingSession};

fn select(selection: impl Into<Selection>, service: ServiceType) -> Selection {
    update_selected_services(&selection.into(), ServiceUpdate::select(service))
}

fn deselect(selection: impl Into<Selection>, service: ServiceType) -> Selection {
    update_selected_services(&selection.into(), ServiceUpdate::deselect(service))
}

#[test]
fn selects_when_not_selected() {
    assert_eq!(select(Selection::new(), Photography).as_slice(), [Photography]);
}

#[test]
fn does_not_select_the_same_service_twice() {
    assert_eq!(select([Photography], Photography).as_slice(), [Photography]);
}

#[test]
fn selecting_is_idempotent_for_every_service() {
    let starts = [
        Selection::new(),
        Selection::from([VideoRecording]),
        Selection::from([WeddingSession, Photography]),
    ];

    for start in starts {
        for service in ServiceType::ALL {
            let once = update_selected_services(&start, ServiceUpdate::select(service));
            let twice = update_selected_services(&once, ServiceUpdate::select(service));

            assert_eq!(once, twice, "selecting {service} twice changed {start:?}");
        }
    }
}

#[test]
fn extra_service_needs_a_main_service() {
    assert!(select(Selection::new(), BlurayPackage).is_empty());
    assert_eq!(
        select([WeddingSession], BlurayPackage).as_slice(),
        [WeddingSession]
    );
}

#[test]
fn extra_service_selected_when_main_service_is_selected() {
    assert_eq!(
        select([VideoRecording], BlurayPackage).as_slice(),
        [VideoRecording, BlurayPackage]
    );
    assert_eq!(
        select([WeddingSession, VideoRecording], BlurayPackage).as_slice(),
        [WeddingSession, VideoRecording, BlurayPackage]
    );
}

#[test]
fn extra_service_selected_when_one_of_main_services_is_selected() {
    assert_eq!(
        select([WeddingSession, Photography], TwoDayEvent).as_slice(),
        [WeddingSession, Photography, TwoDayEvent]
    );
}

#[test]
fn deselects() {
    assert_eq!(
        deselect([WeddingSession, Photography], Photography).as_slice(),
        [WeddingSession]
    );
}

#[test]
fn deselecting_unselected_service_does_nothing() {
    assert_eq!(
        deselect([WeddingSession, Photography], TwoDayEvent).as_slice(),
        [WeddingSession, Photography]
    );
}

#[test]
fn deselects_extra_when_last_main_service_is_deselected() {
    assert_eq!(
        deselect([WeddingSession, Photography, TwoDayEvent], Photography).as_slice(),
        [WeddingSession]
    );
}

#[test]
fn keeps_extra_while_another_main_service_stays_selected() {
    assert_eq!(
        deselect(
            [WeddingSession, Photography, VideoRecording, TwoDayEvent],
            Photography
        )
        .as_slice(),
        [WeddingSession, VideoRecording, TwoDayEvent]
    );
}

#[test]
fn select_then_deselect_main_service_restores_selection() {
    let start = Selection::from([WeddingSession, VideoRecording, BlurayPackage]);

    let selected = update_selected_services(&start, ServiceUpdate::select(Photography));
    let restored = update_selected_services(&selected, ServiceUpdate::deselect(Photography));

    assert_eq!(restored, start);
}

#[test]
fn a_sequence_of_events_keeps_extras_consistent() {
    let events = [
        ServiceUpdate::select(TwoDayEvent),
        ServiceUpdate::select(VideoRecording),
        ServiceUpdate::select(TwoDayEvent),
        ServiceUpdate::select(BlurayPackage),
        ServiceUpdate::select(Photography),
        ServiceUpdate::deselect(VideoRecording),
        ServiceUpdate::select(WeddingSession),
    ];

    let selection = events.into_iter().fold(Selection::new(), |selection, event| {
        update_selected_services(&selection, event)
    });

    assert_eq!(
        selection.as_slice(),
        [TwoDayEvent, Photography, WeddingSession]
    );
}
