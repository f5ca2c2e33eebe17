use proptest::prelude::*;

use sana_instruments::error::InstrumentError;
use sana_instruments::get_instrument;
use sana_intake::IntakeCollector;

#[test]
fn fresh_collector_has_all_four_instruments_incomplete() {
    let collector = IntakeCollector::new();
    assert_eq!(
        collector.incomplete_codes(),
        vec!["PDEQ", "PCL5", "DERS18", "AAQ2"]
    );
    for code in ["PDEQ", "PCL5", "DERS18", "AAQ2"] {
        assert!(!collector.is_complete(code).unwrap());
        assert_eq!(collector.response_set(code).unwrap().answered_count(), 0);
    }
}

#[test]
fn unknown_instrument_is_rejected() {
    let mut collector = IntakeCollector::new();
    let err = collector.set_response("PHQ9", 0, 1).unwrap_err();
    assert!(matches!(err, InstrumentError::UnknownInstrument(code) if code == "PHQ9"));
    assert!(collector.response_set("PHQ9").is_err());
    assert!(collector.is_complete("PHQ9").is_err());
}

#[test]
fn item_index_is_bounds_checked() {
    let mut collector = IntakeCollector::new();
    // PDEQ has 10 items; index 10 is one past the end.
    let err = collector.set_response("PDEQ", 10, 3).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::ItemIndexOutOfBounds {
            index: 10,
            item_count: 10,
            ..
        }
    ));
    collector.set_response("PDEQ", 9, 3).unwrap();
}

#[test]
fn values_outside_the_scale_are_rejected_never_clamped() {
    let mut collector = IntakeCollector::new();

    // PCL-5 is 0-4.
    assert!(matches!(
        collector.set_response("PCL5", 0, 5).unwrap_err(),
        InstrumentError::ValueOutOfRange { value: 5, .. }
    ));
    assert!(collector.set_response("PCL5", 0, -1).is_err());
    assert_eq!(collector.response_set("PCL5").unwrap().values[0], None);

    // AAQ-II is 1-7: 0 is out, 7 is in.
    assert!(collector.set_response("AAQ2", 0, 0).is_err());
    collector.set_response("AAQ2", 0, 7).unwrap();
}

#[test]
fn responses_are_editable_until_submission() {
    let mut collector = IntakeCollector::new();
    collector.set_response("PDEQ", 0, 2).unwrap();
    collector.set_response("PDEQ", 0, 5).unwrap();
    assert_eq!(collector.response_set("PDEQ").unwrap().values[0], Some(5));
}

#[test]
fn completion_is_stamped_once_every_item_is_answered() {
    let mut collector = IntakeCollector::new();
    let aaq2 = get_instrument("AAQ2").unwrap();

    for idx in 0..aaq2.item_count() - 1 {
        collector.set_response("AAQ2", idx, 4).unwrap();
        assert!(!collector.is_complete("AAQ2").unwrap());
        assert!(collector.response_set("AAQ2").unwrap().completed_at.is_none());
    }

    collector.set_response("AAQ2", aaq2.item_count() - 1, 4).unwrap();
    assert!(collector.is_complete("AAQ2").unwrap());
    let stamped = collector.response_set("AAQ2").unwrap().completed_at;
    assert!(stamped.is_some());

    // Editing a complete set keeps the original stamp.
    collector.set_response("AAQ2", 0, 7).unwrap();
    assert_eq!(collector.response_set("AAQ2").unwrap().completed_at, stamped);
}

#[test]
fn incomplete_codes_follow_catalog_order() {
    let mut collector = IntakeCollector::new();
    for idx in 0..7 {
        collector.set_response("AAQ2", idx, 2).unwrap();
    }
    for idx in 0..10 {
        collector.set_response("PDEQ", idx, 3).unwrap();
    }
    assert_eq!(collector.incomplete_codes(), vec!["PCL5", "DERS18"]);
}

proptest! {
    /// Every integer inside an instrument's closed scale interval is
    /// accepted; every integer outside it is rejected.
    #[test]
    fn scale_bounds_are_exact(value in -20i64..=20) {
        let mut collector = IntakeCollector::new();
        for instrument in sana_instruments::all_instruments() {
            let outcome = collector.set_response(&instrument.code, 0, value);
            if value >= instrument.scale_min && value <= instrument.scale_max {
                prop_assert!(outcome.is_ok(), "{} rejected {value}", instrument.code);
            } else {
                prop_assert!(
                    matches!(outcome, Err(InstrumentError::ValueOutOfRange { .. })),
                    "{} accepted {value}",
                    instrument.code
                );
            }
        }
    }
}
