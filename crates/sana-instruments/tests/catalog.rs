use sana_instruments::error::InstrumentError;
use sana_instruments::{all_instruments, get_instrument};

#[test]
fn catalog_declaration_order_is_fixed() {
    let codes: Vec<&str> = all_instruments().iter().map(|i| i.code.as_str()).collect();
    assert_eq!(codes, vec!["PDEQ", "PCL5", "DERS18", "AAQ2"]);
}

#[test]
fn item_counts_and_scales() {
    let expected = [
        ("PDEQ", 10, 1, 5),
        ("PCL5", 20, 0, 4),
        ("DERS18", 18, 1, 5),
        ("AAQ2", 7, 1, 7),
    ];
    for (code, count, min, max) in expected {
        let instrument = get_instrument(code).unwrap();
        assert_eq!(instrument.item_count(), count, "{code} item count");
        assert_eq!(instrument.scale_min, min, "{code} scale min");
        assert_eq!(instrument.scale_max, max, "{code} scale max");
    }
}

#[test]
fn unknown_code_is_an_error() {
    let err = get_instrument("GAD7").unwrap_err();
    assert!(matches!(err, InstrumentError::UnknownInstrument(code) if code == "GAD7"));
}

#[test]
fn pcl5_clusters_partition_the_items() {
    let pcl5 = get_instrument("PCL5").unwrap();

    // Every item carries exactly one tag.
    assert!(pcl5.items.iter().all(|i| i.cluster.is_some()));
    assert_eq!(pcl5.cluster_tags(), vec!["B", "C", "D", "E"]);

    let count = |tag: &str| {
        pcl5.items
            .iter()
            .filter(|i| i.cluster.as_deref() == Some(tag))
            .count()
    };
    assert_eq!(count("B"), 5);
    assert_eq!(count("C"), 2);
    assert_eq!(count("D"), 7);
    assert_eq!(count("E"), 6);
}

#[test]
fn pcl5_has_no_reverse_items() {
    let pcl5 = get_instrument("PCL5").unwrap();
    assert!(pcl5.items.iter().all(|i| !i.reverse_scored));
}

#[test]
fn ders18_reverse_items_are_1_4_6() {
    let ders = get_instrument("DERS18").unwrap();
    let reversed: Vec<usize> = ders
        .items
        .iter()
        .enumerate()
        .filter(|(_, i)| i.reverse_scored)
        .map(|(idx, _)| idx + 1)
        .collect();
    assert_eq!(reversed, vec![1, 4, 6]);
}

#[test]
fn ders18_subscales_are_positional_and_in_range() {
    let ders = get_instrument("DERS18").unwrap();

    // Subscales are index lists, not cluster tags.
    assert!(ders.items.iter().all(|i| i.cluster.is_none()));

    let names: Vec<&str> = ders.subscales.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Awareness", "Clarity", "Strategies"]);

    let mut seen = Vec::new();
    for subscale in &ders.subscales {
        assert_eq!(subscale.item_positions.len(), 3, "{}", subscale.name);
        for &pos in &subscale.item_positions {
            assert!(pos >= 1 && pos <= 18, "{} position {pos}", subscale.name);
            assert!(!seen.contains(&pos), "position {pos} reused");
            seen.push(pos);
        }
    }
}

#[test]
fn pdeq_reports_a_mean_and_aaq2_declares_its_cutoff() {
    assert!(get_instrument("PDEQ").unwrap().reports_mean);
    assert!(!get_instrument("PCL5").unwrap().reports_mean);
    assert_eq!(get_instrument("AAQ2").unwrap().clinical_cutoff, Some(25));
    assert_eq!(get_instrument("PDEQ").unwrap().clinical_cutoff, None);
}

#[test]
fn in_scale_covers_the_closed_interval() {
    let pcl5 = get_instrument("PCL5").unwrap();
    assert!(pcl5.in_scale(0));
    assert!(pcl5.in_scale(4));
    assert!(!pcl5.in_scale(-1));
    assert!(!pcl5.in_scale(5));
}
