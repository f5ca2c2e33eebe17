use crate::{Instrument, Item};

pub const CODE: &str = "AAQ2";

/// AAQ-II: Acceptance and Action Questionnaire, second edition.
/// 7 items rated 1–7 measuring psychological inflexibility. Totals at or
/// above 25 fall above the normative threshold.
pub fn definition() -> Instrument {
    let items = [
        "My painful experiences and memories make it difficult for me to live a life that I would value",
        "I'm afraid of my feelings",
        "I worry about not being able to control my worries and feelings",
        "My painful memories prevent me from having a fulfilling life",
        "Emotions cause problems in my life",
        "It seems like most people are handling their lives better than I am",
        "Worries get in the way of my success",
    ];

    Instrument {
        code: CODE.to_string(),
        name: "AAQ-II".to_string(),
        scale_min: 1,
        scale_max: 7,
        items: items
            .iter()
            .map(|text| Item {
                text: (*text).to_string(),
                cluster: None,
                reverse_scored: false,
            })
            .collect(),
        subscales: Vec::new(),
        reports_mean: false,
        clinical_cutoff: Some(25),
    }
}
