use crate::{Instrument, Item, Subscale};

pub const CODE: &str = "DERS18";

/// 1-based positions of the reverse-scored items. On the 1–5 scale the
/// effective value is `6 - raw`.
const REVERSE_POSITIONS: [usize; 3] = [1, 4, 6];

/// DERS-18: Difficulties in Emotion Regulation Scale, short form.
/// 18 items rated 1–5. The reporting subscales are positional index sets,
/// not per-item tags; they do not partition the item list, so they are
/// carried as named 1-based index lists alongside the items.
pub fn definition() -> Instrument {
    let items = [
        "I pay attention to how I feel",
        "I have no idea how I am feeling",
        "I have difficulty making sense out of my feelings",
        "I am attentive to my feelings",
        "I am confused about how I feel",
        "When I'm upset, I acknowledge my emotions",
        "When I'm upset, I become embarrassed for feeling that way",
        "When I'm upset, I have difficulty getting work done",
        "When I'm upset, I become out of control",
        "When I'm upset, I believe that I will remain that way for a long time",
        "When I'm upset, I believe that I'll end up feeling very depressed",
        "When I'm upset, I have difficulty focusing on other things",
        "When I'm upset, I feel ashamed with myself for feeling that way",
        "When I'm upset, I feel guilty for feeling that way",
        "When I'm upset, I have difficulty concentrating",
        "When I'm upset, I have difficulty controlling my behaviors",
        "When I'm upset, I believe that there is nothing I can do to make myself feel better",
        "When I'm upset, I lose control over my behaviors",
    ];

    Instrument {
        code: CODE.to_string(),
        name: "DERS-18".to_string(),
        scale_min: 1,
        scale_max: 5,
        items: items
            .iter()
            .enumerate()
            .map(|(idx, text)| Item {
                text: (*text).to_string(),
                cluster: None,
                reverse_scored: REVERSE_POSITIONS.contains(&(idx + 1)),
            })
            .collect(),
        subscales: vec![
            subscale("Awareness", &[1, 4, 6]),
            subscale("Clarity", &[2, 3, 5]),
            subscale("Strategies", &[10, 11, 17]),
        ],
        reports_mean: false,
        clinical_cutoff: None,
    }
}

fn subscale(name: &str, positions: &[usize]) -> Subscale {
    Subscale {
        name: name.to_string(),
        item_positions: positions.to_vec(),
    }
}
