use crate::{Instrument, Item};

pub const CODE: &str = "PDEQ";

/// PDEQ: Peritraumatic Dissociative Experiences Questionnaire.
/// 10 items rated 1–5 describing dissociation during and immediately after
/// the traumatic event. Reported as total and mean item score (range 1.0–5.0).
pub fn definition() -> Instrument {
    let items = [
        "I had moments of losing track of what was going on — I \"blanked out\" or \"spaced out\" or in some way felt that I was not part of what was going on",
        "I found that I was on \"automatic pilot\" — I ended up doing things that I later realized I hadn't actively decided to do",
        "My sense of time changed — things seemed to be happening in slow motion",
        "What was happening seemed unreal to me, like I was in a dream or watching a movie or play",
        "I felt as though I were a spectator watching what was happening to me, as if I were floating above the scene or observing it as an outsider",
        "There were moments when my sense of my own body seemed distorted or changed — I felt disconnected from my own body, or it seemed larger or smaller than usual",
        "I felt as though things that were actually happening to others were happening to me — like I was being trapped when I really wasn't",
        "I was surprised to find out afterward that a lot of things had happened at the time that I was not aware of, especially things I ordinarily would have noticed",
        "I felt confused; that is, there were moments when I had difficulty making sense of what was happening",
        "I felt disoriented; that is, there were moments when I felt uncertain about where I was or what time it was",
    ];

    Instrument {
        code: CODE.to_string(),
        name: "PDEQ".to_string(),
        scale_min: 1,
        scale_max: 5,
        items: items
            .iter()
            .map(|text| Item {
                text: (*text).to_string(),
                cluster: None,
                reverse_scored: false,
            })
            .collect(),
        subscales: Vec::new(),
        reports_mean: true,
        clinical_cutoff: None,
    }
}
