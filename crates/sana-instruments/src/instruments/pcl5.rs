use crate::{Instrument, Item};

pub const CODE: &str = "PCL5";

/// PCL-5: PTSD Checklist for DSM-5.
/// 20 items rated 0–4 over the past month. Every item carries exactly one
/// DSM-5 symptom cluster tag, so the clusters partition the item set:
/// B (intrusion, items 1–5), C (avoidance, 6–7), D (negative cognitions and
/// mood, 8–14), E (arousal and reactivity, 15–20). Cluster maxima 20/8/28/24.
pub fn definition() -> Instrument {
    let items = [
        ("B", "Repeated, disturbing, and unwanted memories of the stressful experience"),
        ("B", "Repeated, disturbing dreams of the stressful experience"),
        ("B", "Suddenly feeling or acting as if the stressful experience were actually happening again (as if you were actually back there reliving it)"),
        ("B", "Feeling very upset when something reminded you of the stressful experience"),
        ("B", "Having strong physical reactions when something reminded you of the stressful experience (for example, heart pounding, trouble breathing, sweating)"),
        ("C", "Avoiding memories, thoughts, or feelings related to the stressful experience"),
        ("C", "Avoiding external reminders of the stressful experience (for example, people, places, conversations, activities, objects, or situations)"),
        ("D", "Trouble remembering important parts of the stressful experience"),
        ("D", "Having strong negative beliefs about yourself, other people, or the world (for example, having thoughts such as: I am bad, there is something seriously wrong with me, no one can be trusted, the world is completely dangerous)"),
        ("D", "Blaming yourself or someone else for the stressful experience or what happened after it"),
        ("D", "Having strong negative feelings such as fear, horror, anger, guilt, or shame"),
        ("D", "Loss of interest in activities that you used to enjoy"),
        ("D", "Feeling distant or cut off from other people"),
        ("D", "Trouble experiencing positive feelings (for example, being unable to feel happiness or have loving feelings for people close to you)"),
        ("E", "Irritable behavior, angry outbursts, or acting aggressively"),
        ("E", "Taking too many risks or doing things that could cause you harm"),
        ("E", "Being \"superalert\" or watchful or on guard"),
        ("E", "Feeling jumpy or easily startled"),
        ("E", "Having difficulty concentrating"),
        ("E", "Trouble falling or staying asleep"),
    ];

    Instrument {
        code: CODE.to_string(),
        name: "PCL-5".to_string(),
        scale_min: 0,
        scale_max: 4,
        items: items
            .iter()
            .map(|(cluster, text)| Item {
                text: (*text).to_string(),
                cluster: Some((*cluster).to_string()),
                reverse_scored: false,
            })
            .collect(),
        subscales: Vec::new(),
        reports_mean: false,
        clinical_cutoff: None,
    }
}
