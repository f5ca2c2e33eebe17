use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One respondent's answers to one instrument at one point in time.
///
/// `values` is index-aligned with the instrument's item list; `None` marks
/// an unanswered item. Bounds checking happens where responses enter the
/// system (the collector), not here.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseSet {
    pub instrument_code: String,
    pub values: Vec<Option<i64>>,
    /// Stamped the first time every item has an answer.
    pub completed_at: Option<jiff::Timestamp>,
}

impl ResponseSet {
    /// An empty response set with one slot per instrument item.
    pub fn new(instrument_code: impl Into<String>, item_count: usize) -> Self {
        Self {
            instrument_code: instrument_code.into(),
            values: vec![None; item_count],
            completed_at: None,
        }
    }

    /// True iff every item has been answered.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Zero-based indices of unanswered items.
    pub fn missing_indices(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn answered_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}
