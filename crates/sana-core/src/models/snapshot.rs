use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::result::ScoringResult;

/// The finalized intake record: one scoring result per catalog instrument
/// plus a single completion timestamp shared across the snapshot.
///
/// Produced once per intake and handed to the profile store. Immutable once
/// created.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntakeSnapshot {
    pub id: Uuid,
    /// Results in catalog declaration order.
    pub results: Vec<ScoringResult>,
    pub completed_at: jiff::Timestamp,
}

impl IntakeSnapshot {
    pub fn new(results: Vec<ScoringResult>, completed_at: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            results,
            completed_at,
        }
    }

    pub fn result_for(&self, instrument_code: &str) -> Option<&ScoringResult> {
        self.results
            .iter()
            .find(|r| r.instrument_code == instrument_code)
    }
}
