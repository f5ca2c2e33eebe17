use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The scored outcome for one complete response set.
///
/// Derived fresh from a `ResponseSet` plus its instrument definition; never
/// mutated after construction and never persisted apart from the snapshot
/// that carries it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    pub instrument_code: String,
    /// Sum of effective (reverse-adjusted) item values.
    pub total: i64,
    /// Cluster and named-subscale sums, keyed by tag or subscale name.
    /// Empty for instruments without either.
    pub subtotals: BTreeMap<String, i64>,
    /// `total / item count`, full precision. Present only where a mean is
    /// clinically meaningful for the instrument (e.g. PDEQ). Formatting is
    /// a caller concern.
    pub mean_item_score: Option<f64>,
    /// Whether the total meets the instrument's normative cutoff, for
    /// instruments that declare one (e.g. AAQ-II).
    pub above_cutoff: Option<bool>,
}
