//! sana-instruments
//!
//! Clinical assessment instrument definitions and scoring. Pure data and
//! pure functions — no I/O. Defines the item lists, scales, clusters,
//! reverse-scoring flags, and subscale index sets for each supported
//! instrument, and computes totals from completed response sets.

pub mod error;
pub mod instruments;
pub mod scoring;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use error::InstrumentError;

/// One question within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// The prompt shown to the respondent. Opaque to scoring.
    pub text: String,
    /// Clinical cluster tag (e.g. PCL-5 symptom clusters B/C/D/E).
    pub cluster: Option<String>,
    /// When true, the effective value is `scale_max + scale_min + 1 - raw`.
    pub reverse_scored: bool,
}

/// A named subscale defined by item positions rather than cluster tags.
///
/// DERS-18 subscales do not partition the item set, so they are carried as
/// separate 1-based index lists instead of per-item tags.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub name: String,
    /// 1-based positions into the instrument's item list.
    pub item_positions: Vec<usize>,
}

/// A fixed clinical questionnaire. Immutable value object: the item list,
/// scale bounds, and subscale definitions never change after construction.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Instrument {
    pub code: String,
    pub name: String,
    /// Inclusive response bounds shared by every item.
    pub scale_min: i64,
    pub scale_max: i64,
    /// Ordered item list; order defines response-array indexing.
    pub items: Vec<Item>,
    /// Positional subscales (empty for instruments without them).
    pub subscales: Vec<Subscale>,
    /// Whether a per-item mean is clinically reported for this instrument.
    pub reports_mean: bool,
    /// Normative cutoff on the total, where one is in clinical use.
    pub clinical_cutoff: Option<i64>,
}

impl Instrument {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// True iff `value` lies within the instrument's scale bounds.
    pub fn in_scale(&self, value: i64) -> bool {
        value >= self.scale_min && value <= self.scale_max
    }

    /// Distinct cluster tags in first-appearance order.
    pub fn cluster_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for item in &self.items {
            if let Some(tag) = item.cluster.as_deref()
                && !tags.contains(&tag)
            {
                tags.push(tag);
            }
        }
        tags
    }
}

/// The full catalog, in declaration order: PDEQ, PCL5, DERS18, AAQ2.
/// This order is observable downstream (intake snapshot results, the
/// incomplete-instrument listing) and must not change.
pub fn all_instruments() -> &'static [Instrument] {
    static CATALOG: LazyLock<Vec<Instrument>> = LazyLock::new(|| {
        vec![
            instruments::pdeq::definition(),
            instruments::pcl5::definition(),
            instruments::ders18::definition(),
            instruments::aaq2::definition(),
        ]
    });
    &CATALOG
}

/// Look up an instrument by code.
pub fn get_instrument(code: &str) -> Result<&'static Instrument, InstrumentError> {
    all_instruments()
        .iter()
        .find(|i| i.code == code)
        .ok_or_else(|| InstrumentError::UnknownInstrument(code.to_string()))
}
