//! Pure scoring functions over a complete response set and its instrument
//! definition.
//!
//! Every summation path (grand total, cluster subtotals, positional
//! subscales) goes through the single [`effective_value`] function, so the
//! reverse-scoring transform can never drift between the total and a
//! subscale computed separately from it.

use std::collections::BTreeMap;

use sana_core::{ResponseSet, ScoringResult};

use crate::error::InstrumentError;
use crate::{Instrument, Item};

/// The value actually summed for an item: the raw response, or its
/// reflection on the scale when the item is reverse-scored.
///
/// For a 1–5 scale this yields the documented `6 - raw` transform; the
/// formula generalizes to any linear scale.
pub fn effective_value(item: &Item, raw: i64, scale_min: i64, scale_max: i64) -> i64 {
    if item.reverse_scored {
        scale_max + scale_min + 1 - raw
    } else {
        raw
    }
}

/// Grand total: sum of effective values over all items.
///
/// This is the canonical scoring path; it requires a complete, in-bounds
/// response set. Use [`partial_total`] for a defensive live-preview sum.
pub fn total(set: &ResponseSet, instrument: &Instrument) -> Result<i64, InstrumentError> {
    let values = checked_values(set, instrument)?;
    Ok(instrument
        .items
        .iter()
        .zip(&values)
        .map(|(item, raw)| effective_value(item, *raw, instrument.scale_min, instrument.scale_max))
        .sum())
}

/// Defensive total for incomplete sets: unanswered items contribute 0.
///
/// Callers opt into this explicitly (e.g. a live progress preview); the
/// canonical path is [`total`].
pub fn partial_total(set: &ResponseSet, instrument: &Instrument) -> Result<i64, InstrumentError> {
    check_instrument(set, instrument)?;
    Ok(instrument
        .items
        .iter()
        .zip(&set.values)
        .map(|(item, raw)| match raw {
            Some(raw) => {
                effective_value(item, *raw, instrument.scale_min, instrument.scale_max)
            }
            None => 0,
        })
        .sum())
}

/// Sum of effective values over items carrying `cluster_tag`.
///
/// Returns 0 for a tag no item carries; probing for absent clusters is not
/// an error.
pub fn subtotal_by_cluster(
    set: &ResponseSet,
    instrument: &Instrument,
    cluster_tag: &str,
) -> Result<i64, InstrumentError> {
    let values = checked_values(set, instrument)?;
    Ok(instrument
        .items
        .iter()
        .zip(&values)
        .filter(|(item, _)| item.cluster.as_deref() == Some(cluster_tag))
        .map(|(item, raw)| effective_value(item, *raw, instrument.scale_min, instrument.scale_max))
        .sum())
}

/// Sum of effective values at the given 1-based item positions.
///
/// This path exists for instruments whose subscales are positional index
/// sets rather than per-item tags (DERS-18); it applies the reverse
/// transform exactly as [`total`] does.
pub fn subtotal_by_indices(
    set: &ResponseSet,
    instrument: &Instrument,
    one_based_positions: &[usize],
) -> Result<i64, InstrumentError> {
    let values = checked_values(set, instrument)?;
    let mut sum = 0;
    for &pos in one_based_positions {
        if pos == 0 || pos > instrument.items.len() {
            return Err(InstrumentError::ItemIndexOutOfBounds {
                instrument_code: instrument.code.clone(),
                index: pos,
                item_count: instrument.items.len(),
            });
        }
        let item = &instrument.items[pos - 1];
        sum += effective_value(
            item,
            values[pos - 1],
            instrument.scale_min,
            instrument.scale_max,
        );
    }
    Ok(sum)
}

/// `total / item count`, at full precision. Formatting (the UI reports two
/// decimal places) is a caller concern.
pub fn mean_item_score(set: &ResponseSet, instrument: &Instrument) -> Result<f64, InstrumentError> {
    let total = total(set, instrument)?;
    Ok(total as f64 / instrument.items.len() as f64)
}

/// Score a complete response set: grand total, every cluster subtotal,
/// every positional subscale subtotal, the mean where the instrument
/// reports one, and the cutoff classification where one is declared.
pub fn score(set: &ResponseSet, instrument: &Instrument) -> Result<ScoringResult, InstrumentError> {
    let total = total(set, instrument)?;

    let mut subtotals = BTreeMap::new();
    for tag in instrument.cluster_tags() {
        subtotals.insert(
            tag.to_string(),
            subtotal_by_cluster(set, instrument, tag)?,
        );
    }
    for subscale in &instrument.subscales {
        subtotals.insert(
            subscale.name.clone(),
            subtotal_by_indices(set, instrument, &subscale.item_positions)?,
        );
    }

    let mean_item_score = if instrument.reports_mean {
        Some(total as f64 / instrument.items.len() as f64)
    } else {
        None
    };

    Ok(ScoringResult {
        instrument_code: instrument.code.clone(),
        total,
        subtotals,
        mean_item_score,
        above_cutoff: instrument.clinical_cutoff.map(|cutoff| total >= cutoff),
    })
}

fn check_instrument(set: &ResponseSet, instrument: &Instrument) -> Result<(), InstrumentError> {
    if set.instrument_code != instrument.code {
        return Err(InstrumentError::InstrumentMismatch {
            set_code: set.instrument_code.clone(),
            instrument_code: instrument.code.clone(),
        });
    }
    if set.values.len() != instrument.items.len() {
        return Err(InstrumentError::ItemIndexOutOfBounds {
            instrument_code: instrument.code.clone(),
            index: set.values.len(),
            item_count: instrument.items.len(),
        });
    }
    Ok(())
}

/// Canonical-path gate: the set must belong to this instrument, be fully
/// answered, and hold only in-scale values. Bounds are enforced again here
/// because a `ResponseSet` can be built without going through the
/// collector.
fn checked_values(
    set: &ResponseSet,
    instrument: &Instrument,
) -> Result<Vec<i64>, InstrumentError> {
    check_instrument(set, instrument)?;

    if !set.is_complete() {
        return Err(InstrumentError::IncompleteResponses {
            instrument_code: instrument.code.clone(),
            missing: set.missing_indices().len(),
        });
    }

    let mut values = Vec::with_capacity(set.values.len());
    for (idx, raw) in set.values.iter().enumerate() {
        // is_complete has already ruled out None
        let raw = raw.unwrap_or(instrument.scale_min);
        if !instrument.in_scale(raw) {
            return Err(InstrumentError::ValueOutOfRange {
                instrument_code: instrument.code.clone(),
                item_index: idx,
                value: raw,
                scale_min: instrument.scale_min,
                scale_max: instrument.scale_max,
            });
        }
        values.push(raw);
    }
    Ok(values)
}
