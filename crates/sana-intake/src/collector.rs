use jiff::Timestamp;

use sana_core::ResponseSet;
use sana_instruments::error::InstrumentError;
use sana_instruments::{all_instruments, get_instrument};

/// In-memory response collection for one respondent's intake flow.
///
/// Holds one mutable [`ResponseSet`] per catalog instrument. Responses are
/// editable until the collector is consumed by
/// [`finalize`](crate::finalize::finalize); the collector itself performs
/// no I/O.
#[derive(Debug, Clone)]
pub struct IntakeCollector {
    /// Parallel to the catalog, in declaration order.
    responses: Vec<ResponseSet>,
}

impl IntakeCollector {
    /// A fresh collector with an empty response set per catalog instrument.
    pub fn new() -> Self {
        Self {
            responses: all_instruments()
                .iter()
                .map(|i| ResponseSet::new(i.code.clone(), i.item_count()))
                .collect(),
        }
    }

    /// Record the answer to one item. `item_index` is zero-based, matching
    /// the UI's response array. Overwrites any prior answer at that index.
    ///
    /// Values outside the instrument's scale and indexes outside its item
    /// list are rejected, never clamped.
    pub fn set_response(
        &mut self,
        instrument_code: &str,
        item_index: usize,
        value: i64,
    ) -> Result<(), InstrumentError> {
        let instrument = get_instrument(instrument_code)?;

        if item_index >= instrument.item_count() {
            return Err(InstrumentError::ItemIndexOutOfBounds {
                instrument_code: instrument.code.clone(),
                index: item_index,
                item_count: instrument.item_count(),
            });
        }
        if !instrument.in_scale(value) {
            return Err(InstrumentError::ValueOutOfRange {
                instrument_code: instrument.code.clone(),
                item_index,
                value,
                scale_min: instrument.scale_min,
                scale_max: instrument.scale_max,
            });
        }

        // get_instrument succeeded, so the parallel slot exists
        let set = self
            .responses
            .iter_mut()
            .find(|s| s.instrument_code == instrument_code)
            .ok_or_else(|| InstrumentError::UnknownInstrument(instrument_code.to_string()))?;

        set.values[item_index] = Some(value);
        if set.completed_at.is_none() && set.is_complete() {
            set.completed_at = Some(Timestamp::now());
        }
        Ok(())
    }

    /// True iff every item of the instrument has an answer.
    pub fn is_complete(&self, instrument_code: &str) -> Result<bool, InstrumentError> {
        Ok(self.response_set(instrument_code)?.is_complete())
    }

    /// Current state of one instrument's responses, complete or not.
    /// Callers must check completeness before scoring.
    pub fn response_set(&self, instrument_code: &str) -> Result<&ResponseSet, InstrumentError> {
        self.responses
            .iter()
            .find(|s| s.instrument_code == instrument_code)
            .ok_or_else(|| InstrumentError::UnknownInstrument(instrument_code.to_string()))
    }

    /// Codes of every unfinished instrument, in catalog order.
    pub fn incomplete_codes(&self) -> Vec<String> {
        self.responses
            .iter()
            .filter(|s| !s.is_complete())
            .map(|s| s.instrument_code.clone())
            .collect()
    }
}

impl Default for IntakeCollector {
    fn default() -> Self {
        Self::new()
    }
}
