use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error(
        "{instrument_code}: value {value} at item {item_index} is outside scale [{scale_min}, {scale_max}]"
    )]
    ValueOutOfRange {
        instrument_code: String,
        item_index: usize,
        value: i64,
        scale_min: i64,
        scale_max: i64,
    },

    #[error("{instrument_code}: item index {index} is out of bounds ({item_count} items)")]
    ItemIndexOutOfBounds {
        instrument_code: String,
        index: usize,
        item_count: usize,
    },

    #[error("{instrument_code}: {missing} unanswered item(s), scoring requires a complete set")]
    IncompleteResponses {
        instrument_code: String,
        missing: usize,
    },

    #[error("response set for '{set_code}' scored against instrument '{instrument_code}'")]
    InstrumentMismatch {
        set_code: String,
        instrument_code: String,
    },
}
