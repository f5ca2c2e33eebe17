use thiserror::Error;

use sana_instruments::error::InstrumentError;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error("intake incomplete: {}", codes.join(", "))]
    IncompleteIntake {
        /// Codes of the unfinished instruments, in catalog order.
        codes: Vec<String>,
    },

    #[error("profile store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("save failed: {0}")]
    Save(String),
}
