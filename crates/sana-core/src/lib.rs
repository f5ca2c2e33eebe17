//! sana-core
//!
//! Pure domain types for the intake assessment flow. No I/O, no async —
//! this is the shared vocabulary of the Sana system, exported to the
//! TypeScript frontend via ts-rs.

pub mod error;
pub mod models;

pub use models::response::ResponseSet;
pub use models::result::ScoringResult;
pub use models::snapshot::IntakeSnapshot;
