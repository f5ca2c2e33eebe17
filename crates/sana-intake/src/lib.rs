//! sana-intake
//!
//! The intake flow: collects per-item responses for every catalog
//! instrument, gates completion, and finalizes the scored snapshot through
//! the profile-store collaborator. This is the only crate that crosses a
//! boundary; everything below it is pure.

pub mod collector;
pub mod error;
pub mod finalize;
pub mod store;

pub use collector::IntakeCollector;
pub use error::{IntakeError, StoreError};
pub use finalize::finalize;
pub use store::{MemoryProfileStore, ProfileStore, ProgramUnlock};
