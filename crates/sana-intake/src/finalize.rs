use jiff::Timestamp;
use tracing::info;

use sana_core::IntakeSnapshot;
use sana_instruments::{all_instruments, scoring};

use crate::collector::IntakeCollector;
use crate::error::IntakeError;
use crate::store::{ProfileStore, ProgramUnlock};

/// Score every instrument and hand the assembled snapshot to the profile
/// store.
///
/// Consumes the collector: finalization is terminal, a one-shot operation.
/// All four instruments must be complete; otherwise the call fails with
/// [`IntakeError::IncompleteIntake`] naming the unfinished instruments in
/// catalog order, and the store is never contacted.
///
/// On success the snapshot carries one result per instrument in catalog
/// order under a single shared completion timestamp, the store receives
/// exactly one save, and the unlock signal fires exactly once, after the
/// save succeeds.
pub async fn finalize<S, U>(
    collector: IntakeCollector,
    store: &S,
    unlock: &U,
) -> Result<IntakeSnapshot, IntakeError>
where
    S: ProfileStore,
    U: ProgramUnlock,
{
    let incomplete = collector.incomplete_codes();
    if !incomplete.is_empty() {
        return Err(IntakeError::IncompleteIntake { codes: incomplete });
    }

    let mut results = Vec::with_capacity(all_instruments().len());
    for instrument in all_instruments() {
        let set = collector.response_set(&instrument.code)?;
        results.push(scoring::score(set, instrument)?);
    }

    let snapshot = IntakeSnapshot::new(results, Timestamp::now());
    store.save_intake(&snapshot).await?;

    info!(
        intake.id = %snapshot.id,
        instruments = snapshot.results.len(),
        "intake finalized"
    );
    unlock.intake_complete();

    Ok(snapshot)
}
