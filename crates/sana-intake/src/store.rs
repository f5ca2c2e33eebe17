use tokio::sync::Mutex;
use tracing::info;

use sana_core::IntakeSnapshot;

use crate::error::StoreError;

/// The profile-store collaborator: persists a finalized intake snapshot.
///
/// Injected into [`finalize`](crate::finalize::finalize) so the core never
/// touches global state; any backing implementation (in-memory, database)
/// can be substituted without changing the intake flow.
pub trait ProfileStore {
    fn save_intake(
        &self,
        snapshot: &IntakeSnapshot,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// The program-unlock collaborator: receives the "intake complete" signal
/// the surrounding application uses to reveal session content. Fired
/// exactly once per successful finalize, after the snapshot is saved.
pub trait ProgramUnlock {
    fn intake_complete(&self);
}

/// Reference `ProfileStore` keeping saved snapshots as JSON documents,
/// exactly as they would cross the wire to a real backend.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    saved: Mutex<Vec<serde_json::Value>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every snapshot saved so far, in save order.
    pub async fn saved(&self) -> Vec<serde_json::Value> {
        self.saved.lock().await.clone()
    }
}

impl ProfileStore for MemoryProfileStore {
    async fn save_intake(&self, snapshot: &IntakeSnapshot) -> Result<(), StoreError> {
        let payload = serde_json::to_value(snapshot)?;
        self.saved.lock().await.push(payload);
        info!(intake.id = %snapshot.id, "intake snapshot saved");
        Ok(())
    }
}
