// Ingestion: validate one inbound snapshot, then append + registry upsert.
// At-most-once; a rejected snapshot is dropped and the agent is told why.
// Retry policy belongs to the agent/transport, not here.

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::IngestError;
use crate::models::Snapshot;
use crate::registry::AgentRegistry;
use crate::store::MetricStore;

pub struct IngestService {
    store: Arc<MetricStore>,
    registry: Arc<AgentRegistry>,
}

impl IngestService {
    pub fn new(store: Arc<MetricStore>, registry: Arc<AgentRegistry>) -> Self {
        Self { store, registry }
    }

    /// Admit one snapshot. Validation failures never touch the store, and a
    /// failure for one agent never affects another's data.
    pub async fn ingest(&self, snapshot: Snapshot) -> Result<(), IngestError> {
        if let Err(e) = validate(&snapshot) {
            warn!(client_id = %snapshot.client_id, error = %e, "rejected snapshot");
            return Err(e);
        }
        let client_id = snapshot.client_id.clone();
        self.store.append(snapshot).await;
        if self.registry.register(&client_id).await {
            info!(client_id = %client_id, "new agent registered");
        }
        Ok(())
    }
}

/// Structural checks on one snapshot; the first violation wins.
pub fn validate(snapshot: &Snapshot) -> Result<(), IngestError> {
    if snapshot.client_id.is_empty() {
        return Err(IngestError::EmptyClientId);
    }
    if snapshot.timestamp_unix <= 0 {
        return Err(IngestError::InvalidTimestamp(snapshot.timestamp_unix));
    }
    check_percent("ram", snapshot.ram.used_percent)?;
    if snapshot.ram.available_bytes > snapshot.ram.total_bytes {
        return Err(IngestError::AvailableExceedsTotal {
            available: snapshot.ram.available_bytes,
            total: snapshot.ram.total_bytes,
        });
    }
    for disk in &snapshot.disks {
        check_percent(&format!("disk {}", disk.device), disk.used_percent)?;
    }
    Ok(())
}

fn check_percent(field: &str, value: f64) -> Result<(), IngestError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(IngestError::PercentOutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
