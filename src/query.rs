// Read side: assemble per-request views over the store. Holds no mutable
// state of its own; liveness is recomputed against "now" on every call.

use std::sync::Arc;

use crate::liveness;
use crate::models::{ClientSnapshotView, Snapshot};
use crate::store::MetricStore;

pub struct QueryService {
    store: Arc<MetricStore>,
    active_threshold_secs: i64,
}

impl QueryService {
    pub fn new(store: Arc<MetricStore>, active_threshold_secs: i64) -> Self {
        Self {
            store,
            active_threshold_secs,
        }
    }

    /// One view per client with at least one stored snapshot, ordered by
    /// client id ascending. Registered-but-silent agents are omitted.
    pub async fn list_clients(&self, now_unix: i64) -> Vec<ClientSnapshotView> {
        self.store
            .all_latest()
            .await
            .into_iter()
            .map(|(client_id, payload)| {
                let status = liveness::derive_status(
                    now_unix,
                    payload.timestamp_unix,
                    self.active_threshold_secs,
                );
                ClientSnapshotView {
                    client_id,
                    timestamp_unix: payload.timestamp_unix,
                    status,
                    payload,
                }
            })
            .collect()
    }

    /// History requests without an explicit limit fall back to the full ring.
    pub fn default_history_limit(&self) -> i64 {
        self.store.capacity() as i64
    }

    /// Last `limit` snapshots, newest last. Unknown client yields an empty
    /// vec so pollers never have to branch on error types.
    pub async fn get_history(&self, client_id: &str, limit: i64) -> Vec<Snapshot> {
        self.store.history(client_id, limit).await
    }
}
