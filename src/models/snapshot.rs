// Snapshot and per-request view models

use serde::{Deserialize, Serialize};

use super::{CpuMetrics, DiskMetrics, NetworkInfo, OsInfo, ProcessTop, RamMetrics};

/// One metrics payload from one agent at one instant. Arrival order is the
/// store's ordering; `timestamp_unix` may repeat or go backwards per client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub client_id: String,
    pub timestamp_unix: i64,
    pub cpu: CpuMetrics,
    pub ram: RamMetrics,
    pub disks: Vec<DiskMetrics>,
    pub network: NetworkInfo,
    pub processes: ProcessTop,
    pub os: OsInfo,
}

/// Derived per-request liveness; computed against wall clock, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientStatus {
    pub last_seen_seconds_ago: i64,
    pub active: bool,
}

/// One element of GET /api/clients. `client_id` and `timestamp_unix` are
/// duplicated from the payload at the top level for the console's list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSnapshotView {
    pub client_id: String,
    pub timestamp_unix: i64,
    pub status: ClientStatus,
    pub payload: Snapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientsResponse {
    pub clients: Vec<ClientSnapshotView>,
}
