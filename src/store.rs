// In-memory per-client history: one bounded VecDeque per agent, FIFO by
// arrival. Two lock levels: the outer map lock is held only long enough to
// clone the per-client Arc, so appends for one agent never stall reads for
// another.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::Snapshot;

#[derive(Debug)]
struct ClientRecord {
    snapshots: VecDeque<Snapshot>,
}

#[derive(Debug)]
pub struct MetricStore {
    clients: RwLock<HashMap<String, Arc<RwLock<ClientRecord>>>>,
    capacity: usize,
}

impl MetricStore {
    pub fn new(capacity: usize) -> Result<Self, StoreError> {
        if capacity == 0 {
            return Err(StoreError::InvalidCapacity);
        }
        Ok(Self {
            clients: RwLock::new(HashMap::new()),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append one snapshot, creating the client record on first sight and
    /// evicting the oldest-by-arrival entry once at capacity. Eviction order
    /// is arrival order; duplicate or out-of-order timestamps never reorder
    /// the buffer.
    pub async fn append(&self, snapshot: Snapshot) {
        let record = self.record_for(&snapshot.client_id).await;
        let mut record = record.write().await;
        if record.snapshots.len() == self.capacity {
            record.snapshots.pop_front();
        }
        record.snapshots.push_back(snapshot);
    }

    /// Newest snapshot for one client; `None` for a never-appended id.
    pub async fn latest(&self, client_id: &str) -> Option<Snapshot> {
        let record = self.lookup(client_id).await?;
        let record = record.read().await;
        record.snapshots.back().cloned()
    }

    /// Up to `limit` most recent snapshots, newest last. An unknown client or
    /// a non-positive limit yields an empty vec; absence is a normal,
    /// pollable condition here, never an error.
    pub async fn history(&self, client_id: &str, limit: i64) -> Vec<Snapshot> {
        if limit <= 0 {
            return Vec::new();
        }
        let Some(record) = self.lookup(client_id).await else {
            return Vec::new();
        };
        let record = record.read().await;
        let take = (limit as usize).min(record.snapshots.len());
        let skip = record.snapshots.len() - take;
        record.snapshots.iter().skip(skip).cloned().collect()
    }

    /// Newest snapshot per client, keyed and ordered by client id. Entries
    /// from different clients are read one lock at a time, so the result is a
    /// best-effort point-in-time view, not a cross-client snapshot.
    pub async fn all_latest(&self) -> BTreeMap<String, Snapshot> {
        let records: Vec<(String, Arc<RwLock<ClientRecord>>)> = {
            let clients = self.clients.read().await;
            clients
                .iter()
                .map(|(id, rec)| (id.clone(), rec.clone()))
                .collect()
        };
        let mut out = BTreeMap::new();
        for (id, record) in records {
            let record = record.read().await;
            if let Some(latest) = record.snapshots.back() {
                out.insert(id, latest.clone());
            }
        }
        out
    }

    /// Number of clients with at least one stored snapshot.
    pub async fn client_count(&self) -> usize {
        self.clients.read().await.len()
    }

    async fn lookup(&self, client_id: &str) -> Option<Arc<RwLock<ClientRecord>>> {
        let clients = self.clients.read().await;
        clients.get(client_id).cloned()
    }

    async fn record_for(&self, client_id: &str) -> Arc<RwLock<ClientRecord>> {
        if let Some(record) = self.lookup(client_id).await {
            return record;
        }
        let mut clients = self.clients.write().await;
        clients
            .entry(client_id.to_string())
            .or_insert_with(|| {
                Arc::new(RwLock::new(ClientRecord {
                    snapshots: VecDeque::with_capacity(self.capacity),
                }))
            })
            .clone()
    }
}
