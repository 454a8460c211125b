// Known-agent set, independent of stored data. An agent can be registered
// before its first snapshot lands (or after its history is empty again).

use std::collections::BTreeSet;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct AgentRegistry {
    known: RwLock<BTreeSet<String>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent; returns true on first registration of this id.
    pub async fn register(&self, client_id: &str) -> bool {
        let mut known = self.known.write().await;
        known.insert(client_id.to_string())
    }

    pub async fn is_known(&self, client_id: &str) -> bool {
        self.known.read().await.contains(client_id)
    }

    /// All registered ids, ascending.
    pub async fn client_ids(&self) -> Vec<String> {
        self.known.read().await.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.known.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.known.read().await.is_empty()
    }
}
