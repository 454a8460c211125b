// Network identity models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hostname plus interface-name -> addresses. BTreeMap keeps JSON key order
/// stable across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub hostname: String,
    pub interfaces: BTreeMap<String, Vec<String>>,
}
