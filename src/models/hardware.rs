// CPU, RAM and OS identity models

use serde::{Deserialize, Serialize};

/// 1/5/15-minute load averages; serialized under the keys "1", "5", "15".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadAvg {
    #[serde(rename = "1")]
    pub one: f64,
    #[serde(rename = "5")]
    pub five: f64,
    #[serde(rename = "15")]
    pub fifteen: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuMetrics {
    pub arch: String,
    pub logical_cores: u32,
    pub physical_cores: u32,
    pub freq_mhz_current: f64,
    pub temp_c: f64,
    pub loadavg: LoadAvg,
    pub cpu_percent_total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RamMetrics {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsInfo {
    pub platform: String,
    pub kernel: String,
}
