use serde::Deserialize;

use crate::liveness::DEFAULT_ACTIVE_THRESHOLD_SECS;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub retention: RetentionConfig,
    #[serde(default)]
    pub liveness: LivenessConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetentionConfig {
    /// Snapshots kept per client (ring buffer size). 2880 = 24h at 30s.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_history_capacity() -> usize {
    2880
}

#[derive(Debug, Clone, Deserialize)]
pub struct LivenessConfig {
    /// An agent whose newest snapshot is older than this is reported inactive.
    #[serde(default = "default_active_threshold_secs")]
    pub active_threshold_secs: i64,
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            active_threshold_secs: default_active_threshold_secs(),
        }
    }
}

fn default_active_threshold_secs() -> i64 {
    DEFAULT_ACTIVE_THRESHOLD_SECS
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// How often to log app stats (known agents, stored clients) at INFO level.
    pub stats_log_interval_secs: u64,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            self.retention.history_capacity > 0,
            "retention.history_capacity must be > 0, got {}",
            self.retention.history_capacity
        );
        anyhow::ensure!(
            self.liveness.active_threshold_secs > 0,
            "liveness.active_threshold_secs must be > 0, got {}",
            self.liveness.active_threshold_secs
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        Ok(())
    }
}
