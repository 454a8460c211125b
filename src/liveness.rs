// Liveness derivation. Pure function of wall clock and the newest snapshot
// timestamp so "active" reflects the instant of the request, not ingestion.

use crate::models::ClientStatus;

/// Default threshold; overridable via [liveness] active_threshold_secs.
pub const DEFAULT_ACTIVE_THRESHOLD_SECS: i64 = 60;

/// Agent clocks may run ahead of ours; a future timestamp clamps to 0.
pub fn derive_status(now_unix: i64, timestamp_unix: i64, active_threshold_secs: i64) -> ClientStatus {
    let last_seen_seconds_ago = (now_unix - timestamp_unix).max(0);
    ClientStatus {
        last_seen_seconds_ago,
        active: last_seen_seconds_ago <= active_threshold_secs,
    }
}

/// Current wall clock as unix seconds.
pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}
