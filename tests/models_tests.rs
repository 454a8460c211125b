// Model serialization tests (wire shape shared with the web console)

mod common;

use common::minimal_snapshot;
use fleetmon::liveness::derive_status;
use fleetmon::models::*;

#[test]
fn test_loadavg_serializes_numeric_keys() {
    let load = LoadAvg {
        one: 0.5,
        five: 0.4,
        fifteen: 0.3,
    };
    let json = serde_json::to_value(&load).unwrap();
    assert_eq!(json["1"], 0.5);
    assert_eq!(json["5"], 0.4);
    assert_eq!(json["15"], 0.3);
    let back: LoadAvg = serde_json::from_value(json).unwrap();
    assert_eq!(back.fifteen, load.fifteen);
}

#[test]
fn test_snapshot_json_field_names() {
    let snapshot = minimal_snapshot("host-a", 1_700_000_000);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["client_id"], "host-a");
    assert_eq!(json["timestamp_unix"], 1_700_000_000i64);
    assert!(json["cpu"]["cpu_percent_total"].is_number());
    assert!(json["ram"]["used_percent"].is_number());
    assert_eq!(json["disks"][0]["mountpoint"], "/");
    assert_eq!(json["network"]["interfaces"]["eth0"][0], "192.168.1.10");
    assert_eq!(json["processes"]["top_cpu"][0]["pid"], 1234);
    assert_eq!(json["os"]["platform"], "linux");
}

#[test]
fn test_snapshot_json_roundtrip() {
    let snapshot = minimal_snapshot("host-a", 42);
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.client_id, snapshot.client_id);
    assert_eq!(back.ram.available_bytes, snapshot.ram.available_bytes);
    assert_eq!(back.disks.len(), 1);
}

#[test]
fn test_clients_response_shape() {
    let now = 1_700_000_000;
    let payload = minimal_snapshot("host-a", now - 30);
    let view = ClientSnapshotView {
        client_id: payload.client_id.clone(),
        timestamp_unix: payload.timestamp_unix,
        status: derive_status(now, payload.timestamp_unix, 60),
        payload,
    };
    let json = serde_json::to_value(ClientsResponse {
        clients: vec![view],
    })
    .unwrap();
    let client = &json["clients"][0];
    assert_eq!(client["client_id"], "host-a");
    assert_eq!(client["status"]["active"], true);
    assert_eq!(client["status"]["last_seen_seconds_ago"], 30);
    // The payload repeats id + timestamp; the console's list view relies on it.
    assert_eq!(client["payload"]["client_id"], "host-a");
    assert_eq!(client["payload"]["timestamp_unix"], client["timestamp_unix"]);
}
