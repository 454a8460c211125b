// Shared test helpers

use fleetmon::models::*;
use std::collections::BTreeMap;

pub fn minimal_snapshot(client_id: &str, timestamp_unix: i64) -> Snapshot {
    Snapshot {
        client_id: client_id.to_string(),
        timestamp_unix,
        cpu: CpuMetrics {
            arch: "x86_64".into(),
            logical_cores: 8,
            physical_cores: 4,
            freq_mhz_current: 2400.0,
            temp_c: 45.0,
            loadavg: LoadAvg {
                one: 0.5,
                five: 0.4,
                fifteen: 0.3,
            },
            cpu_percent_total: 12.5,
        },
        ram: RamMetrics {
            total_bytes: 16 * 1024 * 1024 * 1024,
            available_bytes: 8 * 1024 * 1024 * 1024,
            used_percent: 50.0,
        },
        disks: vec![DiskMetrics {
            device: "/dev/sda1".into(),
            mountpoint: "/".into(),
            fstype: "ext4".into(),
            total_bytes: 512 * 1024 * 1024 * 1024,
            free_bytes: 256 * 1024 * 1024 * 1024,
            used_percent: 50.0,
        }],
        network: NetworkInfo {
            hostname: format!("{client_id}.local"),
            interfaces: BTreeMap::from([(
                "eth0".to_string(),
                vec!["192.168.1.10".to_string()],
            )]),
        },
        processes: ProcessTop {
            top_cpu: vec![ProcessStat {
                pid: 1234,
                name: "agentd".into(),
                user: "root".into(),
                cpu_percent: 3.2,
                rss_bytes: 64 * 1024 * 1024,
            }],
            top_mem: vec![],
        },
        os: OsInfo {
            platform: "linux".into(),
            kernel: "6.8.0".into(),
        },
    }
}
