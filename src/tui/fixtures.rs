//! Deterministic snapshots for tests.

use chrono::{Local, TimeZone};

use crate::types::{DiskRecord, MetricsSnapshot, ProcessRecord, SwapMemory, VirtualMemory};

/// A snapshot with `cores` CPUs, `processes` processes and `disks` ext4 mounts.
pub fn snapshot(cores: usize, processes: usize, disks: usize) -> MetricsSnapshot {
    MetricsSnapshot {
        sampled_at: Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        cpu: (0..cores).map(|i| (i * 7 % 100) as f32).collect(),
        memory: VirtualMemory {
            total: 16 << 30,
            used: 8 << 30,
            available: 8 << 30,
            used_percent: 50.0,
        },
        swap: SwapMemory {
            total: 2 << 30,
            used: 0,
            free: 2 << 30,
            used_percent: 0.0,
        },
        processes: (0..processes)
            .map(|i| ProcessRecord {
                pid: i as u32 + 1,
                user: "root".to_string(),
                name: format!("p{i}"),
                priority: 0,
                cpu_percent: (i % 5) as f32,
                exe_path: format!("/bin/p{i}"),
                cmdline: format!("p{i}"),
            })
            .collect(),
        disks: (0..disks)
            .map(|i| DiskRecord {
                fs_type: "ext4".to_string(),
                device: format!("/dev/sda{i}"),
                mount_path: format!("/mnt/{i}"),
                total_bytes: 10 << 30,
                free_bytes: 5 << 30,
                used_bytes: 5 << 30,
            })
            .collect(),
    }
}
