//! Snapshot types produced by the collector.

use chrono::{DateTime, Local};

/// Filesystem types shown in the disk table.
pub const DISK_FS_ALLOW_LIST: [&str; 6] = ["ext4", "vfat", "fuseblk", "ntfs", "fat32", "apfs"];

/// Returns true if disks of this filesystem type are monitored.
pub fn is_monitored_fs(fs_type: &str) -> bool {
    DISK_FS_ALLOW_LIST.contains(&fs_type)
}

/// Virtual memory usage in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VirtualMemory {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub used_percent: f64,
}

/// Swap usage in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwapMemory {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub used_percent: f64,
}

/// One process as seen at sampling time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub user: String,
    pub name: String,
    pub priority: i32,
    pub cpu_percent: f32,
    pub exe_path: String,
    pub cmdline: String,
}

/// One mounted filesystem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskRecord {
    pub fs_type: String,
    pub device: String,
    pub mount_path: String,
    pub total_bytes: u64,
    pub free_bytes: u64,
    pub used_bytes: u64,
}

/// Aggregated snapshot of all monitored metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub sampled_at: DateTime<Local>,
    /// Usage per core, indexed by core id.
    pub cpu: Vec<f32>,
    pub memory: VirtualMemory,
    pub swap: SwapMemory,
    pub processes: Vec<ProcessRecord>,
    pub disks: Vec<DiskRecord>,
}

impl MetricsSnapshot {
    /// A snapshot with every reading zeroed.
    pub fn empty() -> Self {
        Self {
            sampled_at: Local::now(),
            cpu: Vec::new(),
            memory: VirtualMemory::default(),
            swap: SwapMemory::default(),
            processes: Vec::new(),
            disks: Vec::new(),
        }
    }
}

/// Percentage of `used` in `total`, 0 when `total` is 0.
pub fn used_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_membership() {
        assert!(is_monitored_fs("ext4"));
        assert!(is_monitored_fs("apfs"));
        assert!(!is_monitored_fs("tmpfs"));
        assert!(!is_monitored_fs("swap"));
    }

    #[test]
    fn used_percent_handles_zero_total() {
        assert_eq!(used_percent(10, 0), 0.0);
        assert_eq!(used_percent(1, 4), 25.0);
    }
}
