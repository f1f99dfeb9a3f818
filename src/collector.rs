//! Collects metrics from the underlying OS.

use std::path::Path;

use chrono::Local;
use sysinfo::{Disks, Process, ProcessesToUpdate, System, Users};
use tracing::{debug, trace};

use crate::errors::{Result, SysmonError};
use crate::types::{
    is_monitored_fs, used_percent, DiskRecord, MetricsSnapshot, ProcessRecord, SwapMemory,
    VirtualMemory,
};

/// Source of metric snapshots.
///
/// Implementations must not fail: a reading that cannot be obtained is
/// reported as zero or empty so the display keeps running.
pub trait MetricsSampler {
    fn sample(&mut self) -> MetricsSnapshot;
}

/// `sysinfo`-backed sampler.
pub struct Collector {
    sys: System,
    users: Users,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    /// Creates a new collector instance.
    pub fn new() -> Self {
        let mut sys = System::new_all();
        // Initial refresh so the first CPU delta has a baseline.
        sys.refresh_all();
        Self {
            sys,
            users: Users::new_with_refreshed_list(),
        }
    }

    fn cpu(&mut self) -> Vec<f32> {
        self.sys.refresh_cpu_usage();
        self.sys.cpus().iter().map(|cpu| cpu.cpu_usage()).collect()
    }

    fn memory(&mut self) -> (VirtualMemory, SwapMemory) {
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        let used = self.sys.used_memory();
        let memory = VirtualMemory {
            total,
            used,
            available: self.sys.available_memory(),
            used_percent: used_percent(used, total),
        };

        let total = self.sys.total_swap();
        let used = self.sys.used_swap();
        let swap = SwapMemory {
            total,
            used,
            free: self.sys.free_swap(),
            used_percent: used_percent(used, total),
        };

        (memory, swap)
    }

    fn disks() -> Vec<DiskRecord> {
        let disks = Disks::new_with_refreshed_list();
        disks
            .list()
            .iter()
            .filter_map(|disk| {
                let fs_type = disk.file_system().to_string_lossy().into_owned();
                if !is_monitored_fs(&fs_type) {
                    return None;
                }
                let total = disk.total_space();
                let free = disk.available_space();
                Some(DiskRecord {
                    fs_type,
                    device: disk.name().to_string_lossy().into_owned(),
                    mount_path: disk.mount_point().display().to_string(),
                    total_bytes: total,
                    free_bytes: free,
                    used_bytes: total.saturating_sub(free),
                })
            })
            .collect()
    }

    fn processes(&mut self) -> Vec<ProcessRecord> {
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        self.sys
            .processes()
            .iter()
            .map(|(pid, process)| {
                let pid = pid.as_u32();
                ProcessRecord {
                    pid,
                    user: self.user_name(process),
                    name: process.name().to_string_lossy().into_owned(),
                    priority: read_priority(pid),
                    cpu_percent: process.cpu_usage(),
                    exe_path: process
                        .exe()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default(),
                    cmdline: process
                        .cmd()
                        .iter()
                        .map(|arg| arg.to_string_lossy())
                        .collect::<Vec<_>>()
                        .join(" "),
                }
            })
            .collect()
    }

    fn user_name(&self, process: &Process) -> String {
        process
            .user_id()
            .and_then(|uid| self.users.get_user_by_id(uid))
            .map(|user| user.name().to_string())
            .unwrap_or_default()
    }
}

impl MetricsSampler for Collector {
    fn sample(&mut self) -> MetricsSnapshot {
        let cpu = self.cpu();
        let (memory, swap) = self.memory();
        let disks = Self::disks();
        let processes = self.processes();

        let snapshot = MetricsSnapshot {
            sampled_at: Local::now(),
            cpu,
            memory,
            swap,
            processes,
            disks,
        };
        debug!(
            at = %snapshot.sampled_at.format("%H:%M:%S"),
            cores = snapshot.cpu.len(),
            processes = snapshot.processes.len(),
            disks = snapshot.disks.len(),
            "sampled metrics"
        );
        snapshot
    }
}

/// Nice value of a process, 0 when it cannot be read.
fn read_priority(pid: u32) -> i32 {
    match nice_from_procfs(pid) {
        Ok(nice) => nice,
        Err(e) => {
            // Processes routinely exit between listing and reading.
            trace!(pid, error = %e, "priority unavailable");
            0
        }
    }
}

#[cfg(target_os = "linux")]
fn nice_from_procfs(pid: u32) -> Result<i32> {
    let path = format!("/proc/{pid}/stat");
    let content = std::fs::read_to_string(&path)?;
    parse_nice(Path::new(&path), &content)
}

#[cfg(not(target_os = "linux"))]
fn nice_from_procfs(_pid: u32) -> Result<i32> {
    Ok(0)
}

/// Extracts the nice value (field 19) from a `/proc/<pid>/stat` line.
///
/// The command name in field 2 may contain spaces and parentheses, so fields
/// are counted from the last closing parenthesis.
pub fn parse_nice(path: &Path, content: &str) -> Result<i32> {
    let parse_err = |reason: &str| SysmonError::Parse {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let close = content
        .rfind(')')
        .ok_or_else(|| parse_err("missing command terminator"))?;
    // Field 3 (state) is the first one after the command name.
    let field = content[close + 1..]
        .split_whitespace()
        .nth(19 - 3)
        .ok_or_else(|| parse_err("missing nice field"))?;
    field
        .parse()
        .map_err(|_| parse_err(&format!("invalid nice value {field:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAT: &str = "1234 (my (odd) proc) S 1 1234 1234 0 -1 4194560 120 0 0 0 \
                        3 1 0 0 20 -5 1 0 100 1000 50 18446744073709551615";

    #[test]
    fn parse_nice_counts_from_last_paren() {
        let nice = parse_nice(Path::new("/proc/1234/stat"), STAT).unwrap();
        assert_eq!(nice, -5);
    }

    #[test]
    fn parse_nice_rejects_truncated_line() {
        let err = parse_nice(Path::new("/proc/1/stat"), "1 (init) S 0 1").unwrap_err();
        assert!(matches!(err, SysmonError::Parse { .. }));
        assert!(err.to_string().contains("missing nice field"));
    }

    #[test]
    fn parse_nice_rejects_missing_paren() {
        let err = parse_nice(Path::new("/proc/1/stat"), "garbage").unwrap_err();
        assert!(err.to_string().contains("missing command terminator"));
    }

    #[test]
    fn collector_sample_does_not_panic() {
        let mut collector = Collector::new();
        let snapshot = collector.sample();
        assert!(snapshot
            .disks
            .iter()
            .all(|d| is_monitored_fs(&d.fs_type)));
    }
}
