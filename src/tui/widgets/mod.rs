//! Panel formatters and their ratatui renderers.

pub mod bar;
pub mod cpu;
pub mod disks;
pub mod memory;
pub mod processes;

pub use cpu::{cpu_grid_rows, render_cpu, CpuGridRow, CPU_GRID_COLUMNS};
pub use disks::{disk_page_size, disk_rows, render_disks, DiskRow};
pub use memory::{memory_rows, render_memory, MemoryRow};
pub use processes::{process_rows, render_processes, ProcessRow};
