//! Mounted filesystems table.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Row, Table};
use ratatui::Frame;

use crate::tui::layout::disk_columns;
use crate::tui::state::ViewState;
use crate::tui::style;
use crate::types::{is_monitored_fs, DiskRecord};

const GIB: f64 = (1u64 << 30) as f64;

/// Disks per page once there are more than this many.
pub const DISK_PAGE_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskRow {
    pub fs_type: String,
    pub device: String,
    pub mount_path: String,
    pub total: String,
    pub free: String,
    pub used: String,
}

impl DiskRow {
    fn cells(&self) -> [String; 6] {
        [
            self.fs_type.clone(),
            self.device.clone(),
            self.mount_path.clone(),
            self.total.clone(),
            self.free.clone(),
            self.used.clone(),
        ]
    }
}

fn whole_gib(bytes: u64) -> String {
    format!("{:2.0} GiB", bytes as f64 / GIB)
}

/// Monitored disks ordered by filesystem type, then mount path.
pub fn sorted_disks(disks: &[DiskRecord]) -> Vec<&DiskRecord> {
    let mut kept: Vec<&DiskRecord> = disks
        .iter()
        .filter(|disk| is_monitored_fs(&disk.fs_type))
        .collect();
    kept.sort_by(|a, b| {
        a.fs_type
            .cmp(&b.fs_type)
            .then_with(|| a.mount_path.cmp(&b.mount_path))
    });
    kept
}

pub fn disk_rows(disks: &[DiskRecord]) -> Vec<DiskRow> {
    sorted_disks(disks)
        .into_iter()
        .map(|disk| DiskRow {
            fs_type: disk.fs_type.clone(),
            device: disk.device.clone(),
            mount_path: disk.mount_path.clone(),
            total: whole_gib(disk.total_bytes),
            free: whole_gib(disk.free_bytes),
            used: whole_gib(disk.used_bytes),
        })
        .collect()
}

/// Paginate only when more than [`DISK_PAGE_SIZE`] disks qualify; 0 shows all.
pub fn disk_page_size(row_count: usize) -> usize {
    if row_count > DISK_PAGE_SIZE {
        DISK_PAGE_SIZE
    } else {
        0
    }
}

/// Rows on screen: one page plus chrome.
pub fn table_height(state: &ViewState) -> u16 {
    state.disk_pager.visible().len() as u16 + style::TABLE_CHROME_HEIGHT
}

pub fn render_disks(frame: &mut Frame, area: Rect, state: &ViewState) {
    let rows = state.rows.disks[state.disk_pager.visible()]
        .iter()
        .map(|row| Row::new(row.cells()).style(style::row()));
    let widths = state
        .layout
        .columns
        .disk
        .iter()
        .map(|&w| Constraint::Length(w));
    let titles = disk_columns();

    let mut block = style::table_block();
    let pages = state.disk_pager.page_count();
    if pages > 1 {
        block = block.title_bottom(format!(
            " {}/{} ",
            state.disk_pager.page_index() + 1,
            pages
        ));
    }

    let table = Table::new(rows, widths)
        .header(style::header_row(titles.iter().map(|(title, _)| *title)))
        .block(block)
        .style(style::base());
    frame.render_widget(table, area);
}
