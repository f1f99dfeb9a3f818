//! Virtual and swap memory, side by side.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Row, Table};
use ratatui::Frame;

use super::bar::progress_bar;
use crate::tui::layout::memory_columns;
use crate::tui::state::ViewState;
use crate::tui::style;
use crate::types::{SwapMemory, VirtualMemory};

const GIB: f64 = (1u64 << 30) as f64;
const LABEL_WIDTH: usize = 11;

/// One aligned line of the memory panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRow {
    pub virtual_cell: String,
    pub swap_cell: String,
}

pub fn format_gib(bytes: u64) -> String {
    format!("{:.2} GiB", bytes as f64 / GIB)
}

fn labelled(label: &str, value: &str) -> String {
    format!("{:<LABEL_WIDTH$}{value}", format!("{label}:"))
}

fn usage(percent: f64, bar_width: u16) -> String {
    let percent = if percent.is_finite() { percent } else { 0.0 };
    let bar = progress_bar(percent / 100.0, usize::from(bar_width));
    if bar.is_empty() {
        format!("{percent:.2}%")
    } else {
        format!("{bar} {percent:.2}%")
    }
}

/// Total, Used, Available/Free and Usage rows for both memory kinds.
pub fn memory_rows(memory: &VirtualMemory, swap: &SwapMemory, bar_width: u16) -> Vec<MemoryRow> {
    vec![
        MemoryRow {
            virtual_cell: labelled("Total", &format_gib(memory.total)),
            swap_cell: labelled("Total", &format_gib(swap.total)),
        },
        MemoryRow {
            virtual_cell: labelled("Used", &format_gib(memory.used)),
            swap_cell: labelled("Used", &format_gib(swap.used)),
        },
        MemoryRow {
            virtual_cell: labelled("Available", &format_gib(memory.available)),
            swap_cell: labelled("Free", &format_gib(swap.free)),
        },
        MemoryRow {
            virtual_cell: labelled("Usage", &usage(memory.used_percent, bar_width)),
            swap_cell: labelled("Usage", &usage(swap.used_percent, bar_width)),
        },
    ]
}

pub fn table_height(rows: &[MemoryRow]) -> u16 {
    rows.len() as u16 + style::TABLE_CHROME_HEIGHT
}

pub fn render_memory(frame: &mut Frame, area: Rect, state: &ViewState) {
    let rows = state.rows.memory.iter().map(|row| {
        Row::new(vec![row.virtual_cell.clone(), row.swap_cell.clone()]).style(style::row())
    });
    let widths = state
        .layout
        .columns
        .memory
        .iter()
        .map(|&w| Constraint::Length(w));
    let titles = memory_columns();

    let table = Table::new(rows, widths)
        .header(style::header_row(titles.iter().map(|(title, _)| *title)))
        .block(style::table_block())
        .style(style::base());
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings() -> (VirtualMemory, SwapMemory) {
        (
            VirtualMemory {
                total: 16 << 30,
                used: 4 << 30,
                available: 12 << 30,
                used_percent: 25.0,
            },
            SwapMemory {
                total: 2 << 30,
                used: 1 << 29,
                free: 3 << 29,
                used_percent: 25.0,
            },
        )
    }

    #[test]
    fn converts_to_gibibytes() {
        assert_eq!(format_gib(0), "0.00 GiB");
        assert_eq!(format_gib(3 << 29), "1.50 GiB");
    }

    #[test]
    fn four_aligned_rows() {
        let (memory, swap) = readings();
        let rows = memory_rows(&memory, &swap, 4);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].virtual_cell, "Total:     16.00 GiB");
        assert_eq!(rows[1].swap_cell, "Used:      0.50 GiB");
        assert_eq!(rows[2].virtual_cell, "Available: 12.00 GiB");
        assert_eq!(rows[2].swap_cell, "Free:      1.50 GiB");
        assert_eq!(rows[3].virtual_cell, "Usage:     █░░░ 25.00%");
    }

    #[test]
    fn no_swap_reads_zero() {
        let rows = memory_rows(&VirtualMemory::default(), &SwapMemory::default(), 0);
        assert_eq!(rows[3].swap_cell, "Usage:     0.00%");
        assert_eq!(rows[0].swap_cell, "Total:     0.00 GiB");
    }

    #[test]
    fn nan_percent_reads_zero() {
        let swap = SwapMemory {
            used_percent: f64::NAN,
            ..SwapMemory::default()
        };
        let rows = memory_rows(&VirtualMemory::default(), &swap, 2);
        assert_eq!(rows[3].swap_cell, "Usage:     ░░ 0.00%");
    }
}
