//! Process table, busiest first.

use std::cmp::Ordering;

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Row, Table};
use ratatui::Frame;

use crate::tui::layout::process_columns;
use crate::tui::state::ViewState;
use crate::tui::style;
use crate::types::ProcessRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRow {
    pub pid: String,
    pub priority: String,
    pub user: String,
    pub cpu: String,
    pub name: String,
    pub exe_path: String,
    pub cmdline: String,
}

impl ProcessRow {
    fn from_record(process: &ProcessRecord) -> Self {
        Self {
            pid: process.pid.to_string(),
            priority: process.priority.to_string(),
            user: process.user.clone(),
            cpu: format!("{:.1}%", process.cpu_percent),
            name: process.name.clone(),
            exe_path: process.exe_path.clone(),
            cmdline: process.cmdline.clone(),
        }
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.pid.clone(),
            self.priority.clone(),
            self.user.clone(),
            self.cpu.clone(),
            self.name.clone(),
        ];
        if !cfg!(target_os = "macos") {
            cells.push(self.exe_path.clone());
        }
        cells.push(self.cmdline.clone());
        cells
    }
}

/// Orders by CPU usage, highest first; equal usage falls back to ascending pid.
fn busiest_first(a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
    b.cpu_percent
        .total_cmp(&a.cpu_percent)
        .then_with(|| a.pid.cmp(&b.pid))
}

/// A sorted view of `processes`; the input is left untouched.
pub fn sorted_processes(processes: &[ProcessRecord]) -> Vec<&ProcessRecord> {
    let mut sorted: Vec<&ProcessRecord> = processes.iter().collect();
    sorted.sort_by(|a, b| busiest_first(a, b));
    sorted
}

pub fn process_rows(processes: &[ProcessRecord]) -> Vec<ProcessRow> {
    sorted_processes(processes)
        .into_iter()
        .map(ProcessRow::from_record)
        .collect()
}

pub fn table_height(state: &ViewState) -> u16 {
    state.layout.process_page_size as u16 + style::TABLE_CHROME_HEIGHT
}

pub fn render_processes(frame: &mut Frame, area: Rect, state: &ViewState) {
    let pager = state.process_pager;
    let visible = pager.visible();
    let start = visible.start;
    let rows = state.rows.processes[visible]
        .iter()
        .enumerate()
        .map(|(offset, row)| {
            let style = if start + offset == pager.cursor() {
                style::selected_row()
            } else {
                style::row()
            };
            Row::new(row.cells()).style(style)
        });
    let widths = state
        .layout
        .columns
        .process
        .iter()
        .map(|&w| Constraint::Length(w));
    let titles = process_columns();

    let block = style::table_block().title_bottom(format!(
        " {}/{} ",
        pager.page_index() + 1,
        pager.page_count()
    ));
    let table = Table::new(rows, widths)
        .header(style::header_row(titles.iter().map(|(title, _)| *title)))
        .block(block)
        .style(style::base());
    frame.render_widget(table, area);
}
