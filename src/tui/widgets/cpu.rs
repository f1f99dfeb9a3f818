//! CPU usage grid.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Row, Table};
use ratatui::Frame;

use super::bar::percent_bar;
use crate::tui::state::ViewState;
use crate::tui::style;

/// Cores per grid row.
pub const CPU_GRID_COLUMNS: usize = 4;
pub const CPU_TABLE_TITLE: &str = "CPU Usage Percentage";

/// Minimum width of a grid cell, excluding the trailing separator.
const MIN_CELL_WIDTH: usize = 20;

/// One line of the CPU grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuGridRow {
    pub text: String,
    /// Core shown in each cell, `None` for padding cells.
    pub cores: Vec<Option<usize>>,
    /// xterm-256 foreground index, brightest on the first row.
    pub shade: u8,
}

/// Lays out per-core usage into `columns` cells per row.
///
/// Cores fill the grid column by column: the cell at (`row`, `column`) shows
/// core `row + column * row_count`. When the core count does not divide
/// evenly the trailing cells are blank, padded to the same width as the rest.
pub fn cpu_grid_rows(cpu: &[f32], columns: usize, bar_width: u16) -> Vec<CpuGridRow> {
    if columns == 0 || cpu.is_empty() {
        return Vec::new();
    }
    let row_count = cpu.len().div_ceil(columns);

    let labels: Vec<String> = cpu
        .iter()
        .enumerate()
        .map(|(index, &percent)| {
            format!(
                "CPU #{index}: {}",
                percent_bar(f64::from(percent), usize::from(bar_width))
            )
        })
        .collect();
    let cell_width = labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_CELL_WIDTH);

    (0..row_count)
        .map(|row| {
            let mut text = String::new();
            let mut cores = Vec::with_capacity(columns);
            for column in 0..columns {
                let index = row + column * row_count;
                match labels.get(index) {
                    Some(label) => {
                        text.push_str(&format!("{label:<cell_width$} "));
                        cores.push(Some(index));
                    }
                    None => {
                        text.push_str(&" ".repeat(cell_width + 1));
                        cores.push(None);
                    }
                }
            }
            CpuGridRow {
                text,
                cores,
                shade: row_shade(row),
            }
        })
        .collect()
}

fn row_shade(row: usize) -> u8 {
    // Stay inside the 232..=255 grayscale ramp.
    255usize.saturating_sub(row * 3).max(232) as u8
}

/// Rows and borders needed to draw the grid.
pub fn table_height(rows: &[CpuGridRow]) -> u16 {
    rows.len() as u16 + style::TABLE_CHROME_HEIGHT
}

pub fn render_cpu(frame: &mut Frame, area: Rect, state: &ViewState) {
    let rows = state.rows.cpu.iter().map(|row| {
        Row::new(vec![row.text.clone()]).style(Style::new().fg(Color::Indexed(row.shade)))
    });
    let widths = state
        .layout
        .columns
        .cpu
        .iter()
        .map(|&w| Constraint::Length(w));

    let table = Table::new(rows, widths)
        .header(style::header_row([CPU_TABLE_TITLE]))
        .block(style::table_block())
        .style(style::base());
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fills_column_major() {
        let cpu: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let rows = cpu_grid_rows(&cpu, 4, 10);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cores, vec![Some(0), Some(2), Some(4), Some(6)]);
        assert_eq!(rows[1].cores, vec![Some(1), Some(3), Some(5), Some(7)]);
        assert!(rows[0].text.starts_with("CPU #0: 00.00% "));
        assert!(rows[0].text.contains("CPU #2: 02.00% "));
    }

    #[test]
    fn cell_shows_its_own_core() {
        let rows = cpu_grid_rows(&[10.0, 20.0, 30.0, 40.0], 2, 7);
        assert_eq!(rows[0].text, format!("{:<20} {:<20} ", "CPU #0: 10.00% ", "CPU #2: 30.00% "));
        assert_eq!(rows[1].text, format!("{:<20} {:<20} ", "CPU #1: 20.00% ", "CPU #3: 40.00% "));
    }

    #[test]
    fn uneven_count_pads_with_blank_cells() {
        let rows = cpu_grid_rows(&[1.0; 5], 4, 8);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cores, vec![Some(0), Some(2), Some(4), None]);
        assert_eq!(rows[1].cores, vec![Some(1), Some(3), None, None]);
        let widths: Vec<usize> = rows.iter().map(|r| r.text.chars().count()).collect();
        assert_eq!(widths[0], widths[1]);
        assert!(rows[1].text.ends_with(&" ".repeat(42)));
    }

    #[test]
    fn wide_bars_widen_cells() {
        let rows = cpu_grid_rows(&[50.0, 50.0], 2, 20);
        let cell = "CPU #0: 50.00% ".chars().count() + 13;
        assert_eq!(rows[0].text.chars().count(), 2 * (cell + 1));
    }

    #[test]
    fn zero_columns_or_cores_yield_nothing() {
        assert!(cpu_grid_rows(&[1.0, 2.0], 0, 10).is_empty());
        assert!(cpu_grid_rows(&[], 4, 10).is_empty());
    }

    #[test]
    fn shades_darken_by_row() {
        let rows = cpu_grid_rows(&[0.0; 12], 4, 5);
        let shades: Vec<u8> = rows.iter().map(|r| r.shade).collect();
        assert_eq!(shades, vec![255, 252, 249]);
        assert_eq!(row_shade(100), 232);
    }

    proptest! {
        #[test]
        fn prop_every_core_appears_once(n in 1usize..130, c in 1usize..9) {
            let cpu = vec![25.0f32; n];
            let rows = cpu_grid_rows(&cpu, c, 6);
            prop_assert_eq!(rows.len(), n.div_ceil(c));

            let mut seen = vec![0usize; n];
            for row in &rows {
                prop_assert_eq!(row.cores.len(), c);
                for core in row.cores.iter().flatten() {
                    seen[*core] += 1;
                }
            }
            prop_assert!(seen.iter().all(|&count| count == 1));
        }
    }
}
