//! Terminal size → visible panels and sizing.

/// Minimum terminal height for showing the CPU table.
pub const MIN_HEIGHT_ONE_TABLE: u16 = 9;
/// Minimum terminal height for adding the memory table.
pub const MIN_HEIGHT_TWO_TABLES: u16 = 14;
/// Minimum terminal height for adding the disks table.
pub const MIN_HEIGHT_THREE_TABLES: u16 = 24;
/// Minimum terminal height for showing all tables.
pub const MIN_HEIGHT_ALL_TABLES: u16 = 33;

/// Smallest process page.
pub const MIN_PROCESS_PAGE_SIZE: usize = 2;

/// Horizontal margin subtracted from the terminal width for tables.
const TABLE_MARGIN: u16 = 2;
/// Share of the terminal width given to progress bars.
const PROGRESS_BAR_SHARE: f64 = 0.15;

// Flex factors for table columns.
const FLEX_DEFAULT: u16 = 1;
const FLEX_LARGER: u16 = 2;
const FLEX_HUGE: u16 = 4;
const FLEX_LARGEST: u16 = 6;

/// Column spacing used by every table.
pub const COLUMN_SPACING: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Cpu,
    Memory,
    Disk,
    Process,
}

/// Column widths for each table, in cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub cpu: Vec<u16>,
    pub memory: Vec<u16>,
    pub disk: Vec<u16>,
    pub process: Vec<u16>,
}

/// Result of evaluating the layout policy for one terminal size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutDecision {
    /// Panels to draw, top to bottom. Empty when the terminal is too small.
    pub panels: Vec<Panel>,
    pub table_width: u16,
    pub progress_bar_width: u16,
    /// Rows per process page; 0 when the process table is hidden.
    pub process_page_size: usize,
    pub columns: ColumnWidths,
}

impl LayoutDecision {
    pub fn shows(&self, panel: Panel) -> bool {
        self.panels.contains(&panel)
    }

    pub fn too_small(&self) -> bool {
        self.panels.is_empty()
    }
}

/// Process table columns and their flex factors.
pub fn process_columns() -> Vec<(&'static str, u16)> {
    let mut columns = vec![
        ("Process ID", FLEX_DEFAULT),
        ("Priority", FLEX_DEFAULT),
        ("Username", FLEX_LARGER),
        ("CPU Usage Percentage", FLEX_LARGER),
        ("Name", FLEX_LARGER),
        ("Executable Path", FLEX_HUGE),
        ("Command", FLEX_LARGEST),
    ];
    // Name and executable path are the same on macOS.
    if cfg!(target_os = "macos") {
        columns.retain(|(title, _)| *title != "Executable Path");
    }
    columns
}

/// Disk table columns and their flex factors.
pub fn disk_columns() -> Vec<(&'static str, u16)> {
    vec![
        ("File System Type", FLEX_DEFAULT),
        ("Device", FLEX_DEFAULT),
        ("Mount Path", FLEX_HUGE),
        ("Total Size", FLEX_DEFAULT),
        ("Free Size", FLEX_DEFAULT),
        ("Used Size", FLEX_DEFAULT),
    ]
}

/// Memory table columns and their flex factors.
pub fn memory_columns() -> Vec<(&'static str, u16)> {
    vec![("Virtual Memory", FLEX_DEFAULT), ("Swap Memory", FLEX_DEFAULT)]
}

/// Maps a terminal size to the panels shown and their sizes.
pub fn decide(width: u16, height: u16) -> LayoutDecision {
    if height < MIN_HEIGHT_ONE_TABLE {
        return LayoutDecision::default();
    }

    let table_width = width.saturating_sub(TABLE_MARGIN);
    let progress_bar_width = (f64::from(width) * PROGRESS_BAR_SHARE) as u16;

    let mut panels = vec![Panel::Cpu];
    if height >= MIN_HEIGHT_TWO_TABLES {
        panels.push(Panel::Memory);
    }
    if height >= MIN_HEIGHT_THREE_TABLES {
        panels.push(Panel::Disk);
    }
    let mut process_page_size = 0;
    if height >= MIN_HEIGHT_ALL_TABLES {
        panels.push(Panel::Process);
        process_page_size =
            usize::from(height - MIN_HEIGHT_ALL_TABLES).max(MIN_PROCESS_PAGE_SIZE);
    }

    let factors = |cols: Vec<(&'static str, u16)>| -> Vec<u16> {
        cols.into_iter().map(|(_, flex)| flex).collect()
    };
    let columns = ColumnWidths {
        cpu: flex_widths(table_width, &[FLEX_DEFAULT]),
        memory: flex_widths(table_width, &factors(memory_columns())),
        disk: flex_widths(table_width, &factors(disk_columns())),
        process: flex_widths(table_width, &factors(process_columns())),
    };

    LayoutDecision {
        panels,
        table_width,
        progress_bar_width,
        process_page_size,
        columns,
    }
}

/// Splits a bordered table's inner width across columns by flex factor.
///
/// The two border cells and the spacing between columns are taken off first.
/// Cells left over after rounding down go one each to the leftmost columns.
pub fn flex_widths(table_width: u16, factors: &[u16]) -> Vec<u16> {
    if factors.is_empty() {
        return Vec::new();
    }
    let gaps = COLUMN_SPACING * (factors.len() as u16 - 1);
    let inner = u32::from(table_width.saturating_sub(2 + gaps));
    let total: u32 = factors.iter().map(|&f| u32::from(f)).sum();
    if total == 0 {
        return vec![0; factors.len()];
    }

    let mut widths: Vec<u16> = factors
        .iter()
        .map(|&f| (inner * u32::from(f) / total) as u16)
        .collect();
    let used: u32 = widths.iter().map(|&w| u32::from(w)).sum();
    for width in widths.iter_mut().take((inner - used) as usize) {
        *width += 1;
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_small_below_floor() {
        let layout = decide(120, MIN_HEIGHT_ONE_TABLE - 1);
        assert!(layout.too_small());
        assert_eq!(layout.process_page_size, 0);
        assert!(decide(0, 0).too_small());
    }

    #[test]
    fn panels_appear_in_order() {
        assert_eq!(decide(100, 9).panels, vec![Panel::Cpu]);
        assert_eq!(decide(100, 13).panels, vec![Panel::Cpu]);
        assert_eq!(decide(100, 14).panels, vec![Panel::Cpu, Panel::Memory]);
        assert_eq!(
            decide(100, 24).panels,
            vec![Panel::Cpu, Panel::Memory, Panel::Disk]
        );
        assert_eq!(
            decide(100, 33).panels,
            vec![Panel::Cpu, Panel::Memory, Panel::Disk, Panel::Process]
        );
    }

    #[test]
    fn process_page_size_has_floor() {
        assert_eq!(decide(100, 33).process_page_size, 2);
        assert_eq!(decide(100, 34).process_page_size, 2);
        assert_eq!(decide(100, 35).process_page_size, 2);
        assert_eq!(decide(100, 50).process_page_size, 17);
        assert_eq!(decide(100, 32).process_page_size, 0);
    }

    #[test]
    fn progress_bar_is_fifteen_percent() {
        assert_eq!(decide(100, 20).progress_bar_width, 15);
        assert_eq!(decide(80, 20).progress_bar_width, 12);
        assert_eq!(decide(9, 20).progress_bar_width, 1);
    }

    #[test]
    fn table_width_has_margin() {
        assert_eq!(decide(100, 20).table_width, 98);
        assert_eq!(decide(1, 20).table_width, 0);
    }

    #[test]
    fn decide_is_idempotent() {
        for (w, h) in [(0, 0), (80, 9), (120, 40), (200, 24), (3, 100)] {
            assert_eq!(decide(w, h), decide(w, h));
        }
    }

    #[test]
    fn flex_widths_fill_inner_width() {
        let widths = flex_widths(100, &[1, 1, 4, 1, 1, 1]);
        let inner = 100 - 2 - 5;
        assert_eq!(widths.iter().sum::<u16>(), inner);
        assert!(widths[2] > widths[0]);
    }

    #[test]
    fn flex_widths_never_exceed_table() {
        for width in 0..60 {
            let widths = flex_widths(width, &[1, 1, 2, 2, 2, 4, 6]);
            let spent: u16 = widths.iter().sum::<u16>() + 2 + 6;
            assert!(widths.iter().sum::<u16>() == 0 || spent <= width);
        }
    }

    #[test]
    fn flex_widths_single_column() {
        assert_eq!(flex_widths(50, &[1]), vec![48]);
        assert!(flex_widths(50, &[]).is_empty());
    }
}
