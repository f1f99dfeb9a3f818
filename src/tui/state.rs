//! Application state and its transitions.

use crossterm::event::KeyEvent;
use tracing::{debug, info, trace};

use super::input::{command_for, Command};
use super::layout::{decide, LayoutDecision, Panel};
use super::table::Pager;
use super::widgets::{
    cpu_grid_rows, disk_page_size, disk_rows, memory_rows, process_rows, CpuGridRow, DiskRow,
    MemoryRow, ProcessRow, CPU_GRID_COLUMNS,
};
use crate::types::MetricsSnapshot;

/// Lifecycle of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No terminal size known yet.
    #[default]
    Initializing,
    /// Size known, panels laid out.
    Ready,
    /// Quit requested; no further events are processed.
    Terminating,
}

/// Input to [`ViewState::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A fresh sample taken on the timer.
    Tick(MetricsSnapshot),
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
}

/// Row view-models for every panel, rebuilt from scratch on each tick or resize.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelRows {
    pub cpu: Vec<CpuGridRow>,
    pub memory: Vec<MemoryRow>,
    pub disks: Vec<DiskRow>,
    pub processes: Vec<ProcessRow>,
}

impl PanelRows {
    fn build(snapshot: &MetricsSnapshot, layout: &LayoutDecision) -> Self {
        let bar_width = layout.progress_bar_width;
        Self {
            cpu: cpu_grid_rows(&snapshot.cpu, CPU_GRID_COLUMNS, bar_width),
            memory: memory_rows(&snapshot.memory, &snapshot.swap, bar_width),
            disks: disk_rows(&snapshot.disks),
            processes: process_rows(&snapshot.processes),
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub phase: Phase,
    pub snapshot: MetricsSnapshot,
    pub width: u16,
    pub height: u16,
    pub layout: LayoutDecision,
    pub rows: PanelRows,
    pub disk_pager: Pager,
    pub process_pager: Pager,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(MetricsSnapshot::empty())
    }
}

impl ViewState {
    /// Initial state: first snapshot, terminal size still unknown.
    pub fn new(snapshot: MetricsSnapshot) -> Self {
        let layout = LayoutDecision::default();
        let rows = PanelRows::build(&snapshot, &layout);
        let disk_pager = Pager::new(rows.disks.len(), disk_page_size(rows.disks.len()));
        let process_pager = Pager::new(rows.processes.len(), layout.process_page_size);
        Self {
            phase: Phase::Initializing,
            snapshot,
            width: 0,
            height: 0,
            layout,
            rows,
            disk_pager,
            process_pager,
        }
    }

    /// Produces the next state for `message`.
    pub fn update(self, message: Message) -> Self {
        if self.phase == Phase::Terminating {
            return self;
        }
        match message {
            Message::Tick(snapshot) => self.on_tick(snapshot),
            Message::Resize { width, height } => self.on_resize(width, height),
            Message::Key(key) => match command_for(key) {
                Some(command) => self.on_command(command),
                None => self,
            },
        }
    }

    pub fn visible_panels(&self) -> &[Panel] {
        &self.layout.panels
    }

    pub fn disk_page_index(&self) -> usize {
        self.disk_pager.page_index()
    }

    pub fn process_page_index(&self) -> usize {
        self.process_pager.page_index()
    }

    pub fn process_page_size(&self) -> usize {
        self.layout.process_page_size
    }

    pub fn should_quit(&self) -> bool {
        self.phase == Phase::Terminating
    }

    fn on_tick(self, snapshot: MetricsSnapshot) -> Self {
        trace!(cores = snapshot.cpu.len(), "tick");
        let rows = PanelRows::build(&snapshot, &self.layout);
        let disk_count = rows.disks.len();
        Self {
            disk_pager: self
                .disk_pager
                .with_rows(disk_count, disk_page_size(disk_count)),
            process_pager: self
                .process_pager
                .with_rows(rows.processes.len(), self.layout.process_page_size),
            snapshot,
            rows,
            ..self
        }
    }

    fn on_resize(self, width: u16, height: u16) -> Self {
        let layout = decide(width, height);
        debug!(width, height, panels = ?layout.panels, "resize");
        let rows = PanelRows::build(&self.snapshot, &layout);
        let disk_count = rows.disks.len();
        Self {
            phase: Phase::Ready,
            width,
            height,
            disk_pager: Pager::new(disk_count, disk_page_size(disk_count)),
            process_pager: Pager::new(rows.processes.len(), layout.process_page_size),
            layout,
            rows,
            ..self
        }
    }

    fn on_command(self, command: Command) -> Self {
        match command {
            Command::Quit => {
                info!("quit requested");
                Self {
                    phase: Phase::Terminating,
                    ..self
                }
            }
            Command::DiskPageUp => Self {
                disk_pager: self.disk_pager.prev_page(),
                ..self
            },
            Command::DiskPageDown => Self {
                disk_pager: self.disk_pager.next_page(),
                ..self
            },
            Command::ProcessRowUp => Self {
                process_pager: self.process_pager.prev_row(),
                ..self
            },
            Command::ProcessRowDown => Self {
                process_pager: self.process_pager.next_row(),
                ..self
            },
            Command::ProcessPageUp => Self {
                process_pager: self.process_pager.prev_page(),
                ..self
            },
            Command::ProcessPageDown => Self {
                process_pager: self.process_pager.next_page(),
                ..self
            },
        }
    }
}
