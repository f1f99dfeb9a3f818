//! Frame composition.

use std::io;

use ratatui::backend::TestBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use super::layout::Panel;
use super::state::{Phase, ViewState};
use super::style;
use super::widgets::{cpu, disks, memory, processes};
use super::widgets::{render_cpu, render_disks, render_memory, render_processes};

pub const TOO_SMALL_MESSAGE: &str = "Window size is too small to show something.";
const DISK_HINT: &str = " a/d for the disks table navigation.";
const FULL_HINT: &str =
    " a/d for the disks table, ↑ / ↓ / ← / → for processes table navigation.";

/// Blank lines between panels.
const PANEL_GAP: u16 = 1;

fn panel_height(panel: Panel, state: &ViewState) -> u16 {
    match panel {
        Panel::Cpu => cpu::table_height(&state.rows.cpu),
        Panel::Memory => memory::table_height(&state.rows.memory),
        Panel::Disk => disks::table_height(state),
        Panel::Process => processes::table_height(state),
    }
}

fn hint(state: &ViewState) -> Option<&'static str> {
    if state.layout.shows(Panel::Process) {
        Some(FULL_HINT)
    } else if state.layout.shows(Panel::Disk) {
        Some(DISK_HINT)
    } else {
        None
    }
}

/// Draws the whole UI for `state`.
pub fn render(frame: &mut Frame, state: &ViewState) {
    let area = frame.area();
    if state.phase == Phase::Initializing {
        return;
    }
    if state.layout.too_small() {
        let text = vec![Line::default(), Line::from(TOO_SMALL_MESSAGE)];
        frame.render_widget(Paragraph::new(text), area);
        return;
    }

    let mut constraints = Vec::new();
    for (i, &panel) in state.visible_panels().iter().enumerate() {
        if i > 0 {
            constraints.push(Constraint::Length(PANEL_GAP));
        }
        constraints.push(Constraint::Length(panel_height(panel, state)));
    }
    let hint = hint(state);
    if hint.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    let chunks = Layout::vertical(constraints).split(area);

    for (i, &panel) in state.visible_panels().iter().enumerate() {
        let chunk = table_area(chunks[i * 2], state.layout.table_width);
        match panel {
            Panel::Cpu => render_cpu(frame, chunk, state),
            Panel::Memory => render_memory(frame, chunk, state),
            Panel::Disk => render_disks(frame, chunk, state),
            Panel::Process => render_processes(frame, chunk, state),
        }
    }
    if let Some(hint) = hint {
        let row = chunks[state.visible_panels().len() * 2 - 1];
        frame.render_widget(Paragraph::new(hint).style(style::hint()), row);
    }
}

/// Centers a table of `table_width` columns inside `area`.
fn table_area(area: Rect, table_width: u16) -> Rect {
    let width = table_width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Renders `state` off-screen and returns the frame as text, one line per row.
pub fn render_to_string(state: &ViewState) -> io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(state.width, state.height))?;
    terminal.draw(|frame| render(frame, state))?;

    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    let mut out = String::new();
    if width == 0 {
        return Ok(out);
    }
    for line in buffer.content.chunks(width) {
        for cell in line {
            out.push_str(cell.symbol());
        }
        out.push('\n');
    }
    Ok(out)
}
