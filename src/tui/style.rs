//! Shared table styling.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Row};

/// Top border, header and bottom border.
pub const TABLE_CHROME_HEIGHT: u16 = 3;

const BASE_FG: Color = Color::Rgb(0xc1, 0xd0, 0xe8);
const BORDER_FG: Color = Color::Rgb(0x7a, 0x89, 0xa3);
const ROW_FG: Color = Color::Indexed(255);

pub fn base() -> Style {
    Style::new().fg(BASE_FG)
}

pub fn row() -> Style {
    Style::new().fg(ROW_FG)
}

pub fn selected_row() -> Style {
    row().add_modifier(Modifier::REVERSED)
}

pub fn hint() -> Style {
    Style::new().fg(Color::DarkGray)
}

pub fn table_block() -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(BORDER_FG))
}

pub fn header_row<'a, I>(titles: I) -> Row<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    Row::new(titles).style(base().add_modifier(Modifier::BOLD))
}
