//! Keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    DiskPageUp,
    DiskPageDown,
    ProcessRowUp,
    ProcessRowDown,
    ProcessPageUp,
    ProcessPageDown,
}

/// Maps a key press to a command, `None` for unbound keys.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('a') | KeyCode::Char('A') => Command::DiskPageUp,
        KeyCode::Char('d') | KeyCode::Char('D') => Command::DiskPageDown,
        KeyCode::Up => Command::ProcessRowUp,
        KeyCode::Down => Command::ProcessRowDown,
        KeyCode::Left => Command::ProcessPageUp,
        KeyCode::Right => Command::ProcessPageDown,
        _ => return None,
    };
    Some(command)
}
