//! Raw-mode key and line input for the form.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::terminal::{RawModeGuard, flush};

/// Result of a single keypress on the form's action line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EditSource,
    EditUsername,
    EditLength,
    ToggleCapitals,
    ToggleSpecials,
    Generate,
    Save,
    Clear,
    Quit,
    Ignored,
}

impl Action {
    pub fn from_key(key: &KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
                _ => Action::Ignored,
            };
        }
        match key.code {
            KeyCode::Char('1') => Action::EditSource,
            KeyCode::Char('2') => Action::EditUsername,
            KeyCode::Char('3') => Action::EditLength,
            KeyCode::Char('4') => Action::ToggleCapitals,
            KeyCode::Char('5') => Action::ToggleSpecials,
            KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Enter => Action::Generate,
            KeyCode::Char('s') | KeyCode::Char('S') => Action::Save,
            KeyCode::Char('c') | KeyCode::Char('C') => Action::Clear,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
            _ => Action::Ignored,
        }
    }
}

/// Block for one keypress. A terminal read failure counts as quit.
pub fn read_action() -> Action {
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Action::Quit,
    };

    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                return Action::from_key(&key);
            }
            Ok(_) => {}
            Err(_) => return Action::Quit,
        }
    }
}

/// Free text field. `None` when cancelled with Esc.
pub fn get_text_input(prompt: &str, initial: &str) -> Option<String> {
    edit_line(prompt, initial, |c| !c.is_control())
}

/// Digits-only field, returned as typed so validation sees the raw text.
pub fn get_numeric_input(prompt: &str, initial: &str) -> Option<String> {
    edit_line(prompt, initial, |c| c.is_ascii_digit())
}

/// Single-line editor with cursor movement. Characters rejected by `accept`
/// are ignored.
fn edit_line(prompt: &str, initial: &str, accept: impl Fn(char) -> bool) -> Option<String> {
    let mut buf: Vec<char> = initial.chars().collect();
    let mut cursor = buf.len();
    let prefix = format!("{prompt}: ");
    let prefix_width = prefix.chars().count();

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial.to_string()),
    };

    let mut cancelled = false;
    redraw(&prefix, &buf, prefix_width + cursor);

    loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(_) => break,
        };

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if ctrl => {
                buf.clear();
                cursor = 0;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if cursor > 0 {
                    cursor -= 1;
                    buf.remove(cursor);
                }
            }
            KeyCode::Delete => {
                if cursor < buf.len() {
                    buf.remove(cursor);
                }
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => cursor = (cursor + 1).min(buf.len()),
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = buf.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                buf.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        redraw(&prefix, &buf, prefix_width + cursor);
    }

    drop(_guard);
    print!("\r\n");
    flush();

    if cancelled {
        None
    } else {
        Some(buf.into_iter().collect())
    }
}

fn redraw(prefix: &str, buf: &[char], column: usize) {
    let mut out = io::stdout();
    let text: String = buf.iter().collect();
    let _ = queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine));
    let _ = write!(out, "{prefix}{text}");
    let _ = queue!(out, MoveToColumn(column.min(u16::MAX as usize) as u16));
    let _ = out.flush();
}
