//! Terminal output utilities.
//!
//! Screen control, styled messages and box drawing for the form.

use std::io::{self, Write};

use crossterm::cursor::{MoveTo, Show};
use crossterm::execute;
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, Stylize};
use crossterm::terminal::{Clear, ClearType, disable_raw_mode};

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0));
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode, reset colours and show the cursor.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), ResetColor, SetAttribute(Attribute::Reset), Show);
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

pub fn print_error(msg: &str) {
    println!("{}", msg.with(Color::Red));
}

pub fn print_notice(msg: &str) {
    println!("{}", msg.with(Color::Green));
}

/// Underlined text, for field labels.
pub fn underline(text: &str) -> String {
    text.underlined().to_string()
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;

/// Print box top with a title: ┌─ Title ─────────────┐
pub fn box_top(title: &str) {
    let title_part = format!("─ {} ", title);
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    println!("┌{}{}┐", title_part, "─".repeat(remaining));
}

/// Print box content line: │ content              │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// Print centered box content line: │    content    │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    println!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    );
}

/// Print a horizontal rule inside a box.
pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Print box bottom: └──────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
