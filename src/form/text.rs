use super::FormState;
use crate::terminal::{
    box_bottom, box_line, box_line_center, box_rule, box_top, print_error, print_notice,
    underline,
};

/// Status line shown under the form after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Notice(String),
    Error(String),
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

pub fn print_form(form: &FormState, save_path: &str, message: Option<&Message>) {
    box_top("Password Generator");
    box_line(&format!("1) {}        {}", underline("Login Source:"), form.source));
    box_line(&format!("2) {}   {}", underline("Existing Username:"), form.username));
    box_line(&format!("3) {}     {}", underline("Password Length:"), form.length));
    box_line(&format!("4) {} Capital Letters", checkbox(form.allow_capitals)));
    box_line(&format!("5) {} Special Characters", checkbox(form.allow_specials)));
    box_rule();
    match form.password() {
        Some(password) => box_line_center(password.as_str()),
        None => box_line(""),
    }
    box_rule();
    box_line("[g/Enter] Generate  [s] Save  [c] Clear  [q/Esc] Quit");
    box_line(&format!("Save file: {save_path}"));
    box_bottom();

    match message {
        Some(Message::Notice(text)) => print_notice(text),
        Some(Message::Error(text)) => print_error(text),
        None => println!(),
    }
}
